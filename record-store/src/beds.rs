use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// Bed availability as tracked by the ward inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BedStatus {
    Available,
    Occupied,
}

impl BedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
        }
    }

    pub fn from_str(s: &str) -> StoreResult<Self> {
        match s {
            "available" => Ok(Self::Available),
            "occupied" => Ok(Self::Occupied),
            _ => Err(StoreError::Backend(format!("Unknown bed status: {s}"))),
        }
    }
}

/// The ward bed inventory collaborator.
///
/// Beds are addressed by room type and bed id. The admission-booking
/// flow marks a bed occupied; discharge releases it.
#[async_trait]
pub trait BedInventory: Send + Sync {
    async fn set_bed_status(
        &self,
        room_type: &str,
        bed_id: &str,
        status: BedStatus,
    ) -> StoreResult<()>;

    async fn bed_status(&self, room_type: &str, bed_id: &str) -> StoreResult<Option<BedStatus>>;
}

/// In-memory bed inventory for tests and single-node deployments
pub struct MemoryBedInventory {
    beds: DashMap<(String, String), BedStatus>,
}

impl MemoryBedInventory {
    pub fn new() -> Self {
        Self {
            beds: DashMap::new(),
        }
    }
}

impl Default for MemoryBedInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BedInventory for MemoryBedInventory {
    async fn set_bed_status(
        &self,
        room_type: &str,
        bed_id: &str,
        status: BedStatus,
    ) -> StoreResult<()> {
        self.beds
            .insert((room_type.to_string(), bed_id.to_string()), status);
        tracing::debug!(room_type, bed_id, status = status.as_str(), "bed status updated");
        Ok(())
    }

    async fn bed_status(&self, room_type: &str, bed_id: &str) -> StoreResult<Option<BedStatus>> {
        Ok(self
            .beds
            .get(&(room_type.to_string(), bed_id.to_string()))
            .map(|entry| *entry.value()))
    }
}
