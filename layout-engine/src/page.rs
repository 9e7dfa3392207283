use crate::blocks::ContentBlock;
use crate::error::{LayoutError, LayoutResult};
use serde::{Deserialize, Serialize};

/// Physical page dimensions and margins in layout units (1/72 inch)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageFormat {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
}

impl PageFormat {
    /// ISO A4 at 72 units per inch
    pub const A4: PageFormat = PageFormat {
        width: 595.0,
        height: 842.0,
        margin_top: 36.0,
        margin_bottom: 36.0,
        margin_left: 40.0,
        margin_right: 40.0,
    };

    /// Printable height: page height minus top and bottom margins
    pub fn usable_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// Printable width: page width minus left and right margins
    pub fn usable_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn validate(&self) -> LayoutResult<()> {
        if !(self.usable_height() > 0.0) {
            return Err(LayoutError::InvalidPageFormat(format!(
                "usable height must be positive, got {}",
                self.usable_height()
            )));
        }
        if !(self.usable_width() > 0.0) {
            return Err(LayoutError::InvalidPageFormat(format!(
                "usable width must be positive, got {}",
                self.usable_width()
            )));
        }
        Ok(())
    }
}

impl Default for PageFormat {
    fn default() -> Self {
        Self::A4
    }
}

/// A finished page: a contiguous run of blocks in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page index (0-based)
    pub index: usize,
    pub blocks: Vec<ContentBlock>,
    /// Sum of the estimated heights of the blocks on this page
    pub content_height: f64,
}

impl Page {
    /// Whether the estimated content exceeds the printable area.
    ///
    /// True only for a page holding a single block taller than the
    /// usable height; the paginator accepts that overflow rather than
    /// splitting the block.
    pub fn overflows(&self, usable_height: f64) -> bool {
        self.content_height > usable_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_usable_area() {
        let format = PageFormat::A4;
        assert_eq!(format.usable_height(), 842.0 - 72.0);
        assert_eq!(format.usable_width(), 595.0 - 80.0);
        assert!(format.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_margins_swallowing_the_page() {
        let format = PageFormat {
            margin_top: 500.0,
            margin_bottom: 400.0,
            ..PageFormat::A4
        };
        assert!(matches!(
            format.validate(),
            Err(LayoutError::InvalidPageFormat(_))
        ));
    }
}
