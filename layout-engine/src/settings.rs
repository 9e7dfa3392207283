use crate::blocks::{BlockContent, ContentBlock};
use crate::error::{LayoutError, LayoutResult};
use crate::page::PageFormat;
use serde::{Deserialize, Serialize};

/// Estimated block heights used when assembling printable documents.
///
/// These mirror the fixed per-element estimates the console's print
/// screens were built around (a 50-unit heading, 50 units per table
/// row). They are layout heuristics; the renderer is free to draw
/// slightly taller or shorter content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub page: PageFormat,
    pub heading_height: f64,
    pub subheading_height: f64,
    pub paragraph_height: f64,
    /// Height per label/value pair
    pub labeled_row_height: f64,
    pub table_header_height: f64,
    pub table_row_height: f64,
    pub totals_line_height: f64,
    pub rule_height: f64,
    pub spacer_height: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            page: PageFormat::A4,
            heading_height: 50.0,
            subheading_height: 32.0,
            paragraph_height: 20.0,
            labeled_row_height: 22.0,
            table_header_height: 28.0,
            table_row_height: 50.0,
            totals_line_height: 24.0,
            rule_height: 12.0,
            spacer_height: 16.0,
        }
    }
}

impl LayoutSettings {
    /// Load settings from `caredesk-layout.{toml,yaml,json}` and
    /// `CAREDESK_LAYOUT_*` environment overrides, falling back to the
    /// defaults for anything unset.
    pub fn load() -> LayoutResult<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name("caredesk-layout").required(false))
            .add_source(config::Environment::with_prefix("CAREDESK_LAYOUT").separator("__"))
            .build()
            .map_err(|e| LayoutError::Config(e.to_string()))?;

        cfg.try_deserialize()
            .map_err(|e| LayoutError::Config(e.to_string()))
    }

    /// Height estimate for a piece of content
    pub fn estimate(&self, content: &BlockContent) -> f64 {
        match content {
            BlockContent::Heading { .. } => self.heading_height,
            BlockContent::Subheading { .. } => self.subheading_height,
            BlockContent::Paragraph { .. } => self.paragraph_height,
            BlockContent::LabeledValues { pairs } => {
                self.labeled_row_height * pairs.len().max(1) as f64
            }
            BlockContent::TableHeader { .. } => self.table_header_height,
            BlockContent::TableRow { .. } => self.table_row_height,
            BlockContent::TotalsLine { .. } => self.totals_line_height,
            BlockContent::Rule => self.rule_height,
            BlockContent::Spacer => self.spacer_height,
        }
    }

    /// Wrap content in a block carrying its estimated height
    pub fn block(&self, content: BlockContent) -> ContentBlock {
        let estimated_height = self.estimate(&content);
        ContentBlock::new(content, estimated_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_values_scale_with_pair_count() {
        let settings = LayoutSettings::default();
        let pairs = vec![
            ("Patient".to_string(), "A. Rao".to_string()),
            ("Bed".to_string(), "412".to_string()),
            ("Room".to_string(), "general".to_string()),
        ];

        let block = settings.block(BlockContent::LabeledValues { pairs });
        assert_eq!(block.estimated_height, settings.labeled_row_height * 3.0);
    }

    #[test]
    fn test_table_row_uses_fixed_estimate() {
        let settings = LayoutSettings::default();
        let block = settings.block(BlockContent::TableRow {
            cells: vec!["X-Ray".to_string(), "completed".to_string(), "500".to_string()],
        });
        assert_eq!(block.estimated_height, 50.0);
    }

    #[test]
    fn test_defaults_fit_a4() {
        let settings = LayoutSettings::default();
        assert!(settings.page.validate().is_ok());
        assert!(settings.table_row_height < settings.page.usable_height());
    }
}
