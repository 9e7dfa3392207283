use serde::{Deserialize, Serialize};

/// Renderable content carried by one block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    /// Document title line
    Heading { text: String },
    /// Section title line
    Subheading { text: String },
    /// Free-running text
    Paragraph { text: String },
    /// Label/value pairs rendered as stacked rows
    LabeledValues { pairs: Vec<(String, String)> },
    /// Column headers of a table
    TableHeader { columns: Vec<String> },
    /// One table row
    TableRow { cells: Vec<String> },
    /// A totals line, optionally emphasized
    TotalsLine {
        label: String,
        value: String,
        emphasis: bool,
    },
    /// Horizontal rule
    Rule,
    /// Vertical whitespace
    Spacer,
}

/// One indivisible run of printable content.
///
/// The height is a caller-supplied estimate in layout units; the
/// paginator never measures rendered output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub content: BlockContent,
    pub estimated_height: f64,
}

impl ContentBlock {
    pub fn new(content: BlockContent, estimated_height: f64) -> Self {
        Self {
            content,
            estimated_height,
        }
    }
}
