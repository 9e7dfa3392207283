use crate::blocks::ContentBlock;
use crate::error::LayoutResult;
use crate::page::{Page, PageFormat};

/// Partition blocks into pages, greedily and in order.
///
/// Single pass, no backtracking: a block that would push the current
/// page past the usable height closes that page and opens the next one.
/// Blocks are never reordered and never split; a single block taller
/// than the usable height gets a page of its own and is allowed to
/// overflow. Identical input always yields an identical partition.
pub fn paginate(blocks: Vec<ContentBlock>, usable_height: f64) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut current: Vec<ContentBlock> = Vec::new();
    let mut current_height = 0.0;

    for block in blocks {
        let h = block.estimated_height;
        if current_height + h > usable_height && !current.is_empty() {
            pages.push(Page {
                index: pages.len(),
                blocks: std::mem::take(&mut current),
                content_height: current_height,
            });
            current_height = 0.0;
        }
        current_height += h;
        current.push(block);
    }

    if !current.is_empty() {
        pages.push(Page {
            index: pages.len(),
            blocks: current,
            content_height: current_height,
        });
    }

    pages
}

/// Paginator bound to a validated page format
pub struct Paginator {
    format: PageFormat,
}

impl Paginator {
    pub fn new(format: PageFormat) -> LayoutResult<Self> {
        format.validate()?;
        Ok(Self { format })
    }

    pub fn format(&self) -> &PageFormat {
        &self.format
    }

    pub fn paginate(&self, blocks: Vec<ContentBlock>) -> Vec<Page> {
        paginate(blocks, self.format.usable_height())
    }
}
