use crate::blocks::ContentBlock;
use crate::error::LayoutResult;
use crate::page::{Page, PageFormat};
use crate::paginator::paginate;
use serde::{Deserialize, Serialize};

/// One rasterized page produced by a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

/// Renders one laid-out page into a raster image.
///
/// The PDF exporter drives this trait page by page and assembles the
/// results into a multi-page document sized to the page format. The
/// rasterizer itself is an external collaborator; the engine ships no
/// implementation beyond test stubs.
pub trait PageRenderer {
    fn render(&self, page: &Page, format: &PageFormat) -> LayoutResult<RenderedPage>;
}

/// A paginated printable document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintDocument {
    pub title: String,
    pub format: PageFormat,
    pub pages: Vec<Page>,
}

impl PrintDocument {
    /// Paginate blocks into a document sized to the given format.
    pub fn new(title: String, format: PageFormat, blocks: Vec<ContentBlock>) -> LayoutResult<Self> {
        format.validate()?;
        let pages = paginate(blocks, format.usable_height());
        tracing::debug!(title = %title, pages = pages.len(), "document paginated");
        Ok(Self {
            title,
            format,
            pages,
        })
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Render every page in order.
    pub fn render_all<R: PageRenderer>(&self, renderer: &R) -> LayoutResult<Vec<RenderedPage>> {
        self.pages
            .iter()
            .map(|page| renderer.render(page, &self.format))
            .collect()
    }
}
