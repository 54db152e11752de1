//! Page objects over rendered viewer markup
//!
//! Tab bars (`.xwikitabbar`) and tab panes (`.xwikitabpanescontainer`) are
//! paired by position, the same way a browser test locates them.

use scraper::{ElementRef, Html, Selector};

use pdfviewer_core::{FileId, TabList};

use crate::error::MarkupError;
use crate::Result;

/// Frame showing the document of a macro
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerFrame {
    pub src: String,
    pub width: String,
    pub height: String,
    pub document: Option<String>,
}

/// A tab layout macro as seen in the markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLayoutViewer {
    index: usize,
    names: Vec<String>,
    hrefs: Vec<String>,
    active: Option<usize>,
    frame: Option<ViewerFrame>,
}

/// A single-file macro as seen in the markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleViewer {
    frame: Option<ViewerFrame>,
}

pub struct MacroPage {
    document: Html,
}

impl MacroPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Number of tab layout macros
    pub fn tab_viewer_count(&self) -> Result<usize> {
        let panes = selector(".xwikitabpanescontainer")?;
        Ok(self.document.select(&panes).count())
    }

    pub fn tab_viewer(&self, index: usize) -> Result<TabLayoutViewer> {
        let bars = selector(".xwikitabbar")?;
        let panes = selector(".xwikitabpanescontainer")?;

        let bar = self
            .document
            .select(&bars)
            .nth(index)
            .ok_or(MarkupError::ViewerNotFound(index))?;
        let pane = self
            .document
            .select(&panes)
            .nth(index)
            .ok_or(MarkupError::ViewerNotFound(index))?;

        let items = selector("li")?;
        let links = selector("a")?;

        let mut names = Vec::new();
        let mut hrefs = Vec::new();
        let mut active = None;

        for (i, item) in bar.select(&items).enumerate() {
            if active.is_none() && item.value().classes().any(|c| c == "active") {
                active = Some(i);
            }

            if let Some(link) = item.select(&links).next() {
                names.push(text_of(&link));
                hrefs.push(link.value().attr("href").unwrap_or_default().to_string());
            } else {
                names.push(text_of(&item));
                hrefs.push(String::new());
            }
        }

        Ok(TabLayoutViewer {
            index,
            names,
            hrefs,
            active,
            frame: frame_in(&pane)?,
        })
    }

    /// Number of single-file macros
    pub fn viewer_count(&self) -> Result<usize> {
        let viewers = selector("div.pdfviewer")?;
        Ok(self.document.select(&viewers).count())
    }

    pub fn viewer(&self, index: usize) -> Result<SingleViewer> {
        let viewers = selector("div.pdfviewer")?;
        let viewer = self
            .document
            .select(&viewers)
            .nth(index)
            .ok_or(MarkupError::ViewerNotFound(index))?;

        Ok(SingleViewer {
            frame: frame_in(&viewer)?,
        })
    }
}

impl TabLayoutViewer {
    pub fn tab_count(&self) -> usize {
        self.names.len()
    }

    pub fn tab_names(&self) -> &[String] {
        &self.names
    }

    pub fn tab_name(&self, index: usize) -> Result<&str> {
        self.names
            .get(index)
            .map(String::as_str)
            .ok_or(MarkupError::TabNotFound {
                viewer: self.index,
                index,
            })
    }

    pub fn tab_href(&self, index: usize) -> Result<&str> {
        self.hrefs
            .get(index)
            .map(String::as_str)
            .ok_or(MarkupError::TabNotFound {
                viewer: self.index,
                index,
            })
    }

    /// Position of the tab marked active; `None` when no tab is
    pub fn active_tab(&self) -> Option<usize> {
        self.active
    }

    pub fn frame(&self) -> Option<&ViewerFrame> {
        self.frame.as_ref()
    }

    pub fn width(&self) -> Option<&str> {
        self.frame.as_ref().map(|f| f.width.as_str())
    }

    pub fn height(&self) -> Option<&str> {
        self.frame.as_ref().map(|f| f.height.as_str())
    }

    pub fn pdf_url(&self) -> Option<&str> {
        self.frame.as_ref().map(|f| f.src.as_str())
    }

    /// Tab names as a tab list, for feeding back into the resolver
    pub fn tab_list(&self) -> Result<TabList> {
        Ok(TabList::new(
            self.names.iter().map(|n| FileId::new(n.as_str())).collect(),
        )?)
    }
}

impl SingleViewer {
    pub fn frame(&self) -> Option<&ViewerFrame> {
        self.frame.as_ref()
    }

    pub fn width(&self) -> Option<&str> {
        self.frame.as_ref().map(|f| f.width.as_str())
    }

    pub fn height(&self) -> Option<&str> {
        self.frame.as_ref().map(|f| f.height.as_str())
    }

    pub fn pdf_url(&self) -> Option<&str> {
        self.frame.as_ref().map(|f| f.src.as_str())
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| MarkupError::Selector(format!("{}: {:?}", css, e)))
}

fn frame_in(root: &ElementRef<'_>) -> Result<Option<ViewerFrame>> {
    let frames = selector("iframe.pdfviewer")?;

    Ok(root.select(&frames).next().map(|frame| {
        let attr = |name: &str| frame.value().attr(name).unwrap_or_default().trim().to_string();
        ViewerFrame {
            src: attr("src"),
            width: attr("width"),
            height: attr("height"),
            document: frame.value().attr("data-document").map(str::to_string),
        }
    }))
}

fn text_of(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
