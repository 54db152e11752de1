//! HTML output for the macros of a page
//!
//! Tab layout:
//! ```text
//! <ul class="xwikitabbar"><li class="active"><a href="...?file=a.pdf">a.pdf</a></li>...</ul>
//! <div class="xwikitabpanescontainer"><iframe class="pdfviewer" ...></iframe></div>
//! ```
//! The frame is left out when no tab is active. Single-file macros render as
//! `<div class="pdfviewer">` around the frame.

use pdfviewer_core::{FileSource, Layout, Page, ViewerView};

use crate::Result;

pub fn render_page(page: &Page) -> Result<String> {
    let mut html = String::new();

    for index in 0..page.instance_count() {
        let viewer = page.viewer(index)?;

        match viewer.layout {
            Layout::Tabs => {
                html.push_str("<div class=\"pdfviewer-tabs\">\n<ul class=\"xwikitabbar\">\n");
                for tab in page.tab_views(index)? {
                    let class = if tab.active { " class=\"active\"" } else { "" };
                    html.push_str(&format!(
                        "<li{}><a href=\"{}\">{}</a></li>\n",
                        class,
                        escape_html(&tab.href),
                        escape_html(&tab.name)
                    ));
                }
                html.push_str("</ul>\n<div class=\"xwikitabpanescontainer\">\n");
                render_frame(&mut html, &viewer);
                html.push_str("</div>\n</div>\n");
            }
            Layout::Single => {
                html.push_str("<div class=\"pdfviewer\">\n");
                render_frame(&mut html, &viewer);
                html.push_str("</div>\n");
            }
        }
    }

    tracing::debug!(instances = page.instance_count(), bytes = html.len(), "Rendered page");
    Ok(html)
}

fn render_frame(html: &mut String, viewer: &ViewerView) {
    let Some(shown) = &viewer.shown else {
        return;
    };

    let (src, document) = match shown {
        FileSource::External(url) => (url.to_string(), None),
        FileSource::Attachment { document, name } => (name.clone(), document.as_deref()),
    };

    html.push_str(&format!(
        "<iframe class=\"pdfviewer\" src=\"{}\" width=\"{}\" height=\"{}\"",
        escape_html(&src),
        escape_html(&viewer.dimensions.width),
        escape_html(&viewer.dimensions.height)
    ));
    if let Some(document) = document {
        html.push_str(&format!(" data-document=\"{}\"", escape_html(document)));
    }
    html.push_str("></iframe>\n");
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
