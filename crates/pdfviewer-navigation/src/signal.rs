//! Page signal read from and written to the URL

use pdfviewer_tabs::FileId;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::Result;

/// Query parameter used when none is configured
pub const DEFAULT_FILE_PARAM: &str = "file";

/// The file currently shown on a page, shared by every macro instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSignal(Option<FileId>);

impl PageSignal {
    pub fn new(file: Option<FileId>) -> Self {
        Self(file)
    }

    pub fn absent() -> Self {
        Self(None)
    }

    /// Read the signal from the first `param` pair of the query string.
    ///
    /// An empty value counts as absent.
    pub fn from_url(url: &Url, param: &str) -> Self {
        let file = url
            .query_pairs()
            .find(|(key, _)| key == param)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
            .map(FileId::from);

        Self(file)
    }

    pub fn parse(url: &str, param: &str) -> Result<Self> {
        let url = Url::parse(url.trim())?;
        Ok(Self::from_url(&url, param))
    }

    pub fn file(&self) -> Option<&FileId> {
        self.0.as_ref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn into_inner(self) -> Option<FileId> {
        self.0
    }
}

impl From<FileId> for PageSignal {
    fn from(file: FileId) -> Self {
        Self(Some(file))
    }
}

impl From<Option<FileId>> for PageSignal {
    fn from(file: Option<FileId>) -> Self {
        Self(file)
    }
}

/// Copy of `url` whose `param` is set to `file`.
///
/// Existing `param` pairs are dropped, the remaining pairs keep their order
/// and the new pair goes last. The fragment is kept.
pub fn with_signal(url: &Url, param: &str, file: &FileId) -> Url {
    let mut out = retain_other_pairs(url, param);
    out.query_pairs_mut().append_pair(param, file.as_str());

    tracing::trace!(url = %out, file = %file, "Rewrote page signal");
    out
}

/// Copy of `url` with every `param` pair removed.
pub fn without_signal(url: &Url, param: &str) -> Url {
    retain_other_pairs(url, param)
}

/// Target of the link rendered for the tab showing `file`
pub fn tab_href(page_url: &Url, param: &str, file: &FileId) -> String {
    with_signal(page_url, param, file).into()
}

fn retain_other_pairs(url: &Url, param: &str) -> Url {
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != param)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut out = url.clone();
    out.set_query(None);
    if !others.is_empty() {
        out.query_pairs_mut().extend_pairs(others);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_read_signal() {
        let u = url("http://localhost:8080/xwiki/bin/view/PDFViewerMacro/tabLayoutTest?file=PDFTest-2.pdf");
        assert_eq!(
            PageSignal::from_url(&u, DEFAULT_FILE_PARAM).file(),
            Some(&FileId::from("PDFTest-2.pdf"))
        );
    }

    #[test]
    fn test_missing_or_empty_is_absent() {
        let u = url("http://localhost/xwiki/bin/view/Main/?viewer=attachments");
        assert!(!PageSignal::from_url(&u, "file").is_present());

        let u = url("http://localhost/xwiki/bin/view/Main/?file=");
        assert!(!PageSignal::from_url(&u, "file").is_present());
    }

    #[test]
    fn test_first_pair_wins_and_decodes() {
        let u = url("http://localhost/page?file=My%20Report.pdf&file=other.pdf");
        assert_eq!(PageSignal::from_url(&u, "file").file(), Some(&FileId::from("My Report.pdf")));
    }

    #[test]
    fn test_parse_invalid_url() {
        assert!(PageSignal::parse("not a url", "file").is_err());
        assert!(PageSignal::parse(" http://localhost/p?file=a.pdf ", "file")
            .unwrap()
            .is_present());
    }

    #[test]
    fn test_with_signal_rewrites_param() {
        let u = url("http://localhost/page?viewer=x&file=PDFTest-1.pdf&lang=en#content");
        let out = with_signal(&u, "file", &"PDFTest-2.pdf".into());

        assert_eq!(out.as_str(), "http://localhost/page?viewer=x&lang=en&file=PDFTest-2.pdf#content");
        assert!(out.as_str().contains("file=PDFTest-2.pdf"));
    }

    #[test]
    fn test_with_signal_roundtrips_special_characters() {
        let u = url("http://localhost/page");
        let file = FileId::from("a b&c=d.pdf");
        let out = with_signal(&u, "file", &file);

        assert_eq!(PageSignal::from_url(&out, "file").file(), Some(&file));
    }

    #[test]
    fn test_without_signal() {
        let u = url("http://localhost/page?file=a.pdf");
        assert_eq!(without_signal(&u, "file").as_str(), "http://localhost/page");

        let u = url("http://localhost/page?file=a.pdf&x=1");
        assert_eq!(without_signal(&u, "file").as_str(), "http://localhost/page?x=1");
    }

    #[test]
    fn test_tab_href() {
        let u = url("http://localhost/xwiki/bin/view/PDFViewerMacro/tabLayoutTest");
        let href = tab_href(&u, "file", &"PDFTest-3.pdf".into());

        assert!(href.contains("PDFTest-3.pdf"));
        assert!(href.starts_with("http://localhost/xwiki/bin/view/PDFViewerMacro/tabLayoutTest?"));
    }

    #[test]
    fn test_signal_serde() {
        let signal = PageSignal::from(FileId::from("a.pdf"));
        assert_eq!(serde_json::to_string(&signal).unwrap(), r#""a.pdf""#);
        assert_eq!(serde_json::to_string(&PageSignal::absent()).unwrap(), "null");
    }
}
