//! One page view hosting PDF viewer macros
//!
//! The page owns the shared file signal. A tab click writes the signal and
//! the URL, then every macro is synced again as if the page had reloaded.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use pdfviewer_navigation::{tab_href, with_signal, PageSignal};
use pdfviewer_tabs::{MacroInstance, TabList};

use crate::config::Config;
use crate::error::CoreError;
use crate::params::{Dimensions, FileSource, Layout, MacroParams};
use crate::Result;

#[derive(Debug, Clone)]
struct Viewer {
    instance: MacroInstance,
    document: Option<String>,
    layout: Layout,
    dimensions: Dimensions,
}

/// A rendered tab link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabView {
    pub name: String,
    pub href: String,
    pub active: bool,
}

/// What a macro currently displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerView {
    pub layout: Layout,
    pub dimensions: Dimensions,
    /// Document in the frame; `None` when no tab is active
    pub shown: Option<FileSource>,
}

pub struct Page {
    config: Config,
    /// Current address of the page
    url: Arc<RwLock<Url>>,
    /// File shown on the page, read by every macro
    signal: Arc<RwLock<PageSignal>>,
    /// Macros in document order
    viewers: Arc<RwLock<Vec<Viewer>>>,
}

impl Page {
    /// Render a page from its macros' parameters
    pub fn load(config: Config, url: Url, macros: Vec<MacroParams>) -> Result<Self> {
        let macros = macros
            .into_iter()
            .map(|params| -> Result<(TabList, MacroParams)> {
                Ok((params.files()?, params))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::build(config, url, macros)
    }

    /// Render a page from raw tab lists, one per macro
    pub fn from_tab_lists(config: Config, url: Url, lists: Vec<TabList>) -> Result<Self> {
        let macros = lists
            .into_iter()
            .map(|tabs| (tabs, MacroParams::default()))
            .collect();

        Self::build(config, url, macros)
    }

    /// Render a page from `{{pdfviewer .../}}` sources
    pub fn from_markup<'a, I>(config: Config, url: Url, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let macros = sources
            .into_iter()
            .map(MacroParams::parse)
            .collect::<Result<Vec<_>>>()?;

        Self::load(config, url, macros)
    }

    fn build(config: Config, url: Url, macros: Vec<(TabList, MacroParams)>) -> Result<Self> {
        config.validate()?;

        let viewers = macros
            .into_iter()
            .map(|(tabs, params)| {
                let layout = Layout::for_tab_count(tabs.len());
                Viewer {
                    instance: MacroInstance::new(tabs),
                    dimensions: params.dimensions_for(layout, &config),
                    document: params.document,
                    layout,
                }
            })
            .collect();

        let page = Self {
            config,
            url: Arc::new(RwLock::new(url)),
            signal: Arc::new(RwLock::new(PageSignal::absent())),
            viewers: Arc::new(RwLock::new(viewers)),
        };
        page.reload();

        Ok(page)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn url(&self) -> Url {
        self.url.read().clone()
    }

    pub fn signal(&self) -> PageSignal {
        self.signal.read().clone()
    }

    pub fn instance_count(&self) -> usize {
        self.viewers.read().len()
    }

    pub fn instance(&self, index: usize) -> Result<MacroInstance> {
        self.viewers
            .read()
            .get(index)
            .map(|v| v.instance.clone())
            .ok_or(CoreError::InstanceNotFound(index))
    }

    /// Active tab of every macro, in document order
    pub fn active_tabs(&self) -> Vec<Option<usize>> {
        self.viewers
            .read()
            .iter()
            .map(|v| v.instance.active_index())
            .collect()
    }

    /// Re-read the signal from the URL and sync every macro
    pub fn reload(&self) {
        let url = self.url();
        let mut signal = PageSignal::from_url(&url, &self.config.file_param);

        if !signal.is_present() && self.config.seed_default_signal {
            let viewers = self.viewers.read();
            if let Some(first) = viewers.iter().find(|v| v.layout == Layout::Tabs) {
                let seeded = first.instance.tabs().first().clone();
                tracing::debug!(file = %seeded, "Seeding page signal from first tab layout macro");
                signal = PageSignal::from(seeded);
            }
        }

        *self.signal.write() = signal;
        self.sync_all();

        tracing::info!(
            url = %url,
            instances = self.instance_count(),
            "Page reloaded"
        );
    }

    /// Replace the address and reload
    pub fn navigate(&self, url: Url) {
        *self.url.write() = url;
        self.reload();
    }

    /// Click tab `index` of macro `instance`; returns the new page URL.
    pub fn click_tab(&self, instance: usize, index: usize) -> Result<Url> {
        let file = self.instance(instance)?.select_tab(index)?;

        let new_url = with_signal(&self.url(), &self.config.file_param, &file);
        *self.url.write() = new_url.clone();
        *self.signal.write() = PageSignal::from(file.clone());

        tracing::info!(instance, index, file = %file, "Tab selected");

        self.sync_all();
        Ok(new_url)
    }

    /// Tab links of macro `index`, in tab order
    pub fn tab_views(&self, index: usize) -> Result<Vec<TabView>> {
        let url = self.url();
        let viewers = self.viewers.read();
        let viewer = viewers.get(index).ok_or(CoreError::InstanceNotFound(index))?;
        let active = viewer.instance.active_index();

        Ok(viewer
            .instance
            .tabs()
            .iter()
            .enumerate()
            .map(|(i, file)| TabView {
                name: file.to_string(),
                href: tab_href(&url, &self.config.file_param, file),
                active: active == Some(i),
            })
            .collect())
    }

    pub fn viewer(&self, index: usize) -> Result<ViewerView> {
        let viewers = self.viewers.read();
        let viewer = viewers.get(index).ok_or(CoreError::InstanceNotFound(index))?;

        // A single-file macro has no tab bar and always shows its file
        let shown = match viewer.layout {
            Layout::Single => Some(viewer.instance.tabs().first()),
            Layout::Tabs => viewer.instance.active_file(),
        };

        Ok(ViewerView {
            layout: viewer.layout,
            dimensions: viewer.dimensions.clone(),
            shown: shown.map(|file| FileSource::resolve(file, viewer.document.as_deref())),
        })
    }

    fn sync_all(&self) {
        let signal = self.signal();
        for (i, viewer) in self.viewers.write().iter_mut().enumerate() {
            if viewer.layout == Layout::Single {
                continue;
            }
            let state = viewer.instance.sync(signal.file());
            tracing::trace!(instance = i, state = %state, "Macro synced");
        }
    }
}

impl Clone for Page {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            url: Arc::clone(&self.url),
            signal: Arc::clone(&self.signal),
            viewers: Arc::clone(&self.viewers),
        }
    }
}
