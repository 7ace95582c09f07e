use crate::constants::DEFAULT_HOME_PAGE_URL_PREF_KEY;
use crate::prefs::Prefs;
use crate::web_page::WebPage;

use std::cell::RefCell;
use tracing::debug;

/// Live state outside the settings screen that a home page can be taken from.
/// Every call is a fresh read.
pub trait PageSources {
    /// The URL displayed by the selected tab, if there is one.
    fn current_tab_url(&self) -> Option<String>;
    fn clipboard_text(&self) -> Option<String>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebPageSource {
    CurrentTab,
    Clipboard,
    Default,
    /// Resolves to nothing; setting it clears the home page.
    Blank,
}

impl WebPageSource {
    pub fn resolve(&self, sources: &dyn PageSources, prefs: &dyn Prefs) -> Option<WebPage> {
        let candidate = match self {
            WebPageSource::CurrentTab => sources.current_tab_url(),
            WebPageSource::Clipboard => sources.clipboard_text(),
            WebPageSource::Default => prefs.string_for_key(DEFAULT_HOME_PAGE_URL_PREF_KEY),
            WebPageSource::Blank => None,
        }?;
        WebPage::parse(&candidate)
    }

    /// True when the source currently resolves to a loadable page.
    pub fn is_home_page(&self, sources: &dyn PageSources, prefs: &dyn Prefs) -> bool {
        self.resolve(sources, prefs)
            .is_some_and(|page| page.is_web_page())
    }
}

/// Fixed values, for tests and for running the screen outside the browser.
#[derive(Clone, Debug, Default)]
pub struct StaticSources {
    pub current_tab_url: Option<String>,
    pub clipboard_text: Option<String>,
}

impl PageSources for StaticSources {
    fn current_tab_url(&self) -> Option<String> {
        self.current_tab_url.clone()
    }

    fn clipboard_text(&self) -> Option<String> {
        self.clipboard_text.clone()
    }
}

/// The system clipboard plus whatever tab the host reports as selected.
pub struct SystemSources {
    pub current_tab_url: Option<String>,
    clipboard: RefCell<Option<arboard::Clipboard>>,
}

impl SystemSources {
    pub fn new(current_tab_url: Option<String>) -> Self {
        let clipboard = match arboard::Clipboard::new() {
            Ok(c) => Some(c),
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                None
            }
        };
        Self {
            current_tab_url,
            clipboard: RefCell::new(clipboard),
        }
    }
}

impl PageSources for SystemSources {
    fn current_tab_url(&self) -> Option<String> {
        self.current_tab_url.clone()
    }

    fn clipboard_text(&self) -> Option<String> {
        let mut clipboard = self.clipboard.borrow_mut();
        match clipboard.as_mut()?.get_text() {
            Ok(text) => Some(text),
            Err(e) => {
                debug!(error = %e, "no text on clipboard");
                None
            }
        }
    }
}
