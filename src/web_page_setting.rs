use crate::prefs::Prefs;
use crate::web_page::{WebPage, is_valid_web_url};

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardKind {
    Default,
    Url,
}

/// Input behaviour requested by a text row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyboardHints {
    pub kind: KeyboardKind,
    pub autocapitalize: bool,
    pub autocorrect: bool,
}

impl KeyboardHints {
    pub const URL: KeyboardHints = KeyboardHints {
        kind: KeyboardKind::Url,
        autocapitalize: false,
        autocorrect: false,
    };

    /// Whether a typed character may enter the field. URLs never contain
    /// raw whitespace.
    pub fn accepts(&self, c: char) -> bool {
        match self.kind {
            KeyboardKind::Url => !c.is_whitespace() && !c.is_control(),
            KeyboardKind::Default => !c.is_control(),
        }
    }
}

impl Default for KeyboardHints {
    fn default() -> Self {
        Self {
            kind: KeyboardKind::Default,
            autocapitalize: true,
            autocorrect: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Stored(String),
    Cleared,
    Rejected,
}

/// Preference-backed text field that only accepts web page URLs.
#[derive(Clone, Debug, PartialEq)]
pub struct WebPageSetting {
    pub pref_key: &'static str,
    pub default_value: Option<String>,
    pub placeholder: Option<String>,
    pub accessibility_id: &'static str,
    pub keyboard: KeyboardHints,
}

impl WebPageSetting {
    pub fn new(pref_key: &'static str, accessibility_id: &'static str) -> Self {
        Self {
            pref_key,
            default_value: None,
            placeholder: None,
            accessibility_id,
            keyboard: KeyboardHints::URL,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn is_valid(candidate: Option<&str>) -> bool {
        is_valid_web_url(candidate)
    }

    /// What the field shows before editing; `None` means the placeholder.
    pub fn displayed_value(&self, prefs: &dyn Prefs) -> Option<String> {
        prefs
            .string_for_key(self.pref_key)
            .or_else(|| self.default_value.clone())
    }

    pub fn commit(&self, candidate: &str, prefs: &mut dyn Prefs) -> CommitOutcome {
        if candidate.trim().is_empty() {
            prefs.remove(self.pref_key);
            return CommitOutcome::Cleared;
        }
        match WebPage::parse(candidate).filter(WebPage::is_web_page) {
            Some(page) => {
                prefs.set_string(self.pref_key, page.as_str());
                CommitOutcome::Stored(page.as_str().to_string())
            }
            None => {
                debug!(key = self.pref_key, candidate, "rejected home page edit");
                CommitOutcome::Rejected
            }
        }
    }
}
