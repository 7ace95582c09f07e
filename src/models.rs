use crate::prefs::Prefs;
use crate::sources::{PageSources, WebPageSource};
use crate::web_page_setting::WebPageSetting;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// When a button may be pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnabledWhen {
    Always,
    /// Only while the source resolves to a web page.
    WebPage(WebPageSource),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ButtonSetting {
    pub title: String,
    pub accessibility_id: &'static str,
    pub destructive: bool,
    pub enabled_when: EnabledWhen,
    /// The home page this button installs.
    pub action: WebPageSource,
}

impl ButtonSetting {
    pub fn is_enabled(&self, sources: &dyn PageSources, prefs: &dyn Prefs) -> bool {
        match self.enabled_when {
            EnabledWhen::Always => true,
            EnabledWhen::WebPage(source) => source.is_home_page(sources, prefs),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoolSetting {
    pub pref_key: &'static str,
    pub default_value: bool,
    pub title: String,
    pub status_text: Option<String>,
    pub accessibility_id: &'static str,
}

impl BoolSetting {
    pub fn value(&self, prefs: &dyn Prefs) -> bool {
        prefs
            .bool_for_key(self.pref_key)
            .unwrap_or(self.default_value)
    }

    pub fn toggle(&self, prefs: &mut dyn Prefs) -> bool {
        let value = !self.value(prefs);
        prefs.set_bool(self.pref_key, value);
        value
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Row {
    TextField(WebPageSetting),
    Button(ButtonSetting),
    Toggle(BoolSetting),
}

impl Row {
    pub fn title(&self) -> &str {
        match self {
            Row::TextField(setting) => setting.placeholder.as_deref().unwrap_or_default(),
            Row::Button(button) => &button.title,
            Row::Toggle(toggle) => &toggle.title,
        }
    }

    pub fn accessibility_id(&self) -> &'static str {
        match self {
            Row::TextField(setting) => setting.accessibility_id,
            Row::Button(button) => button.accessibility_id,
            Row::Toggle(toggle) => toggle.accessibility_id,
        }
    }

    pub fn is_enabled(&self, sources: &dyn PageSources, prefs: &dyn Prefs) -> bool {
        match self {
            Row::TextField(_) | Row::Toggle(_) => true,
            Row::Button(button) => button.is_enabled(sources, prefs),
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, Row::Button(button) if button.destructive)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub title: Option<String>,
    pub rows: Vec<Row>,
}

impl Section {
    pub fn new(title: Option<String>, rows: Vec<Row>) -> Self {
        Self { title, rows }
    }
}
