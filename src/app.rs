use crate::constants::{SETTINGS_HOME_PAGE_TITLE, STATUS_EDITING, STATUS_READY};
use crate::error::Result;
use crate::models::{InputMode, Row, Section};
use crate::prefs::{FilePrefs, Prefs};
use crate::settings::{Activation, SettingsConfig, activate, generate_settings};
use crate::sources::{PageSources, WebPageSource};
use crate::web_page_setting::{CommitOutcome, WebPageSetting};

use tracing::{debug, warn};

/// State of the home page settings screen between key presses.
pub struct HomePageSettings {
    pub title: String,
    pub sections: Vec<Section>,
    pub selected: usize,
    pub input_mode: InputMode,
    pub edit_buffer: String,
    pub status_message: String,
}

impl Default for HomePageSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePageSettings {
    pub fn new() -> Self {
        Self {
            title: String::from(SETTINGS_HOME_PAGE_TITLE),
            sections: Vec::new(),
            selected: 0,
            input_mode: InputMode::Normal,
            edit_buffer: String::new(),
            status_message: String::from(STATUS_READY),
        }
    }

    /// Regenerates the rows. Called when the screen appears and after every action.
    pub fn reload(&mut self, sources: &dyn PageSources, prefs: &dyn Prefs, config: &SettingsConfig) {
        self.sections = generate_settings(sources, prefs, config);
        let count = self.row_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }

    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.rows().nth(self.selected)
    }

    pub fn select_next(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = if self.selected > 0 {
                self.selected - 1
            } else {
                count - 1
            };
        }
    }

    pub fn select_id(&mut self, accessibility_id: &str) -> bool {
        let found = self
            .rows()
            .position(|row| row.accessibility_id() == accessibility_id);
        match found {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    fn url_field(&self) -> Option<&WebPageSetting> {
        self.rows().find_map(|row| match row {
            Row::TextField(setting) => Some(setting),
            _ => None,
        })
    }

    pub fn activate_selected(
        &mut self,
        sources: &dyn PageSources,
        prefs: &mut dyn Prefs,
        config: &SettingsConfig,
    ) {
        let Some(row) = self.selected_row().cloned() else {
            return;
        };
        match activate(&row, sources, prefs) {
            Activation::BeginEditing => self.begin_editing(&*prefs),
            Activation::Reload => {
                self.status_message = format!("{} applied", row.title());
                self.reload(sources, &*prefs, config);
            }
            Activation::Ignored => {
                self.status_message = format!("{} is unavailable", row.title());
            }
        }
    }

    pub fn begin_editing(&mut self, prefs: &dyn Prefs) {
        let Some(field) = self.url_field() else {
            return;
        };
        self.edit_buffer = field.displayed_value(prefs).unwrap_or_default();
        self.input_mode = InputMode::Editing;
        self.status_message = String::from(STATUS_EDITING);
    }

    /// Appends `c` if the field's keyboard allows it.
    pub fn push_char(&mut self, c: char) {
        let accepted = self
            .url_field()
            .is_none_or(|field| field.keyboard.accepts(c));
        if accepted {
            self.edit_buffer.push(c);
        }
    }

    pub fn commit_edit(
        &mut self,
        sources: &dyn PageSources,
        prefs: &mut dyn Prefs,
        config: &SettingsConfig,
    ) -> Option<CommitOutcome> {
        let field = self.url_field()?.clone();
        let outcome = field.commit(&self.edit_buffer, prefs);
        debug!(?outcome, "home page edit committed");
        self.status_message = match &outcome {
            CommitOutcome::Stored(url) => format!("Homepage set to {}", url),
            CommitOutcome::Cleared => String::from("Homepage cleared"),
            CommitOutcome::Rejected => String::from("Not a valid web address"),
        };
        self.input_mode = InputMode::Normal;
        self.edit_buffer.clear();
        self.reload(sources, &*prefs, config);
        Some(outcome)
    }

    pub fn cancel_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.edit_buffer.clear();
        self.status_message = String::from(STATUS_READY);
    }
}

/// The settings screen together with the collaborators it reads and writes.
pub struct App {
    pub screen: HomePageSettings,
    pub prefs: Box<dyn Prefs>,
    pub sources: Box<dyn PageSources>,
    pub config: SettingsConfig,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        prefs: Box<dyn Prefs>,
        sources: Box<dyn PageSources>,
        config: SettingsConfig,
    ) -> Self {
        let mut app = Self {
            screen: HomePageSettings::new(),
            prefs,
            sources,
            config,
            should_quit: false,
        };
        app.reload();
        app
    }

    pub fn reload(&mut self) {
        self.screen
            .reload(self.sources.as_ref(), self.prefs.as_ref(), &self.config);
    }

    pub fn activate_selected(&mut self) {
        self.screen
            .activate_selected(self.sources.as_ref(), self.prefs.as_mut(), &self.config);
    }

    /// Installs a home page from `source` directly, as the shortcut keys do.
    pub fn set_home_page(&mut self, source: WebPageSource) {
        crate::settings::perform(source, self.sources.as_ref(), self.prefs.as_mut());
        self.reload();
    }

    pub fn commit_edit(&mut self) -> Option<CommitOutcome> {
        self.screen
            .commit_edit(self.sources.as_ref(), self.prefs.as_mut(), &self.config)
    }

    pub fn clipboard_text(&self) -> Option<String> {
        self.sources.clipboard_text()
    }

    /// Persists the prefs; failures are logged and the screen carries on.
    pub fn flush(&mut self) {
        if let Err(e) = self.prefs.flush() {
            warn!(error = %e, "failed to save prefs");
            self.screen.status_message = format!("Could not save: {}", e);
        }
    }
}

/// Opens the prefs file at `path` (or the platform default) for the binary.
pub fn open_prefs(path: Option<std::path::PathBuf>) -> Result<FilePrefs> {
    let path = match path {
        Some(p) => p,
        None => FilePrefs::default_path()?,
    };
    FilePrefs::open(path)
}
