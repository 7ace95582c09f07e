//! Builds the rows of the home page settings screen and applies their actions.
//!
//! Rows are plain values regenerated after every action. Whether a button is
//! enabled is decided when asked, reading the sources at that moment.

use crate::constants::{
    CLEAR_HOME_PAGE_ID, HOME_BUTTON_IN_MENU_ID, HOME_PAGE_BUTTON_IS_IN_MENU_PREF_KEY,
    HOME_PAGE_SETTING_ID, HOME_PAGE_URL_PREF_KEY, SETTINGS_HOME_PAGE_CLEAR,
    SETTINGS_HOME_PAGE_PLACEHOLDER, SETTINGS_HOME_PAGE_UI_POSITION_SUBTITLE,
    SETTINGS_HOME_PAGE_UI_POSITION_TITLE, SETTINGS_HOME_PAGE_URL_SECTION_TITLE,
    SETTINGS_HOME_PAGE_USE_COPIED_LINK, SETTINGS_HOME_PAGE_USE_CURRENT_PAGE,
    SETTINGS_HOME_PAGE_USE_DEFAULT, USE_COPIED_LINK_ID, USE_CURRENT_TAB_ID, USE_DEFAULT_ID,
};
use crate::error::{Error, Result};
use crate::models::{BoolSetting, ButtonSetting, EnabledWhen, Row, Section};
use crate::prefs::Prefs;
use crate::sources::{PageSources, WebPageSource};
use crate::web_page_setting::WebPageSetting;

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// Show the "home button in menu" toggle.
    pub menu_position_toggle: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            menu_position_toggle: cfg!(feature = "menu-toggle"),
        }
    }
}

impl SettingsConfig {
    /// Reads a JSON config file; missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// What the host should do after a row was activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Prefs may have changed; rebuild the rows.
    Reload,
    /// The URL field was activated; start editing it.
    BeginEditing,
    /// The row is disabled.
    Ignored,
}

fn button(
    title: &str,
    accessibility_id: &'static str,
    enabled_when: EnabledWhen,
    action: WebPageSource,
) -> Row {
    Row::Button(ButtonSetting {
        title: title.to_string(),
        accessibility_id,
        destructive: false,
        enabled_when,
        action,
    })
}

pub fn generate_settings(
    sources: &dyn PageSources,
    prefs: &dyn Prefs,
    config: &SettingsConfig,
) -> Vec<Section> {
    let mut basic_settings = vec![
        Row::TextField(
            WebPageSetting::new(HOME_PAGE_URL_PREF_KEY, HOME_PAGE_SETTING_ID)
                .with_placeholder(SETTINGS_HOME_PAGE_PLACEHOLDER),
        ),
        button(
            SETTINGS_HOME_PAGE_USE_CURRENT_PAGE,
            USE_CURRENT_TAB_ID,
            EnabledWhen::WebPage(WebPageSource::CurrentTab),
            WebPageSource::CurrentTab,
        ),
        button(
            SETTINGS_HOME_PAGE_USE_COPIED_LINK,
            USE_COPIED_LINK_ID,
            EnabledWhen::WebPage(WebPageSource::Clipboard),
            WebPageSource::Clipboard,
        ),
    ];

    // Checked once here; the button itself has no gate.
    if WebPageSource::Default.is_home_page(sources, prefs) {
        basic_settings.push(button(
            SETTINGS_HOME_PAGE_USE_DEFAULT,
            USE_DEFAULT_ID,
            EnabledWhen::Always,
            WebPageSource::Default,
        ));
    }

    basic_settings.push(Row::Button(ButtonSetting {
        title: SETTINGS_HOME_PAGE_CLEAR.to_string(),
        accessibility_id: CLEAR_HOME_PAGE_ID,
        destructive: true,
        enabled_when: EnabledWhen::Always,
        action: WebPageSource::Blank,
    }));

    let mut settings = vec![Section::new(
        Some(SETTINGS_HOME_PAGE_URL_SECTION_TITLE.to_string()),
        basic_settings,
    )];

    if config.menu_position_toggle {
        settings.push(Section::new(
            None,
            vec![Row::Toggle(BoolSetting {
                pref_key: HOME_PAGE_BUTTON_IS_IN_MENU_PREF_KEY,
                default_value: true,
                title: SETTINGS_HOME_PAGE_UI_POSITION_TITLE.to_string(),
                status_text: Some(SETTINGS_HOME_PAGE_UI_POSITION_SUBTITLE.to_string()),
                accessibility_id: HOME_BUTTON_IN_MENU_ID,
            })],
        ));
    }

    settings
}

/// Installs the page `source` resolves to as the home page, or clears the
/// home page when it resolves to nothing. Always asks for a reload since
/// button enablement may have changed.
pub fn perform(source: WebPageSource, sources: &dyn PageSources, prefs: &mut dyn Prefs) -> bool {
    match source.resolve(sources, &*prefs) {
        Some(page) => prefs.set_string(HOME_PAGE_URL_PREF_KEY, page.as_str()),
        None => prefs.remove(HOME_PAGE_URL_PREF_KEY),
    }
    debug!(?source, "home page source applied");
    true
}

pub fn activate(row: &Row, sources: &dyn PageSources, prefs: &mut dyn Prefs) -> Activation {
    if !row.is_enabled(sources, &*prefs) {
        debug!(id = row.accessibility_id(), "ignored disabled row");
        return Activation::Ignored;
    }
    match row {
        Row::TextField(_) => Activation::BeginEditing,
        Row::Button(button) => {
            perform(button.action, sources, prefs);
            Activation::Reload
        }
        Row::Toggle(toggle) => {
            toggle.toggle(prefs);
            Activation::Reload
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_HOME_PAGE_URL_PREF_KEY;
    use crate::prefs::MemoryPrefs;
    use crate::sources::StaticSources;

    fn find<'a>(sections: &'a [Section], id: &str) -> Option<&'a Row> {
        sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .find(|row| row.accessibility_id() == id)
    }

    fn ids(sections: &[Section]) -> Vec<&'static str> {
        sections
            .iter()
            .flat_map(|s| s.rows.iter())
            .map(Row::accessibility_id)
            .collect()
    }

    fn toggle_off() -> SettingsConfig {
        SettingsConfig {
            menu_position_toggle: false,
        }
    }

    fn toggle_on() -> SettingsConfig {
        SettingsConfig {
            menu_position_toggle: true,
        }
    }

    #[test]
    fn test_rows_without_default() {
        let sections =
            generate_settings(&StaticSources::default(), &MemoryPrefs::new(), &toggle_off());
        assert_eq!(sections.len(), 1);
        assert_eq!(
            ids(&sections),
            vec![
                HOME_PAGE_SETTING_ID,
                USE_CURRENT_TAB_ID,
                USE_COPIED_LINK_ID,
                CLEAR_HOME_PAGE_ID
            ]
        );
        assert!(find(&sections, USE_DEFAULT_ID).is_none());
    }

    #[test]
    fn test_default_button_needs_web_page() {
        let env = StaticSources::default();
        let mut prefs = MemoryPrefs::new();

        prefs.set_string(DEFAULT_HOME_PAGE_URL_PREF_KEY, "ftp://example.com");
        let sections = generate_settings(&env, &prefs, &toggle_off());
        assert!(find(&sections, USE_DEFAULT_ID).is_none());

        prefs.set_string(DEFAULT_HOME_PAGE_URL_PREF_KEY, "https://start.example");
        let sections = generate_settings(&env, &prefs, &toggle_off());
        assert_eq!(
            ids(&sections),
            vec![
                HOME_PAGE_SETTING_ID,
                USE_CURRENT_TAB_ID,
                USE_COPIED_LINK_ID,
                USE_DEFAULT_ID,
                CLEAR_HOME_PAGE_ID
            ]
        );
    }

    #[test]
    fn test_clear_is_last_and_destructive() {
        let sections =
            generate_settings(&StaticSources::default(), &MemoryPrefs::new(), &toggle_off());
        let last = sections[0].rows.last().unwrap();
        assert_eq!(last.accessibility_id(), CLEAR_HOME_PAGE_ID);
        assert!(last.is_destructive());
        assert_eq!(
            sections[0]
                .rows
                .iter()
                .filter(|row| row.is_destructive())
                .count(),
            1
        );
    }

    #[test]
    fn test_menu_toggle_section() {
        let prefs = MemoryPrefs::new();
        let sections = generate_settings(&StaticSources::default(), &prefs, &toggle_on());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].title, None);
        assert_eq!(sections[1].rows.len(), 1);
        match &sections[1].rows[0] {
            Row::Toggle(toggle) => {
                assert_eq!(toggle.pref_key, HOME_PAGE_BUTTON_IS_IN_MENU_PREF_KEY);
                assert!(toggle.value(&prefs));
            }
            other => panic!("expected toggle, got {other:?}"),
        }
    }

    #[test]
    fn test_toggle_activation_flips_pref() {
        let env = StaticSources::default();
        let mut prefs = MemoryPrefs::new();
        let sections = generate_settings(&env, &prefs, &toggle_on());
        let row = &sections[1].rows[0];

        assert_eq!(activate(row, &env, &mut prefs), Activation::Reload);
        assert_eq!(prefs.bool_for_key(HOME_PAGE_BUTTON_IS_IN_MENU_PREF_KEY), Some(false));
        activate(row, &env, &mut prefs);
        assert_eq!(prefs.bool_for_key(HOME_PAGE_BUTTON_IS_IN_MENU_PREF_KEY), Some(true));
    }

    #[test]
    fn test_use_current_page() {
        let env = StaticSources {
            current_tab_url: Some("https://example.com".to_string()),
            clipboard_text: None,
        };
        let mut prefs = MemoryPrefs::new();
        prefs.set_string(DEFAULT_HOME_PAGE_URL_PREF_KEY, "https://start.example");
        prefs.set_bool(HOME_PAGE_BUTTON_IS_IN_MENU_PREF_KEY, false);
        let before = prefs.clone();

        let sections = generate_settings(&env, &prefs, &toggle_off());
        let row = find(&sections, USE_CURRENT_TAB_ID).unwrap();
        assert!(row.is_enabled(&env, &prefs));
        assert_eq!(activate(row, &env, &mut prefs), Activation::Reload);

        assert_eq!(
            prefs.string_for_key(HOME_PAGE_URL_PREF_KEY).as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            prefs.string_for_key(DEFAULT_HOME_PAGE_URL_PREF_KEY),
            before.string_for_key(DEFAULT_HOME_PAGE_URL_PREF_KEY)
        );
        assert_eq!(prefs.bool_for_key(HOME_PAGE_BUTTON_IS_IN_MENU_PREF_KEY), Some(false));
        assert_eq!(prefs.len(), before.len() + 1);
    }

    #[test]
    fn test_copied_link_that_is_not_a_url() {
        let env = StaticSources {
            current_tab_url: None,
            clipboard_text: Some("not a url".to_string()),
        };
        let mut prefs = MemoryPrefs::new();
        prefs.set_string(HOME_PAGE_URL_PREF_KEY, "https://keep.example");

        let sections = generate_settings(&env, &prefs, &toggle_off());
        let row = find(&sections, USE_COPIED_LINK_ID).unwrap();
        assert!(!row.is_enabled(&env, &prefs));
        assert_eq!(activate(row, &env, &mut prefs), Activation::Ignored);
        assert_eq!(
            prefs.string_for_key(HOME_PAGE_URL_PREF_KEY).as_deref(),
            Some("https://keep.example")
        );
    }

    #[test]
    fn test_copied_link_spanning_lines_is_refused() {
        let env = StaticSources {
            current_tab_url: Some("https://example.com/a b".to_string()),
            clipboard_text: Some("https://exa\nmple.com".to_string()),
        };
        let mut prefs = MemoryPrefs::new();

        let sections = generate_settings(&env, &prefs, &toggle_off());
        for id in [USE_COPIED_LINK_ID, USE_CURRENT_TAB_ID] {
            let row = find(&sections, id).unwrap();
            assert!(!row.is_enabled(&env, &prefs));
            assert_eq!(activate(row, &env, &mut prefs), Activation::Ignored);
        }
        assert_eq!(prefs.string_for_key(HOME_PAGE_URL_PREF_KEY), None);
    }

    #[test]
    fn test_enablement_reads_sources_when_asked() {
        let mut env = StaticSources::default();
        let prefs = MemoryPrefs::new();
        let sections = generate_settings(&env, &prefs, &toggle_off());
        let row = find(&sections, USE_COPIED_LINK_ID).unwrap();
        assert!(!row.is_enabled(&env, &prefs));

        env.clipboard_text = Some("https://copied.example".to_string());
        assert!(row.is_enabled(&env, &prefs));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let env = StaticSources::default();
        let mut prefs = MemoryPrefs::new();
        prefs.set_string(HOME_PAGE_URL_PREF_KEY, "https://example.com");

        let sections = generate_settings(&env, &prefs, &toggle_off());
        let clear = find(&sections, CLEAR_HOME_PAGE_ID).unwrap().clone();

        assert_eq!(activate(&clear, &env, &mut prefs), Activation::Reload);
        assert_eq!(prefs.string_for_key(HOME_PAGE_URL_PREF_KEY), None);
        assert_eq!(activate(&clear, &env, &mut prefs), Activation::Reload);
        assert_eq!(prefs.string_for_key(HOME_PAGE_URL_PREF_KEY), None);
    }

    #[test]
    fn test_default_validated_at_build_time_only() {
        let env = StaticSources::default();
        let mut prefs = MemoryPrefs::new();
        prefs.set_string(HOME_PAGE_URL_PREF_KEY, "https://example.com");
        prefs.set_string(DEFAULT_HOME_PAGE_URL_PREF_KEY, "https://start.example");

        let sections = generate_settings(&env, &prefs, &toggle_off());
        let row = find(&sections, USE_DEFAULT_ID).unwrap().clone();

        prefs.remove(DEFAULT_HOME_PAGE_URL_PREF_KEY);
        assert!(row.is_enabled(&env, &prefs));
        assert_eq!(activate(&row, &env, &mut prefs), Activation::Reload);
        assert_eq!(prefs.string_for_key(HOME_PAGE_URL_PREF_KEY), None);
    }

    #[test]
    fn test_text_field_round_trip() {
        let env = StaticSources::default();
        let mut prefs = MemoryPrefs::new();
        let sections = generate_settings(&env, &prefs, &toggle_off());
        let Row::TextField(field) = &sections[0].rows[0] else {
            panic!("first row should be the URL field");
        };
        assert_eq!(activate(&sections[0].rows[0], &env, &mut prefs), Activation::BeginEditing);
        field.commit("https://example.com", &mut prefs);

        let sections = generate_settings(&env, &prefs, &toggle_off());
        let Row::TextField(field) = &sections[0].rows[0] else {
            panic!("first row should be the URL field");
        };
        assert_eq!(field.displayed_value(&prefs).as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("homepage.json");
        fs::write(&path, r#"{"menu_position_toggle": true}"#).unwrap();
        assert!(SettingsConfig::load(&path).unwrap().menu_position_toggle);

        fs::write(&path, "not json").unwrap();
        assert!(matches!(SettingsConfig::load(&path), Err(Error::Json { .. })));
        assert!(matches!(
            SettingsConfig::load(&dir.path().join("missing.json")),
            Err(Error::Io { .. })
        ));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: SettingsConfig = serde_json::from_str(r#"{"menu_position_toggle": true}"#).unwrap();
        assert!(config.menu_position_toggle);
        let config: SettingsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SettingsConfig::default());
    }
}
