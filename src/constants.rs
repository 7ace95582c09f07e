// Preference keys
pub const HOME_PAGE_URL_PREF_KEY: &str = "homepage.url";
pub const HOME_PAGE_BUTTON_IS_IN_MENU_PREF_KEY: &str = "homepage.button.isInMenu";
pub const DEFAULT_HOME_PAGE_URL_PREF_KEY: &str = "homepage.url.default";

// Schemes the browser loads as a page
pub const WEB_SCHEMES: &[&str] = &["http", "https"];

// Accessibility identifiers
pub const HOME_PAGE_SETTING_ID: &str = "HomePageSetting";
pub const USE_CURRENT_TAB_ID: &str = "UseCurrentTab";
pub const USE_COPIED_LINK_ID: &str = "UseCopiedLink";
pub const USE_DEFAULT_ID: &str = "UseDefault";
pub const CLEAR_HOME_PAGE_ID: &str = "ClearHomePage";
pub const HOME_BUTTON_IN_MENU_ID: &str = "HomePageButtonIsInMenu";

// Strings
pub const SETTINGS_HOME_PAGE_TITLE: &str = "Homepage";
pub const SETTINGS_HOME_PAGE_URL_SECTION_TITLE: &str = "Homepage";
pub const SETTINGS_HOME_PAGE_PLACEHOLDER: &str = "Enter a webpage";
pub const SETTINGS_HOME_PAGE_USE_CURRENT_PAGE: &str = "Use Current Page";
pub const SETTINGS_HOME_PAGE_USE_COPIED_LINK: &str = "Use Copied Link";
pub const SETTINGS_HOME_PAGE_USE_DEFAULT: &str = "Use Default";
pub const SETTINGS_HOME_PAGE_CLEAR: &str = "Clear";
pub const SETTINGS_HOME_PAGE_UI_POSITION_TITLE: &str = "Show Homepage in Menu";
pub const SETTINGS_HOME_PAGE_UI_POSITION_SUBTITLE: &str = "Otherwise show in the toolbar";

// Status messages
pub const STATUS_READY: &str = "Ready";
pub const STATUS_EDITING: &str = "EDIT MODE - Type URL and press Enter";

// Prefs file location
pub const PREFS_QUALIFIER: &str = "org";
pub const PREFS_ORGANIZATION: &str = "rynx";
pub const PREFS_APPLICATION: &str = "rynx_browser";
pub const PREFS_FILE_NAME: &str = "prefs.json";
pub const LOG_FILE_NAME: &str = "homepage.log";

// UI layout constants
pub const TITLE_BAR_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 3;
pub const UI_BORDER_WIDTH: usize = 2;

// Event polling
pub const EVENT_POLL_TIMEOUT_MS: u64 = 10;
