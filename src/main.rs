use rynx_homepage::app::{App, open_prefs};
use rynx_homepage::constants::{EVENT_POLL_TIMEOUT_MS, LOG_FILE_NAME};
use rynx_homepage::event_handler::handle_key_event;
use rynx_homepage::settings::SettingsConfig;
use rynx_homepage::sources::SystemSources;
use rynx_homepage::ui::ui;

use clap::Parser;
use std::{error::Error, fs::File, io, path::{Path, PathBuf}, sync::Mutex, time::Duration};
use tracing::info;

use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

/// Home page settings for the Rynx browser
#[derive(Parser, Debug)]
#[command(name = "rynx-homepage", version)]
struct Cli {
    /// Preferences file (defaults to the platform config directory)
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// URL of the browser's selected tab, offered by "Use Current Page"
    #[arg(long)]
    current_url: Option<String>,

    /// JSON settings file, e.g. {"menu_position_toggle": true}
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show the "home button in menu" toggle
    #[arg(long)]
    menu_toggle: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(prefs_path: &Path, verbose: bool) -> Result<(), Box<dyn Error>> {
    // Logs go to a file so they do not draw over the terminal UI.
    let log_dir = prefs_path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(log_dir)?;
    let file = File::create(log_dir.join(LOG_FILE_NAME))?;

    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let prefs = open_prefs(cli.prefs.clone())?;
    init_logging(prefs.path(), cli.verbose)?;
    info!(path = %prefs.path().display(), "opened prefs");

    let mut config = match &cli.config {
        Some(path) => SettingsConfig::load(path)?,
        None => SettingsConfig::default(),
    };
    config.menu_position_toggle |= cli.menu_toggle;
    info!(?config, "settings config");
    let sources = SystemSources::new(cli.current_url);
    let app = App::new(Box::new(prefs), Box::new(sources), config);

    // This hook catches panics and restores the terminal before printing the error
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableFocusChange);
        original_hook(panic_info);
    }));

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Teardown
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(&mut app, key)? {
                        app.flush();
                        return Ok(());
                    }
                }
                // The clipboard may have changed while we were in the background.
                Event::FocusGained => app.reload(),
                _ => {}
            }
        }
    }
}
