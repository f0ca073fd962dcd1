use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::{Path, PathBuf};

use bibfinder::App;
use bibfinder::config::{self, Config, ConfigResult};
use bibfinder::lookup::{DetailPanel, SortState, lookup, render_table};
use bibfinder::participant::{ParticipantLoader, load_participants};

const DEFAULT_DATA_FILE: &str = "runners.json";

/// Race-day bib number lookup
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Race-day bib number lookup with a live participant table"
)]
struct Args {
    /// Participant JSON file (defaults to lookup.data_file or runners.json)
    data_file: Option<PathBuf>,

    /// Pause in milliseconds after which the next keystroke starts a new entry
    #[arg(long)]
    reset_timeout_ms: Option<u64>,

    /// Print the lookup for TERM and exit without starting the interface
    #[arg(long, value_name = "TERM")]
    query: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/bibfinder-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/bibfinder-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== BIBFINDER SESSION STARTED ===");
    }

    color_eyre::install()?;

    let mut config_result = config::load_config();
    let args = Args::parse();

    if let Some(timeout) = args.reset_timeout_ms {
        config_result.config.lookup.reset_timeout_ms = timeout;
    }
    let data_file = resolve_data_file(args.data_file, &config_result.config);

    if let Some(term) = args.query {
        return print_query(&data_file, &term);
    }

    let terminal = init_terminal()?;

    // Deferred loading keeps the first frame responsive on large files
    let loader = ParticipantLoader::spawn_load(data_file);
    let app = App::new_with_loader(loader, &config_result.config);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== BIBFINDER SESSION ENDED ===");

    Ok(())
}

/// CLI argument, then config, then `runners.json` in the working directory
fn resolve_data_file(arg: Option<PathBuf>, config: &Config) -> PathBuf {
    arg.or_else(|| config.lookup.data_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

/// One-shot lookup: detail text, a blank line, then the filtered table
fn print_query(data_file: &Path, term: &str) -> Result<()> {
    let participants = load_participants(data_file)?;

    let result = lookup(&participants, term);
    for line in DetailPanel::for_result(&result, false).lines() {
        println!("{}", line);
    }
    println!();

    let filter = term.trim().to_lowercase();
    for runner in render_table(&participants, &filter, SortState::default()) {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            runner.bib_text(),
            runner.full_name,
            runner.age_display(),
            runner.category_display(),
            runner.club_display()
        );
    }

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        // Poll before render to pick up the loader result
        app.poll_file_loader();

        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
