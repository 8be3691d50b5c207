use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use typeahead::app::App;
use typeahead::autocomplete::SuggestionMatcher;
use typeahead::config::{self, ConfigResult};
use typeahead::suggestions;

/// Interactive type-ahead filter over a fixed suggestion list
#[derive(Parser, Debug)]
#[command(name = "typeahead", version, about)]
struct Args {
    /// Suggestion file: a JSON array of strings (.json) or one suggestion per line
    #[arg(short, long, value_name = "FILE")]
    suggestions: Option<PathBuf>,

    /// Debounce delay in milliseconds (overrides the config file)
    #[arg(short, long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Print the suggestions matching QUERY and exit without starting the UI
    #[arg(short, long, value_name = "QUERY")]
    filter: Option<String>,

    /// Config file to use instead of ~/.config/typeahead/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    init_logging();

    let args = Args::parse();

    let ConfigResult {
        mut config,
        warning,
    } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };
    if let Some(delay_ms) = args.delay_ms {
        config.debounce.delay_ms = delay_ms;
    }

    let suggestions = suggestions::resolve(args.suggestions.as_deref(), &config.list.suggestions)?;

    // Non-interactive mode: filter once and print
    if let Some(query) = &args.filter {
        if let Some(warning) = &warning {
            eprintln!("Warning: {}", warning);
        }
        let mut stdout = io::stdout().lock();
        for matched in SuggestionMatcher::filter(query, &suggestions) {
            writeln!(stdout, "{}", matched)?;
        }
        return Ok(());
    }

    let mut app = App::new(suggestions, &config);
    if let Some(warning) = warning {
        app.set_notice(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture)
        .map_err(color_eyre::Report::from)
        .and_then(|()| run(terminal, &mut app));

    // Restore terminal before printing anything
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result?;

    if let Some(output) = app.output() {
        println!("{}", output);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    let mut needs_redraw = true;

    while !app.should_quit() {
        if needs_redraw {
            terminal.draw(|frame| app.render(frame))?;
            needs_redraw = false;
        }

        // Sleep until the next input or the pending debounce deadline
        if event::poll(app.poll_timeout())? {
            app.handle_event(event::read()?);
            needs_redraw = true;
        }

        if app.tick() {
            needs_redraw = true;
        }
    }

    Ok(())
}

/// Debug builds log to a file; stderr belongs to the terminal UI
#[cfg(debug_assertions)]
fn init_logging() {
    let path = std::env::temp_dir().join("typeahead-debug.log");
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}
