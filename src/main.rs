use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

mod app;
mod constants;
mod domain;
mod event;
mod formatter;
mod handler;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::{
    app::App,
    constants::TICK_RATE,
    domain::{AmountCents, AmountError, Locale},
    formatter::AmountFormatter,
    handler::handle_event,
    state::{AppConfig, BlurStrategy, FieldConfig},
    tui::Tui,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file written inside the config directory.
const LOG_FILE: &str = "money-input.log";

/// Money Input - type amounts, get cents
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Subcommand to run instead of the interactive form
    #[command(subcommand)]
    command: Option<Commands>,

    /// BCP-47 locale for decimal separator and symbol placement (e.g. de-DE)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Where the cents computed on blur are written
    #[arg(short, long, value_enum, global = true)]
    blur_strategy: Option<BlurStrategy>,

    /// Field labels, replacing the configured fields (repeatable)
    #[arg(long = "label")]
    labels: Vec<String>,

    /// Render every field read-only
    #[arg(long)]
    disabled: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Format an amount given in cents
    Format {
        /// Amount in minor units
        cents: u64,
    },
    /// Convert displayed text back into cents
    Parse {
        /// Text as shown in a field, e.g. "10,50 €"
        text: String,
    },
    /// Run one field edit and print raw digits, display and validity as JSON
    Edit {
        /// Full field text after the keystroke
        text: String,
    },
    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_logging();

    let cli = Cli::parse();
    let config = effective_config(&cli);

    if let Some(command) = &cli.command {
        return run_command(command, &config);
    }

    tracing::info!(
        locale = %config.locale,
        strategy = config.blur_strategy.as_str(),
        fields = config.fields.len(),
        "Starting money input"
    );

    let mut terminal = tui::init()?;
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app);
    tui::restore()?;
    result
}

/// Route `tracing` output to a log file so it never draws over the TUI.
///
/// Logging stays off when the file cannot be opened.
fn init_logging() {
    let file = AppConfig::config_dir().and_then(|dir| {
        Ok(OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))?)
    });

    if let Ok(file) = file {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("money_input=info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
}

/// Stored configuration with command line overrides applied.
fn effective_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::load();

    if let Some(tag) = &cli.locale {
        config.locale = Locale::resolve(tag);
    }
    if let Some(strategy) = cli.blur_strategy {
        config.blur_strategy = strategy;
    }
    if !cli.labels.is_empty() {
        config.fields = cli.labels.iter().map(FieldConfig::new).collect();
    }
    if cli.disabled {
        for field in &mut config.fields {
            field.disabled = true;
        }
    }
    config
}

/// Handles CLI subcommands that convert values without opening the TUI.
fn run_command(command: &Commands, config: &AppConfig) -> Result<()> {
    let formatter = AmountFormatter::new(config.locale.clone());

    match command {
        Commands::Format { cents } => {
            println!("{}", formatter.format_currency(AmountCents::from(*cents)));
        }
        Commands::Parse { text } => {
            let cents = formatter
                .parse_display_to_cents(text)
                .map_err(AmountError::into_report)?;
            println!("{cents}");
        }
        Commands::Edit { text } => {
            let outcome = formatter
                .on_user_edit(text)
                .map_err(AmountError::into_report)?;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        Commands::Config { save } => {
            if *save {
                let path = config.save()?;
                println!("Saved configuration to {}", path.display());
            }
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }
    Ok(())
}

/// Main application loop.
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.exit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if crossterm::event::poll(TICK_RATE)? {
            let event = crossterm::event::read()?;
            if let Some(action) = handle_event(event) {
                tracing::trace!(?action, "Dispatching action");
                app.update(action);
            }
        }
    }

    for (field, committed) in app.fields.iter().zip(&app.committed) {
        if let Some(cents) = committed {
            tracing::info!(label = field.label(), %cents, "Final amount");
        }
    }
    Ok(())
}
