//! movie-gate CLI
//!
//! Age-gated movie picker: interactive TUI, a line-oriented prompt, and
//! one-shot checks for scripting.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use movie_gate::age::evaluate_age;
use movie_gate::catalog::{Catalog, evaluate_choice};
use movie_gate::error::Result;
use movie_gate::form::Form;
use movie_gate::logging::{self, default_log_path};
use movie_gate::prompt::run_prompt;
use movie_gate::report::{format_age, format_catalog, format_choice};
use movie_gate::tui;
use movie_gate::types::{LogConfig, LogDestination, OutputFormat};

#[derive(Parser)]
#[command(name = "movie-gate")]
#[command(about = "Prove you are over 21, then pick a movie")]
#[command(version)]
struct Cli {
    /// Log filter when MOVIE_GATE_LOG is unset (e.g. "info", "movie_gate=debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log file for the interactive TUI (default: data dir/movie-gate/movie-gate.log)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive terminal form (default)
    Tui,

    /// Run the form as a line-by-line prompt on stdin/stdout
    Prompt,

    /// Check an age without starting a session
    CheckAge {
        /// Age text exactly as a user would type it
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Check a movie number without starting a session
    Choose {
        /// Movie number text exactly as a user would type it
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// List the movie catalog
    Movies {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui);

    let log_config = LogConfig {
        default_filter: cli.log_level,
        destination: match command {
            Commands::Tui => LogDestination::File(cli.log_file.unwrap_or_else(default_log_path)),
            _ => LogDestination::Stderr,
        },
    };

    let result = logging::init(&log_config).and_then(|()| match command {
        Commands::Tui => cmd_tui(),
        Commands::Prompt => cmd_prompt(),
        Commands::CheckAge { text, format } => cmd_check_age(&text, format.into()),
        Commands::Choose { text, format } => cmd_choose(&text, format.into()),
        Commands::Movies { format } => cmd_movies(format.into()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui() -> Result<()> {
    if let Some(movie) = tui::run::run(Form::default())? {
        println!("Enjoy {}!", movie.title);
    }
    Ok(())
}

fn cmd_prompt() -> Result<()> {
    let mut form = Form::default();
    let stdin = io::stdin();
    let selected = run_prompt(&mut form, stdin.lock(), io::stdout())?;
    if let Some(movie) = selected {
        println!("Enjoy {}!", movie.title);
    }
    Ok(())
}

fn cmd_check_age(text: &str, format: OutputFormat) -> Result<()> {
    let verdict = evaluate_age(text);
    emit(&format_age(text, &verdict, format)?)
}

fn cmd_choose(text: &str, format: OutputFormat) -> Result<()> {
    let catalog = Catalog::builtin();
    let verdict = evaluate_choice(text, &catalog);
    emit(&format_choice(text, &verdict, &catalog, format)?)
}

fn cmd_movies(format: OutputFormat) -> Result<()> {
    emit(&format_catalog(&Catalog::builtin(), format)?)
}

fn emit(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
