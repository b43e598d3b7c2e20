// Rust guideline compliant 2026-10-18

//! Orderboard CLI Application
//!
//! Command-line host for the Orderboard restaurant order board.

use clap::Parser;
use orderboard_cli::commands::{self, replay::HostKind, Workspace};
use orderboard_cli::{create_formatter, logging, should_use_color, OutputFormatter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "obd",
    version,
    about = "Orderboard: a three-column restaurant order board",
    long_about = "Orderboard tracks restaurant orders across the Ordered, Ready and Served columns. Orders are stored as JSONL under .orderboard/ and move between columns by drag-and-drop events or direct commands.",
    after_help = "Examples:\n  obd init\n  obd add \"2x Soup\" --table 5\n  obd move ord-1a2b3c Ready\n  obd edit ord-1a2b3c --table 7\n  obd board\n  obd replay gestures.json --host layout\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level written to stderr
    #[arg(long, global = true, value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: Option<String>,

    /// Directory containing .orderboard (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

impl From<OutputFormat> for orderboard_core::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json,
            OutputFormat::Table => Self::Table,
            OutputFormat::Plain => Self::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new board
    Init,

    #[command(flatten)]
    Board(BoardCommand),
}

/// Commands that run against an initialized board.
#[derive(Debug, clap::Subcommand)]
enum BoardCommand {
    /// Add an order
    Add {
        /// What was ordered
        text: String,

        /// Table label
        #[arg(long)]
        table: String,

        /// Starting column (defaults to Ordered)
        #[arg(long)]
        status: Option<String>,
    },

    /// Edit an order, keeping unspecified fields
    Edit {
        /// Order ID
        id: String,

        /// New text
        #[arg(long)]
        text: Option<String>,

        /// New table label
        #[arg(long)]
        table: Option<String>,

        /// New column
        #[arg(long)]
        status: Option<String>,
    },

    /// Move an order to a column
    Move {
        /// Order ID
        id: String,

        /// Target column (Ordered, Ready, Served)
        column: String,
    },

    /// Delete an order
    Delete {
        /// Order ID
        id: String,
    },

    /// Show the board
    Board,

    /// Replay a JSON file of board events
    Replay {
        /// Path to the event file
        file: PathBuf,

        /// How event targets are interpreted
        #[arg(long, value_enum, default_value_t = HostKind::Layout)]
        host: HostKind,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let requested = match (cli.format, cli.json) {
        (Some(format), _) => Some(orderboard_core::OutputFormat::from(format)),
        (None, true) => Some(orderboard_core::OutputFormat::Json),
        (None, false) => None,
    };
    let mut format = requested.unwrap_or_default();
    let mut formatter = create_formatter(format, use_color);

    let result = (|| -> anyhow::Result<()> {
        let Some(command) = cli.command else {
            println!("Use --help for usage information");
            return Ok(());
        };
        let root = cli.root.as_deref();

        let command = match command {
            Commands::Init => {
                logging::init(cli.log_level.as_deref().unwrap_or("warn"))?;
                return commands::init::execute(root, formatter.as_ref());
            }
            Commands::Board(command) => command,
        };

        let workspace = Workspace::open(root)?;
        logging::init(
            cli.log_level
                .as_deref()
                .unwrap_or(workspace.config.log_level.as_str()),
        )?;
        if requested.is_none() && workspace.config.output_format != format {
            format = workspace.config.output_format;
            formatter = create_formatter(format, use_color);
        }

        dispatch(command, &workspace, formatter.as_ref())
    })();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = formatter.format_error(&e);
            if format == orderboard_core::OutputFormat::Json {
                println!("{}", message);
            } else {
                eprintln!("{}", message);
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(
    command: BoardCommand,
    workspace: &Workspace,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<()> {
    match command {
        BoardCommand::Add {
            text,
            table,
            status,
        } => {
            commands::add::execute(workspace, text, table, status, formatter)?;
        }
        BoardCommand::Edit {
            id,
            text,
            table,
            status,
        } => {
            commands::edit::execute(workspace, id, text, table, status, formatter)?;
        }
        BoardCommand::Move { id, column } => {
            commands::move_order::execute(workspace, id, column, formatter)?;
        }
        BoardCommand::Delete { id } => {
            commands::delete::execute(workspace, id, formatter)?;
        }
        BoardCommand::Board => {
            commands::board::execute(workspace, formatter)?;
        }
        BoardCommand::Replay { file, host } => {
            commands::replay::execute(workspace, &file, host, formatter)?;
        }
    }

    Ok(())
}
