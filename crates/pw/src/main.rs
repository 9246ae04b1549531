mod config;
mod render;

use clap::{Args, Parser, Subcommand};
use config::Config;
use pw_core::classify::classify;
use pw_core::query::{ActivityFilter, FieldFilter};
use pw_core::{PaywatchError, Supervisor, import, seed};
use pw_events::store::ActivityStore;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pw", about = "Query the payroll supervision activity log")]
struct Cli {
    /// JSON activity file (overrides PAYWATCH_ACTIVITY_PATH)
    #[arg(long, global = true)]
    file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List activities matching all given filters
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long)]
        json: bool,
    },
    /// Agents in the order they first appear
    Agents {
        #[arg(long)]
        json: bool,
    },
    /// Display category for a status value
    Classify {
        status: String,
        #[arg(long)]
        json: bool,
    },
    /// Per-status counts of matching activities
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive search over description, agent and employee name
    #[arg(long, default_value = "")]
    text: String,
    /// Exact agent name, or "all"
    #[arg(long, default_value = FieldFilter::ALL_SENTINEL)]
    agent: FieldFilter,
    /// success, error, warning, info, or "all"
    #[arg(long, default_value = FieldFilter::ALL_SENTINEL)]
    status: FieldFilter,
}

impl From<FilterArgs> for ActivityFilter {
    fn from(args: FilterArgs) -> Self {
        ActivityFilter::new(args.text, args.agent, args.status)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env().with_activity_path(cli.file.clone());

    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pw: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> Result<(), PaywatchError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::List { filter, json } => {
            let supervisor = open_supervisor(config)?;
            let records = supervisor.activity().query(&filter.into());
            if json {
                write_json(&mut out, &records)?;
            } else {
                render::write_records(&mut out, &records).map_err(io_error)?;
            }
        }
        Command::Agents { json } => {
            let supervisor = open_supervisor(config)?;
            let agents = supervisor.activity().agents();
            if json {
                write_json(&mut out, &agents)?;
            } else {
                render::write_agents(&mut out, &agents).map_err(io_error)?;
            }
        }
        Command::Classify { status, json } => {
            let category = classify(&status);
            if json {
                write_json(&mut out, &category)?;
            } else {
                writeln!(out, "{}", render::category_line(category)).map_err(io_error)?;
            }
        }
        Command::Summary { filter, json } => {
            let supervisor = open_supervisor(config)?;
            let summary = supervisor.activity().summary(&filter.into());
            if json {
                write_json(&mut out, &summary)?;
            } else {
                render::write_summary(&mut out, &summary).map_err(io_error)?;
            }
        }
    }
    Ok(())
}

fn open_supervisor(config: &Config) -> Result<Supervisor<ActivityStore>, PaywatchError> {
    let store = match &config.activity_path {
        Some(path) => ActivityStore::from_records(import::load_activity_file(path)?)?,
        None => seed::activity_log()?,
    };
    tracing::debug!(records = store.len(), "activity log opened");
    Ok(Supervisor::new(store))
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> Result<(), PaywatchError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(|err| PaywatchError::Internal {
        message: err.to_string(),
    })?;
    writeln!(out).map_err(io_error)
}

fn io_error(err: std::io::Error) -> PaywatchError {
    PaywatchError::Internal {
        message: err.to_string(),
    }
}
