//! pgstamp - print SQL for timestamp-maintaining triggers
//!
//! Every subcommand writes generated SQL to stdout (or `--output`) and
//! never touches a database.

mod logging;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use pgstamp_core::{
    DEFAULT_RETURN_TYPE, DEFAULT_TRIGGER_EVENTS, StampPlan, TimestampKind, TimestampTrigger,
    TriggerEvent, create_function_sql, create_trigger_sql,
};

#[derive(Debug, Parser)]
#[command(name = "pgstamp", version, about = "Generate PostgreSQL timestamp trigger DDL")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write SQL to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a timestamp function and trigger
    Create(StampArgs),
    /// Drop a timestamp trigger and its function
    Drop(StampArgs),
    /// Create a standalone stored function
    Function {
        /// Function name
        #[arg(long)]
        name: String,
        /// File holding the PL/pgSQL body
        #[arg(long)]
        definition_file: PathBuf,
        /// Return type
        #[arg(long, default_value = DEFAULT_RETURN_TYPE)]
        returns: String,
    },
    /// Create a standalone BEFORE trigger
    Trigger {
        /// Table the trigger is attached to
        #[arg(long)]
        table: String,
        /// Trigger name
        #[arg(long)]
        name: String,
        /// Function to execute (defaults to the trigger name)
        #[arg(long)]
        function: Option<String>,
        /// Comma-separated firing events
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_TRIGGER_EVENTS.to_vec())]
        events: Vec<TriggerEvent>,
    },
    /// Render every trigger declared in a plan file
    Plan {
        /// Plan file (.toml or .json)
        #[arg(env = "PGSTAMP_PLAN")]
        path: PathBuf,
        /// Emit teardown SQL instead
        #[arg(long)]
        drop: bool,
    },
}

#[derive(Debug, Args)]
struct StampArgs {
    /// Table holding the timestamp column
    #[arg(long)]
    table: String,
    /// Timestamp column (defaults to `created` or `modified`)
    #[arg(long)]
    column: Option<String>,
    /// Which moment the column records
    #[arg(long, value_enum, default_value_t = KindArg::Modification)]
    kind: KindArg,
}

impl StampArgs {
    fn trigger(&self) -> TimestampTrigger {
        let trigger = TimestampTrigger::new(self.table.as_str(), self.kind.into());
        match &self.column {
            Some(column) => trigger.with_column(column.as_str()),
            None => trigger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Creation,
    Modification,
}

impl From<KindArg> for TimestampKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Creation => TimestampKind::Creation,
            KindArg::Modification => TimestampKind::Modification,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::LoggingConfig::from_verbosity(cli.verbose))?;

    let sql = render(&cli.command)?;
    emit(&sql, cli.output.as_deref())
}

fn render(command: &Command) -> Result<String> {
    let sql = match command {
        Command::Create(args) => {
            let trigger = args.trigger();
            tracing::info!(
                name = %trigger.name(),
                kind = %trigger.kind(),
                "creating timestamp trigger"
            );
            trigger.create_sql()
        }
        Command::Drop(args) => {
            let trigger = args.trigger();
            tracing::info!(
                name = %trigger.name(),
                kind = %trigger.kind(),
                "dropping timestamp trigger"
            );
            trigger.drop_sql()
        }
        Command::Function {
            name,
            definition_file,
            returns,
        } => {
            let definition = std::fs::read_to_string(definition_file).with_context(|| {
                format!("Failed to read definition file: {:?}", definition_file)
            })?;
            create_function_sql(name, &definition, returns)
        }
        Command::Trigger {
            table,
            name,
            function,
            events,
        } => create_trigger_sql(table, name, function.as_deref().unwrap_or(name), events),
        Command::Plan { path, drop } => {
            let plan = StampPlan::load(path)
                .with_context(|| format!("Failed to load plan: {:?}", path))?;
            if *drop { plan.drop_sql() } else { plan.create_sql() }
        }
    };
    Ok(sql)
}

fn emit(sql: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", sql))
                .with_context(|| format!("Failed to write output: {:?}", path))?;
            tracing::info!(path = %path.display(), bytes = sql.len(), "wrote SQL");
        }
        None => println!("{}", sql),
    }
    Ok(())
}
