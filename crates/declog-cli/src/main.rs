mod commands;
mod config;
mod input;

use clap::{Parser, Subcommand};
use config::LogFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "declog", about = "Personal decision journal", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Directory containing the journal (defaults to searching upward from cwd)
    #[arg(long, global = true, env = config::DIR_ENV)]
    dir: Option<PathBuf>,

    /// Log output format (filter with DECLOG_LOG)
    #[arg(long, global = true, value_enum, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new journal
    Init,

    /// Record a new decision
    Add {
        /// Short title of the decision
        #[arg(short, long)]
        title: String,

        /// Why the decision is being made
        #[arg(short, long)]
        context: String,

        /// Options considered (repeatable, format: "name|pro;pro|con;con")
        #[arg(long = "option")]
        options: Vec<String>,

        /// Name of the chosen option
        #[arg(long)]
        chosen: String,

        /// Decision date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List decisions, most recent first
    List {
        /// Only show decisions with this status (all, pending, executed, evaluated)
        #[arg(long, default_value = "all")]
        status: String,
    },

    /// Show a decision in full
    Show {
        /// Decision ID
        id: String,
    },

    /// Edit fields of an existing decision
    Edit {
        /// Decision ID
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        context: Option<String>,

        /// Replacement options (repeatable, format: "name|pro;pro|con;con")
        #[arg(long = "option")]
        options: Vec<String>,

        #[arg(long)]
        chosen: Option<String>,

        #[arg(long)]
        date: Option<String>,
    },

    /// Delete a decision
    Delete {
        /// Decision ID
        id: String,
    },

    /// Mark a pending decision as executed
    Execute {
        /// Decision ID
        id: String,
    },

    /// Record the outcome of an executed decision
    Evaluate {
        /// Decision ID
        id: String,

        /// Outcome (positive, negative, neutral)
        #[arg(long)]
        result: String,

        /// What was learned
        #[arg(long)]
        learnings: String,
    },

    /// Show counts per status
    Stats,

    /// Remove every decision from the journal
    Clear {
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = config::init_tracing(cli.log_format) {
        eprintln!("warning: {}", e);
    }

    let dir = cli.dir;
    let json = cli.json;
    let result = match cli.command {
        Commands::Init => commands::init::run(dir),
        Commands::Add {
            title,
            context,
            options,
            chosen,
            date,
        } => commands::add::run(dir, title, context, options, chosen, date, json),
        Commands::List { status } => commands::list::run(dir, status, json),
        Commands::Show { id } => commands::show::run(dir, id, json),
        Commands::Edit {
            id,
            title,
            context,
            options,
            chosen,
            date,
        } => commands::edit::run(dir, id, title, context, options, chosen, date, json),
        Commands::Delete { id } => commands::lifecycle::delete(dir, id),
        Commands::Execute { id } => commands::lifecycle::execute(dir, id),
        Commands::Evaluate {
            id,
            result,
            learnings,
        } => commands::lifecycle::evaluate(dir, id, result, learnings),
        Commands::Stats => commands::stats::run(dir, json),
        Commands::Clear { yes } => commands::clear::run(dir, yes),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
