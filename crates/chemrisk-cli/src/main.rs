mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chemrisk",
    version,
    about = "Hazard analysis for chemical substance lists (explosion, gas formation, GHS classification)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a substance list (JSON) against the hazard rule tables
    Analyze {
        /// Path to a JSON substance list (array or {"substances": [...]})
        input_file: PathBuf,

        /// Custom JSON rule file overriding one or more builtin tables
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Require two distinct substances for mixture/gas-reaction rules
        #[arg(long)]
        distinct_reactants: bool,

        /// Show per-substance classification details
        #[arg(long)]
        verbose: bool,
    },
    /// Manage and inspect rule tables
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List the builtin rule tables
    List,
    /// Explain one rule table in plain language
    Explain {
        /// Table name: explosion, gas, or classification
        table: String,
    },
    /// Print the JSON schema of a custom rule file with an example
    Schema,
    /// Validate a custom rule file
    Validate {
        /// Path to JSON rule file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input_file,
            rules,
            output,
            distinct_reactants,
            verbose,
        } => commands::analyze::run(input_file, rules, &output, distinct_reactants, verbose),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Explain { table } => commands::rules::explain(&table),
            RulesAction::Schema => commands::rules::schema(),
            RulesAction::Validate { file } => commands::rules::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
