use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "sortbin",
    version,
    about = "Detect a waste item and recommend the bin it belongs in"
)]
pub(crate) struct Cli {
    #[arg(
        long,
        value_name = "TEXT",
        allow_hyphen_values = true,
        help = "Classify this label instead of a simulated reading"
    )]
    pub label: Option<String>,
    #[arg(
        long,
        value_name = "N",
        conflicts_with = "label",
        help = "Seed the simulated sensor for reproducible readings"
    )]
    pub seed: Option<u64>,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, help = "Print disposal guidance for the recommended bin")]
    pub guidance: bool,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Log more detail to stderr (-v info, -vv debug)"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub(crate) enum Command {
    /// List every label the classifier recognizes and its bin
    Rules,
    /// Describe each bin with typical items
    Bins,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub(crate) fn default_log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
