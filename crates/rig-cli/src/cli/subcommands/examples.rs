use clap::Subcommand;

/// Example-build gallery commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ExamplesCommands {
    /// List gallery builds with their totals.
    List,
    /// Show one gallery build and its summary (numbered from 1).
    Show { number: usize },
}
