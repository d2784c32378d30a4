use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{CatalogCommands, ExamplesCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the compatibility rules against a build file.
    Check(BuildFileArgs),
    /// Totals, power, issues, and export readiness for a build file.
    Summary(BuildFileArgs),
    /// Resolve catalog ids into a build.
    Assemble(AssembleArgs),
    /// Write a build's export document.
    Export(ExportArgs),
    /// Print a share link for a build file.
    Share(BuildFileArgs),
    /// Recover a build from a share link or payload.
    Decode(DecodeArgs),
    /// Performance tier for a budget.
    Tier(TierArgs),
    /// Browse the component catalog.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
    /// Example-build gallery.
    Examples {
        #[command(subcommand)]
        action: ExamplesCommands,
    },
    /// Print a JSON schema, or list schema names.
    Schema(SchemaArgs),
}

/// Arguments for commands that read one build file.
#[derive(Clone, Debug, Args)]
pub struct BuildFileArgs {
    /// Build JSON file
    pub file: PathBuf,
}

/// Arguments for `rig assemble`.
#[derive(Clone, Debug, Args)]
pub struct AssembleArgs {
    /// gaming, content-creation, or office (default from config)
    #[arg(long)]
    pub use_case: Option<String>,
    /// Budget ceiling (default from config)
    #[arg(long)]
    pub budget: Option<f64>,
    #[arg(long)]
    pub cpu: Option<String>,
    #[arg(long)]
    pub motherboard: Option<String>,
    #[arg(long)]
    pub ram: Option<String>,
    #[arg(long)]
    pub gpu: Option<String>,
    #[arg(long)]
    pub storage: Option<String>,
    #[arg(long)]
    pub psu: Option<String>,
    #[arg(long)]
    pub case: Option<String>,
}

/// Arguments for `rig export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    pub file: PathBuf,
    /// Directory for the export document (defaults to the current directory)
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Arguments for `rig decode`.
#[derive(Clone, Debug, Args)]
pub struct DecodeArgs {
    /// Share link, or just its `build` payload
    pub link: String,
}

/// Arguments for `rig tier`.
#[derive(Clone, Debug, Args)]
pub struct TierArgs {
    #[arg(allow_hyphen_values = true)]
    pub budget: f64,
}

/// Arguments for `rig schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub name: Option<String>,
}
