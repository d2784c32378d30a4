use clap::Subcommand;

/// Catalog browsing commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// List components in one category (cpu, motherboard, ram, gpu, storage, psu, case).
    List { category: String },
    /// Get a component by ID.
    Get { id: String },
}
