mod catalog;
mod examples;

pub use catalog::CatalogCommands;
pub use examples::ExamplesCommands;
