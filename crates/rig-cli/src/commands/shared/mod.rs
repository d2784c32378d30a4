pub mod build_file;
pub mod parse;
