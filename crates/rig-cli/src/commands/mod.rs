pub mod assemble;
pub mod catalog;
pub mod check;
pub mod decode;
pub mod dispatch;
pub mod examples;
pub mod export;
pub mod schema;
pub mod share;
pub mod shared;
pub mod summary;
pub mod tier;
