// crates/core/src/language/processors/mod.rs
pub mod c_style;
pub mod simple_hash_style;

pub use c_style::CStyleProcessor;
pub use simple_hash_style::SimpleHashProcessor;
