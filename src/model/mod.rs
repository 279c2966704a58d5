pub mod catalog;
pub mod config;
pub mod opening;
pub mod tree;

pub use catalog::*;
pub use config::*;
pub use opening::*;
pub use tree::*;
