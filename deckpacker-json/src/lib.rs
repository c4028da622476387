pub mod config;
pub mod sink;
pub mod source;

pub use config::*;
pub use sink::*;
pub use source::*;
