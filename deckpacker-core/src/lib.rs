pub mod batch;
pub mod builder;
pub mod collab;
pub mod errors;
pub mod models;
pub mod processor;
pub mod report;
pub mod validate;

pub use batch::*;
pub use builder::*;
pub use collab::*;
pub use errors::*;
pub use models::*;
pub use processor::*;
pub use report::*;
pub use validate::*;
