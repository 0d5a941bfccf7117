pub mod models;
pub mod probe;

pub use models::*;
pub use probe::*;
