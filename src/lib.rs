pub mod discovery;
pub mod error;
pub mod logging;
pub mod model;

pub use discovery::discover;
pub use error::Result;
