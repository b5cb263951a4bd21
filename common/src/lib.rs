pub mod analytics;
pub mod config;
pub mod dismissal;
mod error;
pub mod gate;
pub mod site;

pub use error::{Error, Result};
