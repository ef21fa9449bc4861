pub mod app;
pub mod cli;
mod error;
pub mod report;

pub use error::Error;
