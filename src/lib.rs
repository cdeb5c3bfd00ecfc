pub mod cli;
pub mod clock;
pub mod compose;
pub mod config;
pub mod error;
pub mod manifest;
pub mod ui;
pub mod version;

pub use error::{Result, ServiceVersionError};
