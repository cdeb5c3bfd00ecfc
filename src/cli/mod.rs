//! Workflow wiring between command-line arguments and the library.

pub mod orchestration;

pub use orchestration::{run_compose, ComposeArgs};
