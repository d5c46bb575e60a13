pub mod config;
pub mod error;
pub mod git;
pub mod project;
pub mod release;
pub mod ui;
pub mod version;

pub use error::{ReleaseError, Result};
