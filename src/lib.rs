pub mod collections;
pub mod config;
pub mod env;
pub mod error;
pub mod module;
pub mod path;
pub mod platform;
pub mod process;
pub mod ui;
pub mod version;

pub use error::{Result, ToolUtilError};
