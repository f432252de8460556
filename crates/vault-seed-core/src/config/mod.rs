//! Configuration tree and provider abstractions
//!
//! `Config` is the hierarchical view the seeder reads partitions from.
//! Providers produce a `Config` from some source:
//! - `MemoryConfigProvider`: In-memory for testing
//! - `FileConfigProvider`: Properties, YAML or JSON file
//! - `EnvConfigProvider`: Environment variables
//! - `LayeredConfigProvider`: Ordered merge of other providers

mod tree;
mod traits;
mod memory;
mod file;
mod env;
mod layered;

pub use tree::Config;
pub use traits::{ConfigProvider, ConfigError, ConfigResult};
pub use memory::MemoryConfigProvider;
pub use file::{
    FileConfigProvider, FileFormat, parse_properties,
    CONFIG_FILE_ENV_VAR, DEFAULT_CONFIG_FILE,
};
pub use env::EnvConfigProvider;
pub use layered::LayeredConfigProvider;
