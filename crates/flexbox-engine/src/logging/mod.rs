//! Logging utilities.
//!
//! Library code in this workspace only talks to the `log` facade. Binaries
//! and tests install the `env_logger` backend through [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
pub use log::LevelFilter;
