//! Logging utilities.
//!
//! The engine logs through the `log` facade only. This module offers a
//! one-call `env_logger` setup for binaries that do not bring their own.

mod init;

pub use init::{LoggingConfig, init_logging};
