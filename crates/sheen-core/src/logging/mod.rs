//! Logging bootstrap.
//!
//! The library itself only emits through the `log` facade; this module is
//! the optional `env_logger` wiring for binaries that want output without
//! their own logger setup.

mod init;

pub use init::{init_logging, LoggingConfig};
