#![deny(unsafe_code)]

//! Shared test utilities for the soundex workspace.
//!
//! Provides reusable fixtures, config builders, and tracing helpers so that
//! individual crate tests stay concise and consistent.
//!
//! Add this crate as a `[dev-dependency]` in any workspace member:
//!
//! ```toml
//! [dev-dependencies]
//! soundex-test-utils = { workspace = true }
//! ```

pub mod config;
pub mod log_capture;
pub mod tracing_setup;
pub mod wordlist;

pub use config::TestConfigBuilder;
pub use log_capture::LogCapture;
pub use wordlist::TempWordList;
