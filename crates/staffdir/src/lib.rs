//! `staffdir` - An in-memory employee directory
//!
//! This library provides the employee record store with its search, filter,
//! sort and aggregate queries, together with the session, shell and
//! rendering layers behind the `staffdir` command-line tool.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod directory;
pub mod employee;
pub mod error;
pub mod logging;
pub mod render;
pub mod seed;
pub mod session;
pub mod shell;
pub mod update;

pub use config::Config;
pub use directory::{Directory, DirectoryStats, SharedDirectory};
pub use employee::Employee;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use render::{OutputFormat, Renderer};
pub use session::{Outcome, Session};
pub use shell::Shell;
pub use update::{EmployeeUpdate, Field};
