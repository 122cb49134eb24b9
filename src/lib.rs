//! Manifest-driven link and copy tool.
//!
//! Reads a YAML manifest mapping source directories to entry names (or
//! `null` for every entry in the directory) and creates a symbolic link or
//! a copy of each entry in a single destination directory.
//!
//! The public API is organised into these layers:
//!
//! - **[`config`]**: the run [`Config`](config::Config) and manifest loading
//! - **[`resolve`]**: lazy expansion of the manifest into source/destination pairs
//! - **[`resources`]**: destination probing and filesystem primitives
//! - **[`actions`]**: the per-entry gate and link/copy engine
//! - **[`commands`]**: top-level orchestration and exit status
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod resolve;
pub mod resources;
