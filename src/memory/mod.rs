//! Memory module - Manages the ~/.forge_memory/ directory
//!
//! Provides:
//! - Directory and placeholder file creation (store)
//! - The sequenced bootstrap run (bootstrap)

pub mod bootstrap;
pub mod store;
