//! Core module - Shared types and helpers for the bootstrapper
//!
//! This module provides:
//! - Fixed memory directory layout (paths)
//! - Home directory resolution (config)
//! - Error taxonomy
//! - Bootstrap outcome model
//! - Progress line rendering

pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod render;
