//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types and the local transform
//! - Arena handles for scene nodes
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod logging;
