//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Pattern Runner,
//! namely file system operations and i18n support.
//!
//! 此模块为 Pattern Runner 提供基础设施服务，
//! 即文件系统操作和国际化支持。

pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
