//! Message handlers organized by feature domain
//!
//! Each sub-module provides handler methods on AdminApp.

pub mod overlay;
pub mod records;
pub mod theme;
