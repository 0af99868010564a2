//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Element text helpers

mod selector;
mod text;

pub use selector::{attribute_selector, parse_selector_unsafe};
pub use text::{element_text, truncate_chars};
