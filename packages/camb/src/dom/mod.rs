//! HTML utilities for loading documents and navigating element trees.

mod utils;

pub use utils::*;
