//! UI utilities for terminal output
//!
//! This module provides the progress spinner shown while requests run.

mod spinner;

pub use spinner::{create_spinner, finish_spinner};
