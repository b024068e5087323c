//! Output formatting module
//!
//! Sorting and table rendering for variable libraries.

mod variable_groups;

use crate::azdo::VariableLibrary;

pub use self::variable_groups::{
    output_variable_libraries, render_variable_libraries, write_variable_libraries,
};

/// Sort libraries by name, ascending byte order.
///
/// The sort is stable: libraries sharing a name keep their response order.
pub fn sort_by_name(libraries: &mut [VariableLibrary]) {
    libraries.sort_by(|a, b| a.name.cmp(&b.name));
}
