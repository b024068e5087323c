//! Variable library table formatter

use std::io::{self, Write};

use comfy_table::{presets::ASCII_FULL_CONDENSED, Table};

use crate::azdo::VariableLibrary;
use crate::error::Result;

/// Render libraries as a bordered `Name | ID` table, in the given order
pub fn render_variable_libraries(libraries: &[VariableLibrary]) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .set_header(vec!["Name", "ID"]);

    for library in libraries {
        table.add_row(vec![library.name.clone(), library.id.to_string()]);
    }

    table.to_string()
}

/// Print the libraries table to stdout
pub fn output_variable_libraries(libraries: &[VariableLibrary]) -> Result<()> {
    write_variable_libraries(&mut io::stdout().lock(), libraries)
}

/// Write the libraries table to `out`.
///
/// A closed reader (`| head -1`) ends output quietly instead of failing.
pub fn write_variable_libraries<W: Write>(
    out: &mut W,
    libraries: &[VariableLibrary],
) -> Result<()> {
    let table = render_variable_libraries(libraries);
    match writeln!(out, "{}", table).and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}
