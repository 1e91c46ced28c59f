//! Plain-text rendering of option tables

use super::registry::OptionsRegistry;
use super::store::OptionMap;
use crate::comm::{Communicator, should_print};
use std::io::{self, Write};

const MIN_WIDTH: usize = 40;

/// Render `options` under a boxed `title`, one `name : value` row per option.
///
/// Names are padded to the widest name so the values line up.
pub fn render_options(title: &str, options: &OptionMap) -> String {
    let width = MIN_WIDTH.max(title.chars().count() + 4);
    let rule = format!("+{}+", "-".repeat(width - 2));
    let name_width = options.names().map(|n| n.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!("| {:<inner$} |\n", title, inner = width - 4));
    out.push_str(&rule);
    out.push('\n');

    if options.is_empty() {
        out.push_str("  (none)\n");
    }
    for (name, value) in options.iter() {
        out.push_str(&format!("  {:<name_width$} : {}\n", name, value));
    }
    out
}

impl OptionsRegistry {
    /// Write the full option table to `out`.
    ///
    /// Returns whether anything was written; ranks other than zero write nothing.
    pub fn write_options<W: Write>(
        &self,
        title: &str,
        comm: Option<&dyn Communicator>,
        out: &mut W,
    ) -> io::Result<bool> {
        write_gated(&render_options(title, self.get_options()), comm, out)
    }

    /// Write only the options that differ from their defaults
    pub fn write_modified_options<W: Write>(
        &self,
        title: &str,
        comm: Option<&dyn Communicator>,
        out: &mut W,
    ) -> io::Result<bool> {
        write_gated(&render_options(title, &self.get_modified_options()), comm, out)
    }

    /// Print the full option table to stdout
    pub fn print_options(&self, title: &str, comm: Option<&dyn Communicator>) -> io::Result<()> {
        self.write_options(title, comm, &mut io::stdout().lock())
            .map(|_| ())
    }

    /// Print modified options to stdout
    pub fn print_modified_options(&self, title: &str, comm: Option<&dyn Communicator>) -> io::Result<()> {
        self.write_modified_options(title, comm, &mut io::stdout().lock())
            .map(|_| ())
    }
}

fn write_gated<W: Write>(text: &str, comm: Option<&dyn Communicator>, out: &mut W) -> io::Result<bool> {
    if !should_print(comm) {
        return Ok(false);
    }
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(true)
}
