//! Renders on a writer what ccrun hands back to the user

use std::io::Write;

use color_eyre::{eyre::Context, Result};

use crate::{catalog, project_model::compiler::Language, utils::constants::error_messages};

/// Writes the compatibility table of `language`, one compiler per line
pub fn write_catalog<W: Write>(out: &mut W, language: Language) -> Result<()> {
    writeln!(out, "[{language}]")?;
    for entry in catalog::entries(language) {
        write!(out, "  {:<10} {}", entry.name, entry.standards.join(" "))?;

        if let Some(flag) = entry.stdlib_flag {
            write!(out, "  (stdlib: {flag})")?;
        }

        let libs = entry
            .additional_libs
            .iter()
            .map(|(std, libs)| format!("{std}: {libs}"))
            .collect::<Vec<_>>();
        if !libs.is_empty() {
            write!(out, "  [{}]", libs.join(", "))?;
        }

        writeln!(out)?;
    }

    Ok(())
}

/// Writes `text` verbatim, making sure that the output ends with a newline
pub fn write_text<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| {
            if text.is_empty() || text.ends_with('\n') {
                Ok(())
            } else {
                writeln!(out)
            }
        })
        .with_context(|| error_messages::WRITE_OUTPUT)
}
