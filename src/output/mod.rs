//! Rendering of derived field lists

mod xml_writer;

pub use xml_writer::write_field_list_xml;

use std::io::Write;

use crate::{DerivedFieldList, OutputFormat};

/// Write one tab-separated line per field:
/// name, data type, length (`-` when unset), storage kind, display name
pub fn render_text<W: Write>(mut writer: W, list: &DerivedFieldList) -> std::io::Result<()> {
    for field in &list.fields {
        let length = field
            .max_length
            .map(|len| len.to_string())
            .unwrap_or_else(|| "-".to_string());
        let kind = if field.is_stored { "stored" } else { "extended" };
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            field.name,
            field.data_type,
            length,
            kind,
            field.display_name.as_deref().unwrap_or("")
        )?;
    }
    Ok(())
}

/// Render `list` in the requested format
pub fn render<W: Write>(
    writer: W,
    list: &DerivedFieldList,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => render_text(writer, list)?,
        OutputFormat::Xml => write_field_list_xml(writer, list)?,
    }
    Ok(())
}
