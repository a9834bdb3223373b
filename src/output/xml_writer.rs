//! XML rendering of a derived field list

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

use crate::DerivedFieldList;

/// Write `list` as a `<FieldList>` document.
///
/// Generates:
/// ```xml
/// <FieldList Entity="User" View="List">
///   <Field Name="ID" DataType="Int32" Stored="True" />
/// </FieldList>
/// ```
pub fn write_field_list_xml<W: Write>(writer: W, list: &DerivedFieldList) -> anyhow::Result<()> {
    let mut xml_writer = Writer::new_with_indent(writer, b' ', 2);
    xml_writer
        .config_mut()
        .add_space_before_slash_in_empty_elements = true;

    xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let root = BytesStart::new("FieldList").with_attributes([
        ("Entity", list.entity.as_str()),
        ("View", list.view.label()),
    ]);
    xml_writer.write_event(Event::Start(root))?;

    for field in &list.fields {
        let length = field.max_length.map(|len| len.to_string());
        let mut elem = BytesStart::new("Field");
        elem.push_attribute(("Name", field.name.as_str()));
        elem.push_attribute(("DataType", field.data_type.name()));
        if let Some(ref length) = length {
            elem.push_attribute(("Length", length.as_str()));
        }
        elem.push_attribute(("Stored", if field.is_stored { "True" } else { "False" }));
        if let Some(ref display_name) = field.display_name {
            elem.push_attribute(("DisplayName", display_name.as_str()));
        }
        xml_writer.write_event(Event::Empty(elem))?;
    }

    xml_writer.write_event(Event::End(BytesEnd::new("FieldList")))?;
    Ok(())
}
