//! Assessor XML emitter.
//!
//! The document is driven by the mapping table, not by the measure set, so
//! model and stat order is always the declared table order:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <radiomics:RadiomicsAssessor ID=".." label=".." project=".." xmlns:..>
//!   <xnat:imageSession_ID>S1</xnat:imageSession_ID>
//!   <radiomics:generalInfo>
//!     <radiomics:scanId>3</radiomics:scanId>
//!     ...
//!   </radiomics:generalInfo>
//!   <radiomics:firstorder>...</radiomics:firstorder>
//! </radiomics:RadiomicsAssessor>
//! ```

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

use crate::error::XmlResult;
use crate::mapping::{self, MappingEntry};
use crate::models::{AssessorInfo, MeasureSet};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

pub const RADIOMICS_PREFIX: &str = "radiomics";
pub const RADIOMICS_NS: &str = "http://github.com/radiomics";
pub const XNAT_NS: &str = "http://nrg.wustl.edu/xnat";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

const ROOT_ELEMENT: &str = "radiomics:RadiomicsAssessor";
const SESSION_ELEMENT: &str = "xnat:imageSession_ID";
const RADIOMICS_SCHEMA_PATH: &str = "xapi/schemas/radiomics/radiomics.xsd";
const XNAT_SCHEMA_PATH: &str = "xapi/schemas/xnat/xnat.xsd";

/// `xsi:schemaLocation` value for the given assessor.
pub fn schema_location(info: &AssessorInfo) -> String {
    let host = info.host();
    format!(
        "{} {}/{} {} {}/{}",
        RADIOMICS_NS, host, RADIOMICS_SCHEMA_PATH, XNAT_NS, host, XNAT_SCHEMA_PATH
    )
}

/// Build the complete assessor document.
pub fn build_assessor_xml(info: &AssessorInfo, measures: &MeasureSet) -> XmlResult<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let id = info.assessor_id();
    let label = info.assessor_label();
    let location = schema_location(info);
    let attrs = [
        ("xmlns:radiomics", RADIOMICS_NS),
        ("xmlns:xnat", XNAT_NS),
        ("xmlns:xsi", XSI_NS),
        ("xsi:schemaLocation", location.as_str()),
        ("ID", id.as_str()),
        ("label", label.as_str()),
        ("project", info.project.as_str()),
    ];
    write_tag_start_with_attrs(&mut writer, ROOT_ELEMENT, &attrs)?;

    write_tag(&mut writer, SESSION_ELEMENT, &info.session_id)?;

    for entry in mapping::entries() {
        write_model(&mut writer, entry, measures)?;
    }

    write_tag_end(&mut writer, ROOT_ELEMENT)?;

    let bytes = writer.into_inner().into_inner();
    Ok(String::from_utf8(bytes)?)
}

/// One model element with its present stats, or nothing if none are present.
fn write_model(writer: &mut XmlWriter, entry: &MappingEntry, measures: &MeasureSet) -> XmlResult<()> {
    if !measures.has_values(entry.output_model) {
        return Ok(());
    }

    let model_tag = qualified(entry.output_model);
    write_tag_start(writer, &model_tag)?;

    for stat in entry.output_stats() {
        let Some(value) = measures.get(entry.output_model, stat) else {
            continue;
        };
        let stat_tag = qualified(stat);
        if mapping::is_raw_text_stat(stat) {
            write_tag_cdata(writer, &stat_tag, value)?;
        } else {
            write_tag(writer, &stat_tag, value)?;
        }
    }

    write_tag_end(writer, &model_tag)
}

fn qualified(name: &str) -> String {
    format!("{}:{}", RADIOMICS_PREFIX, name)
}

fn write_tag_start(writer: &mut XmlWriter, tag_name: &str) -> XmlResult<()> {
    write_tag_start_with_attrs(writer, tag_name, &[])
}

fn write_tag_start_with_attrs(
    writer: &mut XmlWriter,
    tag_name: &str,
    attrs: &[(&str, &str)],
) -> XmlResult<()> {
    let mut elem = BytesStart::new(tag_name);
    for attr in attrs.iter() {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Start(elem))?;
    Ok(())
}

fn write_tag_end(writer: &mut XmlWriter, tag_name: &str) -> XmlResult<()> {
    writer.write_event(Event::End(BytesEnd::new(tag_name)))?;
    Ok(())
}

fn write_tag(writer: &mut XmlWriter, tag_name: &str, content: &str) -> XmlResult<()> {
    write_tag_start(writer, tag_name)?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    write_tag_end(writer, tag_name)
}

/// Element whose content is written verbatim inside CDATA sections.
fn write_tag_cdata(writer: &mut XmlWriter, tag_name: &str, content: &str) -> XmlResult<()> {
    write_tag_start(writer, tag_name)?;
    for section in cdata_sections(content) {
        writer.write_event(Event::CData(BytesCData::new(section)))?;
    }
    write_tag_end(writer, tag_name)
}

/// Split content so no section contains `]]>`.
fn cdata_sections(content: &str) -> Vec<String> {
    let parts: Vec<&str> = content.split("]]>").collect();
    let last = parts.len() - 1;
    parts
        .iter()
        .enumerate()
        .map(|(i, part)| {
            let open = if i > 0 { ">" } else { "" };
            let close = if i < last { "]]" } else { "" };
            format!("{}{}{}", open, part, close)
        })
        .collect()
}
