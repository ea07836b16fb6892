/*!
 * XML writer implementation for xunit manifests
 */

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::Result;
use crate::types::Assembly;

/// XML writer for xunit project files
pub struct XmlWriter {
    /// Manifest output path
    output_file: PathBuf,
}

impl XmlWriter {
    /// Create a new XML writer
    pub fn new(output_file: impl Into<PathBuf>) -> Self {
        Self {
            output_file: output_file.into(),
        }
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Render the manifest document
    ///
    /// ```xml
    /// <xunit>
    ///   <assemblies>
    ///     <assembly filename="/tests/A.Tests.dll" shadow-copy="true"/>
    ///   </assemblies>
    /// </xunit>
    /// ```
    pub fn render(assemblies: &[Assembly]) -> Result<Vec<u8>> {
        let mut xml_writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        xml_writer.write_event(Event::Start(BytesStart::new("xunit")))?;

        if assemblies.is_empty() {
            xml_writer.write_event(Event::Empty(BytesStart::new("assemblies")))?;
        } else {
            xml_writer.write_event(Event::Start(BytesStart::new("assemblies")))?;
            for assembly in assemblies {
                Self::write_assembly(assembly, &mut xml_writer)?;
            }
            xml_writer.write_event(Event::End(BytesEnd::new("assemblies")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("xunit")))?;

        let mut bytes = xml_writer.into_inner();
        bytes.push(b'\n');
        Ok(bytes)
    }

    /// Write a single assembly element
    fn write_assembly<W: Write>(assembly: &Assembly, writer: &mut Writer<W>) -> Result<()> {
        let filename = assembly.filename();
        let mut tag = BytesStart::new("assembly");
        tag.push_attribute(("filename", filename.as_str()));
        tag.push_attribute(("shadow-copy", "true"));
        writer.write_event(Event::Empty(tag))?;
        Ok(())
    }

    /// Write the manifest to the output file, replacing any existing content
    ///
    /// The document is rendered in memory first so a rendering failure never
    /// truncates an existing file. The data is synced to disk before returning.
    pub fn write(&self, assemblies: &[Assembly]) -> Result<()> {
        let bytes = Self::render(assemblies)?;
        self.write_document(&bytes)
    }

    /// Write an already rendered document to the output file
    pub fn write_document(&self, xml: &[u8]) -> Result<()> {
        let mut file = File::create(&self.output_file)?;
        file.write_all(xml)?;
        file.flush()?;
        file.sync_all()?;

        Ok(())
    }
}
