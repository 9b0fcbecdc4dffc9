//! Element tree to XML text, and atomic file output.

use std::io::{Cursor, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tempfile::{Builder, NamedTempFile};

use super::{DocumentError, XmlElement, XmlNode};

/// Serialize an element tree as an indented XML document with declaration.
pub fn write_document(root: &XmlElement) -> Result<String, DocumentError> {
    let mut buffer = Cursor::new(Vec::new());
    let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(|e| DocumentError::write(e.to_string()))?;
    write_element(&mut writer, root)?;

    let mut output = buffer.into_inner();
    output.push(b'\n');
    String::from_utf8(output).map_err(|e| DocumentError::write(e.to_string()))
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<(), DocumentError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| DocumentError::write(e.to_string()));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| DocumentError::write(e.to_string()))?;
    for child in &element.children {
        match child {
            XmlNode::Element(e) => write_element(writer, e)?,
            XmlNode::Text(t) => writer
                .write_event(Event::Text(BytesText::new(t)))
                .map_err(|e| DocumentError::write(e.to_string()))?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(|e| DocumentError::write(e.to_string()))
}

/// Replace the file at `path` with `contents`.
///
/// The data goes to a temporary file in the same directory first, so the
/// target is either fully replaced or left untouched.
pub fn write_file_atomic(path: &Path, contents: &str) -> Result<(), DocumentError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = temp_file_in(dir, path)?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// A temporary file whose mode matches what a plain write to `target` would give:
/// the existing target's permissions, or `0o666` less the umask for a new file.
#[cfg(unix)]
fn temp_file_in(dir: &Path, target: &Path) -> std::io::Result<NamedTempFile> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    let file = Builder::new()
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)?;
    if let Ok(existing) = std::fs::metadata(target) {
        file.as_file().set_permissions(existing.permissions())?;
    }
    Ok(file)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path, _target: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
