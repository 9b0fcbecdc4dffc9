//! Common XML fixtures for tests.

pub const FACULTY: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<scientists>
  <scientist>
    <name>Marie Curie</name>
    <department>Physics</department>
    <chair>Radioactivity</chair>
    <degree date="1903">PhD</degree>
    <title date="1906">Professor</title>
  </scientist>
  <scientist>
    <name>Alan Turing</name>
    <department>Mathematics</department>
    <chair>Computation</chair>
    <degree date="1938">PhD</degree>
    <title date="1945">Reader</title>
  </scientist>
  <scientist>
    <name>Rosalind Franklin</name>
    <department>Biophysics</department>
    <degree date="1945">PhD</degree>
    <title date="1955">Research Associate</title>
  </scientist>
  <scientist>
    <name>Ada Lovelace</name>
    <department>Mathematics</department>
  </scientist>
</scientists>
"#;

/// Faculty whose `<scientist>` tags also carry a `department` attribute.
pub const TAGGED_FACULTY: &str = r#"<scientists>
  <scientist department="Dept. of Physics">
    <name>Marie Curie</name>
    <department>Physics</department>
  </scientist>
  <scientist>
    <name>Alan Turing</name>
    <department>Mathematics</department>
  </scientist>
</scientists>
"#;

pub const MALFORMED: &str = "<scientists><scientist><name>Broken</scientist></scientists>";
