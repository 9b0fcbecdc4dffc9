use std::fmt;

/// A single scientist record.
///
/// Every field is optional: records are built from whatever child elements a
/// `<scientist>` node happens to carry, and missing data stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scientist {
    pub name: Option<String>,
    pub department: Option<String>,
    pub chair: Option<String>,
    pub degree: Option<String>,
    /// The `date` attribute of the `<degree>` element.
    pub degree_date: Option<String>,
    pub title: Option<String>,
    /// The `date` attribute of the `<title>` element.
    pub title_date: Option<String>,
}

impl Scientist {
    /// Value of one field, if present.
    pub fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Department => &self.department,
            Field::Chair => &self.chair,
            Field::Degree => &self.degree,
            Field::DegreeDate => &self.degree_date,
            Field::Title => &self.title,
            Field::TitleDate => &self.title_date,
        };
        value.as_deref()
    }

    /// Multi-line human-readable summary of every field.
    ///
    /// Absent fields render as empty text.
    pub fn details(&self) -> String {
        let get = |field| self.field(field).unwrap_or_default();
        format!(
            "Name: {}\nDepartment: {}\nChair: {}\nDegree: {} (Date: {})\nTitle: {} (Date: {})",
            get(Field::Name),
            get(Field::Department),
            get(Field::Chair),
            get(Field::Degree),
            get(Field::DegreeDate),
            get(Field::Title),
            get(Field::TitleDate),
        )
    }
}

impl fmt::Display for Scientist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.title) {
            (Some(name), Some(title)) => write!(f, "{name} ({title})"),
            (Some(name), None) => f.write_str(name),
            (None, _) => f.write_str("<unnamed>"),
        }
    }
}

/// One of the seven searchable record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Department,
    Chair,
    Degree,
    DegreeDate,
    Title,
    TitleDate,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Department,
        Field::Chair,
        Field::Degree,
        Field::DegreeDate,
        Field::Title,
        Field::TitleDate,
    ];

    /// Map an attribute key to a field, ignoring case.
    ///
    /// Returns `None` for any key outside the fixed set.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "department" => Some(Self::Department),
            "chair" => Some(Self::Chair),
            "degree" => Some(Self::Degree),
            "degreedate" => Some(Self::DegreeDate),
            "title" => Some(Self::Title),
            "titledate" => Some(Self::TitleDate),
            _ => None,
        }
    }

    /// Canonical key as it appears in the attribute catalog.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Department => "department",
            Self::Chair => "chair",
            Self::Degree => "degree",
            Self::DegreeDate => "DegreeDate",
            Self::Title => "title",
            Self::TitleDate => "TitleDate",
        }
    }
}
