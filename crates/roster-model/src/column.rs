//! Decoded header columns.

use std::fmt;

/// Semantic field type carried by the first token of a header cell.
///
/// The vocabulary is fixed and case-sensitive. Any other token decodes to
/// [`FieldType::Ignored`], which no row-processing step acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    FullName,
    Eid,
    Class,
    Phone,
    Email,
    Invisible,
    SeeAll,
    Ignored,
}

impl FieldType {
    /// Resolve a header token against the vocabulary.
    pub fn from_token(token: &str) -> Self {
        match token {
            "fullname" => Self::FullName,
            "eid" => Self::Eid,
            "class" => Self::Class,
            "phone" => Self::Phone,
            "email" => Self::Email,
            "invisible" => Self::Invisible,
            "see_all" => Self::SeeAll,
            _ => Self::Ignored,
        }
    }

    /// Header token for this field type, `None` for ignored columns.
    pub fn token(self) -> Option<&'static str> {
        match self {
            Self::FullName => Some("fullname"),
            Self::Eid => Some("eid"),
            Self::Class => Some("class"),
            Self::Phone => Some("phone"),
            Self::Email => Some("email"),
            Self::Invisible => Some("invisible"),
            Self::SeeAll => Some("see_all"),
            Self::Ignored => None,
        }
    }

    pub fn is_ignored(self) -> bool {
        self == Self::Ignored
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token().unwrap_or("ignored"))
    }
}

/// One decoded header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Raw first token of the header cell (empty for blank headers).
    pub name: String,
    pub field: FieldType,
    /// Qualifiers copied onto every address created under this column.
    pub tags: Vec<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, tags: Vec<String>) -> Self {
        let name = name.into();
        let field = FieldType::from_token(&name);
        Self { name, field, tags }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_is_case_sensitive() {
        assert_eq!(FieldType::from_token("phone"), FieldType::Phone);
        assert_eq!(FieldType::from_token("Phone"), FieldType::Ignored);
        assert_eq!(FieldType::from_token("SEE_ALL"), FieldType::Ignored);
        assert_eq!(FieldType::from_token(""), FieldType::Ignored);
    }

    #[test]
    fn tokens_round_trip_through_vocabulary() {
        for token in [
            "fullname",
            "eid",
            "class",
            "phone",
            "email",
            "invisible",
            "see_all",
        ] {
            assert_eq!(FieldType::from_token(token).token(), Some(token));
        }
        assert_eq!(FieldType::Ignored.token(), None);
    }

    #[test]
    fn column_resolves_field_from_name() {
        let column = Column::new("email", vec!["Personal".to_string()]);
        assert_eq!(column.field, FieldType::Email);
        let inert = Column::new("nickname", Vec::new());
        assert!(inert.field.is_ignored());
        assert_eq!(inert.name, "nickname");
    }
}
