/// Static mapping between a record field and the environment variable that populates it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldSpec {
    /// Field identifier as declared on the record
    pub field: &'static str,
    /// Environment variable key read for this field
    pub key: &'static str,
    /// Human-readable description, empty when none was given
    pub description: &'static str,
}

impl FieldSpec {
    /// A field looked up under its own identifier
    pub const fn named(field: &'static str) -> Self {
        Self {
            field,
            key: field,
            description: "",
        }
    }

    /// A field looked up under an explicit key, falling back to the identifier if `key` is empty
    pub const fn keyed(field: &'static str, key: &'static str) -> Self {
        Self {
            field,
            key: if key.is_empty() { field } else { key },
            description: "",
        }
    }

    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }
}
