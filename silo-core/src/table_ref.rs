use std::fmt::{self, Display};

/// Resolved identity of a table.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Namespace the table lives in. Empty for an unresolved bare name.
    pub schema: String,
    /// Table name.
    pub name: String,
}

impl TableRef {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }

    /// Split a `schema.table` reference on the first dot. A bare name keeps an
    /// empty schema and goes through search path resolution.
    pub fn parse(reference: &str) -> Self {
        match reference.split_once('.') {
            Some((schema, name)) => Self::new(schema, name),
            None => Self::new("", reference),
        }
    }

    pub fn is_qualified(&self) -> bool {
        !self.schema.is_empty()
    }

    /// Qualified display form, `schema.name`.
    pub fn full_name(&self) -> String {
        let mut result = String::with_capacity(self.schema.len() + self.name.len() + 1);
        if !self.schema.is_empty() {
            result.push_str(&self.schema);
            result.push('.');
        }
        result.push_str(&self.name);
        result
    }
}

impl Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.schema.is_empty() {
            write!(f, "{}.", self.schema)?;
        }
        write!(f, "{}", self.name)
    }
}
