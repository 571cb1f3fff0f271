/// Ordered list of namespaces consulted, in order, to resolve unqualified
/// table names.
///
/// The raw string handed to [`SearchPath::set`] is kept byte for byte so it
/// reads back unchanged. Tokens are trimmed of surrounding whitespace but
/// never rewritten: placeholders like `"$user"` are for the server to expand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    raw: String,
    namespaces: Vec<String>,
}

/// Namespace assumed when the session never configured a search path.
pub const DEFAULT_NAMESPACE: &str = "public";

impl Default for SearchPath {
    fn default() -> Self {
        Self {
            raw: DEFAULT_NAMESPACE.into(),
            namespaces: vec![DEFAULT_NAMESPACE.into()],
        }
    }
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the path with a comma separated namespace list.
    pub fn set(&mut self, raw: &str) {
        self.raw = raw.into();
        self.namespaces = raw
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(Into::into)
            .collect();
        if self.namespaces.is_empty() {
            self.namespaces.push(DEFAULT_NAMESPACE.into());
        }
    }

    /// The exact string previously passed to [`SearchPath::set`].
    pub fn get(&self) -> &str {
        &self.raw
    }

    /// Parsed namespaces in resolution priority order. Never empty, duplicates
    /// are kept as given.
    pub fn ordered_namespaces(&self) -> &[String] {
        &self.namespaces
    }
}
