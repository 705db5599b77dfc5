//! Canonical element paths.

/// Separator between element names in a canonical path
pub const PATH_SEPARATOR: &str = "/";

/// Stack of currently open element names.
///
/// [`enter`](Self::enter) returns the canonical path of the element just
/// entered: every open name, outermost first, joined by `/`. Nesting is not
/// validated here; mismatched end tags are reported by the XML reader.
#[derive(Debug, Clone, Default)]
pub struct PathTracker {
    names: Vec<String>,
}

impl PathTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Open an element and return its canonical path
    pub fn enter(&mut self, name: impl Into<String>) -> String {
        self.names.push(name.into());
        self.current()
    }

    /// Close the innermost element
    pub fn exit(&mut self) -> Option<String> {
        self.names.pop()
    }

    /// Canonical path of the innermost open element (empty at document level)
    pub fn current(&self) -> String {
        self.names.join(PATH_SEPARATOR)
    }

    /// Number of open elements
    pub fn depth(&self) -> usize {
        self.names.len()
    }

    /// True at document level
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
