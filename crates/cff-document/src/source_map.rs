//! Where each node of a loaded document came from.

use crate::FieldPath;
use std::collections::HashMap;

/// A position in the source text.
///
/// `offset` and `len` count characters, not bytes. `line` and `column` are
/// 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub offset: usize,
    pub len: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn from_marker(marker: &yaml_rust2::scanner::Marker, len: usize) -> Self {
        Self {
            offset: marker.index(),
            len,
            // yaml-rust2 lines are already 1-based, columns are 0-based
            line: marker.line(),
            column: marker.col() + 1,
        }
    }

    /// Span from `start` up to (not including) `end`.
    pub fn from_span(start: &yaml_rust2::scanner::Marker, end: &yaml_rust2::scanner::Marker) -> Self {
        Self::from_marker(start, end.index().saturating_sub(start.index()))
    }

    /// End offset (exclusive).
    pub fn end_offset(&self) -> usize {
        self.offset + self.len
    }
}

/// Source locations of the keys and values of a loaded document.
#[derive(Debug, Clone, Default)]
pub struct SourceMap {
    file: Option<String>,
    values: HashMap<FieldPath, Location>,
    keys: HashMap<FieldPath, Location>,
}

impl SourceMap {
    pub fn new(file: Option<String>) -> Self {
        Self {
            file,
            ..Self::default()
        }
    }

    /// The file name given at load time, if any.
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn insert_value(&mut self, path: FieldPath, location: Location) {
        self.values.insert(path, location);
    }

    pub fn insert_key(&mut self, path: FieldPath, location: Location) {
        self.keys.insert(path, location);
    }

    /// Location of the value at `path`.
    pub fn value(&self, path: &FieldPath) -> Option<&Location> {
        self.values.get(path)
    }

    /// Location of the mapping key that introduces `path`.
    pub fn key(&self, path: &FieldPath) -> Option<&Location> {
        self.keys.get(path)
    }

    /// Best location to report something about `path`.
    ///
    /// Prefers the value, then the key, then walks up to the nearest
    /// ancestor that was located. Paths that were never in the source (a
    /// missing required field, say) resolve to their enclosing mapping.
    pub fn locate(&self, path: &FieldPath) -> Option<&Location> {
        let mut current = Some(path.clone());
        while let Some(p) = current {
            if let Some(location) = self.value(&p).or_else(|| self.key(&p)) {
                return Some(location);
            }
            current = p.parent();
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.keys.is_empty()
    }
}
