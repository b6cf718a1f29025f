// Error collection shared by parsing and validation

use cff_document::FieldPath;

use crate::error::{ExpectedShape, ValidationError, ValidationErrors};

/// Tracks the current field path and the errors found so far.
///
/// Nothing here short-circuits: callers keep walking after an error so a
/// single pass reports every problem.
pub(crate) struct ValidationContext {
    path: FieldPath,
    errors: Vec<ValidationError>,
}

impl ValidationContext {
    pub(crate) fn new() -> Self {
        Self {
            path: FieldPath::root(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn path(&self) -> &FieldPath {
        &self.path
    }

    pub(crate) fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record that `key` is missing under the current path.
    pub(crate) fn missing(&mut self, key: &str) {
        let path = self.path.child_key(key);
        self.push(ValidationError::MissingRequiredField(path));
    }

    /// Record that the value at the current path has the wrong shape.
    pub(crate) fn type_mismatch(&mut self, expected: ExpectedShape) {
        let path = self.path.clone();
        self.push(ValidationError::TypeMismatch(path, expected));
    }

    /// Run `f` with `key` appended to the current path.
    pub(crate) fn with_key<F, R>(&mut self, key: &str, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.path.push_key(key);
        let result = f(self);
        self.path.pop();
        result
    }

    /// Run `f` with `index` appended to the current path.
    pub(crate) fn with_index<F, R>(&mut self, index: usize, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.path.push_index(index);
        let result = f(self);
        self.path.pop();
        result
    }

    /// Turn the walk's outcome into a result.
    ///
    /// `value` is what the walk built. Walkers only return `None` after
    /// recording an error, so the last arm is a safety net.
    pub(crate) fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match (ValidationErrors::from_vec(self.errors), value) {
            (Some(errors), _) => Err(errors),
            (None, Some(value)) => Ok(value),
            (None, None) => Err(ValidationError::TypeMismatch(
                FieldPath::root(),
                ExpectedShape::Mapping,
            )
            .into()),
        }
    }
}
