//! Results that carry non-fatal errors alongside their data.

use super::ValidationError;

/// Output of an operation that tolerates malformed fragments of its input.
/// The data is always complete for the well-formed part; skipped fragments
/// are reported in `errors`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partial<T> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected while producing `data`.
    pub errors: Vec<ValidationError>,
}

impl<T> Partial<T> {
    /// Create a result with no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Split into data and errors.
    pub fn into_parts(self) -> (T, Vec<ValidationError>) {
        (self.data, self.errors)
    }
}
