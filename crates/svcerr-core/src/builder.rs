//! Fluent construction for errors outside the named constructor set.

use std::fmt;

use crate::error::Error;

/// Identity used when the builder is not given one.
pub const CUSTOM_ERROR_ID: &str = "CUSTOM_ERROR";

/// Accumulates identity, code and detail, then builds an [`Error`].
///
/// Setters mutate in place and return the builder for chaining. `build`
/// leaves the builder as it is, so it can be built again; the status is
/// derived from whatever code is set at that moment.
#[derive(Debug, Clone)]
pub struct ErrorBuilder {
    id: String,
    code: i32,
    detail: String,
}

impl Default for ErrorBuilder {
    fn default() -> Self {
        Self {
            id: CUSTOM_ERROR_ID.to_owned(),
            code: 500,
            detail: String::new(),
        }
    }
}

impl ErrorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = id.into();
        self
    }

    pub fn with_code(&mut self, code: i32) -> &mut Self {
        self.code = code;
        self
    }

    pub fn with_detail(&mut self, detail: impl Into<String>) -> &mut Self {
        self.detail = detail.into();
        self
    }

    /// Sets the detail from format arguments, e.g.
    /// `builder.with_detailf(format_args!("{} of {}", n, total))`.
    pub fn with_detailf(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
        self.detail = args.to_string();
        self
    }

    pub fn build(&self) -> Error {
        Error::new(self.id.clone(), self.detail.clone(), self.code)
    }
}

impl Error {
    /// Starts a builder with identity `CUSTOM_ERROR`, code 500, empty detail.
    pub fn builder() -> ErrorBuilder {
        ErrorBuilder::new()
    }
}
