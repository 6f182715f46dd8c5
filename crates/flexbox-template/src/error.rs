use std::fmt;

/// A compiled template could not be decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateError {
    pub message: String,
    /// 1-based source line number where decoding failed.
    pub line: usize,
    /// 1-based source column number where decoding failed.
    pub col: usize,
}

impl TemplateError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }
}

impl From<serde_json::Error> for TemplateError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string(), e.line(), e.column())
    }
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template error at {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for TemplateError {}
