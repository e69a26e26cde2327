use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SrimResult<T> = Result<T, SrimError>;
pub type ParserResult<T> = SrimResult<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SrimErrorCategory {
    InvalidIdentifier,
    UnknownElement,
    AtomicNumberOutOfRange,
    ValidationError,
    ParseError,
    NotApplicable,
    OutOfBounds,
    IoSystemError,
}

impl SrimErrorCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidIdentifier => "InvalidIdentifier",
            Self::UnknownElement => "UnknownElement",
            Self::AtomicNumberOutOfRange => "AtomicNumberOutOfRange",
            Self::ValidationError => "ValidationError",
            Self::ParseError => "ParseError",
            Self::NotApplicable => "NotApplicable",
            Self::OutOfBounds => "OutOfBounds",
            Self::IoSystemError => "IoSystemError",
        }
    }

    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InvalidIdentifier | Self::UnknownElement | Self::AtomicNumberOutOfRange => 2,
            Self::ValidationError => 3,
            Self::ParseError => 4,
            Self::NotApplicable => 5,
            Self::OutOfBounds => 6,
            Self::IoSystemError => 7,
        }
    }

    /// True for the three element-registry failure kinds.
    pub const fn is_lookup(self) -> bool {
        matches!(
            self,
            Self::InvalidIdentifier | Self::UnknownElement | Self::AtomicNumberOutOfRange
        )
    }
}

impl Display for SrimErrorCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrimError {
    category: SrimErrorCategory,
    code: &'static str,
    message: String,
}

impl SrimError {
    pub fn new(category: SrimErrorCategory, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            category,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_identifier(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SrimErrorCategory::InvalidIdentifier, code, message)
    }

    pub fn unknown_element(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SrimErrorCategory::UnknownElement, code, message)
    }

    pub fn atomic_number_out_of_range(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SrimErrorCategory::AtomicNumberOutOfRange, code, message)
    }

    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SrimErrorCategory::ValidationError, code, message)
    }

    pub fn parse(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SrimErrorCategory::ParseError, code, message)
    }

    pub fn not_applicable(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SrimErrorCategory::NotApplicable, code, message)
    }

    pub fn out_of_bounds(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SrimErrorCategory::OutOfBounds, code, message)
    }

    pub fn io_system(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(SrimErrorCategory::IoSystemError, code, message)
    }

    pub const fn category(&self) -> SrimErrorCategory {
        self.category
    }

    /// Dotted identifier of the step that failed, e.g. `PARSE.ION_HEADER`.
    pub const fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn exit_code(&self) -> i32 {
        self.category.exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("ERROR: [{}] {}", self.code, self.message)
    }
}

impl Display for SrimError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.category, self.code, self.message)
    }
}

impl Error for SrimError {}
