use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Coarse classification of an evaluation failure. The calculator UI shows
/// the same error screen for every kind; the kinds exist for diagnostics
/// and tests.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub enum ErrorKind {
    /// The input contains a character or identifier we do not know.
    Lex,
    /// The tokens do not form a well-formed expression.
    Syntax,
    /// The operation has no finite real result, e.g., division by zero.
    Math,
    /// The argument is outside the domain of the function, e.g., `fact(3.5)`.
    Domain,
    /// The exact result does not fit into an `f64` without loss.
    Overflow,
}

/// This will be handed to you whenever an expression cannot be turned into
/// a finite number.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
pub struct CalcError {
    kind: ErrorKind,
    msg: String,
}

impl CalcError {
    pub fn new(kind: ErrorKind, msg: String) -> CalcError {
        CalcError { kind, msg }
    }
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}
impl Error for CalcError {}

/// Memecalc's result type with [`CalcError`](CalcError) as error type.
pub type CalcResult<U> = Result<U, CalcError>;

/// Creates a [`CalcError`](CalcError) of the given kind with a formatted
/// message.
#[macro_export]
macro_rules! format_cerr {
    ($kind:ident, $s:literal $(, $args:expr)*) => {
        $crate::CalcError::new($crate::ErrorKind::$kind, format!($s $(, $args)*))
    };
}
