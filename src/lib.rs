#![doc(html_root_url = "https://docs.rs/memecalc/0.1.0")]
//! Memecalc is the expression engine of a meme-flavored scientific
//! calculator. It turns the string a keypad builds into a finite `f64`
//! through an explicit normalize → tokenize → parse → evaluate pipeline;
//! no caller text is ever executed as code.
//!
//! ```rust
//! use memecalc::{eval_str, AngleMode};
//!
//! assert_eq!(eval_str("2+3*4", AngleMode::Radians)?, 14.0);
//! assert_eq!(eval_str("(2+3)*4", AngleMode::Radians)?, 20.0);
//! assert_eq!(eval_str("6×7−2", AngleMode::Radians)?, 40.0);
//! # Ok::<(), memecalc::CalcError>(())
//! ```
//!
//! Trigonometry honors the angle mode of each call; inverse functions
//! convert their output:
//!
//! ```rust
//! use memecalc::{eval_str, AngleMode};
//!
//! assert_eq!(eval_str("sin(90)", AngleMode::Degrees)?, 1.0);
//! assert_eq!(eval_str("sin(pi/2)", AngleMode::Radians)?, 1.0);
//! assert_eq!(eval_str("atan(1)", AngleMode::Degrees)?, 45.0);
//! # Ok::<(), memecalc::CalcError>(())
//! ```
//!
//! Failures come back as typed [`CalcError`](CalcError)s instead of
//! panics; the UI shows the same error screen for all of them:
//!
//! ```rust
//! use memecalc::{eval_str, AngleMode, ErrorKind};
//!
//! assert_eq!(
//!     eval_str("1/0", AngleMode::Degrees).unwrap_err().kind(),
//!     ErrorKind::Math
//! );
//! assert_eq!(
//!     eval_str("fact(3.5)", AngleMode::Degrees).unwrap_err().kind(),
//!     ErrorKind::Domain
//! );
//! ```
mod definitions;
mod expression;
mod normalize;
mod operators;
mod parser;
pub mod render;
mod result;
pub mod session;

pub use expression::{parse, round_significant, BinOp, Expr};
pub use normalize::normalize;
pub use operators::{find_constant, find_function, AngleMode, Constant, Function};
pub use parser::{tokenize, OpSym, Paren, Token, TokenVec};
pub use result::{CalcError, CalcResult, ErrorKind};
pub use session::{Memory, Session, SharePayload};

/// Number of significant decimal digits a result is rounded to, matching
/// the precision ceiling of the display.
pub const DISPLAY_PRECISION: usize = 12;

/// Runs the whole pipeline on a raw display string and returns the finite
/// result rounded to [`DISPLAY_PRECISION`](DISPLAY_PRECISION) significant
/// digits. Empty or whitespace-only input evaluates to `0`, matching a
/// cleared display.
pub fn eval_str(text: &str, mode: AngleMode) -> CalcResult<f64> {
    if text.trim().is_empty() {
        return Ok(0.0);
    }
    let prepared = normalize(text);
    let tokens = tokenize(&prepared)?;
    let value = parse(&tokens)?.eval(mode)?;
    let rounded = round_significant(value, DISPLAY_PRECISION);
    if !rounded.is_finite() {
        return Err(format_cerr!(Math, "invalid result"));
    }
    Ok(rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(eval_str("", AngleMode::Degrees).unwrap(), 0.0);
        assert_eq!(eval_str("   ", AngleMode::Degrees).unwrap(), 0.0);
    }

    #[test]
    fn test_non_finite_is_rejected() {
        assert_eq!(
            eval_str("exp(1000)", AngleMode::Degrees).unwrap_err().kind(),
            ErrorKind::Math
        );
        assert_eq!(
            eval_str("0^-1", AngleMode::Degrees).unwrap_err().kind(),
            ErrorKind::Math
        );
    }

    #[test]
    fn test_display_rounding() {
        assert_eq!(eval_str("0.1+0.2", AngleMode::Degrees).unwrap(), 0.3);
        assert_eq!(eval_str("tan(45)", AngleMode::Degrees).unwrap(), 1.0);
    }
}
