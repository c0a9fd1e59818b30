use crate::definitions::N_TOKENS_ON_STACK;
use crate::operators::{self, Constant, Function};
use crate::{format_cerr, CalcResult};
use lazy_static::lazy_static;
use regex::Regex;
use smallvec::SmallVec;

/// Opening or closing parenthesis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Paren {
    Open,
    Close,
}

/// Operator symbols that survive normalization.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpSym {
    Plus,
    Minus,
    Times,
    Div,
    Pow,
}

/// One lexical unit of a normalized expression string.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Token {
    Num(f64),
    Op(OpSym),
    Paren(Paren),
    Func(&'static Function),
    Const(Constant),
    Comma,
}

/// Token buffer; keypad-sized input stays on the stack.
pub type TokenVec = SmallVec<[Token; N_TOKENS_ON_STACK]>;

/// Longest prefix of `text` that reads as a number, i.e., digits with at
/// most one decimal point.
fn numeric_prefix(text: &str) -> Option<&str> {
    let mut n_dots = 0;
    let n_num_chars = text
        .chars()
        .take_while(|c| {
            let is_dot = *c == '.';
            if is_dot {
                n_dots += 1;
            }
            c.is_ascii_digit() || is_dot
        })
        .count();
    if (n_num_chars > 1 && n_dots < 2) || (n_num_chars == 1 && n_dots == 0) {
        Some(&text[0..n_num_chars])
    } else {
        None
    }
}

/// Scans a normalized expression string left to right into tokens.
/// Whitespace is skipped. Identifiers are matched against the fixed
/// function and constant names; anything unrecognized is a lex error.
pub fn tokenize(text: &str) -> CalcResult<TokenVec> {
    lazy_static! {
        static ref RE_NAME: Regex = Regex::new(r"^[a-zA-Z]+").unwrap();
    }
    let mut tokens = TokenVec::new();
    let mut offset = 0usize;
    while let Some(c) = text[offset..].chars().next() {
        if c.is_whitespace() {
            offset += c.len_utf8();
            continue;
        }
        let rest = &text[offset..];
        let token = match c {
            '(' => {
                offset += 1;
                Token::Paren(Paren::Open)
            }
            ')' => {
                offset += 1;
                Token::Paren(Paren::Close)
            }
            ',' => {
                offset += 1;
                Token::Comma
            }
            '+' => {
                offset += 1;
                Token::Op(OpSym::Plus)
            }
            '-' => {
                offset += 1;
                Token::Op(OpSym::Minus)
            }
            '*' => {
                offset += 1;
                Token::Op(OpSym::Times)
            }
            '/' => {
                offset += 1;
                Token::Op(OpSym::Div)
            }
            '^' => {
                offset += 1;
                Token::Op(OpSym::Pow)
            }
            _ => {
                if let Some(num_str) = numeric_prefix(rest) {
                    offset += num_str.len();
                    let val = num_str
                        .parse::<f64>()
                        .map_err(|_| format_cerr!(Lex, "cannot read number '{}'", num_str))?;
                    Token::Num(val)
                } else if let Some(name) = RE_NAME.find(rest) {
                    let name = name.as_str();
                    offset += name.len();
                    if let Some(func) = operators::find_function(name) {
                        Token::Func(func)
                    } else if let Some(constant) = operators::find_constant(name) {
                        Token::Const(constant)
                    } else {
                        return Err(format_cerr!(Lex, "unknown identifier '{}'", name));
                    }
                } else {
                    return Err(format_cerr!(
                        Lex,
                        "cannot tokenize the beginning of '{}'",
                        rest
                    ));
                }
            }
        };
        tokens.push(token);
    }
    Ok(tokens)
}
