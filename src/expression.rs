use crate::operators::{AngleMode, Constant, Function};
use crate::parser::{OpSym, Paren, Token};
use crate::{format_cerr, CalcResult};

/// Binary arithmetic operations of the calculator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Parsed expression tree. Every leaf is a number or a constant and the
/// depth is bounded by the length of the tokenized input.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Const(Constant),
    Neg(Box<Expr>),
    Bin(BinOp, Box<Expr>, Box<Expr>),
    Call(&'static Function, Box<Expr>),
}

struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }
    fn advance(&mut self) {
        self.pos += 1;
    }
}

/// Builds the expression tree with calculator precedence: sums bind
/// loosest, then products, then unary minus, then the right-associative
/// power, with function calls and parentheses tightest. `-2^2` therefore
/// parses as `-(2^2)`.
pub fn parse(tokens: &[Token]) -> CalcResult<Expr> {
    if tokens.is_empty() {
        return Err(format_cerr!(Syntax, "empty expression"));
    }
    let mut cursor = Cursor { tokens, pos: 0 };
    let expr = sum(&mut cursor)?;
    match cursor.peek() {
        None => Ok(expr),
        Some(token) => Err(format_cerr!(
            Syntax,
            "trailing {:?} after the expression",
            token
        )),
    }
}

fn sum(cur: &mut Cursor<'_>) -> CalcResult<Expr> {
    let mut left = product(cur)?;
    loop {
        let op = match cur.peek() {
            Some(Token::Op(OpSym::Plus)) => BinOp::Add,
            Some(Token::Op(OpSym::Minus)) => BinOp::Sub,
            _ => return Ok(left),
        };
        cur.advance();
        let right = product(cur)?;
        left = Expr::Bin(op, Box::new(left), Box::new(right));
    }
}

fn product(cur: &mut Cursor<'_>) -> CalcResult<Expr> {
    let mut left = unary(cur)?;
    loop {
        let op = match cur.peek() {
            Some(Token::Op(OpSym::Times)) => BinOp::Mul,
            Some(Token::Op(OpSym::Div)) => BinOp::Div,
            _ => return Ok(left),
        };
        cur.advance();
        let right = unary(cur)?;
        left = Expr::Bin(op, Box::new(left), Box::new(right));
    }
}

fn unary(cur: &mut Cursor<'_>) -> CalcResult<Expr> {
    match cur.peek() {
        Some(Token::Op(OpSym::Minus)) => {
            cur.advance();
            Ok(Expr::Neg(Box::new(unary(cur)?)))
        }
        // unary plus is a no-op
        Some(Token::Op(OpSym::Plus)) => {
            cur.advance();
            unary(cur)
        }
        _ => power(cur),
    }
}

fn power(cur: &mut Cursor<'_>) -> CalcResult<Expr> {
    let base = primary(cur)?;
    if let Some(Token::Op(OpSym::Pow)) = cur.peek() {
        cur.advance();
        // the exponent may carry its own sign and chains right-associatively
        let exponent = unary(cur)?;
        return Ok(Expr::Bin(BinOp::Pow, Box::new(base), Box::new(exponent)));
    }
    Ok(base)
}

fn primary(cur: &mut Cursor<'_>) -> CalcResult<Expr> {
    let token = match cur.peek() {
        Some(t) => t,
        None => return Err(format_cerr!(Syntax, "an operand is missing")),
    };
    match token {
        Token::Num(x) => {
            cur.advance();
            Ok(Expr::Num(x))
        }
        Token::Const(c) => {
            cur.advance();
            Ok(Expr::Const(c))
        }
        Token::Func(func) => {
            cur.advance();
            match cur.peek() {
                Some(Token::Paren(Paren::Open)) => cur.advance(),
                _ => {
                    return Err(format_cerr!(
                        Syntax,
                        "{} needs a parenthesized argument",
                        func.repr
                    ))
                }
            }
            let arg = sum(cur)?;
            match cur.peek() {
                Some(Token::Paren(Paren::Close)) => {
                    cur.advance();
                    Ok(Expr::Call(func, Box::new(arg)))
                }
                Some(Token::Comma) => Err(format_cerr!(
                    Syntax,
                    "{} takes exactly one argument",
                    func.repr
                )),
                _ => Err(format_cerr!(
                    Syntax,
                    "missing closing parenthesis after the argument of {}",
                    func.repr
                )),
            }
        }
        Token::Paren(Paren::Open) => {
            cur.advance();
            let inner = sum(cur)?;
            match cur.peek() {
                Some(Token::Paren(Paren::Close)) => {
                    cur.advance();
                    Ok(inner)
                }
                _ => Err(format_cerr!(Syntax, "missing closing parenthesis")),
            }
        }
        Token::Paren(Paren::Close) => Err(format_cerr!(Syntax, "unexpected closing parenthesis")),
        Token::Comma => Err(format_cerr!(Syntax, "unexpected comma")),
        Token::Op(_) => Err(format_cerr!(
            Syntax,
            "an operand is missing before {:?}",
            token
        )),
    }
}

impl Expr {
    /// Evaluates the tree with the given angle mode. Pure: every call is
    /// independent and no caller text is ever executed as code.
    pub fn eval(&self, mode: AngleMode) -> CalcResult<f64> {
        match self {
            Expr::Num(x) => Ok(*x),
            Expr::Const(c) => Ok(c.value()),
            Expr::Neg(inner) => Ok(-inner.eval(mode)?),
            Expr::Bin(op, left, right) => {
                let l = left.eval(mode)?;
                let r = right.eval(mode)?;
                match op {
                    BinOp::Add => Ok(l + r),
                    BinOp::Sub => Ok(l - r),
                    BinOp::Mul => Ok(l * r),
                    BinOp::Div => {
                        if r == 0.0 {
                            Err(format_cerr!(Math, "division by zero"))
                        } else {
                            Ok(l / r)
                        }
                    }
                    BinOp::Pow => {
                        if l < 0.0 && r.fract() != 0.0 {
                            Err(format_cerr!(Math, "{}^{} is not a real number", l, r))
                        } else {
                            Ok(l.powf(r))
                        }
                    }
                }
            }
            Expr::Call(func, arg) => (func.apply)(arg.eval(mode)?, mode),
        }
    }
}

/// Rounds to `digits` significant decimal digits to suppress the usual
/// floating point noise before a result reaches the display.
pub fn round_significant(x: f64, digits: usize) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }
    format!("{:.*e}", digits - 1, x).parse().unwrap_or(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;
    use crate::ErrorKind;

    fn eval(text: &str) -> CalcResult<f64> {
        parse(&tokenize(text).unwrap())?.eval(AngleMode::Radians)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4").unwrap(), 14.0);
        assert_eq!(eval("(2+3)*4").unwrap(), 20.0);
        assert_eq!(eval("-2^2").unwrap(), -4.0);
        assert_eq!(eval("2^-2").unwrap(), 0.25);
        assert_eq!(eval("2^3^2").unwrap(), 512.0);
        assert_eq!(eval("10-4-3").unwrap(), 3.0);
        assert_eq!(eval("16/4/2").unwrap(), 2.0);
        assert_eq!(eval("-3+5").unwrap(), 2.0);
        assert_eq!(eval("2*-3").unwrap(), -6.0);
        assert_eq!(eval("+5").unwrap(), 5.0);
    }

    #[test]
    fn test_calls_and_constants() {
        assert_eq!(eval("sqrt(16)").unwrap(), 4.0);
        assert_eq!(eval("abs(1-4)").unwrap(), 3.0);
        assert_eq!(eval("abs(-5)").unwrap(), 5.0);
        assert_eq!(eval("inv(4)").unwrap(), 0.25);
        assert_eq!(eval("pi").unwrap(), std::f64::consts::PI);
        assert_eq!(eval("e").unwrap(), std::f64::consts::E);
        assert_eq!(eval("0^0").unwrap(), 1.0);
    }

    #[test]
    fn test_syntax_errors() {
        for text in [
            "2+*3",
            "(2+3",
            "2+",
            "sin 1",
            "sin(1,2)",
            "2 3",
            ")",
            "1+(",
            "sin()",
            ",",
        ] {
            let tokens = tokenize(text).unwrap();
            let err = parse(&tokens).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Syntax, "{}", text);
        }
        assert_eq!(parse(&[]).unwrap_err().kind(), ErrorKind::Syntax);
    }

    #[test]
    fn test_math_errors() {
        assert_eq!(eval("1/0").unwrap_err().kind(), ErrorKind::Math);
        assert_eq!(eval("(0-2)^0.5").unwrap_err().kind(), ErrorKind::Math);
        // unary minus binds looser than the power, so this stays real
        assert_eq!(eval("-2^0.5").unwrap(), -(2f64.powf(0.5)));
    }

    #[test]
    fn test_round_significant() {
        assert_eq!(round_significant(0.1 + 0.2, 12), 0.3);
        assert_eq!(round_significant(123456.789, 4), 123500.0);
        assert_eq!(round_significant(0.0, 12), 0.0);
        assert_eq!(round_significant(-4.0, 12), -4.0);
    }
}
