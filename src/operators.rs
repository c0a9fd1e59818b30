use crate::{format_cerr, CalcResult};
use num::{BigUint, ToPrimitive};

/// Whether trigonometric functions interpret angles as degrees or radians.
/// The mode is passed explicitly into every evaluation and never read from
/// ambient state.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleMode {
    Degrees,
    Radians,
}

impl Default for AngleMode {
    /// The keypad starts out in degree mode.
    fn default() -> Self {
        AngleMode::Degrees
    }
}

impl AngleMode {
    /// Converts the input of a forward trigonometric function to radians.
    fn input_to_rad(self, x: f64) -> f64 {
        match self {
            AngleMode::Degrees => x.to_radians(),
            AngleMode::Radians => x,
        }
    }
    /// Converts the radian output of an inverse trigonometric function.
    fn output_from_rad(self, x: f64) -> f64 {
        match self {
            AngleMode::Degrees => x.to_degrees(),
            AngleMode::Radians => x,
        }
    }
}

/// Named constants the tokenizer resolves, kept symbolic until evaluation.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Constant {
    Pi,
    Euler,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::Euler => std::f64::consts::E,
        }
    }
    pub fn repr(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::Euler => "e",
        }
    }
}

/// Looks up a constant by its name in the expression string.
pub fn find_constant(name: &str) -> Option<Constant> {
    match name {
        "pi" => Some(Constant::Pi),
        "e" => Some(Constant::Euler),
        _ => None,
    }
}

/// A one-argument scientific function as shown on the keypad. The angle
/// mode travels into every application so that trigonometry can convert
/// degrees on the way in or out.
#[derive(Copy, Clone)]
pub struct Function {
    /// Name of the function in the expression string, e.g., `sin`.
    pub repr: &'static str,
    /// Implementation; fails on arguments outside the function's domain.
    pub apply: fn(f64, AngleMode) -> CalcResult<f64>,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.repr == other.repr
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Function({})", self.repr)
    }
}

fn sin(x: f64, mode: AngleMode) -> CalcResult<f64> {
    Ok(mode.input_to_rad(x).sin())
}
fn cos(x: f64, mode: AngleMode) -> CalcResult<f64> {
    Ok(mode.input_to_rad(x).cos())
}
fn tan(x: f64, mode: AngleMode) -> CalcResult<f64> {
    Ok(mode.input_to_rad(x).tan())
}
fn asin(x: f64, mode: AngleMode) -> CalcResult<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(format_cerr!(Math, "asin is undefined for {}", x));
    }
    Ok(mode.output_from_rad(x.asin()))
}
fn acos(x: f64, mode: AngleMode) -> CalcResult<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(format_cerr!(Math, "acos is undefined for {}", x));
    }
    Ok(mode.output_from_rad(x.acos()))
}
fn atan(x: f64, mode: AngleMode) -> CalcResult<f64> {
    Ok(mode.output_from_rad(x.atan()))
}
fn log(x: f64, _mode: AngleMode) -> CalcResult<f64> {
    if x <= 0.0 {
        return Err(format_cerr!(Math, "log needs a positive argument, got {}", x));
    }
    Ok(x.log10())
}
fn ln(x: f64, _mode: AngleMode) -> CalcResult<f64> {
    if x <= 0.0 {
        return Err(format_cerr!(Math, "ln needs a positive argument, got {}", x));
    }
    Ok(x.ln())
}
fn sqrt(x: f64, _mode: AngleMode) -> CalcResult<f64> {
    if x < 0.0 {
        return Err(format_cerr!(Math, "sqrt of negative number {}", x));
    }
    Ok(x.sqrt())
}
fn cbrt(x: f64, _mode: AngleMode) -> CalcResult<f64> {
    Ok(x.cbrt())
}
fn abs(x: f64, _mode: AngleMode) -> CalcResult<f64> {
    Ok(x.abs())
}
fn exp(x: f64, _mode: AngleMode) -> CalcResult<f64> {
    Ok(x.exp())
}
fn inv(x: f64, _mode: AngleMode) -> CalcResult<f64> {
    if x == 0.0 {
        return Err(format_cerr!(Math, "reciprocal of zero"));
    }
    Ok(1.0 / x)
}

/// Factorial over the exact integers, accepted only while the result still
/// round-trips through an `f64` without loss. The product is tracked as a
/// big integer; it is representable iff its significant bits minus the
/// trailing zero bits fit the 53 bit mantissa.
fn fact(x: f64, _mode: AngleMode) -> CalcResult<f64> {
    if x.is_nan() || x < 0.0 || x.fract() != 0.0 {
        return Err(format_cerr!(
            Domain,
            "factorial needs a non-negative integer, got {}",
            x
        ));
    }
    let n = x as u64;
    let mut exact = BigUint::from(1u8);
    for k in 2..=n {
        exact *= k;
        let significant = exact.bits() - exact.trailing_zeros().unwrap_or(0);
        if significant > f64::MANTISSA_DIGITS as u64 {
            return Err(format_cerr!(
                Overflow,
                "factorial of {} loses precision in an f64",
                n
            ));
        }
    }
    exact
        .to_f64()
        .ok_or_else(|| format_cerr!(Overflow, "factorial of {} loses precision in an f64", n))
}

static FUNCTIONS: [Function; 14] = [
    Function { repr: "sin", apply: sin },
    Function { repr: "cos", apply: cos },
    Function { repr: "tan", apply: tan },
    Function { repr: "asin", apply: asin },
    Function { repr: "acos", apply: acos },
    Function { repr: "atan", apply: atan },
    Function { repr: "log", apply: log },
    Function { repr: "ln", apply: ln },
    Function { repr: "sqrt", apply: sqrt },
    Function { repr: "cbrt", apply: cbrt },
    Function { repr: "abs", apply: abs },
    Function { repr: "exp", apply: exp },
    Function { repr: "fact", apply: fact },
    Function { repr: "inv", apply: inv },
];

/// Looks up a function by its name in the expression string.
pub fn find_function(name: &str) -> Option<&'static Function> {
    FUNCTIONS.iter().find(|f| f.repr == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_trig_modes() {
        let sin = find_function("sin").unwrap();
        assert!(((sin.apply)(90.0, AngleMode::Degrees).unwrap() - 1.0).abs() < 1e-12);
        assert!(((sin.apply)(0.0, AngleMode::Radians).unwrap()).abs() < 1e-12);
        let atan = find_function("atan").unwrap();
        assert!(((atan.apply)(1.0, AngleMode::Degrees).unwrap() - 45.0).abs() < 1e-12);
        assert!(
            ((atan.apply)(1.0, AngleMode::Radians).unwrap() - std::f64::consts::FRAC_PI_4).abs()
                < 1e-12
        );
    }

    #[test]
    fn test_factorial_boundaries() {
        let fact = find_function("fact").unwrap();
        assert_eq!((fact.apply)(0.0, AngleMode::Radians).unwrap(), 1.0);
        assert_eq!((fact.apply)(5.0, AngleMode::Radians).unwrap(), 120.0);
        // 22! still fits the mantissa thanks to its trailing zero bits
        assert_eq!(
            (fact.apply)(22.0, AngleMode::Radians).unwrap(),
            1_124_000_727_777_607_680_000.0
        );
        assert_eq!(
            (fact.apply)(23.0, AngleMode::Radians).unwrap_err().kind(),
            ErrorKind::Overflow
        );
        assert_eq!(
            (fact.apply)(1e9, AngleMode::Radians).unwrap_err().kind(),
            ErrorKind::Overflow
        );
        assert_eq!(
            (fact.apply)(-3.0, AngleMode::Radians).unwrap_err().kind(),
            ErrorKind::Domain
        );
        assert_eq!(
            (fact.apply)(3.5, AngleMode::Radians).unwrap_err().kind(),
            ErrorKind::Domain
        );
    }

    #[test]
    fn test_domains() {
        for (name, arg) in [
            ("log", 0.0),
            ("ln", -1.0),
            ("sqrt", -1.0),
            ("inv", 0.0),
            ("asin", 1.5),
            ("acos", -2.0),
        ] {
            let f = find_function(name).unwrap();
            assert_eq!(
                (f.apply)(arg, AngleMode::Radians).unwrap_err().kind(),
                ErrorKind::Math,
                "{}",
                name
            );
        }
        let cbrt = find_function("cbrt").unwrap();
        assert_eq!((cbrt.apply)(-8.0, AngleMode::Radians).unwrap(), -2.0);
    }
}
