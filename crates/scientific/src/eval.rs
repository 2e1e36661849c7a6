//! Stateless arithmetic and function evaluation.
//!
//! Nothing here raises on IEEE edge cases: division by zero, `sqrt(-1)` or
//! `asin(2)` produce ±∞ or NaN and the caller decides how to present them.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use spacecalc_core::units::{deg_to_rad, rad_to_deg};
use thiserror::Error;

/// Largest integer whose factorial is finite in `f64`.
const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// Interpretation of trigonometric inputs and inverse-trigonometric outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl FromStr for AngleMode {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deg" | "degrees" => Ok(Self::Degrees),
            "rad" | "radians" => Ok(Self::Radians),
            _ => Err(EvalError::UnknownAngleMode(s.to_string())),
        }
    }
}

/// Two-operand operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
}

impl BinaryOp {
    /// Symbol shown next to the previous operand while the operator is pending.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
            Self::Modulo => "mod",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOp {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "×" | "*" | "x" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            "pow" | "^" => Ok(Self::Power),
            "mod" | "%" => Ok(Self::Modulo),
            _ => Err(EvalError::UnknownOperator(s.to_string())),
        }
    }
}

/// Functions reachable from the function keys.
///
/// `Pow` and `Mod` sit on the same keypad but need a second operand; evaluating
/// them yields [`Evaluation::RequiresSecondOperand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Sqrt,
    Factorial,
    Exp,
    Abs,
    Floor,
    Ceil,
    Round,
    Reciprocal,
    Negate,
    Pow10,
    Pow2,
    Random,
    Pow,
    Mod,
}

impl UnaryFunction {
    pub const ALL: [UnaryFunction; 22] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Log,
        Self::Ln,
        Self::Sqrt,
        Self::Factorial,
        Self::Exp,
        Self::Abs,
        Self::Floor,
        Self::Ceil,
        Self::Round,
        Self::Reciprocal,
        Self::Negate,
        Self::Pow10,
        Self::Pow2,
        Self::Random,
        Self::Pow,
        Self::Mod,
    ];

    /// Key name, as printed on the function button.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Factorial => "factorial",
            Self::Exp => "exp",
            Self::Abs => "abs",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Reciprocal => "inv",
            Self::Negate => "neg",
            Self::Pow10 => "pow10",
            Self::Pow2 => "pow2",
            Self::Random => "rand",
            Self::Pow => "pow",
            Self::Mod => "mod",
        }
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnaryFunction {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|func| func.name() == lower)
            .ok_or_else(|| EvalError::UnknownFunction(s.to_string()))
    }
}

/// Mathematical constants available from the constant keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

impl FromStr for Constant {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pi" | "π" => Ok(Self::Pi),
            "e" => Ok(Self::E),
            _ => Err(EvalError::UnknownConstant(s.to_string())),
        }
    }
}

/// Outcome of a function key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Value(f64),
    /// The function is binary; collect another operand and finish with this operator.
    RequiresSecondOperand(BinaryOp),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("{function} is undefined for {value}")]
    DomainError {
        function: UnaryFunction,
        value: f64,
    },
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("unknown constant '{0}'")]
    UnknownConstant(String),
    #[error("unknown angle mode '{0}' (expected deg or rad)")]
    UnknownAngleMode(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Apply a two-operand operator with IEEE semantics.
pub fn apply_binary(op: BinaryOp, a: f64, b: f64) -> f64 {
    match op {
        BinaryOp::Add => a + b,
        BinaryOp::Subtract => a - b,
        BinaryOp::Multiply => a * b,
        BinaryOp::Divide => a / b,
        BinaryOp::Power => a.powf(b),
        BinaryOp::Modulo => a % b,
    }
}

/// Evaluate a function key against `value`, drawing randomness from the thread RNG.
pub fn apply_unary(
    func: UnaryFunction,
    value: f64,
    mode: AngleMode,
) -> Result<Evaluation, EvalError> {
    apply_unary_with_rng(func, value, mode, &mut rand::rng())
}

/// Evaluate a function key with an explicit random source.
pub fn apply_unary_with_rng<R: Rng>(
    func: UnaryFunction,
    value: f64,
    mode: AngleMode,
    rng: &mut R,
) -> Result<Evaluation, EvalError> {
    let to_radians = |x: f64| match mode {
        AngleMode::Degrees => deg_to_rad(x),
        AngleMode::Radians => x,
    };
    let from_radians = |x: f64| match mode {
        AngleMode::Degrees => rad_to_deg(x),
        AngleMode::Radians => x,
    };

    let result = match func {
        UnaryFunction::Sin => to_radians(value).sin(),
        UnaryFunction::Cos => to_radians(value).cos(),
        UnaryFunction::Tan => to_radians(value).tan(),
        UnaryFunction::Asin => from_radians(value.asin()),
        UnaryFunction::Acos => from_radians(value.acos()),
        UnaryFunction::Atan => from_radians(value.atan()),
        UnaryFunction::Log => value.log10(),
        UnaryFunction::Ln => value.ln(),
        UnaryFunction::Sqrt => value.sqrt(),
        UnaryFunction::Factorial => factorial(value)?,
        UnaryFunction::Exp => value.exp(),
        UnaryFunction::Abs => value.abs(),
        UnaryFunction::Floor => value.floor(),
        UnaryFunction::Ceil => value.ceil(),
        UnaryFunction::Round => round_half_up(value),
        UnaryFunction::Reciprocal => 1.0 / value,
        UnaryFunction::Negate => -value,
        UnaryFunction::Pow10 => 10f64.powf(value),
        UnaryFunction::Pow2 => 2f64.powf(value),
        UnaryFunction::Random => rng.random::<f64>(),
        UnaryFunction::Pow => return Ok(Evaluation::RequiresSecondOperand(BinaryOp::Power)),
        UnaryFunction::Mod => return Ok(Evaluation::RequiresSecondOperand(BinaryOp::Modulo)),
    };
    Ok(Evaluation::Value(result))
}

/// `n!` after truncating toward zero. Negative inputs are a domain error.
pub fn factorial(value: f64) -> Result<f64, EvalError> {
    if value.is_nan() {
        return Ok(f64::NAN);
    }
    let n = value.trunc();
    if n < 0.0 {
        return Err(EvalError::DomainError {
            function: UnaryFunction::Factorial,
            value,
        });
    }
    if n > MAX_FINITE_FACTORIAL {
        return Ok(f64::INFINITY);
    }

    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}

// Halves round toward +∞ (-2.5 becomes -2).
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
