//! Scientific calculator: stateless evaluation plus the explicit entry state the
//! keypad shell threads through it.

pub mod eval;
pub mod session;

pub use eval::{
    AngleMode, BinaryOp, Constant, EvalError, Evaluation, UnaryFunction, apply_binary,
    apply_unary, apply_unary_with_rng, factorial,
};
pub use session::{Key, MemoryAction, Session, SessionDisplay};
