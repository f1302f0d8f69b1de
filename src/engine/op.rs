//! Operation tags recorded on graph nodes.

use std::fmt;

/// Which operation produced a node; selects the local backward rule the
/// driver applies when distributing gradient to the node's operands.
///
/// `Leaf` marks a user-created source value with no operands. Division and
/// negation never appear here: `a / b` is recorded as `a * b^(-1)` and `-a`
/// as `a * (-1)`, so both show up as `Mul` (with an inner `Pow` for
/// division).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// User-created source value; no operands, no backward rule.
    Leaf,
    /// `a + b`
    Add,
    /// `a - b` (operand order is significant)
    Sub,
    /// `a * b`
    Mul,
    /// `a ^ b` (operand order is significant: base first, exponent second)
    Pow,
    /// `tanh(a)`
    Tanh,
}

impl Op {
    /// Short symbol used in debug rendering.
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Leaf => "leaf",
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Pow => "^",
            Op::Tanh => "tanh",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
