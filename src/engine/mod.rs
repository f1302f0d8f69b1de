//! Autodiff engine: a scalar computation graph with reverse-mode differentiation.
//!
//! The graph is built as a side effect of ordinary arithmetic on [`ValueRef`]
//! handles; [`ValueRef::backward`] propagates gradients from a result node to
//! every node it was computed from, using the chain rule in reverse
//! topological order.

mod backward;
mod op;
mod ops;
mod value;

pub use op::Op;
pub use value::ValueRef;

/// Trait for raising a node to a power (e.g. `(&a).pow(2.0)` or `(&a).pow(&b)`).
///
/// `a ^ b` via `BitXor` is sugar for the same operation.
pub trait Pow<Rhs> {
    /// Result of the power operation.
    type Output;

    /// Returns `self^exp` with gradient tracking.
    #[must_use]
    fn pow(self, exp: Rhs) -> Self::Output;
}
