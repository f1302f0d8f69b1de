//! Graph builder: arithmetic on node handles records the graph as it computes.
//!
//! Every operation is a pure constructor — it reads its operands, never
//! mutates them, and returns a new node carrying the [`Op`] tag and the
//! operands in argument order. Mixing an `f64` into an expression promotes
//! it to a fresh leaf first.

use std::ops::{Add, BitXor, Div, Mul, Neg, Sub};

use super::{Op, Pow, ValueRef};

/// Promotes a plain scalar to a fresh leaf. The leaf joins no pre-existing
/// graph; any gradient it receives is discarded along with it.
fn promote(x: f64) -> ValueRef {
    ValueRef::new(x)
}

impl ValueRef {
    /// Hyperbolic tangent: `tanh(self)`.
    ///
    /// The backward rule reuses this node's cached forward value:
    /// `d/da tanh(a) = 1 - tanh(a)^2`.
    #[must_use]
    pub fn tanh(&self) -> ValueRef {
        ValueRef::new_with_graph(self.data().tanh(), Op::Tanh, vec![self.clone()])
    }
}

// -----------------------------------------------------------------------------
// std::ops — algebra: x + y, x - y, x * y, x / y, -x
// Reference forms carry the rules; owned and f64 forms delegate to them.
// -----------------------------------------------------------------------------

impl Add for &ValueRef {
    type Output = ValueRef;

    fn add(self, rhs: Self) -> ValueRef {
        ValueRef::new_with_graph(
            self.data() + rhs.data(),
            Op::Add,
            vec![self.clone(), rhs.clone()],
        )
    }
}

impl Sub for &ValueRef {
    type Output = ValueRef;

    fn sub(self, rhs: Self) -> ValueRef {
        ValueRef::new_with_graph(
            self.data() - rhs.data(),
            Op::Sub,
            vec![self.clone(), rhs.clone()],
        )
    }
}

impl Mul for &ValueRef {
    type Output = ValueRef;

    fn mul(self, rhs: Self) -> ValueRef {
        ValueRef::new_with_graph(
            self.data() * rhs.data(),
            Op::Mul,
            vec![self.clone(), rhs.clone()],
        )
    }
}

impl Div for &ValueRef {
    type Output = ValueRef;

    // a / b = a * b^(-1); no quotient rule of its own. A zero-valued rhs
    // yields an infinite result, propagated as data.
    fn div(self, rhs: Self) -> ValueRef {
        self * &rhs.pow(-1.0)
    }
}

impl Neg for &ValueRef {
    type Output = ValueRef;

    fn neg(self) -> ValueRef {
        self * &promote(-1.0)
    }
}

impl Add for ValueRef {
    type Output = ValueRef;

    fn add(self, rhs: ValueRef) -> ValueRef {
        &self + &rhs
    }
}

impl Add<&ValueRef> for ValueRef {
    type Output = ValueRef;

    fn add(self, rhs: &ValueRef) -> ValueRef {
        &self + rhs
    }
}

impl Add<ValueRef> for &ValueRef {
    type Output = ValueRef;

    fn add(self, rhs: ValueRef) -> ValueRef {
        self + &rhs
    }
}

impl Sub for ValueRef {
    type Output = ValueRef;

    fn sub(self, rhs: ValueRef) -> ValueRef {
        &self - &rhs
    }
}

impl Sub<&ValueRef> for ValueRef {
    type Output = ValueRef;

    fn sub(self, rhs: &ValueRef) -> ValueRef {
        &self - rhs
    }
}

impl Sub<ValueRef> for &ValueRef {
    type Output = ValueRef;

    fn sub(self, rhs: ValueRef) -> ValueRef {
        self - &rhs
    }
}

impl Mul for ValueRef {
    type Output = ValueRef;

    fn mul(self, rhs: ValueRef) -> ValueRef {
        &self * &rhs
    }
}

impl Mul<&ValueRef> for ValueRef {
    type Output = ValueRef;

    fn mul(self, rhs: &ValueRef) -> ValueRef {
        &self * rhs
    }
}

impl Mul<ValueRef> for &ValueRef {
    type Output = ValueRef;

    fn mul(self, rhs: ValueRef) -> ValueRef {
        self * &rhs
    }
}

impl Div for ValueRef {
    type Output = ValueRef;

    fn div(self, rhs: ValueRef) -> ValueRef {
        &self / &rhs
    }
}

impl Div<&ValueRef> for ValueRef {
    type Output = ValueRef;

    fn div(self, rhs: &ValueRef) -> ValueRef {
        &self / rhs
    }
}

impl Div<ValueRef> for &ValueRef {
    type Output = ValueRef;

    fn div(self, rhs: ValueRef) -> ValueRef {
        self / &rhs
    }
}

impl Neg for ValueRef {
    type Output = ValueRef;

    fn neg(self) -> ValueRef {
        -&self
    }
}

// -----------------------------------------------------------------------------
// Mixed scalar forms — a + 2.0, 2.0 + a, and so on for - * /
// -----------------------------------------------------------------------------

impl Add<f64> for &ValueRef {
    type Output = ValueRef;

    fn add(self, rhs: f64) -> ValueRef {
        self + &promote(rhs)
    }
}

impl Add<f64> for ValueRef {
    type Output = ValueRef;

    fn add(self, rhs: f64) -> ValueRef {
        &self + &promote(rhs)
    }
}

impl Add<&ValueRef> for f64 {
    type Output = ValueRef;

    fn add(self, rhs: &ValueRef) -> ValueRef {
        &promote(self) + rhs
    }
}

impl Add<ValueRef> for f64 {
    type Output = ValueRef;

    fn add(self, rhs: ValueRef) -> ValueRef {
        &promote(self) + &rhs
    }
}

impl Sub<f64> for &ValueRef {
    type Output = ValueRef;

    fn sub(self, rhs: f64) -> ValueRef {
        self - &promote(rhs)
    }
}

impl Sub<f64> for ValueRef {
    type Output = ValueRef;

    fn sub(self, rhs: f64) -> ValueRef {
        &self - &promote(rhs)
    }
}

impl Sub<&ValueRef> for f64 {
    type Output = ValueRef;

    fn sub(self, rhs: &ValueRef) -> ValueRef {
        &promote(self) - rhs
    }
}

impl Sub<ValueRef> for f64 {
    type Output = ValueRef;

    fn sub(self, rhs: ValueRef) -> ValueRef {
        &promote(self) - &rhs
    }
}

impl Mul<f64> for &ValueRef {
    type Output = ValueRef;

    fn mul(self, rhs: f64) -> ValueRef {
        self * &promote(rhs)
    }
}

impl Mul<f64> for ValueRef {
    type Output = ValueRef;

    fn mul(self, rhs: f64) -> ValueRef {
        &self * &promote(rhs)
    }
}

impl Mul<&ValueRef> for f64 {
    type Output = ValueRef;

    fn mul(self, rhs: &ValueRef) -> ValueRef {
        &promote(self) * rhs
    }
}

impl Mul<ValueRef> for f64 {
    type Output = ValueRef;

    fn mul(self, rhs: ValueRef) -> ValueRef {
        &promote(self) * &rhs
    }
}

impl Div<f64> for &ValueRef {
    type Output = ValueRef;

    fn div(self, rhs: f64) -> ValueRef {
        self / &promote(rhs)
    }
}

impl Div<f64> for ValueRef {
    type Output = ValueRef;

    fn div(self, rhs: f64) -> ValueRef {
        &self / &promote(rhs)
    }
}

impl Div<&ValueRef> for f64 {
    type Output = ValueRef;

    fn div(self, rhs: &ValueRef) -> ValueRef {
        &promote(self) / rhs
    }
}

impl Div<ValueRef> for f64 {
    type Output = ValueRef;

    fn div(self, rhs: ValueRef) -> ValueRef {
        &promote(self) / &rhs
    }
}

// -----------------------------------------------------------------------------
// Pow — (&a).pow(&b), (&a).pow(2.0); `a ^ b` sugar via BitXor
// A non-positive base makes the exponent-side gradient NaN (it needs ln of
// the base); the NaN propagates as data instead of trapping.
// Note: `^` binds looser than `+`/`*`, so parenthesize powers inside larger
// expressions.
// -----------------------------------------------------------------------------

impl Pow<&ValueRef> for &ValueRef {
    type Output = ValueRef;

    fn pow(self, exp: &ValueRef) -> ValueRef {
        ValueRef::new_with_graph(
            self.data().powf(exp.data()),
            Op::Pow,
            vec![self.clone(), exp.clone()],
        )
    }
}

impl Pow<f64> for &ValueRef {
    type Output = ValueRef;

    fn pow(self, exp: f64) -> ValueRef {
        self.pow(&promote(exp))
    }
}

impl BitXor for &ValueRef {
    type Output = ValueRef;

    fn bitxor(self, rhs: Self) -> ValueRef {
        self.pow(rhs)
    }
}

impl BitXor<f64> for &ValueRef {
    type Output = ValueRef;

    fn bitxor(self, rhs: f64) -> ValueRef {
        self.pow(rhs)
    }
}

impl BitXor for ValueRef {
    type Output = ValueRef;

    fn bitxor(self, rhs: ValueRef) -> ValueRef {
        (&self).pow(&rhs)
    }
}

impl BitXor<f64> for ValueRef {
    type Output = ValueRef;

    fn bitxor(self, rhs: f64) -> ValueRef {
        (&self).pow(rhs)
    }
}

impl BitXor<&ValueRef> for f64 {
    type Output = ValueRef;

    fn bitxor(self, rhs: &ValueRef) -> ValueRef {
        (&promote(self)).pow(rhs)
    }
}

impl BitXor<ValueRef> for f64 {
    type Output = ValueRef;

    fn bitxor(self, rhs: ValueRef) -> ValueRef {
        (&promote(self)).pow(&rhs)
    }
}
