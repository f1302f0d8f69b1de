//! Graph nodes: scalar value, gradient accumulator, and construction metadata.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::backward;
use super::Op;

/// Internal node state: forward value, gradient, and the operation plus
/// operand handles recorded when the node was built.
pub(crate) struct Value {
    /// Forward pass value.
    pub(crate) data: f64,
    /// Gradient of the result with respect to this node; accumulated during backward.
    pub(crate) grad: f64,
    /// Which operation produced this node (`Op::Leaf` for source values).
    pub(crate) op: Op,
    /// Operand nodes in argument order (empty for leaves).
    pub(crate) prev: Vec<ValueRef>,
    /// Optional diagnostic name; never semantically load-bearing.
    pub(crate) label: Option<String>,
}

/// Handle to a scalar node in the computation graph.
///
/// Wraps the node state in `Rc<RefCell<_>>` so the graph can be shared (the
/// same node may feed several downstream expressions) and gradients can be
/// accumulated during backward. Cloning a `ValueRef` clones the handle, not
/// the node.
#[derive(Clone)]
pub struct ValueRef(pub(crate) Rc<RefCell<Value>>);

impl ValueRef {
    /// Creates a leaf node (no operands) with the given value and zero gradient.
    #[must_use]
    pub fn new(data: f64) -> Self {
        ValueRef::new_with_graph(data, Op::Leaf, Vec::new())
    }

    /// Creates a labelled leaf node; the label only shows up in rendering.
    #[must_use]
    pub fn with_label(data: f64, label: &str) -> Self {
        let v = ValueRef::new(data);
        v.0.borrow_mut().label = Some(label.to_string());
        v
    }

    /// Creates a node that remembers the operation and operands that produced it.
    pub(crate) fn new_with_graph(data: f64, op: Op, prev: Vec<ValueRef>) -> Self {
        ValueRef(Rc::new(RefCell::new(Value {
            data,
            grad: 0.0,
            op,
            prev,
            label: None,
        })))
    }

    /// Forward pass value (scalar).
    #[must_use]
    pub fn data(&self) -> f64 {
        self.0.borrow().data
    }

    /// Gradient of the result with respect to this node; populated by [`ValueRef::backward`].
    #[must_use]
    pub fn grad(&self) -> f64 {
        self.0.borrow().grad
    }

    /// The operation that produced this node (`Op::Leaf` for source values).
    #[must_use]
    pub fn op(&self) -> Op {
        self.0.borrow().op
    }

    /// This node's label, if one was set.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.0.borrow().label.clone()
    }

    /// Sets or replaces this node's label.
    pub fn set_label(&self, label: &str) {
        self.0.borrow_mut().label = Some(label.to_string());
    }

    /// Overwrites the forward value (e.g. a gradient-descent step on a
    /// parameter leaf). Downstream nodes are not recomputed; rebuild the
    /// expression to see the new value flow forward.
    pub fn set_data(&self, data: f64) {
        self.0.borrow_mut().data = data;
    }

    /// Adds `g` to this node's gradient (accumulation across paths and passes).
    pub(crate) fn add_grad(&self, g: f64) {
        self.0.borrow_mut().grad += g;
    }

    /// Zeros the gradient at this node (e.g. before the next training step).
    pub fn zero_grad(&self) {
        self.0.borrow_mut().grad = 0.0;
    }

    /// Runs backpropagation from this node to everything it was computed from.
    ///
    /// Adds one full set of chain-rule gradients onto every reachable node,
    /// including this one (which receives 1.0, the derivative of the result
    /// with respect to itself). Calling `backward` again without zeroing
    /// first adds another full set on top — gradients accumulate until
    /// [`ValueRef::zero_grad`] resets them. On a bare leaf this only bumps
    /// the leaf's own gradient by 1.0.
    pub fn backward(&self) {
        backward::backward(self);
    }
}

impl fmt::Display for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        write!(f, "Value(")?;
        if let Some(label) = &inner.label {
            write!(f, "label={label}, ")?;
        }
        write!(f, "data={}, grad={}", inner.data, inner.grad)?;
        if inner.op != Op::Leaf {
            write!(f, ", op={}", inner.op)?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("Value")
            .field("data", &inner.data)
            .field("grad", &inner.grad)
            .field("op", &inner.op)
            .field("label", &inner.label)
            .field("operands", &inner.prev.len())
            .finish()
    }
}
