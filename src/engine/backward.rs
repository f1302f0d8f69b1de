//! Backward driver: reverse topological traversal with chain-rule dispatch.
//!
//! All local backward rules live in one match on [`Op`] here, reading current
//! operand values at traversal time; nodes carry no closures.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::value::Value;
use super::{Op, ValueRef};

/// Node identity: two handles name the same node iff they share an
/// allocation. Structural equality of values is never what backward wants.
type NodeKey = *const RefCell<Value>;

/// Adds one full set of chain-rule gradients onto every node reachable from
/// `root`, including `root` itself (which receives 1.0).
///
/// The pass accumulates into a local map first and folds into stored
/// gradients at the end; since the map is computed from operand values only,
/// running backward twice without zeroing adds the same set twice.
pub(crate) fn backward(root: &ValueRef) {
    let order = topo_order(root);

    // Gradient field for this pass alone, keyed by node identity.
    let mut deltas: HashMap<NodeKey, f64> = HashMap::with_capacity(order.len());
    deltas.insert(Rc::as_ptr(&root.0), 1.0);

    // Reverse topological order: every consumer of a node is processed before
    // the node itself, so `upstream` is complete when the node distributes it.
    for v in order.iter().rev() {
        let upstream = deltas.get(&Rc::as_ptr(&v.0)).copied().unwrap_or(0.0);
        let inner = v.0.borrow();
        match inner.op {
            Op::Leaf => {}
            Op::Add => {
                bump(&mut deltas, &inner.prev[0], upstream);
                bump(&mut deltas, &inner.prev[1], upstream);
            }
            Op::Sub => {
                bump(&mut deltas, &inner.prev[0], upstream);
                bump(&mut deltas, &inner.prev[1], -upstream);
            }
            Op::Mul => {
                let (a, b) = (inner.prev[0].data(), inner.prev[1].data());
                bump(&mut deltas, &inner.prev[0], b * upstream);
                bump(&mut deltas, &inner.prev[1], a * upstream);
            }
            Op::Pow => {
                // d/da a^b = b * a^(b-1); d/db a^b = ln(a) * a^b.
                let (a, b) = (inner.prev[0].data(), inner.prev[1].data());
                bump(&mut deltas, &inner.prev[0], b * a.powf(b - 1.0) * upstream);
                bump(&mut deltas, &inner.prev[1], a.ln() * a.powf(b) * upstream);
            }
            Op::Tanh => {
                // Uses the cached forward output: d/da tanh(a) = 1 - tanh(a)^2.
                let t = inner.data;
                bump(&mut deltas, &inner.prev[0], (1.0 - t * t) * upstream);
            }
        }
    }

    for v in &order {
        let g = deltas.get(&Rc::as_ptr(&v.0)).copied().unwrap_or(0.0);
        v.add_grad(g);
    }
}

/// Accumulates `g` into the pass-local gradient of `node`.
fn bump(deltas: &mut HashMap<NodeKey, f64>, node: &ValueRef, g: f64) {
    *deltas.entry(Rc::as_ptr(&node.0)).or_insert(0.0) += g;
}

/// Post-order depth-first walk from `root`: operands come before the nodes
/// that consume them. Each node is recorded exactly once, keyed by identity,
/// no matter how many paths reach it.
fn topo_order(root: &ValueRef) -> Vec<ValueRef> {
    fn visit(v: &ValueRef, visited: &mut HashSet<NodeKey>, order: &mut Vec<ValueRef>) {
        if !visited.insert(Rc::as_ptr(&v.0)) {
            return;
        }
        for operand in &v.0.borrow().prev {
            visit(operand, visited, order);
        }
        order.push(v.clone());
    }

    let mut order = Vec::new();
    let mut visited = HashSet::new();
    visit(root, &mut visited, &mut order);
    order
}
