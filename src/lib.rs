//! # scalargrad
//!
//! Scalar reverse-mode automatic differentiation: a computation graph built
//! implicitly by ordinary arithmetic on [`engine::ValueRef`] nodes, with
//! backpropagation over the recorded graph, plus a small tanh network and
//! gradient-descent trainer driven by env-based configuration.

pub mod config;
pub mod engine;
pub mod nn;
