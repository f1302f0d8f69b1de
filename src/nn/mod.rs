//! Feed-forward network and trainer built on the autodiff engine.
//!
//! [`Neuron`]/[`Layer`]/[`Network`] compose engine operations into an
//! all-tanh MLP; [`run`] trains it with plain gradient descent on a small
//! fixed regression task, one zero/backward/update cycle per step.

mod model;
#[cfg(test)]
mod tests;
mod trainer;

pub use model::{Layer, Network, Neuron};
pub use trainer::{run, training_step};
