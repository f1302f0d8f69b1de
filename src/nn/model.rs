//! Neuron, layer, and network composition over engine nodes.

use rand::distr::Uniform;
use rand::rngs::StdRng;
use rand_distr::Distribution;

use crate::engine::ValueRef;

/// Single tanh neuron: `tanh(bias + Σ wᵢxᵢ)`.
pub struct Neuron {
    weights: Vec<ValueRef>,
    bias: ValueRef,
}

impl Neuron {
    /// Builds a neuron with `n_inputs` weights plus a bias, all drawn
    /// uniformly from `[-init_span, init_span]`.
    #[must_use]
    pub fn new(n_inputs: usize, init_span: f64, rng: &mut StdRng) -> Self {
        let dist = Uniform::new_inclusive(-init_span, init_span).unwrap();
        let weights = (0..n_inputs).map(|_| ValueRef::new(dist.sample(rng))).collect();
        let bias = ValueRef::new(dist.sample(rng));
        Neuron { weights, bias }
    }

    /// Forward pass. Inputs beyond the weight count are ignored (zip).
    #[must_use]
    pub fn forward(&self, inputs: &[ValueRef]) -> ValueRef {
        let mut sum = self.bias.clone();
        for (w, x) in self.weights.iter().zip(inputs) {
            sum = &sum + &(w * x);
        }
        sum.tanh()
    }

    /// Trainable parameters: weights, then the bias.
    #[must_use]
    pub fn parameters(&self) -> Vec<ValueRef> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}

/// Fully-connected layer of tanh neurons sharing the same inputs.
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Builds `n_outputs` neurons, each with `n_inputs` weights.
    #[must_use]
    pub fn new(n_inputs: usize, n_outputs: usize, init_span: f64, rng: &mut StdRng) -> Self {
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(n_inputs, init_span, rng))
            .collect();
        Layer { neurons }
    }

    /// One output node per neuron.
    #[must_use]
    pub fn forward(&self, inputs: &[ValueRef]) -> Vec<ValueRef> {
        self.neurons.iter().map(|n| n.forward(inputs)).collect()
    }

    /// Trainable parameters of every neuron, in neuron order.
    #[must_use]
    pub fn parameters(&self) -> Vec<ValueRef> {
        self.neurons.iter().flat_map(Neuron::parameters).collect()
    }
}

/// Multi-layer perceptron: one [`Layer`] per entry of `n_outputs`.
pub struct Network {
    layers: Vec<Layer>,
}

impl Network {
    /// `Network::new(3, &[4, 4, 1], …)` builds a 3 → 4 → 4 → 1 net.
    #[must_use]
    pub fn new(n_inputs: usize, n_outputs: &[usize], init_span: f64, rng: &mut StdRng) -> Self {
        let mut sizes = vec![n_inputs];
        sizes.extend_from_slice(n_outputs);
        let layers = sizes
            .windows(2)
            .map(|pair| Layer::new(pair[0], pair[1], init_span, rng))
            .collect();
        Network { layers }
    }

    /// Feeds `inputs` through every layer; with no layers, echoes the inputs.
    #[must_use]
    pub fn forward(&self, inputs: &[ValueRef]) -> Vec<ValueRef> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations);
        }
        activations
    }

    /// All trainable parameters across layers, in layer order.
    #[must_use]
    pub fn parameters(&self) -> Vec<ValueRef> {
        self.layers.iter().flat_map(Layer::parameters).collect()
    }
}
