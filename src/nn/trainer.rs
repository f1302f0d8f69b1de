//! Gradient-descent training over a small fixed regression task.

use rand::{prelude::*, rngs::StdRng};

use super::model::Network;
use crate::config::Config;
use crate::engine::{Pow, ValueRef};

/// Input rows of the demo task.
static TRAIN_INPUTS: [[f64; 3]; 4] = [
    [2.0, 3.0, -1.0],
    [3.0, -1.0, 0.5],
    [0.5, 1.0, 1.0],
    [1.0, 1.0, -1.0],
];

/// Regression targets, one per input row.
static TRAIN_TARGETS: [f64; 4] = [1.0, -1.0, -1.0, 1.0];

/// Hidden and output layer sizes of the demo network.
static LAYER_SIZES: [usize; 3] = [4, 4, 1];

/// One training cycle: forward over every sample into a sum-of-squared-errors
/// loss, zero grads, backward, then a plain gradient-descent update on
/// `params` (`data += -learning_rate * grad`). The network's first output is
/// the prediction. Returns the loss as measured before the update.
pub fn training_step(
    net: &Network,
    params: &[ValueRef],
    samples: &[(&[f64], f64)],
    learning_rate: f64,
) -> f64 {
    let mut loss = ValueRef::new(0.0);
    for (xs, target) in samples {
        let inputs: Vec<ValueRef> = xs.iter().map(|&x| ValueRef::new(x)).collect();
        let out = net.forward(&inputs);
        let err = &out[0] - *target;
        loss = &loss + &(&err).pow(2.0);
    }
    for p in params {
        p.zero_grad();
    }
    loss.backward();
    for p in params {
        p.set_data(p.data() - learning_rate * p.grad());
    }
    loss.data()
}

/// Trains the demo network per `cfg`, printing progress and final
/// predictions. Returns the last loss value.
pub fn run(cfg: &Config) -> f64 {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let net = Network::new(
        TRAIN_INPUTS[0].len(),
        &LAYER_SIZES,
        cfg.init_span,
        &mut rng,
    );
    let params = net.parameters();
    println!("num params: {}", params.len());

    let samples = demo_samples();
    let mut final_loss = f64::NAN;
    for step in 0..cfg.num_steps {
        let loss = training_step(&net, &params, &samples, cfg.learning_rate);
        if (step + 1) % cfg.loss_log_every == 0 || step == 0 {
            println!("step {:4} / {:4} | loss {:.4}", step + 1, cfg.num_steps, loss);
        }
        final_loss = loss;
    }

    println!("\n--- predictions after training ---");
    for (xs, target) in &samples {
        let inputs: Vec<ValueRef> = xs.iter().map(|&x| ValueRef::new(x)).collect();
        let out = net.forward(&inputs);
        println!(
            "input {:?} -> pred {:+.4} | target {:+.0}",
            xs,
            out[0].data(),
            target
        );
    }
    final_loss
}

/// The demo dataset as `(inputs, target)` pairs.
pub(crate) fn demo_samples() -> Vec<(&'static [f64], f64)> {
    TRAIN_INPUTS
        .iter()
        .map(|row| row.as_slice())
        .zip(TRAIN_TARGETS)
        .collect()
}
