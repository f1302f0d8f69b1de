//! Binary entrypoint: trains the demo network and prints its predictions.

use scalargrad::{config, nn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::from_env()?;
    cfg.validate()?;
    nn::run(&cfg);
    Ok(())
}
