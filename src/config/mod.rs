//! Configuration for training runs.
//!
//! Load from environment via [`from_env`] and validate with
//! [`Config::validate`]. Default values and env key names are centralized in
//! the `constants` submodule.

mod builder;
mod constants;
mod error;

use constants::{
    DEFAULT_INIT_SPAN, DEFAULT_LEARNING_RATE, DEFAULT_LOSS_LOG_EVERY, DEFAULT_NUM_STEPS,
    DEFAULT_SEED,
};

pub use builder::{env_key, env_parsed, env_string, from_env};
pub use error::ConfigError;

/// Run settings for the demo trainer.
///
/// Use [`from_env`] to build from environment variables and
/// [`Config::validate`] before use.
#[derive(Clone, Debug)]
pub struct Config {
    /// Seed for RNG (reproducibility).
    pub seed: u64,
    /// Half-width of the uniform weight-init range `[-init_span, init_span]`.
    pub init_span: f64,
    /// Gradient-descent learning rate.
    pub learning_rate: f64,
    /// Number of training steps.
    pub num_steps: usize,
    /// Log loss every this many steps (and at step 0).
    pub loss_log_every: usize,
}

impl Default for Config {
    /// Returns default configuration (suitable for tests and fallbacks).
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            init_span: DEFAULT_INIT_SPAN,
            learning_rate: DEFAULT_LEARNING_RATE,
            num_steps: DEFAULT_NUM_STEPS,
            loss_log_every: DEFAULT_LOSS_LOG_EVERY,
        }
    }
}

impl Config {
    /// Validates configuration. Returns `Ok(())` if valid, or a [`ConfigError`].
    ///
    /// Ensures positive finite `init_span` and `learning_rate` and non-zero
    /// step counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.init_span.is_finite() || self.init_span <= 0.0 {
            return Err(ConfigError::Validation(
                "init_span must be a positive finite number".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::Validation(
                "learning_rate must be a positive finite number".to_string(),
            ));
        }
        if self.num_steps == 0 {
            return Err(ConfigError::Validation(
                "num_steps must be greater than 0".to_string(),
            ));
        }
        if self.loss_log_every == 0 {
            return Err(ConfigError::Validation(
                "loss_log_every must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::constants::{ENV_LEARNING_RATE, ENV_LOSS_LOG_EVERY, ENV_NUM_STEPS, ENV_SEED};
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_num_steps() {
        let cfg = Config {
            num_steps: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_loss_log_every() {
        let cfg = Config {
            loss_log_every: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_nonpositive_learning_rate() {
        let cfg_zero = Config {
            learning_rate: 0.0,
            ..Config::default()
        };
        assert!(cfg_zero.validate().is_err());
        let cfg_neg = Config {
            learning_rate: -0.1,
            ..Config::default()
        };
        assert!(cfg_neg.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_init_span() {
        let cfg_zero = Config {
            init_span: 0.0,
            ..Config::default()
        };
        assert!(cfg_zero.validate().is_err());
        let cfg_nan = Config {
            init_span: f64::NAN,
            ..Config::default()
        };
        assert!(cfg_nan.validate().is_err());
        let cfg_inf = Config {
            init_span: f64::INFINITY,
            ..Config::default()
        };
        assert!(cfg_inf.validate().is_err());
    }

    /// Lock so env tests don't run in parallel and pollute each other.
    static CONFIG_ENV_LOCK: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

    #[test]
    fn from_env_falls_back_to_defaults() {
        let _g = CONFIG_ENV_LOCK
            .get_or_init(|| std::sync::Mutex::new(()))
            .lock()
            .unwrap();
        std::env::remove_var(env_key(ENV_SEED));
        std::env::remove_var(env_key(ENV_NUM_STEPS));
        let cfg = from_env().unwrap();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.seed, Config::default().seed);
        assert_eq!(cfg.num_steps, Config::default().num_steps);
    }

    #[test]
    fn from_env_overrides_with_env_vars() {
        let _g = CONFIG_ENV_LOCK
            .get_or_init(|| std::sync::Mutex::new(()))
            .lock()
            .unwrap();
        let key_seed = env_key(ENV_SEED);
        let key_lr = env_key(ENV_LEARNING_RATE);
        std::env::set_var(&key_seed, "7");
        std::env::set_var(&key_lr, "0.1");
        let cfg = from_env().unwrap();
        assert_eq!(cfg.seed, 7);
        assert!((cfg.learning_rate - 0.1).abs() < 1e-12);
        std::env::remove_var(key_seed);
        std::env::remove_var(key_lr);
    }

    #[test]
    fn from_env_returns_error_on_invalid_parse() {
        let _g = CONFIG_ENV_LOCK
            .get_or_init(|| std::sync::Mutex::new(()))
            .lock()
            .unwrap();
        let key = env_key(ENV_SEED);
        std::env::set_var(&key, "not_a_number");
        let res = from_env();
        std::env::remove_var(key);
        assert!(matches!(res, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn config_error_validation_display() {
        let e = ConfigError::Validation("num_steps must be greater than 0".to_string());
        assert!(e.to_string().contains("config validation"));
        assert!(e.to_string().contains("num_steps"));
        assert_eq!(e.message(), "num_steps must be greater than 0");
    }

    #[test]
    fn config_error_parse_display() {
        let e = ConfigError::Parse {
            key: "SCALARGRAD_SEED".to_string(),
            value: "abc".to_string(),
            message: "invalid digit".to_string(),
        };
        assert!(e.to_string().contains("SCALARGRAD_SEED"));
        assert!(e.to_string().contains("abc"));
        assert_eq!(e.message(), "invalid digit");
    }

    #[test]
    fn env_string_unset_returns_none() {
        let key = "SCALARGRAD_UNLIKELY_KEY_12345";
        assert_eq!(env_string(key).unwrap(), None);
    }

    #[test]
    fn env_parsed_unset_returns_none() {
        let key = "SCALARGRAD_UNLIKELY_KEY_67890";
        assert_eq!(env_parsed::<u64>(key).unwrap(), None);
    }

    #[test]
    fn env_parsed_invalid_returns_parse_error() {
        let _g = CONFIG_ENV_LOCK
            .get_or_init(|| std::sync::Mutex::new(()))
            .lock()
            .unwrap();
        let key = env_key(ENV_LOSS_LOG_EVERY);
        std::env::set_var(&key, "not_usize");
        let res = env_parsed::<usize>(&key);
        std::env::remove_var(key);
        assert!(matches!(res, Err(ConfigError::Parse { .. })));
    }
}
