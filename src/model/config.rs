use burn::{config::Config, optim::AdamWConfig};

/// Hyperparameters and output location of a [`Classifier`](super::classifier::Classifier).
#[derive(Config, Debug)]
pub struct ClassifierConfig {
    /// AdamW settings used for every `train` call.
    pub optimizer: AdamWConfig,
    /// Number of full-batch epochs per `train` call.
    #[config(default = 1400)]
    pub max_epoch: usize,
    #[config(default = 1e-3)]
    pub learning_rate: f64,
    /// A progress line is logged every `log_interval` epochs, 0 disables it.
    #[config(default = 50)]
    pub log_interval: usize,
    /// Directory receiving the accuracy and loss plots.
    #[config(default = "String::from(\"result/stage_2_result\")")]
    pub result_dir: String,
}

/// AdamW with the customary moment parameters (epsilon 1e-8, weight decay 1e-2).
pub fn adamw() -> AdamWConfig {
    AdamWConfig::new()
        .with_beta_1(0.9)
        .with_beta_2(0.999)
        .with_epsilon(1e-8)
        .with_weight_decay(1e-2)
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::new(adamw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClassifierConfig::default();

        assert_eq!(config.max_epoch, 1400);
        assert_eq!(config.learning_rate, 1e-3);
        assert_eq!(config.log_interval, 50);
        assert_eq!(config.result_dir, "result/stage_2_result");
    }

    #[test]
    fn survives_a_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = ClassifierConfig::default()
            .with_max_epoch(10)
            .with_result_dir("plots".to_string());

        config.save(&path).unwrap();
        let loaded = ClassifierConfig::load(&path).unwrap();

        assert_eq!(loaded.max_epoch, 10);
        assert_eq!(loaded.result_dir, "plots");
        assert_eq!(loaded.learning_rate, config.learning_rate);
    }
}
