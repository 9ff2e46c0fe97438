//! Execution configuration

use tensolve_core::{TensorError, TensorResult};
use tensolve_kernels::ChunkWeighting;

/// Default number of reduction chunks
pub const DEFAULT_PARALLELISM: usize = 4;

/// Environment variable overriding [`ExecConfig::parallelism`]
pub const ENV_REDUCE_CHUNKS: &str = "TENSOLVE_REDUCE_CHUNKS";
/// Environment variable overriding [`ExecConfig::weighting`] (`chunk` or `element`)
pub const ENV_CHUNK_WEIGHTING: &str = "TENSOLVE_CHUNK_WEIGHTING";
/// Environment variable overriding [`ExecConfig::parallel_batches`]
pub const ENV_PARALLEL_BATCHES: &str = "TENSOLVE_PARALLEL_BATCHES";

/// Configuration shared by the reduction engine and the batch runner
#[derive(Clone, Debug, PartialEq)]
pub struct ExecConfig {
    /// Number of chunks a reduction is split into (must be >= 1)
    pub parallelism: usize,
    /// How mean and variance weight their chunk partials
    pub weighting: ChunkWeighting,
    /// Solve batch pairs concurrently
    pub parallel_batches: bool,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            parallelism: DEFAULT_PARALLELISM,
            weighting: ChunkWeighting::default(),
            parallel_batches: true,
        }
    }
}

impl ExecConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of reduction chunks
    pub fn with_parallelism(mut self, parts: usize) -> Self {
        self.parallelism = parts;
        self
    }

    /// Set the chunk weighting for mean and variance
    pub fn with_weighting(mut self, weighting: ChunkWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Enable or disable concurrent batch solving
    pub fn with_parallel_batches(mut self, enabled: bool) -> Self {
        self.parallel_batches = enabled;
        self
    }

    /// Defaults overridden by `TENSOLVE_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidArgument`] when a variable is set to an
    /// unparsable value or the result fails [`validate`](Self::validate).
    pub fn from_env() -> TensorResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> TensorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_REDUCE_CHUNKS) {
            config.parallelism = raw.trim().parse().map_err(|_| {
                TensorError::invalid_argument(
                    ENV_REDUCE_CHUNKS,
                    format!("expected a positive integer, got '{}'", raw),
                )
            })?;
        }

        if let Some(raw) = lookup(ENV_CHUNK_WEIGHTING) {
            config.weighting = raw.parse()?;
        }

        if let Some(raw) = lookup(ENV_PARALLEL_BATCHES) {
            config.parallel_batches = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(TensorError::invalid_argument(
                        ENV_PARALLEL_BATCHES,
                        format!("expected a boolean, got '{}'", raw),
                    ))
                }
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidArgument`] if `parallelism` is zero.
    pub fn validate(&self) -> TensorResult<()> {
        if self.parallelism == 0 {
            return Err(TensorError::invalid_argument(
                "parallelism",
                "reductions need at least one chunk",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ExecConfig::default();
        assert_eq!(config.parallelism, 4);
        assert_eq!(config.weighting, ChunkWeighting::PerElement);
        assert!(config.parallel_batches);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ExecConfig::new()
            .with_parallelism(8)
            .with_weighting(ChunkWeighting::PerChunk)
            .with_parallel_batches(false);
        assert_eq!(config.parallelism, 8);
        assert_eq!(config.weighting, ChunkWeighting::PerChunk);
        assert!(!config.parallel_batches);
    }

    #[test]
    fn test_zero_parallelism_rejected() {
        let err = ExecConfig::new().with_parallelism(0).validate().unwrap_err();
        assert!(matches!(err, TensorError::InvalidArgument { arg: "parallelism", .. }));
    }

    #[test]
    fn test_lookup_overrides() {
        let config = ExecConfig::from_lookup(lookup(&[
            (ENV_REDUCE_CHUNKS, "6"),
            (ENV_CHUNK_WEIGHTING, "chunk"),
            (ENV_PARALLEL_BATCHES, "0"),
        ]))
        .unwrap();
        assert_eq!(config.parallelism, 6);
        assert_eq!(config.weighting, ChunkWeighting::PerChunk);
        assert!(!config.parallel_batches);
    }

    #[test]
    fn test_lookup_empty_is_default() {
        let config = ExecConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ExecConfig::default());
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        assert!(ExecConfig::from_lookup(lookup(&[(ENV_REDUCE_CHUNKS, "four")])).is_err());
        assert!(ExecConfig::from_lookup(lookup(&[(ENV_REDUCE_CHUNKS, "0")])).is_err());
        assert!(matches!(
            ExecConfig::from_lookup(lookup(&[(ENV_CHUNK_WEIGHTING, "median")])),
            Err(TensorError::InvalidArgument { arg: "weighting", .. })
        ));
        assert!(ExecConfig::from_lookup(lookup(&[(ENV_PARALLEL_BATCHES, "maybe")])).is_err());
    }
}
