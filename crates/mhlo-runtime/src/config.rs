//! Configuration for the random generation operators.

use std::path::Path;

use bytemuck::Pod;
use mhlo_core::{Element, MhloError, Result, RngAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::rng::bit_generator;
use crate::rng::uniform::{self, UniformElement};
use crate::shape::Shape;

/// Controls seeding and algorithm choice for RNG operators.
///
/// Missing JSON fields take their defaults:
///
/// ```json
/// { "seed": 1234, "default_algorithm": "ThreeFry" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RngConfig {
    /// Fixed seed for uniform fills and initial bit-generator state.
    /// `None` seeds from system entropy on every call.
    pub seed: Option<u64>,

    /// Algorithm that `RngAlgorithm::Default` resolves to.
    /// `Default` here means the built-in choice (Philox).
    pub default_algorithm: RngAlgorithm,
}

impl RngConfig {
    /// Entropy-seeded configuration with the built-in default algorithm.
    pub fn entropy() -> Self {
        Self::default()
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| MhloError::Config(e.to_string()))
    }

    /// Load a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::info!("Loaded RNG config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// A generator honoring `seed`.
    pub fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => {
                tracing::debug!("RngConfig: seeding from entropy");
                StdRng::from_entropy()
            }
        }
    }

    /// Map `Default` through this configuration.
    pub fn resolve(&self, algorithm: RngAlgorithm) -> RngAlgorithm {
        bit_generator::resolve(algorithm, self.default_algorithm)
    }

    /// A fresh, well-formed bit-generator state: `[seed, 0]`, or a random
    /// key when unseeded.
    pub fn initial_state(&self) -> Vec<u64> {
        use rand::Rng;
        let key = match self.seed {
            Some(seed) => seed,
            None => self.make_rng().gen(),
        };
        vec![key, 0]
    }

    /// `rng_uniform` using this configuration's seed.
    pub fn uniform<T, S>(&self, low: T, high: T, shape: S) -> Vec<T>
    where
        T: UniformElement,
        S: Into<Shape>,
    {
        let mut rng = self.make_rng();
        uniform::rng_uniform_from(low, high, shape, &mut rng)
    }

    /// Checked bit generation with `Default` resolved through this config.
    pub fn bit_generator<T>(
        &self,
        algorithm: RngAlgorithm,
        state: Vec<u64>,
        n: usize,
    ) -> Result<(Vec<u64>, Vec<T>)>
    where
        T: Element + Pod,
    {
        let algorithm = self.resolve(algorithm);
        bit_generator::check_state(algorithm, &state)?;
        Ok(bit_generator::generate(algorithm, state, n))
    }
}

/// `rng_uniform` driven by an [`RngConfig`].
pub fn rng_uniform_with<T, S>(config: &RngConfig, low: T, high: T, shape: S) -> Vec<T>
where
    T: UniformElement,
    S: Into<Shape>,
{
    config.uniform(low, high, shape)
}
