//! Selector configuration.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Configuration for a selection run.
///
/// # Examples
///
/// ```
/// use u_curate::selector::SelectorConfig;
///
/// let config = SelectorConfig::default()
///     .with_count(10)
///     .with_seed(42);
/// assert_eq!(config.count, Some(10));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectorConfig {
    /// Maximum number of items to select. `None` selects as many as the
    /// rules allow.
    pub count: Option<usize>,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl SelectorConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.count = None;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the random source for one run.
    pub(crate) fn create_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        }
    }
}
