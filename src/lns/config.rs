//! LNS configuration.

/// Configuration for the wave LNS.
///
/// # Destroy intensity
///
/// The fraction of selected orders removed per iteration grows linearly
/// from `min_destroy_ratio` to `max_destroy_ratio` as consecutive
/// non-improving iterations approach `max_no_improve`.
///
/// # Stopping
///
/// The search stops when the time budget expires, after `max_no_improve`
/// consecutive non-improving iterations, or after `max_iterations`
/// iterations when that is non-zero.
///
/// # Examples
///
/// ```
/// use u_wavepick::lns::LnsConfig;
///
/// let config = LnsConfig::default()
///     .with_destroy_ratio(0.1, 0.3)
///     .with_max_no_improve(500)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LnsConfig {
    /// Destroy ratio right after an improvement.
    pub min_destroy_ratio: f64,

    /// Destroy ratio once non-improvement saturates.
    pub max_destroy_ratio: f64,

    /// Consecutive non-improving iterations before stopping.
    pub max_no_improve: usize,

    /// Hard iteration cap. 0 = no limit.
    pub max_iterations: usize,

    /// Repair score bonus per aisle an order shares with the current wave.
    pub shared_aisle_bonus: f64,

    /// Largest order set whose aisle union is memoized.
    pub aisle_cache_max_orders: usize,

    /// Best objective is sampled into the history every this many iterations.
    pub history_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for LnsConfig {
    fn default() -> Self {
        Self {
            min_destroy_ratio: 0.1,
            max_destroy_ratio: 0.3,
            max_no_improve: 1000,
            max_iterations: 0,
            shared_aisle_bonus: 0.5,
            aisle_cache_max_orders: 20,
            history_interval: 100,
            seed: None,
        }
    }
}

impl LnsConfig {
    pub fn with_destroy_ratio(mut self, min: f64, max: f64) -> Self {
        self.min_destroy_ratio = min;
        self.max_destroy_ratio = max;
        self
    }

    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_shared_aisle_bonus(mut self, bonus: f64) -> Self {
        self.shared_aisle_bonus = bonus;
        self
    }

    pub fn with_aisle_cache_max_orders(mut self, n: usize) -> Self {
        self.aisle_cache_max_orders = n;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n.max(1);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Destroy ratio after `no_improve` consecutive non-improving iterations.
    ///
    /// Linear from the minimum (at 0) to the maximum (at `max_no_improve`).
    pub fn destroy_ratio(&self, no_improve: usize) -> f64 {
        let progress = if self.max_no_improve == 0 {
            1.0
        } else {
            (no_improve as f64 / self.max_no_improve as f64).min(1.0)
        };
        self.min_destroy_ratio + (self.max_destroy_ratio - self.min_destroy_ratio) * progress
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.min_destroy_ratio > 0.0 && self.min_destroy_ratio < 1.0) {
            return Err(format!(
                "min_destroy_ratio must be in (0, 1), got {}",
                self.min_destroy_ratio
            ));
        }
        if !(self.max_destroy_ratio > 0.0 && self.max_destroy_ratio < 1.0) {
            return Err(format!(
                "max_destroy_ratio must be in (0, 1), got {}",
                self.max_destroy_ratio
            ));
        }
        if self.min_destroy_ratio > self.max_destroy_ratio {
            return Err("min_destroy_ratio must be <= max_destroy_ratio".into());
        }
        if self.max_no_improve == 0 {
            return Err("max_no_improve must be positive".into());
        }
        if !self.shared_aisle_bonus.is_finite() || self.shared_aisle_bonus < 0.0 {
            return Err(format!(
                "shared_aisle_bonus must be finite and non-negative, got {}",
                self.shared_aisle_bonus
            ));
        }
        if self.history_interval == 0 {
            return Err("history_interval must be positive".into());
        }
        Ok(())
    }
}
