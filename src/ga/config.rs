//! GA configuration.

/// Parameters of the evolutionary loop.
///
/// # Defaults
///
/// ```
/// use u_pitstrat::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 80);
/// assert_eq!(config.max_generations, 60);
/// assert_eq!(config.elite_count, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pitstrat::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(120)
///     .with_max_generations(100)
///     .with_mutation_rate(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of generations to run. The loop has no other stopping rule.
    pub max_generations: usize,

    /// Individuals drawn (without replacement) per tournament.
    pub tournament_size: usize,

    /// Best individuals copied unchanged into the next generation.
    ///
    /// With at least one elite the per-generation best fitness can never
    /// get worse.
    pub elite_count: usize,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Evaluate fitness on rayon worker threads.
    ///
    /// Only has an effect with the `parallel` cargo feature. Evaluation
    /// draws no randomness, so results match the sequential path.
    pub parallel: bool,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 80,
            max_generations: 60,
            tournament_size: 3,
            elite_count: 2,
            mutation_rate: 0.25,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.elite_count >= self.population_size {
            return Err("elite_count must be smaller than population_size".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be within [0, 1] (got {})",
                self.mutation_rate
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 80);
        assert_eq!(config.max_generations, 60);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.elite_count, 2);
        assert!((config.mutation_rate - 0.25).abs() < 1e-12);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(10)
            .with_tournament_size(4)
            .with_elite_count(1)
            .with_mutation_rate(0.5)
            .with_parallel(false)
            .with_seed(7);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.max_generations, 10);
        assert_eq!(config.tournament_size, 4);
        assert_eq!(config.elite_count, 1);
        assert!((config.mutation_rate - 0.5).abs() < 1e-12);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_mutation_rate_clamped() {
        assert_eq!(GaConfig::default().with_mutation_rate(3.0).mutation_rate, 1.0);
        assert_eq!(GaConfig::default().with_mutation_rate(-1.0).mutation_rate, 0.0);
    }

    #[test]
    fn test_validate_rejects() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
        assert!(GaConfig::default().with_max_generations(0).validate().is_err());
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
        assert!(GaConfig::default()
            .with_population_size(4)
            .with_elite_count(4)
            .validate()
            .is_err());

        let mut config = GaConfig::default();
        config.mutation_rate = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_elites_allowed() {
        assert!(GaConfig::default().with_elite_count(0).validate().is_ok());
    }
}
