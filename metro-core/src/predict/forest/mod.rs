//! Random forest regressor: bootstrap-aggregated regression trees

mod tree;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub use tree::RegressionTree;

use crate::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    pub n_trees: usize,
    /// Unlimited when unset
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            seed: 42,
        }
    }
}

impl ForestConfig {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.n_trees == 0 {
            return Err(Error::InvalidData(
                "A forest needs at least one tree".to_string(),
            ));
        }
        if self.min_samples_split < 2 {
            return Err(Error::InvalidData(format!(
                "min_samples_split must be at least 2, got {}",
                self.min_samples_split
            )));
        }
        if self.min_samples_leaf == 0 {
            return Err(Error::InvalidData(
                "min_samples_leaf must be at least 1".to_string(),
            ));
        }
        if self.max_depth == Some(0) {
            return Err(Error::InvalidData(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Averaging ensemble of regression trees, each fitted on a bootstrap sample
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
}

impl RandomForest {
    /// Fits the forest. Trees are grown in parallel; every tree draws its
    /// bootstrap sample from its own seed, so the result only depends on
    /// `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidData` for an invalid configuration, empty input
    /// or mismatched feature and target lengths
    pub fn fit<R>(features: &[R], targets: &[f64], config: &ForestConfig) -> Result<Self, Error>
    where
        R: AsRef<[f64]> + Sync,
    {
        config.validate()?;
        if features.is_empty() {
            return Err(Error::InvalidData(
                "Cannot fit a forest without samples".to_string(),
            ));
        }
        if features.len() != targets.len() {
            return Err(Error::InvalidData(format!(
                "{} feature rows but {} targets",
                features.len(),
                targets.len()
            )));
        }

        let n = features.len();
        let mut seeder = ChaCha8Rng::seed_from_u64(config.seed);
        let tree_seeds: Vec<u64> = (0..config.n_trees).map(|_| seeder.random()).collect();

        let trees: Vec<RegressionTree> = tree_seeds
            .into_par_iter()
            .map(|seed| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let sample: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
                RegressionTree::fit(features, targets, sample, config)
            })
            .collect();

        debug!(
            "Fitted {} trees on {n} samples, average depth {:.1}",
            trees.len(),
            trees.iter().map(RegressionTree::depth).sum::<usize>() as f64 / trees.len() as f64
        );

        Ok(Self { trees })
    }

    /// Mean of the tree predictions
    pub fn predict(&self, row: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|tree| tree.predict(row)).sum();
        total / self.trees.len() as f64
    }

    pub fn trees(&self) -> &[RegressionTree] {
        &self.trees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(n_trees: usize) -> ForestConfig {
        ForestConfig {
            n_trees,
            ..ForestConfig::default()
        }
    }

    #[test]
    fn fits_a_linear_trend() {
        let features: Vec<[f64; 1]> = (0_i32..200).map(|x| [f64::from(x)]).collect();
        let targets: Vec<f64> = (0_i32..200).map(|x| 3.0 * f64::from(x) + 1.0).collect();
        let forest = RandomForest::fit(&features, &targets, &small_config(20)).unwrap();

        assert_eq!(forest.trees().len(), 20);
        for x in [10.0, 50.0, 150.0] {
            let expected = 3.0 * x + 1.0;
            assert!(
                (forest.predict(&[x]) - expected).abs() < 15.0,
                "prediction at {x} too far from {expected}"
            );
        }
    }

    #[test]
    fn same_seed_same_forest() {
        let features: Vec<[f64; 2]> = (0_i32..60)
            .map(|x| [f64::from(x % 7), f64::from(x % 5)])
            .collect();
        let targets: Vec<f64> = (0_i32..60).map(|x| f64::from(x % 7) * 2.0).collect();

        let a = RandomForest::fit(&features, &targets, &small_config(8)).unwrap();
        let b = RandomForest::fit(&features, &targets, &small_config(8)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_input() {
        let features = vec![[1.0], [2.0]];
        assert!(RandomForest::fit(&features, &[1.0], &small_config(1)).is_err());

        let empty: Vec<[f64; 1]> = Vec::new();
        assert!(RandomForest::fit(&empty, &[], &small_config(1)).is_err());

        assert!(RandomForest::fit(&features, &[1.0, 2.0], &small_config(0)).is_err());
        let bad_split = ForestConfig {
            min_samples_split: 1,
            ..small_config(1)
        };
        assert!(RandomForest::fit(&features, &[1.0, 2.0], &bad_split).is_err());
    }

    #[test]
    fn prediction_stays_within_target_range() {
        let features: Vec<[f64; 1]> = (0_i32..50).map(|x| [f64::from(x)]).collect();
        let targets: Vec<f64> = (0_i32..50).map(|x| f64::from(x % 3)).collect();
        let forest = RandomForest::fit(&features, &targets, &small_config(10)).unwrap();
        for x in [-5.0, 0.0, 25.5, 80.0] {
            let prediction = forest.predict(&[x]);
            assert!((0.0..=2.0).contains(&prediction));
        }
    }
}
