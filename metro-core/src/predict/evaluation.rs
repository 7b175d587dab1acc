use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::Minutes;

/// Hold-out evaluation of a fitted model
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub mean_absolute_error: Minutes,
    pub train_size: usize,
    pub test_size: usize,
}

/// Shuffles `0..n` and splits it into (train, test) index sets
///
/// The test set holds `ceil(n * test_fraction)` samples, but never all of them.
pub fn train_test_split(n: usize, test_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

    let test_size = ((n as f64 * test_fraction).ceil() as usize).min(n.saturating_sub(1));
    let train = indices.split_off(test_size);
    (train, indices)
}

/// Mean of absolute differences, `None` for empty input
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> Option<f64> {
    if actual.is_empty() || actual.len() != predicted.len() {
        return None;
    }
    let total: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs())
        .sum();
    Some(total / actual.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_sizes_and_disjointness() {
        let (train, test) = train_test_split(101, 0.2, 42);
        assert_eq!(test.len(), 21);
        assert_eq!(train.len(), 80);

        let mut all: Vec<usize> = train.iter().chain(&test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..101).collect::<Vec<_>>());
    }

    #[test]
    fn split_is_reproducible() {
        assert_eq!(train_test_split(50, 0.2, 1), train_test_split(50, 0.2, 1));
    }

    #[test]
    fn split_keeps_a_training_sample() {
        let (train, test) = train_test_split(1, 0.5, 0);
        assert_eq!(train.len(), 1);
        assert!(test.is_empty());

        let (train, test) = train_test_split(10, 0.0, 0);
        assert_eq!(train.len(), 10);
        assert!(test.is_empty());
    }

    #[test]
    fn mae() {
        assert_eq!(mean_absolute_error(&[1.0, 2.0, 3.0], &[2.0, 2.0, 1.0]), Some(1.0));
        assert_eq!(mean_absolute_error(&[], &[]), None);
        assert_eq!(mean_absolute_error(&[1.0], &[1.0, 2.0]), None);
    }
}
