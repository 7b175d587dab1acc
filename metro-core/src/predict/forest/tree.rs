use super::ForestConfig;

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// CART regression tree, split by minimum squared error
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionTree {
    nodes: Vec<Node>,
}

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    score: f64,
}

impl RegressionTree {
    /// Fits the tree on the rows selected by `sample` (indices may repeat)
    pub(crate) fn fit<R: AsRef<[f64]>>(
        features: &[R],
        targets: &[f64],
        sample: Vec<usize>,
        config: &ForestConfig,
    ) -> Self {
        let mut tree = Self { nodes: Vec::new() };
        if sample.is_empty() {
            tree.nodes.push(Node::Leaf { value: 0.0 });
        } else {
            tree.grow(features, targets, sample, 0, config);
        }
        tree
    }

    pub fn predict(&self, row: &[f64]) -> f64 {
        let mut current = 0;
        loop {
            match self.nodes[current] {
                Node::Leaf { value } => return value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    current = if row[feature] <= threshold { left } else { right };
                }
            }
        }
    }

    /// Number of nodes, leaves included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn depth(&self) -> usize {
        fn depth_from(nodes: &[Node], index: usize) -> usize {
            match nodes[index] {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => {
                    1 + depth_from(nodes, left).max(depth_from(nodes, right))
                }
            }
        }
        depth_from(&self.nodes, 0)
    }

    /// Grows the subtree for `sample` and returns the index of its root
    fn grow<R: AsRef<[f64]>>(
        &mut self,
        features: &[R],
        targets: &[f64],
        sample: Vec<usize>,
        depth: usize,
        config: &ForestConfig,
    ) -> usize {
        let index = self.nodes.len();
        let n = sample.len();
        let sum: f64 = sample.iter().map(|&i| targets[i]).sum();
        let value = sum / n as f64;
        self.nodes.push(Node::Leaf { value });

        let pure = sample.iter().all(|&i| targets[i] == targets[sample[0]]);
        let depth_reached = config.max_depth.is_some_and(|max| depth >= max);
        if pure || depth_reached || n < config.min_samples_split {
            return index;
        }

        let Some(split) = best_split(features, targets, &sample, config.min_samples_leaf) else {
            return index;
        };

        let (left_sample, right_sample): (Vec<usize>, Vec<usize>) = sample
            .into_iter()
            .partition(|&i| features[i].as_ref()[split.feature] <= split.threshold);

        let left = self.grow(features, targets, left_sample, depth + 1, config);
        let right = self.grow(features, targets, right_sample, depth + 1, config);
        self.nodes[index] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        index
    }
}

/// Finds the split with the largest reduction of squared error.
///
/// Minimizing the summed squared error of both children is the same as
/// maximizing `sum_left² / n_left + sum_right² / n_right`.
fn best_split<R: AsRef<[f64]>>(
    features: &[R],
    targets: &[f64],
    sample: &[usize],
    min_samples_leaf: usize,
) -> Option<SplitCandidate> {
    let n = sample.len();
    let min_leaf = min_samples_leaf.max(1);
    if n < 2 * min_leaf {
        return None;
    }

    let total: f64 = sample.iter().map(|&i| targets[i]).sum();
    let parent_score = total * total / n as f64;
    let feature_count = features[sample[0]].as_ref().len();

    let mut best: Option<SplitCandidate> = None;
    let mut column: Vec<(f64, f64)> = Vec::with_capacity(n);

    for feature in 0..feature_count {
        column.clear();
        column.extend(
            sample
                .iter()
                .map(|&i| (features[i].as_ref()[feature], targets[i])),
        );
        column.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut left_sum = 0.0;
        for position in 0..n - 1 {
            left_sum += column[position].1;
            let left_count = position + 1;
            let right_count = n - left_count;

            // Equal values cannot be separated
            if column[position].0 == column[position + 1].0 {
                continue;
            }
            if left_count < min_leaf || right_count < min_leaf {
                continue;
            }

            let right_sum = total - left_sum;
            let score =
                left_sum * left_sum / left_count as f64 + right_sum * right_sum / right_count as f64;

            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(SplitCandidate {
                    feature,
                    threshold: (column[position].0 + column[position + 1].0) / 2.0,
                    score,
                });
            }
        }
    }

    // Only keep splits that actually reduce the error
    best.filter(|split| split.score > parent_score * (1.0 + 1e-12))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ForestConfig {
        ForestConfig {
            n_trees: 1,
            ..ForestConfig::default()
        }
    }

    #[test]
    fn learns_a_step_function() {
        let features: Vec<[f64; 1]> = (0_i32..20).map(|x| [f64::from(x)]).collect();
        let targets: Vec<f64> = (0_i32..20).map(|x| if x < 10 { 1.0 } else { 5.0 }).collect();
        let tree = RegressionTree::fit(&features, &targets, (0..20).collect(), &config());

        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.predict(&[3.0]), 1.0);
        assert_eq!(tree.predict(&[9.4]), 1.0);
        assert_eq!(tree.predict(&[9.6]), 5.0);
        assert_eq!(tree.predict(&[100.0]), 5.0);
    }

    #[test]
    fn constant_targets_give_a_single_leaf() {
        let features = vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let targets = vec![7.0, 7.0, 7.0];
        let tree = RegressionTree::fit(&features, &targets, vec![0, 1, 2], &config());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.predict(&[0.0, 0.0]), 7.0);
    }

    #[test]
    fn picks_the_informative_feature() {
        // Feature 0 is noise, feature 1 decides the target
        let features = vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [1.0, 1.0]];
        let targets = vec![2.0, 2.0, 8.0, 8.0];
        let tree = RegressionTree::fit(&features, &targets, vec![0, 1, 2, 3], &config());
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.predict(&[1.0, 0.0]), 2.0);
        assert_eq!(tree.predict(&[0.0, 1.0]), 8.0);
    }

    #[test]
    fn max_depth_limits_growth() {
        let features: Vec<[f64; 1]> = (0_i32..16).map(|x| [f64::from(x)]).collect();
        let targets: Vec<f64> = (0_i32..16).map(f64::from).collect();
        let limited = ForestConfig {
            max_depth: Some(2),
            ..config()
        };
        let tree = RegressionTree::fit(&features, &targets, (0..16).collect(), &limited);
        assert_eq!(tree.depth(), 2);

        let full = RegressionTree::fit(&features, &targets, (0..16).collect(), &config());
        assert_eq!(full.predict(&[11.0]), 11.0);
    }

    #[test]
    fn identical_features_with_noise_average() {
        let features = vec![[1.0], [1.0], [1.0]];
        let targets = vec![1.0, 2.0, 3.0];
        let tree = RegressionTree::fit(&features, &targets, vec![0, 1, 2], &config());
        assert_eq!(tree.node_count(), 1);
        assert!((tree.predict(&[1.0]) - 2.0).abs() < 1e-12);
    }
}
