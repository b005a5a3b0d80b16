use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{IngestionError, Result};

use super::model::Dataset;

// ---------------------------------------------------------------------------
// Train/test partitioning
// ---------------------------------------------------------------------------

/// Row indices of each partition, in permutation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Partition `0..n_rows` into train and test indices.
///
/// * `n_test = ceil(n_rows * test_fraction)`, the rest goes to train
/// * indices are shuffled with a `StdRng` seeded from `seed`, so the split is
///   a pure function of `(n_rows, test_fraction, seed)`
/// * the test partition is the head of the permutation
pub fn split_indices(n_rows: usize, test_fraction: f64, seed: u64) -> Result<SplitIndices> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(IngestionError::Split(format!(
            "test fraction must be in (0, 1), got {test_fraction}"
        )));
    }

    let n_test = (n_rows as f64 * test_fraction).ceil() as usize;
    let n_train = n_rows.saturating_sub(n_test);
    if n_test == 0 || n_train == 0 {
        return Err(IngestionError::Split(format!(
            "{n_rows} rows with test fraction {test_fraction} leaves an empty partition \
             (train={n_train}, test={n_test})"
        )));
    }

    let mut permutation: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    permutation.shuffle(&mut rng);

    let train = permutation.split_off(n_test);
    Ok(SplitIndices {
        train,
        test: permutation,
    })
}

/// Split a dataset into `(train, test)`.
pub fn train_test_split(
    dataset: &Dataset,
    test_fraction: f64,
    seed: u64,
) -> Result<(Dataset, Dataset)> {
    let indices = split_indices(dataset.len(), test_fraction, seed)?;
    Ok((dataset.select(&indices.train), dataset.select(&indices.test)))
}
