//! Seeded synthetic classification data
//!
//! Gaussian-ish blobs around random class centers. Used by the CLI demo and
//! the integration tests in place of a real image dataset.

use super::bunch::DataBunch;
use super::dataset::InMemoryDataset;
use super::target::ClassIndices;
use crate::error::{Error, Result};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Shape of the generated problem
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobSpec {
    /// Samples in the training split
    pub train_samples: usize,
    /// Samples in the validation split
    pub valid_samples: usize,
    /// Input features per sample
    pub features: usize,
    /// Number of classes
    pub classes: usize,
    /// Half-width of the noise added around each center
    pub spread: f32,
}

impl Default for BlobSpec {
    fn default() -> Self {
        Self {
            train_samples: 1024,
            valid_samples: 256,
            features: 8,
            classes: 4,
            spread: 0.5,
        }
    }
}

/// Sample `samples` points from `centers`, cycling through the classes
fn sample_blobs(
    rng: &mut StdRng,
    centers: &Array2<f32>,
    samples: usize,
    spread: f32,
) -> (Array2<f32>, ClassIndices) {
    let classes = centers.nrows();
    let features = centers.ncols();
    let mut inputs = Array2::zeros((samples, features));
    let mut labels = Vec::with_capacity(samples);

    for row in 0..samples {
        let class = rng.random_range(0..classes);
        for col in 0..features {
            // sum of two uniforms: triangular noise, cheap and bounded
            let noise = rng.random_range(-spread..=spread) + rng.random_range(-spread..=spread);
            inputs[[row, col]] = centers[[class, col]] + noise * 0.5;
        }
        labels.push(class);
    }

    (inputs, ClassIndices::new(labels))
}

/// Generate `samples` labelled points from `classes` blobs
pub fn gaussian_blobs(
    samples: usize,
    features: usize,
    classes: usize,
    spread: f32,
    seed: u64,
) -> Result<(Array2<f32>, ClassIndices)> {
    let spec = BlobSpec {
        train_samples: samples,
        valid_samples: 0,
        features,
        classes,
        spread,
    };
    check_spec(&spec)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let centers = random_centers(&mut rng, classes, features);
    Ok(sample_blobs(&mut rng, &centers, samples, spread))
}

/// Build a train/valid bunch drawn from the same blob centers
pub fn blobs_data_bunch(
    spec: &BlobSpec,
    batch_size: usize,
    seed: u64,
) -> Result<DataBunch<InMemoryDataset<Array2<f32>, ClassIndices>>> {
    check_spec(spec)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let centers = random_centers(&mut rng, spec.classes, spec.features);

    let (x_train, y_train) = sample_blobs(&mut rng, &centers, spec.train_samples, spec.spread);
    let (x_valid, y_valid) = sample_blobs(&mut rng, &centers, spec.valid_samples, spec.spread);

    Ok(DataBunch::new(
        InMemoryDataset::new(x_train, y_train)?.batched(batch_size)?,
        InMemoryDataset::new(x_valid, y_valid)?.batched(batch_size)?,
    ))
}

fn random_centers(rng: &mut StdRng, classes: usize, features: usize) -> Array2<f32> {
    Array2::from_shape_fn((classes, features), |_| rng.random_range(-3.0f32..=3.0))
}

fn check_spec(spec: &BlobSpec) -> Result<()> {
    if spec.classes == 0 || spec.features == 0 {
        return Err(Error::Dataset(format!(
            "blobs need at least one class and one feature (classes={}, features={})",
            spec.classes, spec.features
        )));
    }
    if !(spec.spread.is_finite() && spec.spread >= 0.0) {
        return Err(Error::Dataset(format!(
            "blob spread must be finite and >= 0, got {}",
            spec.spread
        )));
    }
    Ok(())
}
