//! Softmax cross-entropy for classification

use super::LossFn;
use crate::data::{ClassIndices, Probabilities};
use crate::error::{Error, Result};
use ndarray::{Array2, Axis};

/// Cross Entropy Loss over logits, averaged over the batch
///
/// L = -mean_i sum_j t_ij * log(softmax(z_i)_j)
///
/// Accepts integer class labels or dense target rows.
///
/// # Example
///
/// ```
/// use aprendiz::data::ClassIndices;
/// use aprendiz::train::{CrossEntropyLoss, LossFn};
/// use ndarray::array;
///
/// let logits = array![[2.0f32, 1.0, 0.5]];
/// let loss = CrossEntropyLoss.forward(&logits, &ClassIndices::new(vec![0])).unwrap();
/// assert!(loss > 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CrossEntropyLoss;

impl CrossEntropyLoss {
    /// Row-wise softmax, shifted by the row max for stability
    pub fn softmax(logits: &Array2<f32>) -> Array2<f32> {
        let mut probs = logits.clone();
        for mut row in probs.axis_iter_mut(Axis(0)) {
            let max = row.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
            row.mapv_inplace(|v| (v - max).exp());
            let sum = row.sum();
            row.mapv_inplace(|v| v / sum);
        }
        probs
    }

    fn check_classes(output: &Array2<f32>, target: &ClassIndices) -> Result<()> {
        if output.nrows() != target.len() {
            return Err(Error::shape(
                "CrossEntropyLoss",
                &[target.len(), output.ncols()],
                output.shape(),
            ));
        }
        if let Some(&bad) = target.indices().iter().find(|&&c| c >= output.ncols()) {
            return Err(Error::Loss(format!(
                "class index {bad} out of range for {} logits",
                output.ncols()
            )));
        }
        Ok(())
    }

    fn check_dense(output: &Array2<f32>, target: &Probabilities) -> Result<()> {
        if output.shape() != target.values().shape() {
            return Err(Error::shape(
                "CrossEntropyLoss",
                target.values().shape(),
                output.shape(),
            ));
        }
        Ok(())
    }
}

fn batch_scale(rows: usize) -> f32 {
    if rows == 0 {
        0.0
    } else {
        1.0 / rows as f32
    }
}

impl LossFn<Array2<f32>, ClassIndices> for CrossEntropyLoss {
    fn forward(&self, output: &Array2<f32>, target: &ClassIndices) -> Result<f32> {
        Self::check_classes(output, target)?;
        let probs = Self::softmax(output);
        let total: f32 = target
            .indices()
            .iter()
            .enumerate()
            .map(|(row, &class)| -(probs[[row, class]].max(f32::MIN_POSITIVE)).ln())
            .sum();
        Ok(total * batch_scale(output.nrows()))
    }

    fn gradient(&self, output: &Array2<f32>, target: &ClassIndices) -> Result<Array2<f32>> {
        Self::check_classes(output, target)?;
        // d(CE)/d(logits) = softmax - one_hot
        let mut grad = Self::softmax(output);
        for (row, &class) in target.indices().iter().enumerate() {
            grad[[row, class]] -= 1.0;
        }
        grad.mapv_inplace(|g| g * batch_scale(output.nrows()));
        Ok(grad)
    }

    fn name(&self) -> &str {
        "CrossEntropy"
    }
}

impl LossFn<Array2<f32>, Probabilities> for CrossEntropyLoss {
    fn forward(&self, output: &Array2<f32>, target: &Probabilities) -> Result<f32> {
        Self::check_dense(output, target)?;
        let probs = Self::softmax(output);
        let total: f32 = target
            .values()
            .iter()
            .zip(probs.iter())
            .map(|(&t, &p)| -t * p.max(f32::MIN_POSITIVE).ln())
            .sum();
        Ok(total * batch_scale(output.nrows()))
    }

    fn gradient(&self, output: &Array2<f32>, target: &Probabilities) -> Result<Array2<f32>> {
        Self::check_dense(output, target)?;
        // d/dz_j = p_j * sum(t) - t_j, which is p - t for normalized rows
        let mut grad = Self::softmax(output);
        let scale = batch_scale(output.nrows());
        for (mut g_row, t_row) in grad
            .axis_iter_mut(Axis(0))
            .zip(target.values().axis_iter(Axis(0)))
        {
            let mass = t_row.sum();
            g_row.zip_mut_with(&t_row, |g, &t| *g = (*g * mass - t) * scale);
        }
        Ok(grad)
    }

    fn name(&self) -> &str {
        "CrossEntropy"
    }
}
