//! Classification metrics

use super::Metric;
use crate::data::{ClassIndices, Probabilities};
use ndarray::{Array2, ArrayView1, Axis};

/// Index of the largest entry; ties resolve to the lowest index
pub(crate) fn argmax(row: ArrayView1<'_, f32>) -> usize {
    row.iter()
        .enumerate()
        .fold((0, f32::NEG_INFINITY), |(best, max), (i, &v)| {
            if v > max {
                (i, v)
            } else {
                (best, max)
            }
        })
        .0
}

/// Fraction of rows whose argmax matches the class label
///
/// # Example
///
/// ```
/// use aprendiz::data::ClassIndices;
/// use aprendiz::train::{Accuracy, Metric};
/// use ndarray::array;
///
/// let logits = array![[0.9f32, 0.1], [0.2, 0.8], [0.7, 0.3]];
/// let labels = ClassIndices::new(vec![0, 1, 1]);
/// let acc = Accuracy.compute(&logits, &labels);
/// assert!((acc - 2.0 / 3.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Accuracy;

impl Metric<Array2<f32>, ClassIndices> for Accuracy {
    fn compute(&self, output: &Array2<f32>, target: &ClassIndices) -> f32 {
        let rows = output.nrows().min(target.len());
        if rows == 0 {
            return 0.0;
        }
        let correct = output
            .axis_iter(Axis(0))
            .zip(target.indices().iter())
            .filter(|(row, class)| argmax(row.view()) == **class)
            .count();
        correct as f32 / rows as f32
    }

    fn name(&self) -> &str {
        "accuracy"
    }
}

impl Metric<Array2<f32>, Probabilities> for Accuracy {
    /// Compares the argmax of each output row with the argmax of its target row
    fn compute(&self, output: &Array2<f32>, target: &Probabilities) -> f32 {
        let rows = output.nrows().min(target.values().nrows());
        if rows == 0 {
            return 0.0;
        }
        let correct = output
            .axis_iter(Axis(0))
            .zip(target.values().axis_iter(Axis(0)))
            .filter(|(out, tgt)| argmax(out.view()) == argmax(tgt.view()))
            .count();
        correct as f32 / rows as f32
    }

    fn name(&self) -> &str {
        "accuracy"
    }
}

/// Fraction of rows whose argmax does not match the class label
#[derive(Clone, Copy, Debug, Default)]
pub struct ErrorRate;

impl Metric<Array2<f32>, ClassIndices> for ErrorRate {
    fn compute(&self, output: &Array2<f32>, target: &ClassIndices) -> f32 {
        if output.nrows().min(target.len()) == 0 {
            return 0.0;
        }
        1.0 - Accuracy.compute(output, target)
    }

    fn name(&self) -> &str {
        "error_rate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_accuracy_all_correct() {
        let logits = array![[3.0f32, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let labels = ClassIndices::new(vec![0, 2]);
        assert_relative_eq!(Accuracy.compute(&logits, &labels), 1.0);
    }

    #[test]
    fn test_accuracy_partial() {
        let logits = array![[1.0f32, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 1.0]];
        let labels = ClassIndices::new(vec![0, 1, 1, 0]);
        assert_relative_eq!(Accuracy.compute(&logits, &labels), 0.5);
        assert_relative_eq!(ErrorRate.compute(&logits, &labels), 0.5);
    }

    #[test]
    fn test_accuracy_empty() {
        let logits = Array2::zeros((0, 3));
        let labels = ClassIndices::new(vec![]);
        assert_eq!(Accuracy.compute(&logits, &labels), 0.0);
        assert_eq!(ErrorRate.compute(&logits, &labels), 0.0);
    }

    #[test]
    fn test_accuracy_one_hot_targets() {
        let logits = array![[0.2f32, 0.8], [0.6, 0.4]];
        let targets = Probabilities(array![[0.0, 1.0], [0.0, 1.0]]);
        assert_relative_eq!(Accuracy.compute(&logits, &targets), 0.5);
    }

    #[test]
    fn test_accuracy_serves_both_label_kinds() {
        let logits = array![[0.2f32, 0.8], [0.6, 0.4]];
        let by_class: Box<dyn Metric<Array2<f32>, ClassIndices>> = Box::new(Accuracy);
        let by_row: Box<dyn Metric<Array2<f32>, Probabilities>> = Box::new(Accuracy);

        let classes = ClassIndices::new(vec![1, 1]);
        let one_hot = classes.to_one_hot(2).unwrap();
        assert_relative_eq!(by_class.compute(&logits, &classes), 0.5);
        assert_relative_eq!(by_row.compute(&logits, &one_hot), 0.5);
        assert_eq!(by_class.name(), by_row.name());
    }

    #[test]
    fn test_argmax_ties_pick_first() {
        let row = array![1.0f32, 3.0, 3.0];
        assert_eq!(argmax(row.view()), 1);
    }
}
