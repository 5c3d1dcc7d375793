//! Label representations and row slicing
//!
//! Two label layouts are recognized: integer class indices and dense float
//! rows (one-hot or probability targets). The layout is a property of the
//! label type, exposed as [`Target::KIND`], so consumers branch on a tag
//! instead of inspecting types at runtime.

use crate::error::{Error, Result};
use ndarray::{s, Array1, Array2};
use std::ops::Range;

/// Which label layout a dataset produces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelKind {
    /// One integer class index per row
    ClassIndices,
    /// One dense float row per sample (one-hot, soft labels, regression targets)
    Probabilities,
}

/// Values that are stacked along a leading "row" axis and can be sliced by row
pub trait Rows: Clone {
    /// Number of rows (samples)
    fn rows(&self) -> usize;

    /// Copy out a contiguous range of rows
    fn select_rows(&self, range: Range<usize>) -> Self;
}

/// A batch label usable by the learner
pub trait Target: Rows {
    /// Layout tag for this label type
    const KIND: LabelKind;

    /// Number of samples in the batch
    fn batch_size(&self) -> usize {
        self.rows()
    }
}

impl Rows for Array2<f32> {
    fn rows(&self) -> usize {
        self.nrows()
    }

    fn select_rows(&self, range: Range<usize>) -> Self {
        self.slice(s![range, ..]).to_owned()
    }
}

/// Integer class labels, one per row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassIndices(pub Array1<usize>);

impl ClassIndices {
    /// Wrap a vector of class indices
    pub fn new(indices: Vec<usize>) -> Self {
        Self(Array1::from_vec(indices))
    }

    /// Borrow the raw indices
    pub fn indices(&self) -> &Array1<usize> {
        &self.0
    }

    /// Number of labels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no labels
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expand into one-hot rows with `classes` columns
    pub fn to_one_hot(&self, classes: usize) -> Result<Probabilities> {
        let mut dense = Array2::zeros((self.0.len(), classes));
        for (row, &class) in self.0.iter().enumerate() {
            if class >= classes {
                return Err(Error::Dataset(format!(
                    "class index {class} out of range for {classes} classes"
                )));
            }
            dense[[row, class]] = 1.0;
        }
        Ok(Probabilities(dense))
    }
}

impl Rows for ClassIndices {
    fn rows(&self) -> usize {
        self.0.len()
    }

    fn select_rows(&self, range: Range<usize>) -> Self {
        Self(self.0.slice(s![range]).to_owned())
    }
}

impl Target for ClassIndices {
    const KIND: LabelKind = LabelKind::ClassIndices;
}

/// Dense float labels, one row per sample
#[derive(Clone, Debug, PartialEq)]
pub struct Probabilities(pub Array2<f32>);

impl Probabilities {
    /// Borrow the dense label matrix
    pub fn values(&self) -> &Array2<f32> {
        &self.0
    }
}

impl Rows for Probabilities {
    fn rows(&self) -> usize {
        self.0.nrows()
    }

    fn select_rows(&self, range: Range<usize>) -> Self {
        Self(self.0.select_rows(range))
    }
}

impl Target for Probabilities {
    const KIND: LabelKind = LabelKind::Probabilities;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_label_kinds() {
        assert_eq!(ClassIndices::KIND, LabelKind::ClassIndices);
        assert_eq!(Probabilities::KIND, LabelKind::Probabilities);
    }

    #[test]
    fn test_class_indices_select_rows() {
        let labels = ClassIndices::new(vec![0, 1, 2, 1, 0]);
        let slice = labels.select_rows(1..4);
        assert_eq!(slice, ClassIndices::new(vec![1, 2, 1]));
        assert_eq!(slice.batch_size(), 3);
    }

    #[test]
    fn test_array_select_rows() {
        let x = array![[1.0f32, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let slice = x.select_rows(2..3);
        assert_eq!(slice, array![[5.0f32, 6.0]]);
        assert_eq!(Rows::rows(&slice), 1);
    }

    #[test]
    fn test_to_one_hot() {
        let labels = ClassIndices::new(vec![2, 0]);
        let one_hot = labels.to_one_hot(3).unwrap();
        assert_eq!(one_hot.values(), &array![[0.0f32, 0.0, 1.0], [1.0, 0.0, 0.0]]);
        assert_eq!(one_hot.batch_size(), 2);
    }

    #[test]
    fn test_to_one_hot_out_of_range() {
        let labels = ClassIndices::new(vec![3]);
        assert!(matches!(labels.to_one_hot(3), Err(Error::Dataset(_))));
    }
}
