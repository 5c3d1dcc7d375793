//! Training/validation dataset pair

use super::dataset::Dataset;

/// The pair of datasets a learner iterates each epoch
#[derive(Clone, Debug)]
pub struct DataBunch<D> {
    /// Dataset used for the training pass
    pub train: D,
    /// Dataset used for the validation pass
    pub valid: D,
}

impl<D: Dataset> DataBunch<D> {
    /// Create a new bunch
    pub fn new(train: D, valid: D) -> Self {
        Self { train, valid }
    }

    /// Dataset for the requested pass
    pub fn split(&self, split: Split) -> &D {
        match split {
            Split::Train => &self.train,
            Split::Valid => &self.valid,
        }
    }
}

/// Which half of a [`DataBunch`] is being iterated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    /// Training pass
    Train,
    /// Validation pass
    Valid,
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Train => write!(f, "train"),
            Self::Valid => write!(f, "valid"),
        }
    }
}
