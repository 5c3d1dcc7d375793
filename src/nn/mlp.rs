//! Two-layer perceptron: `Dense -> ReLU -> Dense`

use super::{Mode, Model};
use crate::error::{Error, Result};
use crate::optim::ParameterSet;
use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Elementwise rectified linear unit
pub fn relu(x: &Array2<f32>) -> Array2<f32> {
    x.mapv(|v| v.max(0.0))
}

/// Fully connected layer: `y = x · W + b`
#[derive(Clone, Debug, PartialEq)]
pub struct Dense {
    /// Weight matrix, `(inputs, outputs)`
    pub weight: Array2<f32>,
    /// Bias vector, `(outputs,)`
    pub bias: Array1<f32>,
}

impl Dense {
    /// Uniform Kaiming-style initialization with zero bias
    pub fn new(inputs: usize, outputs: usize, rng: &mut StdRng) -> Self {
        let bound = (6.0 / inputs.max(1) as f32).sqrt();
        Self {
            weight: Array2::from_shape_fn((inputs, outputs), |_| {
                rng.random_range(-bound..=bound)
            }),
            bias: Array1::zeros(outputs),
        }
    }

    /// Layer with all-zero parameters
    pub fn zeros(inputs: usize, outputs: usize) -> Self {
        Self {
            weight: Array2::zeros((inputs, outputs)),
            bias: Array1::zeros(outputs),
        }
    }

    /// Number of input features
    pub fn inputs(&self) -> usize {
        self.weight.nrows()
    }

    /// Number of output features
    pub fn outputs(&self) -> usize {
        self.weight.ncols()
    }

    /// Apply the layer to a row-stacked batch
    pub fn forward(&self, x: &Array2<f32>) -> Result<Array2<f32>> {
        if x.ncols() != self.inputs() {
            return Err(Error::shape(
                "Dense::forward",
                &[x.nrows(), self.inputs()],
                x.shape(),
            ));
        }
        Ok(x.dot(&self.weight) + &self.bias)
    }

    /// Parameter gradient and input gradient for upstream gradient `dy`
    fn backward(&self, x: &Array2<f32>, dy: &Array2<f32>) -> (Dense, Array2<f32>) {
        let grad = Dense {
            weight: x.t().dot(dy),
            bias: dy.sum_axis(Axis(0)),
        };
        let dx = dy.dot(&self.weight.t());
        (grad, dx)
    }
}

impl ParameterSet for Dense {
    fn zeros_like(&self) -> Self {
        Self::zeros(self.inputs(), self.outputs())
    }

    fn add_scaled(&mut self, alpha: f32, rhs: &Self) -> Result<()> {
        self.weight.add_scaled(alpha, &rhs.weight)?;
        self.bias.add_scaled(alpha, &rhs.bias)
    }

    fn scale(&mut self, factor: f32) {
        self.weight.scale(factor);
        self.bias.scale(factor);
    }

    fn squared_norm(&self) -> f32 {
        self.weight.squared_norm() + self.bias.squared_norm()
    }
}

/// Parameters of an [`Mlp`]; also the shape of its gradients
#[derive(Clone, Debug, PartialEq)]
pub struct MlpParameters {
    /// Hidden layer
    pub layer1: Dense,
    /// Output layer
    pub layer2: Dense,
}

impl ParameterSet for MlpParameters {
    fn zeros_like(&self) -> Self {
        Self {
            layer1: self.layer1.zeros_like(),
            layer2: self.layer2.zeros_like(),
        }
    }

    fn add_scaled(&mut self, alpha: f32, rhs: &Self) -> Result<()> {
        self.layer1.add_scaled(alpha, &rhs.layer1)?;
        self.layer2.add_scaled(alpha, &rhs.layer2)
    }

    fn scale(&mut self, factor: f32) {
        self.layer1.scale(factor);
        self.layer2.scale(factor);
    }

    fn squared_norm(&self) -> f32 {
        self.layer1.squared_norm() + self.layer2.squared_norm()
    }
}

/// Hidden ReLU layer followed by a linear output layer
///
/// Has no mode-dependent behaviour; [`Mode`] is accepted and ignored.
#[derive(Clone, Debug)]
pub struct Mlp {
    params: MlpParameters,
}

impl Mlp {
    /// Build a seeded `n_in -> n_hidden -> n_out` network
    pub fn new(n_in: usize, n_hidden: usize, n_out: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            params: MlpParameters {
                layer1: Dense::new(n_in, n_hidden, &mut rng),
                layer2: Dense::new(n_hidden, n_out, &mut rng),
            },
        }
    }

    /// Build from explicit parameters
    pub fn from_parameters(params: MlpParameters) -> Result<Self> {
        if params.layer1.outputs() != params.layer2.inputs() {
            return Err(Error::Model(format!(
                "hidden width mismatch: layer1 produces {}, layer2 expects {}",
                params.layer1.outputs(),
                params.layer2.inputs()
            )));
        }
        Ok(Self { params })
    }

    /// Pre-activation of the hidden layer
    fn hidden(&self, input: &Array2<f32>) -> Result<Array2<f32>> {
        self.params.layer1.forward(input)
    }
}

impl Model for Mlp {
    type Input = Array2<f32>;
    type Output = Array2<f32>;
    type Parameters = MlpParameters;

    fn forward(&self, input: &Array2<f32>, _mode: Mode) -> Result<Array2<f32>> {
        let hidden = relu(&self.hidden(input)?);
        self.params.layer2.forward(&hidden)
    }

    fn backward(
        &self,
        input: &Array2<f32>,
        output_grad: &Array2<f32>,
        _mode: Mode,
    ) -> Result<MlpParameters> {
        let pre = self.hidden(input)?;
        let hidden = relu(&pre);
        if output_grad.dim() != (input.nrows(), self.params.layer2.outputs()) {
            return Err(Error::shape(
                "Mlp::backward",
                &[input.nrows(), self.params.layer2.outputs()],
                output_grad.shape(),
            ));
        }

        let (grad2, d_hidden) = self.params.layer2.backward(&hidden, output_grad);
        let mut d_pre = d_hidden;
        d_pre.zip_mut_with(&pre, |d, &z| {
            if z <= 0.0 {
                *d = 0.0;
            }
        });
        let (grad1, _) = self.params.layer1.backward(input, &d_pre);

        Ok(MlpParameters {
            layer1: grad1,
            layer2: grad2,
        })
    }

    fn parameters(&self) -> &MlpParameters {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut MlpParameters {
        &mut self.params
    }
}
