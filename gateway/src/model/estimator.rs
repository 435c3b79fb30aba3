use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::Deserialize;

use crate::error::{ModelError, Result};

/// Element-wise activation applied after a dense layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    Relu,
    Sigmoid,
}

impl Activation {
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Relu => x.max(0.0),
            Activation::Sigmoid => 1.0 / (1.0 + (-x).exp()),
        }
    }
}

/// A fully connected layer, `y = act(W x + b)`.
#[derive(Debug, Clone, Deserialize)]
pub struct DenseLayer {
    /// Row-major `n_out x n_in` weights.
    weights: Vec<f64>,
    bias: Vec<f64>,
    #[serde(default)]
    activation: Option<Activation>,
}

impl DenseLayer {
    pub fn new(weights: Vec<f64>, bias: Vec<f64>, activation: Option<Activation>) -> Self {
        Self {
            weights,
            bias,
            activation,
        }
    }

    fn n_out(&self) -> usize {
        self.bias.len()
    }

    fn n_in(&self) -> usize {
        match self.n_out() {
            0 => 0,
            n => self.weights.len() / n,
        }
    }

    fn forward(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        let w = ArrayView2::from_shape((self.n_out(), self.n_in()), &self.weights[..]).map_err(|_| {
            ModelError::ShapeMismatch {
                what: "layer weights",
                got: self.weights.len(),
                expected: self.n_out() * self.n_in(),
            }
        })?;

        if x.ncols() != self.n_in() {
            return Err(ModelError::ShapeMismatch {
                what: "layer input",
                got: x.ncols(),
                expected: self.n_in(),
            });
        }

        let b = ArrayView1::from(&self.bias[..]);
        let mut y = x.dot(&w.t()) + &b;
        if let Some(act) = self.activation {
            y.mapv_inplace(|v| act.apply(v));
        }

        Ok(y)
    }
}

/// The fitted regressor sitting at the end of a pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Estimator {
    /// Ordinary linear regression.
    Linear { intercept: f64, coef: Vec<f64> },
    /// Feed-forward network of dense layers ending in a single output.
    Sequential { layers: Vec<DenseLayer> },
}

impl Estimator {
    /// Checks that the estimator accepts `width` input features.
    pub(super) fn validate(&self, width: usize) -> std::result::Result<(), String> {
        match self {
            Estimator::Linear { intercept, coef } => {
                if coef.len() != width {
                    return Err(format!(
                        "linear estimator has {} coefficients for {width} features",
                        coef.len()
                    ));
                }
                if !intercept.is_finite() || coef.iter().any(|c| !c.is_finite()) {
                    return Err("linear estimator holds non-finite coefficients".into());
                }
            }
            Estimator::Sequential { layers } => {
                if layers.is_empty() {
                    return Err("sequential estimator has no layers".into());
                }

                let mut n_in = width;
                for (i, layer) in layers.iter().enumerate() {
                    let n_out = layer.n_out();
                    if n_out == 0 || layer.weights.len() != n_in * n_out {
                        return Err(format!(
                            "layer {i}: expected {n_in}x{n_out} weights, got {}",
                            layer.weights.len()
                        ));
                    }
                    if layer.weights.iter().chain(&layer.bias).any(|v| !v.is_finite()) {
                        return Err(format!("layer {i}: holds non-finite parameters"));
                    }
                    n_in = n_out;
                }

                if n_in != 1 {
                    return Err(format!("last layer must have one output, has {n_in}"));
                }
            }
        }

        Ok(())
    }

    /// Computes one output per row of the design matrix.
    ///
    /// # Errors
    /// Returns `ModelError::ShapeMismatch` if `x` doesn't have the fitted width.
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        match self {
            Estimator::Linear { intercept, coef } => {
                if x.ncols() != coef.len() {
                    return Err(ModelError::ShapeMismatch {
                        what: "features",
                        got: x.ncols(),
                        expected: coef.len(),
                    });
                }

                Ok(x.dot(&ArrayView1::from(&coef[..])) + *intercept)
            }
            Estimator::Sequential { layers } => {
                let mut h = x.to_owned();
                for layer in layers {
                    h = layer.forward(&h)?;
                }

                if h.ncols() != 1 {
                    return Err(ModelError::ShapeMismatch {
                        what: "outputs",
                        got: h.ncols(),
                        expected: 1,
                    });
                }

                Ok(h.column(0).to_owned())
            }
        }
    }
}
