mod encoder;
mod estimator;
mod pipeline;

use std::{fs, path::Path, sync::Arc};

use crate::{
    error::{LoadError, Result},
    frame::Frame,
};

pub use encoder::{HandleUnknown, OneHotEncoder};
pub use estimator::{Activation, DenseLayer, Estimator};
pub use pipeline::{Pipeline, Scaler};

/// Anything able to turn a frame of inputs into one prediction per row.
///
/// Implementations are read-only once built, so a single instance can be
/// shared by every concurrent caller.
pub trait Regressor: Send + Sync {
    /// Computes the model output for every row of `frame`.
    ///
    /// # Errors
    /// Returns `ModelError` if the frame doesn't fit what the model was fitted on.
    fn predict(&self, frame: &Frame) -> Result<Vec<f64>>;
}

impl<R: Regressor + ?Sized> Regressor for Box<R> {
    fn predict(&self, frame: &Frame) -> Result<Vec<f64>> {
        (**self).predict(frame)
    }
}

impl<R: Regressor + ?Sized> Regressor for Arc<R> {
    fn predict(&self, frame: &Frame) -> Result<Vec<f64>> {
        (**self).predict(frame)
    }
}

/// Reads a pipeline artifact from disk.
///
/// # Errors
/// Returns `LoadError` if the file can't be read, parsed or validated.
pub fn load(path: &Path) -> std::result::Result<Pipeline, LoadError> {
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Pipeline::from_json(&json)
}
