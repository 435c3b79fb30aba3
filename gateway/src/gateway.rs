use std::path::Path;

use log::{info, warn};

use crate::{
    error::{LoadError, ModelError, PredictError},
    model::{self, Pipeline, Regressor},
    request::{PredictionRequest, RawPrediction},
};

/// Rounds to two decimal places, halves away from zero.
///
/// Values too large to scale by 100 carry no fractional digits and are
/// returned as is.
pub fn round2(value: f64) -> f64 {
    let cents = value * 100.0;
    if !cents.is_finite() {
        return value;
    }

    cents.round() / 100.0
}

/// Turns raw form inputs into a single rounded rent prediction.
///
/// Holds the model for the whole process lifetime. Build it once at startup
/// and hand out references, it is never mutated afterwards.
pub struct Gateway<M = Pipeline> {
    model: M,
}

impl Gateway<Pipeline> {
    /// Loads the model artifact at `path`.
    ///
    /// # Errors
    /// Returns `LoadError` if the artifact is missing, unreadable or invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let model = model::load(path)?;
        info!(
            "loaded model artifact from {} ({} features)",
            path.display(),
            model.width()
        );
        Ok(Self::new(model))
    }
}

impl<M: Regressor> Gateway<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Coerces the raw fields and predicts.
    ///
    /// # Errors
    /// Returns `PredictError` if a field is missing or malformed, or if the
    /// model rejects the request.
    pub fn predict(&self, raw: &RawPrediction) -> Result<f64, PredictError> {
        let request = PredictionRequest::try_from(raw)
            .inspect_err(|e| warn!("rejected prediction request: {e}"))?;

        self.predict_request(&request)
    }

    /// Predicts from an already typed request.
    ///
    /// # Errors
    /// Returns `PredictError::Model` if the model fails or yields no usable value.
    pub fn predict_request(&self, request: &PredictionRequest) -> Result<f64, PredictError> {
        let result = self.invoke(request).inspect_err(|e| {
            warn!(
                bhk = request.bhk,
                locality = request.locality.as_str(),
                sqft = request.sqft;
                "prediction failed: {e}"
            )
        })?;

        info!(
            bhk = request.bhk,
            locality = request.locality.as_str(),
            sqft = request.sqft;
            "predicted rent: ₹{result}"
        );
        Ok(result)
    }

    fn invoke(&self, request: &PredictionRequest) -> Result<f64, ModelError> {
        let outputs = self.model.predict(&request.to_frame()?)?;

        let value = *outputs.first().ok_or(ModelError::ShapeMismatch {
            what: "outputs",
            got: 0,
            expected: 1,
        })?;

        let rounded = round2(value);
        if !rounded.is_finite() {
            return Err(ModelError::NonFiniteOutput(value));
        }

        Ok(rounded)
    }
}
