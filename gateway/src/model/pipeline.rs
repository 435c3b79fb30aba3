use ndarray::{Array2, s};
use serde::Deserialize;

use super::{Estimator, OneHotEncoder, Regressor};
use crate::{
    error::{LoadError, ModelError, Result},
    frame::Frame,
};

/// Per-column standardization, `(x - mean) / scale`.
#[derive(Debug, Clone, Deserialize)]
pub struct Scaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl Scaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Self {
        Self { mean, scale }
    }
}

/// A fitted preprocessing + estimator pipeline.
///
/// Features are laid out as the numeric columns (optionally standardized) in
/// declaration order, followed by the one-hot block of the encoded column.
#[derive(Debug, Clone, Deserialize)]
pub struct Pipeline {
    numeric: Vec<String>,
    #[serde(default)]
    scaler: Option<Scaler>,
    encoder: OneHotEncoder,
    estimator: Estimator,
}

impl Pipeline {
    /// Creates and validates a pipeline from its parts.
    ///
    /// # Errors
    /// Returns `LoadError::Invalid` if the parts don't fit together.
    pub fn new(
        numeric: Vec<String>,
        scaler: Option<Scaler>,
        encoder: OneHotEncoder,
        estimator: Estimator,
    ) -> std::result::Result<Self, LoadError> {
        let pipeline = Self {
            numeric,
            scaler,
            encoder,
            estimator,
        };
        pipeline.validate()?;
        Ok(pipeline)
    }

    /// Parses and validates a pipeline from its JSON artifact.
    ///
    /// # Errors
    /// Returns `LoadError::Parse` on malformed JSON and `LoadError::Invalid` on
    /// inconsistent contents.
    pub fn from_json(json: &str) -> std::result::Result<Self, LoadError> {
        let pipeline: Self = serde_json::from_str(json)?;
        pipeline.validate()?;
        Ok(pipeline)
    }

    /// The amount of features fed to the estimator.
    pub fn width(&self) -> usize {
        self.numeric.len() + self.encoder.width()
    }

    pub fn encoder(&self) -> &OneHotEncoder {
        &self.encoder
    }

    fn validate(&self) -> std::result::Result<(), LoadError> {
        self.encoder.validate().map_err(LoadError::Invalid)?;

        if self.numeric.iter().any(|name| name == self.encoder.column()) {
            return Err(LoadError::Invalid(format!(
                "column {} is both numeric and categorical",
                self.encoder.column()
            )));
        }

        if let Some(scaler) = &self.scaler {
            let n = self.numeric.len();
            if scaler.mean.len() != n || scaler.scale.len() != n {
                return Err(LoadError::Invalid(format!(
                    "scaler holds {} means and {} scales for {n} numeric columns",
                    scaler.mean.len(),
                    scaler.scale.len()
                )));
            }
            if scaler.mean.iter().chain(&scaler.scale).any(|v| !v.is_finite()) {
                return Err(LoadError::Invalid("scaler holds non-finite values".into()));
            }
            if scaler.scale.contains(&0.0) {
                return Err(LoadError::Invalid("scaler holds a zero scale".into()));
            }
        }

        self.estimator
            .validate(self.width())
            .map_err(LoadError::Invalid)
    }

    fn features(&self, frame: &Frame) -> Result<Array2<f64>> {
        let n = self.numeric.len();
        let mut x = Array2::zeros((frame.rows(), self.width()));

        for (j, name) in self.numeric.iter().enumerate() {
            let values = frame.numeric(name)?;
            for (i, &v) in values.iter().enumerate() {
                x[[i, j]] = match &self.scaler {
                    Some(scaler) => (v - scaler.mean[j]) / scaler.scale[j],
                    None => v,
                };
            }
        }

        self.encoder.encode(frame, x.slice_mut(s![.., n..]))?;
        Ok(x)
    }
}

impl Regressor for Pipeline {
    fn predict(&self, frame: &Frame) -> Result<Vec<f64>> {
        if frame.rows() == 0 {
            return Err(ModelError::ShapeMismatch {
                what: "rows",
                got: 0,
                expected: 1,
            });
        }

        let x = self.features(frame)?;
        let y = self.estimator.predict(x.view())?;
        Ok(y.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        frame::Column,
        model::{Activation, DenseLayer, HandleUnknown},
        request::PredictionRequest,
    };

    const ARTIFACT: &str = r#"{
        "numeric": ["BHK", "Sqft"],
        "encoder": {
            "column": "Main_Locality",
            "categories": ["pal", "vesu"]
        },
        "estimator": { "type": "linear", "intercept": 100.0, "coef": [1000.0, 2.0, -50.0, 75.0] }
    }"#;

    fn locality_encoder() -> OneHotEncoder {
        OneHotEncoder::new(
            "Main_Locality",
            vec!["pal".into(), "vesu".into()],
            HandleUnknown::Error,
        )
    }

    #[test]
    fn parses_a_linear_artifact() {
        let pipeline = Pipeline::from_json(ARTIFACT).unwrap();

        assert_eq!(pipeline.width(), 4);
        assert_eq!(pipeline.encoder().handle_unknown(), HandleUnknown::Error);

        let frame = PredictionRequest::new(2, "vesu", 1000.0).to_frame().unwrap();
        // 100 + 2*1000 + 1000*2 + 75
        assert_eq!(pipeline.predict(&frame).unwrap(), vec![4175.0]);
    }

    #[test]
    fn scales_numeric_columns() {
        let pipeline = Pipeline::new(
            vec!["Sqft".into()],
            Some(Scaler::new(vec![1000.0], vec![500.0])),
            locality_encoder(),
            Estimator::Linear {
                intercept: 0.0,
                coef: vec![10.0, 0.0, 0.0],
            },
        )
        .unwrap();

        let frame = PredictionRequest::new(1, "pal", 2000.0).to_frame().unwrap();
        assert_eq!(pipeline.predict(&frame).unwrap(), vec![20.0]);
    }

    #[test]
    fn runs_a_sequential_estimator() {
        let pipeline = Pipeline::new(
            vec!["BHK".into()],
            None,
            locality_encoder(),
            Estimator::Sequential {
                layers: vec![DenseLayer::new(
                    vec![1.0, 0.0, 0.0],
                    vec![0.0],
                    Some(Activation::Sigmoid),
                )],
            },
        )
        .unwrap();

        let frame = Frame::new()
            .with("BHK", Column::Numeric(vec![0.0]))
            .and_then(|f| f.with("Main_Locality", Column::Categorical(vec!["pal".into()])))
            .unwrap();

        assert_eq!(pipeline.predict(&frame).unwrap(), vec![0.5]);
    }

    #[test]
    fn missing_columns_fail_the_prediction() {
        let pipeline = Pipeline::from_json(ARTIFACT).unwrap();
        let frame = Frame::new()
            .with("BHK", Column::Numeric(vec![2.0]))
            .unwrap();

        assert_eq!(
            pipeline.predict(&frame),
            Err(ModelError::MissingColumn("Sqft".into()))
        );
    }

    #[test]
    fn rejects_coefficient_count_mismatch() {
        let err = Pipeline::new(
            vec!["BHK".into()],
            None,
            locality_encoder(),
            Estimator::Linear {
                intercept: 0.0,
                coef: vec![1.0],
            },
        )
        .unwrap_err();

        assert!(matches!(err, LoadError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_scale() {
        let err = Pipeline::new(
            vec!["BHK".into()],
            Some(Scaler::new(vec![0.0], vec![0.0])),
            locality_encoder(),
            Estimator::Linear {
                intercept: 0.0,
                coef: vec![1.0, 1.0, 1.0],
            },
        )
        .unwrap_err();

        assert!(err.to_string().contains("zero scale"));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Pipeline::from_json("{\"numeric\": 3}"),
            Err(LoadError::Parse(_))
        ));
    }
}
