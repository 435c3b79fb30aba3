use serde::Deserialize;

use crate::{
    error::{ModelError, PredictError},
    frame::{Column, Frame},
};

/// Form field holding the bedroom count.
pub const BHK: &str = "BHK";
/// Form field holding the locality name.
pub const LOCALITY: &str = "Main_Locality";
/// Form field holding the area in square feet.
pub const SQFT: &str = "Sqft";

/// A prediction request exactly as submitted, before any coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawPrediction {
    #[serde(rename = "BHK")]
    pub bhk: Option<String>,
    #[serde(rename = "Main_Locality")]
    pub locality: Option<String>,
    #[serde(rename = "Sqft")]
    pub sqft: Option<String>,
}

impl RawPrediction {
    /// Creates a raw request with every field present.
    pub fn new(
        bhk: impl Into<String>,
        locality: impl Into<String>,
        sqft: impl Into<String>,
    ) -> Self {
        Self {
            bhk: Some(bhk.into()),
            locality: Some(locality.into()),
            sqft: Some(sqft.into()),
        }
    }
}

/// A typed prediction request.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    pub bhk: u32,
    pub locality: String,
    pub sqft: f64,
}

impl PredictionRequest {
    pub fn new(bhk: u32, locality: impl Into<String>, sqft: f64) -> Self {
        Self {
            bhk,
            locality: locality.into(),
            sqft,
        }
    }

    /// Lays the request out as a one row frame with the three form columns.
    ///
    /// # Errors
    /// Returns `ModelError::ShapeMismatch` if the columns disagree on their row count.
    pub fn to_frame(&self) -> Result<Frame, ModelError> {
        Frame::new()
            .with(BHK, Column::Numeric(vec![f64::from(self.bhk)]))?
            .with(LOCALITY, Column::Categorical(vec![self.locality.clone()]))?
            .with(SQFT, Column::Numeric(vec![self.sqft]))
    }
}

impl TryFrom<&RawPrediction> for PredictionRequest {
    type Error = PredictError;

    fn try_from(raw: &RawPrediction) -> Result<Self, Self::Error> {
        let bhk = parse_bhk(required(BHK, &raw.bhk)?)?;
        let locality = required(LOCALITY, &raw.locality)?;
        let sqft = parse_sqft(required(SQFT, &raw.sqft)?)?;

        Ok(Self::new(bhk, locality, sqft))
    }
}

fn required<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, PredictError> {
    value.as_deref().ok_or(PredictError::MissingField(field))
}

fn invalid(field: &'static str, value: &str, reason: impl ToString) -> PredictError {
    PredictError::InvalidField {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bhk(value: &str) -> Result<u32, PredictError> {
    let n: i64 = value.trim().parse().map_err(|e| invalid(BHK, value, e))?;
    if n <= 0 {
        return Err(invalid(BHK, value, "must be a positive integer"));
    }

    u32::try_from(n).map_err(|_| invalid(BHK, value, "is too large"))
}

fn parse_sqft(value: &str) -> Result<f64, PredictError> {
    let x: f64 = value.trim().parse().map_err(|e| invalid(SQFT, value, e))?;
    if !x.is_finite() || x <= 0.0 {
        return Err(invalid(SQFT, value, "must be a positive finite number"));
    }

    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coerce(bhk: &str, locality: &str, sqft: &str) -> Result<PredictionRequest, PredictError> {
        PredictionRequest::try_from(&RawPrediction::new(bhk, locality, sqft))
    }

    #[test]
    fn well_formed_fields_are_coerced() {
        let request = coerce(" 2 ", "vesu", "1000.5").unwrap();
        assert_eq!(request, PredictionRequest::new(2, "vesu", 1000.5));
    }

    #[test]
    fn integer_sqft_is_accepted() {
        assert_eq!(coerce("3", "pal", "1200").unwrap().sqft, 1200.0);
    }

    #[test]
    fn locality_is_passed_through_verbatim() {
        assert_eq!(coerce("1", " Vesu ", "500").unwrap().locality, " Vesu ");
    }

    #[test]
    fn non_numeric_bhk_mentions_the_field() {
        let err = coerce("abc", "vesu", "1000").unwrap_err();

        assert!(matches!(err, PredictError::InvalidField { field: "BHK", .. }));
        assert!(err.to_string().contains("BHK"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn fractional_bhk_is_rejected() {
        let err = coerce("2.5", "vesu", "1000").unwrap_err();
        assert!(matches!(err, PredictError::InvalidField { field: "BHK", .. }));
    }

    #[test]
    fn non_positive_bhk_is_rejected() {
        for bhk in ["0", "-1"] {
            let err = coerce(bhk, "vesu", "1000").unwrap_err();
            assert!(err.to_string().contains("positive"), "{err}");
        }
    }

    #[test]
    fn non_numeric_sqft_mentions_the_field() {
        let err = coerce("2", "vesu", "big").unwrap_err();

        assert!(matches!(err, PredictError::InvalidField { field: "Sqft", .. }));
        assert!(err.to_string().contains("Sqft"));
    }

    #[test]
    fn huge_but_finite_values_are_accepted() {
        let request = coerce(&u32::MAX.to_string(), "vesu", "1e306").unwrap();

        assert_eq!(request.bhk, u32::MAX);
        assert_eq!(request.sqft, 1e306);
    }

    #[test]
    fn degenerate_sqft_is_rejected() {
        for sqft in ["0", "-20", "NaN", "inf"] {
            let err = coerce("2", "vesu", sqft).unwrap_err();
            assert!(matches!(err, PredictError::InvalidField { field: "Sqft", .. }), "{sqft}");
        }
    }

    #[test]
    fn missing_fields_are_named() {
        let raw = RawPrediction {
            bhk: Some("2".into()),
            locality: None,
            sqft: Some("1000".into()),
        };

        let err = PredictionRequest::try_from(&raw).unwrap_err();
        assert_eq!(err, PredictError::MissingField("Main_Locality"));
        assert_eq!(err.to_string(), "missing field: Main_Locality");
    }

    #[test]
    fn frame_holds_exactly_the_three_fields() {
        let frame = PredictionRequest::new(2, "vesu", 1000.0).to_frame().unwrap();

        assert_eq!(frame.rows(), 1);
        assert_eq!(frame.names().collect::<Vec<_>>(), [BHK, LOCALITY, SQFT]);
        assert_eq!(frame.numeric(BHK).unwrap(), &[2.0]);
        assert_eq!(frame.categorical(LOCALITY).unwrap(), &["vesu".to_string()]);
        assert_eq!(frame.numeric(SQFT).unwrap(), &[1000.0]);
    }
}
