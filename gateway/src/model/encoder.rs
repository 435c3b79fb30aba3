use ndarray::ArrayViewMut2;
use serde::Deserialize;

use crate::{
    error::{ModelError, Result},
    frame::Frame,
};

/// What to do with a category that wasn't seen while fitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Fail the prediction.
    #[default]
    Error,
    /// Encode the row as all zeros.
    Ignore,
}

/// One-hot encoding of a single categorical column.
#[derive(Debug, Clone, Deserialize)]
pub struct OneHotEncoder {
    column: String,
    categories: Vec<String>,
    #[serde(default)]
    handle_unknown: HandleUnknown,
}

impl OneHotEncoder {
    pub fn new(
        column: impl Into<String>,
        categories: Vec<String>,
        handle_unknown: HandleUnknown,
    ) -> Self {
        Self {
            column: column.into(),
            categories,
            handle_unknown,
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn handle_unknown(&self) -> HandleUnknown {
        self.handle_unknown
    }

    /// The amount of output features, one per category.
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    pub(super) fn validate(&self) -> std::result::Result<(), String> {
        if self.categories.is_empty() {
            return Err(format!("encoder for {} has no categories", self.column));
        }

        for (i, category) in self.categories.iter().enumerate() {
            if self.categories[..i].contains(category) {
                return Err(format!(
                    "encoder for {} lists category '{category}' twice",
                    self.column
                ));
            }
        }

        Ok(())
    }

    /// Writes the encoding of the frame's column into `out`.
    ///
    /// # Arguments
    /// * `frame` - The input rows.
    /// * `out` - A zeroed `rows x width` block of the design matrix.
    ///
    /// # Errors
    /// Returns `ModelError` if the column is missing, isn't categorical, or holds
    /// an unknown category while `handle_unknown` is `error`.
    pub fn encode(&self, frame: &Frame, mut out: ArrayViewMut2<f64>) -> Result<()> {
        let values = frame.categorical(&self.column)?;

        if out.nrows() != values.len() {
            return Err(ModelError::ShapeMismatch {
                what: "encoded block rows",
                got: out.nrows(),
                expected: values.len(),
            });
        }
        if out.ncols() != self.width() {
            return Err(ModelError::ShapeMismatch {
                what: "encoded block columns",
                got: out.ncols(),
                expected: self.width(),
            });
        }

        for (i, value) in values.iter().enumerate() {
            match self.categories.iter().position(|c| c == value) {
                Some(j) => out[[i, j]] = 1.0,
                None if self.handle_unknown == HandleUnknown::Ignore => {}
                None => {
                    return Err(ModelError::UnknownCategory {
                        column: self.column.clone(),
                        value: value.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
