use crate::error::{ModelError, Result};

/// A single named column.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

impl Column {
    /// Returns the amount of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Column-oriented table, the shape every model consumes.
///
/// All columns hold the same amount of rows. Column order is insertion order
/// and carries no meaning, models look columns up by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<(String, Column)>,
    rows: usize,
}

impl Frame {
    /// Creates an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, replacing any previous column with the same name.
    ///
    /// # Arguments
    /// * `name` - The column's name.
    /// * `column` - The column's values.
    ///
    /// # Errors
    /// Returns `ModelError::ShapeMismatch` if the column's length differs from the
    /// frame's row count.
    pub fn push(&mut self, name: impl Into<String>, column: Column) -> Result<()> {
        let name = name.into();

        let others = self.columns.iter().filter(|(n, _)| *n != name).count();
        if others > 0 && column.len() != self.rows {
            return Err(ModelError::ShapeMismatch {
                what: "column rows",
                got: column.len(),
                expected: self.rows,
            });
        }

        self.rows = column.len();
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = column,
            None => self.columns.push((name, column)),
        }

        Ok(())
    }

    /// Builder form of [`Frame::push`].
    pub fn with(mut self, name: impl Into<String>, column: Column) -> Result<Self> {
        self.push(name, column)?;
        Ok(self)
    }

    /// Returns the amount of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the column names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, column)| column)
            .ok_or_else(|| ModelError::MissingColumn(name.to_string()))
    }

    /// Looks up a numeric column by name.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        match self.column(name)? {
            Column::Numeric(values) => Ok(values),
            Column::Categorical(_) => Err(ModelError::ColumnType {
                column: name.to_string(),
                expected: "numeric",
            }),
        }
    }

    /// Looks up a categorical column by name.
    pub fn categorical(&self, name: &str) -> Result<&[String]> {
        match self.column(name)? {
            Column::Categorical(values) => Ok(values),
            Column::Numeric(_) => Err(ModelError::ColumnType {
                column: name.to_string(),
                expected: "categorical",
            }),
        }
    }
}
