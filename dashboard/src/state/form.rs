use std::ops::RangeInclusive;

use gateway::{catalog, Gateway, PredictionRequest, Regressor};

pub const BHK_RANGE: RangeInclusive<u32> = 1..=10;
pub const BHK_DEFAULT: u32 = 2;

pub const SQFT_MIN: f64 = 100.0;
pub const SQFT_MAX: f64 = 10_000.0;
pub const SQFT_DEFAULT: f64 = 1_000.0;
pub const SQFT_STEP: f64 = 50.0;

pub const PLACEHOLDER_WARNING: &str = "Please select a valid locality.";

/// The focusable widgets, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Bhk,
    Sqft,
    Locality,
    Predict,
}

impl Field {
    const ORDER: [Field; 4] = [Field::Bhk, Field::Sqft, Field::Locality, Field::Predict];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// What the last submit produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(f64),
    Warning(String),
    Error(String),
}

/// The dashboard's whole state: three inputs plus the last outcome.
#[derive(Debug, Clone)]
pub struct FormState {
    pub focus: Field,
    pub bhk: u32,
    pub sqft: f64,
    options: Vec<&'static str>,
    selected: usize,
    pub outcome: Option<Outcome>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            focus: Field::Bhk,
            bhk: BHK_DEFAULT,
            sqft: SQFT_DEFAULT,
            options: catalog::options().collect(),
            selected: 0,
            outcome: None,
        }
    }

    /// Every locality entry, placeholder first.
    pub fn options(&self) -> &[&'static str] {
        &self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The currently selected locality entry, possibly the placeholder.
    pub fn locality(&self) -> &'static str {
        self.options[self.selected]
    }

    pub fn bhk_up(&mut self) {
        self.bhk = (self.bhk + 1).min(*BHK_RANGE.end());
    }

    pub fn bhk_down(&mut self) {
        self.bhk = self.bhk.saturating_sub(1).max(*BHK_RANGE.start());
    }

    pub fn sqft_up(&mut self) {
        self.sqft = (self.sqft + SQFT_STEP).min(SQFT_MAX);
    }

    pub fn sqft_down(&mut self) {
        self.sqft = (self.sqft - SQFT_STEP).max(SQFT_MIN);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.options.len() - 1) % self.options.len();
    }

    /// Runs the prediction for the current inputs and stores the outcome.
    ///
    /// The placeholder entry is refused here, the gateway is never reached.
    pub fn submit<M: Regressor>(&mut self, gateway: &Gateway<M>) {
        self.outcome = Some(self.evaluate(gateway));
    }

    fn evaluate<M: Regressor>(&self, gateway: &Gateway<M>) -> Outcome {
        let locality = self.locality();
        if catalog::is_placeholder(locality) {
            return Outcome::Warning(PLACEHOLDER_WARNING.to_string());
        }

        let request = PredictionRequest::new(self.bhk, locality, self.sqft);
        match gateway.predict_request(&request) {
            Ok(value) => Outcome::Success(value),
            Err(e) => Outcome::Error(e.to_string()),
        }
    }
}
