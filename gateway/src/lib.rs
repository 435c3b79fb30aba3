//! Rent prediction core: the loaded model and the single `predict` operation
//! every front-end goes through.

pub mod catalog;
pub mod error;
pub mod frame;
mod gateway;
pub mod model;
pub mod request;

pub use error::{LoadError, ModelError, PredictError};
pub use frame::{Column, Frame};
pub use gateway::{Gateway, round2};
pub use model::{Pipeline, Regressor};
pub use request::{PredictionRequest, RawPrediction};
