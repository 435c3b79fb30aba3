use actix_web::{
    HttpResponse, error::InternalError, http::header::ContentType, web,
};
use gateway::{Gateway, RawPrediction, Regressor};
use serde::{Deserialize, Serialize};

use crate::render;

/// Payload returned in place of a prediction when the request fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Registers every route of the service.
///
/// The gateway itself must be registered as `web::Data<Gateway<M>>` app data.
pub fn configure<M: Regressor + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .service(
            web::resource("/predict")
                .app_data(json_form_config())
                .route(web::post().to(predict::<M>)),
        )
        .service(
            web::resource("/predict/page")
                .app_data(page_form_config())
                .route(web::get().to(blank_page))
                .route(web::post().to(predict_page::<M>)),
        );
}

pub async fn home() -> &'static str {
    "Home Page"
}

/// Answers with the bare prediction, or an [`ErrorBody`].
pub async fn predict<M: Regressor + 'static>(
    gateway: web::Data<Gateway<M>>,
    form: web::Form<RawPrediction>,
) -> HttpResponse {
    match gateway.predict(&form) {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => HttpResponse::Ok().json(ErrorBody::new(e)),
    }
}

/// Answers with the prediction page embedding the outcome.
pub async fn predict_page<M: Regressor + 'static>(
    gateway: web::Data<Gateway<M>>,
    form: web::Form<RawPrediction>,
) -> HttpResponse {
    let outcome = gateway.predict(&form).map_err(|e| e.to_string());
    html(render::page(Some(outcome)))
}

pub async fn blank_page() -> HttpResponse {
    html(render::page(None))
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

// Undecodable bodies are reported the same way as any other failed request.

fn json_form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        let res = HttpResponse::Ok().json(ErrorBody::new(&err));
        InternalError::from_response(err, res).into()
    })
}

fn page_form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, _req| {
        let res = html(render::page(Some(Err(err.to_string()))));
        InternalError::from_response(err, res).into()
    })
}
