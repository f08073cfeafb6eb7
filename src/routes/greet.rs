use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

use crate::domain::{ErrorResponse, GreetingUpdate, UpdateGreetingError};
use crate::greet_service::GreetingService;

#[tracing::instrument(name = "Default greeting", skip(service))]
pub async fn get_default(service: web::Data<GreetingService>) -> HttpResponse {
    HttpResponse::Ok().json(service.get_default())
}

#[tracing::instrument(name = "Named greeting", skip(name, service), fields(name = %name))]
pub async fn get_named(
    name: web::Path<String>,
    service: web::Data<GreetingService>,
) -> HttpResponse {
    HttpResponse::Ok().json(service.get_named(&name))
}

//the body is read in full and parsed here rather than through web::Json,
//so a bad content type or broken json gets the same 400 as a missing key
#[tracing::instrument(name = "Updating greeting", skip(body, service))]
pub async fn update_greeting(
    body: web::Bytes,
    service: web::Data<GreetingService>,
) -> Result<HttpResponse, UpdateGreetingError> {
    let update = GreetingUpdate::parse(&body)?;
    service.update_greeting(update);
    Ok(HttpResponse::NoContent().finish())
}

impl ResponseError for UpdateGreetingError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
