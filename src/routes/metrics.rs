use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::greet_service::GreetingService;

#[derive(Serialize)]
struct Metrics {
    //name the counter is registered under in the metrics registry
    #[serde(rename = "greet.default.counter")]
    default_messages: u64,
}

pub async fn metrics(service: web::Data<GreetingService>) -> HttpResponse {
    HttpResponse::Ok().json(Metrics {
        default_messages: service.default_message_count(),
    })
}
