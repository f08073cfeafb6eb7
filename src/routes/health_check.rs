use actix_web::{web, HttpResponse};

use crate::health::GreetingHealthCheck;

//503 lets a monitor pull the instance out of rotation without parsing the body
pub async fn health_check(check: web::Data<GreetingHealthCheck>) -> HttpResponse {
    let report = check.check();
    let mut response = if report.healthy {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response.json(report)
}
