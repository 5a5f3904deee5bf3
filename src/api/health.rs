use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::services::UserStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
    pub database: String,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn UserStore>) -> impl Responder {
    let (status, database, mut response) = match store.ping().await {
        Ok(()) => ("healthy", "connected", HttpResponse::Ok()),
        Err(e) => {
            log::warn!("⚠️ Health check failed: {}", e);
            ("unhealthy", "unreachable", HttpResponse::ServiceUnavailable())
        }
    };

    response.json(HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
        database: database.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryUserStore;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    async fn probe(store: Arc<InMemoryUserStore>) -> (StatusCode, HealthResponse) {
        let store: Arc<dyn UserStore> = store;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .route("/health", web::get().to(health_check)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_rt::test]
    async fn reports_healthy_when_database_answers() {
        let (status, body) = probe(Arc::new(InMemoryUserStore::default())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "healthy");
        assert_eq!(body.database, "connected");
        assert_eq!(body.service, "user-records-service");
    }

    #[actix_rt::test]
    async fn reports_unavailable_when_database_is_down() {
        let store = Arc::new(InMemoryUserStore::default());
        store.go_offline();

        let (status, body) = probe(store).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "unhealthy");
    }
}
