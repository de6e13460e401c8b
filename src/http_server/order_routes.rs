//! Order HTTP Routes
//!
//! `GET /orders/:id` answers with the order's status as plain text. The id
//! is coerced by axum's `Path` extractor; a non-numeric id gets axum's
//! default rejection.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::dao::OrderRepository;
use crate::errors::OrderError;
use crate::observability::{log_event, Event};
use crate::service::OrderService;

/// Create order routes
pub fn order_routes<R: OrderRepository + 'static>(service: OrderService<R>) -> Router {
    Router::new()
        .route("/orders/:id", get(get_order_status_handler::<R>))
        .with_state(service)
}

async fn get_order_status_handler<R: OrderRepository + 'static>(
    State(service): State<OrderService<R>>,
    Path(id): Path<i64>,
) -> Result<String, OrderError> {
    let order_id = id.to_string();

    match service.get_status(id) {
        Ok(status) => {
            log_event(
                Event::OrderStatusServed,
                &[("order_id", order_id.as_str()), ("status", status.as_str())],
            );
            Ok(status)
        }
        Err(e) => {
            log_event(
                Event::OrderStatusFailed,
                &[("order_id", order_id.as_str()), ("error", e.to_string().as_str())],
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::dao::OrderDao;
    use crate::errors::OrderResult;
    use crate::model::Order;

    struct OfflineRepository;

    impl OrderRepository for OfflineRepository {
        fn fetch_order(&self, _id: i64) -> OrderResult<Order> {
            Err(OrderError::Storage("offline".to_string()))
        }
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_negative_id_is_accepted() {
        let router = order_routes(OrderService::new(OrderDao::new()));
        let (status, body) = get(router, "/orders/-3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "CREATED");
    }

    #[tokio::test]
    async fn test_plain_text_content_type() {
        let router = order_routes(OrderService::new(OrderDao::new()));
        let response = router
            .oneshot(Request::builder().uri("/orders/5").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
    }

    #[tokio::test]
    async fn test_repository_failure_maps_to_500() {
        let router = order_routes(OrderService::new(OfflineRepository));
        let (status, body) = get(router, "/orders/1").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["code"], 500);
        assert_eq!(json["error"], "Storage error: offline");
    }
}
