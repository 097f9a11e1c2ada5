//! HTTP Routes
//!
//! API Endpoints:
//! - /             GET   服务横幅
//! - /predict      POST  缩放特征并返回预测值
//! - /api/ping     GET   健康检查
//! - /api/model    GET   已加载模型信息
//!
//! 未匹配路由返回 404，方法不匹配返回 405，均使用统一错误信封

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::home))
        .route("/predict", post(handlers::predict))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .nest("/api", api_routes())
        .fallback(handlers::fallback)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/model", get(handlers::get_model_info))
        .method_not_allowed_fallback(handlers::method_not_allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    use crate::infrastructure::adapters::{FakePredictor, FakePredictorConfig};
    use crate::infrastructure::http::handlers::BANNER;

    fn create_test_router() -> Router {
        let predictor = FakePredictor::new(FakePredictorConfig {
            name: "fashion_model".to_string(),
            input_dim: 3,
            value: 12.5,
        });
        create_routes().with_state(Arc::new(AppState::new(Arc::new(predictor))))
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_home_banner() {
        let response = create_test_router().oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), BANNER);
    }

    #[tokio::test]
    async fn test_predict_success() {
        let response = create_test_router()
            .oneshot(post_json("/predict", r#"{"features": [1, 2.5, 3]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["predicted_value"], 12.5);
    }

    #[tokio::test]
    async fn test_predict_wrong_feature_count() {
        let response = create_test_router()
            .oneshot(post_json("/predict", r#"{"features": [1, 2]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["errno"], 400);
        assert_eq!(body["error"], "Expected 3 features, got 2");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_predict_missing_features_field() {
        let response = create_test_router()
            .oneshot(post_json("/predict", r#"{"values": [1, 2, 3]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["errno"], 400);
    }

    #[tokio::test]
    async fn test_predict_malformed_json() {
        let response = create_test_router()
            .oneshot(post_json("/predict", "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_predict_empty_features() {
        let response = create_test_router()
            .oneshot(post_json("/predict", r#"{"features": []}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ping() {
        let response = create_test_router().oneshot(get_request("/api/ping")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_model_info() {
        let response = create_test_router().oneshot(get_request("/api/model")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["name"], "fashion_model");
        assert_eq!(body["data"]["input_dim"], 3);
        assert_eq!(body["data"]["layers"][0]["activation"], "linear");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = create_test_router().oneshot(get_request("/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["errno"], 404);
    }

    #[tokio::test]
    async fn test_wrong_method_on_predict() {
        let response = create_test_router().oneshot(get_request("/predict")).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = json_body(response).await;
        assert_eq!(body["errno"], 405);
        assert_eq!(body["error"], "Method GET not allowed");
        assert!(body["data"].is_null());
    }

    #[tokio::test]
    async fn test_wrong_method_on_nested_api_route() {
        let response = create_test_router()
            .oneshot(post_json("/api/ping", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(json_body(response).await["errno"], 405);
    }
}
