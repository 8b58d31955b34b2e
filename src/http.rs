//! HTTP front end over a [`PredictionService`].
//!
//! - `GET /` serves a small HTML form that posts to the same path.
//! - `POST /` takes the JSON request body understood by [`PredictionService::respond`] and
//!   replies `200 {"predicted": ..}` or `400 {"error": "invalid input"}`.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::error::Result;
use crate::service::PredictionService;

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Student Performance Predictor</title></head>
<body>
<h1>Predict Final Score</h1>
<form id="predict">
  <label>Attendance (%): <input type="number" step="any" id="attendance" required></label><br>
  <label>Homework (%): <input type="number" step="any" id="homework" required></label><br>
  <label>Test score (%): <input type="number" step="any" id="testscore" required></label><br>
  <button type="submit">Predict</button>
</form>
<p id="result"></p>
<script>
document.getElementById("predict").addEventListener("submit", async (event) => {
  event.preventDefault();
  const body = {
    attendance: parseFloat(document.getElementById("attendance").value),
    homework: parseFloat(document.getElementById("homework").value),
    testscore: parseFloat(document.getElementById("testscore").value),
  };
  const reply = await fetch("/", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(body),
  });
  const data = await reply.json();
  document.getElementById("result").textContent = reply.ok
    ? "Predicted final score: " + data.predicted.toFixed(2)
    : "Error: " + data.error;
});
</script>
</body>
</html>
"#;

/// Routes for the form and the prediction endpoint.
pub fn router(service: Arc<PredictionService>) -> Router {
    Router::new()
        .route("/", get(index).post(predict))
        .with_state(service)
}

/// Binds `addr` and serves [`router`] until Ctrl+C.
pub async fn serve_http(service: Arc<PredictionService>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("server stopped");
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn predict(State(service): State<Arc<PredictionService>>, body: Bytes) -> Response {
    let reply = service.respond_bytes(&body);
    let status = if reply.is_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(reply)).into_response()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::{KNNRegressor, LabeledPoint, ReferenceStore};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use tower::ServiceExt;

    fn app() -> Router {
        let store = ReferenceStore::new(vec![
            LabeledPoint::new(vec![90.0, 80.0, 70.0], 82.0),
            LabeledPoint::new(vec![60.0, 60.0, 60.0], 60.0),
            LabeledPoint::new(vec![95.0, 90.0, 85.0], 91.0),
        ])
        .unwrap();
        router(Arc::new(PredictionService::new(KNNRegressor::new(store), 2)))
    }

    async fn post(body: impl Into<Body>) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_post_prediction() {
        let (status, body) = post(r#"{"attendance": 92, "homework": 85, "testscore": 80}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"predicted":86.5}"#);
    }

    #[tokio::test]
    async fn test_post_invalid_is_bad_request() {
        for bad in [
            Body::from("not json"),
            Body::from(r#"{"attendance": 92, "homework": 85, "testscore": 80, "k": 0}"#),
            Body::from(vec![0xff, 0xfe]),
        ] {
            let (status, body) = post(bad).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, r#"{"error":"invalid input"}"#);
        }
    }

    #[tokio::test]
    async fn test_get_serves_form() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("<form"));
        assert!(page.contains("testscore"));
    }

    #[tokio::test]
    async fn test_serve_http_reports_bind_failure() {
        let store = ReferenceStore::default();
        let service = Arc::new(PredictionService::new(KNNRegressor::new(store), 5));
        assert!(serve_http(service, "not an address").await.is_err());
    }
}
