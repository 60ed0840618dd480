//! Predictraforge HTTP Server
//!
//! Server-rendered dashboard built with Axum. Every interaction is a plain
//! HTML form submission whose handler mutates the caller's session and
//! returns the freshly rendered page.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /?page=<slug>` - Render a page (default: home)
//!
//! ## Assistant
//! - `POST /chat` - Send a message to Forge
//!
//! ## Analysis
//! - `POST /upload` - Upload a CSV (multipart)
//! - `POST /analyze` - Run the mock analysis
//! - `POST /analysis/reset` - Start a new analysis
//!
//! ## Forms & Buttons
//! - `POST /leads/:kind` - Free Trial / Get Demo submission
//! - `POST /actions/:action` - Decorative buttons
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use predictraforge::api::{serve, AppState};
//! use predictraforge::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     serve(AppState::new(&config)).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{AppState, SESSION_COOKIE};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.max_upload_bytes;

    let ui_routes = Router::new()
        .route("/", get(routes::pages::show_page))
        .route("/chat", post(routes::chat::send_message))
        .route("/analyze", post(routes::analysis::run_analysis))
        .route("/analysis/reset", post(routes::analysis::reset_analysis))
        .route("/leads/:kind", post(routes::leads::submit_lead))
        .route("/actions/:action", post(routes::actions::trigger_action))
        // Upload route - with configurable body limit for CSV files
        .route(
            "/upload",
            post(routes::analysis::upload_dataset).layer(DefaultBodyLimit::max(max_upload)),
        );

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .merge(ui_routes)
        .nest("/health", health_routes)
        .layer(CookieManagerLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Predictraforge listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Predictraforge shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::PRICING_REPLY;
    use crate::config::Config;
    use crate::pages::leads::LEAD_RECEIVED;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    const BOUNDARY: &str = "forge-test-boundary";

    fn create_test_app() -> Router {
        let mut config = Config::default();
        config.analysis.delay_ms = 0;
        build_router(AppState::new(&config))
    }

    fn create_test_app_with_upload_limit(max_upload_bytes: usize) -> Router {
        let mut config = Config::default();
        config.analysis.delay_ms = 0;
        config.server.max_upload_bytes = max_upload_bytes;
        build_router(AppState::new(&config))
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn session_cookie(response: &Response) -> String {
        response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie")
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, cookie: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::COOKIE, cookie)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_upload(cookie: &str, file_name: &str, content: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: text/csv\r\n\r\n{content}\r\n--{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/upload")
            .header(header::COOKIE, cookie)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    /// Open a session and return its cookie
    async fn start_session(app: &Router) -> String {
        let response = app.clone().oneshot(get("/", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        session_cookie(&response)
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app();
        let response = app.oneshot(get("/health/live", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app();
        let response = app.oneshot(get("/health/ready", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full_counts_sessions() {
        let app = create_test_app();
        start_session(&app).await;

        let response = app.oneshot(get("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["active_sessions"], 1);
    }

    #[tokio::test]
    async fn test_home_sets_session_cookie() {
        let app = create_test_app();
        let response = app.oneshot(get("/", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(session_cookie(&response).starts_with("forge_session="));
        let body = body_string(response).await;
        assert!(body.contains("Before They Happen"));
    }

    #[tokio::test]
    async fn test_existing_session_not_reissued() {
        let app = create_test_app();
        let cookie = start_session(&app).await;

        let response = app
            .oneshot(get("/?page=alerts", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_unknown_page() {
        let app = create_test_app();
        let response = app.oneshot(get("/?page=admin", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_digital_twin_query() {
        let app = create_test_app();
        let response = app
            .oneshot(get("/?page=digital-twin&rpm=5000&load=100&temp=50", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("55.00 Units"));
        assert!(body.contains("color:red"));
    }

    #[tokio::test]
    async fn test_chat_persists_in_session() {
        let app = create_test_app();
        let cookie = start_session(&app).await;

        let response = app
            .clone()
            .oneshot(post_form(
                "/chat",
                &cookie,
                "message=What%27s+the+PRICING%3F&page=scheduling",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains(PRICING_REPLY));
        assert!(body.contains("Smart Maintenance Scheduling"));

        let response = app
            .clone()
            .oneshot(get("/?page=home", Some(&cookie)))
            .await
            .unwrap();
        assert!(body_string(response).await.contains("$499/mo"));

        // Another browser has its own history
        let response = app.oneshot(get("/", None)).await.unwrap();
        assert!(!body_string(response).await.contains("$499/mo"));
    }

    #[tokio::test]
    async fn test_empty_chat_message_ignored() {
        let app = create_test_app();
        let cookie = start_session(&app).await;

        let response = app
            .oneshot(post_form("/chat", &cookie, "message=&page=home"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(!body.contains(r#"class="user-msg""#));
    }

    #[tokio::test]
    async fn test_whitespace_chat_message_answered() {
        let app = create_test_app();
        let cookie = start_session(&app).await;

        let response = app
            .oneshot(post_form("/chat", &cookie, "message=+++&page=home"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert_eq!(body.matches(r#"class="user-msg""#).count(), 1);
        assert!(body.contains("please visit the Input Data page"));
    }

    #[tokio::test]
    async fn test_invalid_upload_stays_idle() {
        let app = create_test_app();
        let cookie = start_session(&app).await;

        let response = app
            .clone()
            .oneshot(post_upload(&cookie, "broken.csv", "a,b\n1,2,3"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(response).await;
        assert!(body.contains("Error reading file. Please ensure it is a valid CSV."));
        assert!(!body.contains(r#"action="/analyze""#));

        let response = app
            .oneshot(post_form("/analyze", &cookie, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(!body_string(response).await.contains("ANALYSIS COMPLETE"));
    }

    #[tokio::test]
    async fn test_upload_analyze_reset() {
        let app = create_test_app();
        let cookie = start_session(&app).await;

        let response = app
            .clone()
            .oneshot(post_upload(
                &cookie,
                "sensors.csv",
                "machine,vibration\nCNC-01,2.4\nPump-02,3.1",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Successfully uploaded: sensors.csv"));
        assert!(body.contains("<td>Pump-02</td>"));

        let response = app
            .clone()
            .oneshot(post_form("/analyze", &cookie, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("ANALYSIS COMPLETE"));
        assert!(body.contains("Bearing Wear"));

        let response = app
            .clone()
            .oneshot(get("/?page=input-data", Some(&cookie)))
            .await
            .unwrap();
        assert!(body_string(response).await.contains("ANALYSIS COMPLETE"));

        let response = app
            .oneshot(post_form("/analysis/reset", &cookie, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(!body.contains("ANALYSIS COMPLETE"));
        assert!(body.contains(r#"action="/upload""#));
        assert!(!body.contains("sensors.csv"));
    }

    #[tokio::test]
    async fn test_oversized_upload_rejected() {
        let app = create_test_app_with_upload_limit(256);
        let cookie = start_session(&app).await;

        let mut content = String::from("machine,vibration\n");
        for i in 0..100 {
            content.push_str(&format!("CNC-{:02},{}.5\n", i, i));
        }

        let response = app
            .clone()
            .oneshot(post_upload(&cookie, "huge.csv", &content))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let response = app
            .oneshot(get("/?page=input-data", Some(&cookie)))
            .await
            .unwrap();
        assert!(!body_string(response).await.contains("huge.csv"));
    }

    #[tokio::test]
    async fn test_upload_limit_only_applies_to_upload() {
        let app = create_test_app_with_upload_limit(256);
        let cookie = start_session(&app).await;

        let message = "a".repeat(1024);
        let response = app
            .oneshot(post_form(
                "/chat",
                &cookie,
                &format!("message={}&page=home", message),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_lead_submission() {
        let app = create_test_app();
        let cookie = start_session(&app).await;

        let response = app
            .clone()
            .oneshot(post_form(
                "/leads/trial",
                &cookie,
                "first_name=Ada&last_name=Lovelace&email=ada%40forge.example&company=Engines&industry=Energy",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains(LEAD_RECEIVED));

        let response = app
            .clone()
            .oneshot(post_form(
                "/leads/demo",
                &cookie,
                "first_name=Ada&last_name=&email=ada%40forge.example&company=Engines&industry=Energy",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_string(response).await;
        assert!(body.contains("Last Name is required"));
        assert!(body.contains(r#"value="Engines""#));

        let response = app
            .oneshot(post_form("/leads/newsletter", &cookie, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_mock_actions() {
        let app = create_test_app();
        let cookie = start_session(&app).await;

        let response = app
            .clone()
            .oneshot(post_form("/actions/start-trial", &cookie, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("Please select"));

        let response = app
            .clone()
            .oneshot(post_form(
                "/actions/generate-report",
                &cookie,
                "report_type=ROI+Analysis&start_date=2024-01-01&end_date=2024-02-01",
            ))
            .await
            .unwrap();
        assert!(body_string(response).await.contains("Report generated!"));

        let response = app
            .oneshot(post_form("/actions/self-destruct", &cookie, ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
