// Presentation layer - HTTP routes
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_dashboard, get_widget, health_check, list_regions, next_region, refresh, select_region,
};
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/regions", get(list_regions))
        .route("/selection", put(select_region))
        .route("/selection/next", post(next_region))
        .route("/refresh", post(refresh))
        .route("/dashboard", get(get_dashboard))
        .route("/widgets/:id", get(get_widget))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::selection_service::SelectionService;
    use crate::domain::region::Region;
    use crate::infrastructure::catalog_repository::StaticWidgetRepository;
    use crate::infrastructure::config::{parse_widgets_config, PageSettings};
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    const CATALOG: &str = r#"
        [[widgets]]
        id = "orders"
        title = "Orders"
        kind = "comparison"
        dimensions = [{ key = "region", label = "Region" }]
        rows = [{ region = "EU1", today = 100, yesterday = 200 }]

        [widgets.overrides]
        EU1 = [{ region = "EU1", today = 50, yesterday = 50 }]

        [[widgets]]
        id = "minutes"
        title = "Minutes since last order"
        kind = "table"
        dimensions = [{ key = "region", label = "Instance" }]
        measures = [{ key = "adyen", label = "Adyen", threshold = "latency_minutes" }]
        rows = [{ region = "AM", adyen = "null" }, { region = "EU4", adyen = 7 }]
    "#;

    fn app() -> Router {
        let repository =
            StaticWidgetRepository::from_config(parse_widgets_config(CATALOG).unwrap()).unwrap();
        let page = PageSettings {
            title: "Order Count Metrics".to_string(),
            window: "02:00 - 08:00 CET".to_string(),
            note: Some("Order count may vary based on sale campaigns.".to_string()),
            default_region: Region::AllInstances,
            widgets_path: String::new(),
        };
        let state = Arc::new(AppState {
            dashboard_service: DashboardService::new(Arc::new(repository), page),
            selection_service: SelectionService::new(Region::AllInstances),
        });
        router(state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1_000_000)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 100).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_regions_lists_selector_order() {
        let (status, body) = send(&app(), Method::GET, "/regions", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["selected"], "All Instances");
        assert_eq!(body["regions"].as_array().unwrap().len(), 8);
        assert_eq!(body["regions"][1], "EU1");
    }

    #[tokio::test]
    async fn test_dashboard_default_selection() {
        let (status, body) = send(&app(), Method::GET, "/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["region"], "All Instances");
        assert_eq!(body["title"], "Order Count Metrics");

        let orders = &body["widgets"][0];
        assert_eq!(orders["kind"], "comparison");
        assert_eq!(orders["overridden"], false);
        let row = &orders["body"]["rows"][0];
        assert_eq!(row["today"], "100");
        assert_eq!(row["difference"], "-100");
        assert_eq!(row["percentage_value"], -50.0);
        assert_eq!(row["direction"], "decrease");

        let minutes = &body["widgets"][1]["body"]["rows"];
        assert_eq!(minutes[0][1]["text"], "-");
        assert_eq!(minutes[0][1]["severity"], "neutral");
        assert_eq!(minutes[1][1]["severity"], "warning");
    }

    #[tokio::test]
    async fn test_selection_drives_dashboard() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/selection",
            Some(serde_json::json!({ "region": "EU1" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["selected"], "EU1");

        let (_, body) = send(&app, Method::GET, "/widgets/orders", None).await;
        assert_eq!(body["overridden"], true);
        assert_eq!(body["body"]["rows"][0]["today"], "50");

        let (_, body) = send(&app, Method::GET, "/widgets/orders?region=AM", None).await;
        assert_eq!(body["region"], "AM");
        assert_eq!(body["body"]["rows"][0]["today"], "100");
    }

    #[tokio::test]
    async fn test_next_region_cycles() {
        let app = app();
        let (_, body) = send(&app, Method::POST, "/selection/next", None).await;
        assert_eq!(body["selected"], "EU1");
        let (_, body) = send(&app, Method::POST, "/selection/next", None).await;
        assert_eq!(body["selected"], "EU2");
    }

    #[tokio::test]
    async fn test_refresh_updates_timestamp_only() {
        let app = app();
        let (status, refreshed) = send(&app, Method::POST, "/refresh", None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, dashboard) = send(&app, Method::GET, "/dashboard", None).await;
        assert_eq!(dashboard["last_updated"], refreshed["last_updated"]);
        assert_eq!(dashboard["widgets"][0]["body"]["rows"][0]["today"], "100");
    }

    #[tokio::test]
    async fn test_unknown_region_is_bad_request() {
        let (status, body) = send(&app(), Method::GET, "/dashboard?region=EU", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "unknown region `EU`");

        let (status, _) = send(
            &app(),
            Method::PUT,
            "/selection",
            Some(serde_json::json!({ "region": "Mars" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_widget_is_not_found() {
        let (status, body) = send(&app(), Method::GET, "/widgets/missing", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "unknown widget `missing`");
    }
}
