// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Parser;
use evdc_api::{
    ApiError, DueDateAlertRequest, DueDateAlertResponse, ReportingScheduleRequest,
    ReportingScheduleResponse, get_due_date_alert, get_reporting_schedule, parse_request_year,
};
use evdc_domain::{local_date, parse_timezone};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::{error, info};

use crate::session::SessionActor;

/// EVDC Server - due-date reminder service for the EV charging data collection portal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    bind: IpAddr,

    /// IANA time zone used to decide the current calendar date
    #[arg(short, long, default_value = "America/New_York")]
    timezone: String,
}

/// Source of the current instant.
type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Time zone in which "today" is evaluated.
    timezone: Tz,
    /// Wall clock; replaced with a fixed instant in tests.
    clock: Clock,
}

impl AppState {
    fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            clock: Arc::new(Utc::now),
        }
    }

    /// The current calendar date in the configured time zone.
    fn today(&self) -> NaiveDate {
        local_date((self.clock)(), self.timezone)
    }
}

/// Query parameters for the due date alert endpoint.
#[derive(Debug, Deserialize)]
struct DueDateAlertQuery {
    /// Optional evaluation date (`YYYY-MM-DD`).
    date: Option<String>,
}

/// Query parameters for the reporting schedule endpoint.
#[derive(Debug, Deserialize)]
struct ReportingScheduleQuery {
    /// Calendar year; defaults to the current local year.
    year: Option<String>,
}

/// API response for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` when the server is answering.
    status: String,
    /// The time zone "today" is evaluated in.
    timezone: String,
    /// The current local calendar date.
    today: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Handler for GET `/due_date_alert` endpoint.
///
/// Returns the reminder banner for the calling account.
async fn handle_get_due_date_alert(
    AxumState(app_state): AxumState<AppState>,
    SessionActor(actor): SessionActor,
    Query(query): Query<DueDateAlertQuery>,
) -> Result<Json<DueDateAlertResponse>, HttpError> {
    info!(
        actor_id = %actor.id,
        role = actor.role.as_str(),
        date = ?query.date,
        "Handling due_date_alert request"
    );

    let request: DueDateAlertRequest = DueDateAlertRequest { date: query.date };
    let response: DueDateAlertResponse =
        get_due_date_alert(&actor, &request, app_state.today())?;

    Ok(Json(response))
}

/// Handler for GET `/reporting_schedule` endpoint.
///
/// Lists every reporting window with its due date and alert interval.
async fn handle_get_reporting_schedule(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ReportingScheduleQuery>,
) -> Result<Json<ReportingScheduleResponse>, HttpError> {
    let year: i32 = match query.year.as_deref() {
        Some(raw) => parse_request_year(raw)?,
        None => app_state.today().year(),
    };
    info!(year, "Handling reporting_schedule request");

    let response: ReportingScheduleResponse =
        get_reporting_schedule(&ReportingScheduleRequest { year })?;

    Ok(Json(response))
}

/// Handler for GET `/health` endpoint.
async fn handle_health(AxumState(app_state): AxumState<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
        timezone: app_state.timezone.name().to_string(),
        today: app_state.today().to_string(),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/due_date_alert", get(handle_get_due_date_alert))
        .route("/reporting_schedule", get(handle_get_reporting_schedule))
        .route("/health", get(handle_health))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing EVDC Server");

    let timezone: Tz = parse_timezone(&args.timezone)?;
    info!(timezone = %timezone.name(), "Evaluating due dates in configured time zone");

    let app_state: AppState = AppState::new(timezone);
    info!(today = %app_state.today(), "Current local date");

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::session::{ACTOR_ID_HEADER, ORGANIZATION_ROLE_HEADER};
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use chrono::TimeZone;
    use evdc_domain::{CallerRole, ReportingWindow};
    use tower::ServiceExt;

    /// Helper to create test app state with a fixed clock.
    fn create_test_app_state(timezone: Tz, now: DateTime<Utc>) -> AppState {
        AppState {
            timezone,
            clock: Arc::new(move || now),
        }
    }

    fn fixed_instant(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
            .single()
            .expect("valid test instant")
    }

    fn alert_request(uri: &str, actor_id: &str, role: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(ACTOR_ID_HEADER, actor_id)
            .header(ORGANIZATION_ROLE_HEADER, role)
            .body(Body::empty())
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_due_date_alert_for_direct_recipient() {
        let app_state = create_test_app_state(
            chrono_tz::America::New_York,
            fixed_instant(2025, 2, 1, 15),
        );
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(alert_request("/due_date_alert", "dr-1", "direct_recipient"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let api_response: DueDateAlertResponse = read_json(response).await;
        assert!(api_response.show_alert);
        assert_eq!(api_response.heading, "Annual & One-Time Data due March 1st");
        assert_eq!(
            api_response.text,
            ReportingWindow::AnnualOneTime.body(CallerRole::Reviewer)
        );
        assert_eq!(api_response.evaluated_on, "2025-02-01");
    }

    #[tokio::test]
    async fn test_due_date_alert_for_subrecipient_with_date_override() {
        let app_state = create_test_app_state(
            chrono_tz::America::New_York,
            fixed_instant(2025, 8, 15, 12),
        );
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(alert_request(
                "/due_date_alert?date=2025-01-31",
                "sr-1",
                "subrecipient_contractor",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let api_response: DueDateAlertResponse = read_json(response).await;
        assert!(api_response.show_alert);
        assert_eq!(
            api_response.heading,
            "Quarter 4 (Oct-Dec) Data due January 31st"
        );
        assert_eq!(api_response.role, CallerRole::Submitter);
        assert_eq!(api_response.window, Some(ReportingWindow::Quarter4));
    }

    #[tokio::test]
    async fn test_today_follows_configured_timezone() {
        // 03:00 UTC on March 2 is still March 1 in New York.
        let instant: DateTime<Utc> = fixed_instant(2025, 3, 2, 3);

        let new_york: Router =
            build_router(create_test_app_state(chrono_tz::America::New_York, instant));
        let response = new_york
            .oneshot(alert_request("/due_date_alert", "jo-1", "joint_office"))
            .await
            .unwrap();
        let api_response: DueDateAlertResponse = read_json(response).await;
        assert!(api_response.show_alert);
        assert_eq!(api_response.evaluated_on, "2025-03-01");

        let utc: Router = build_router(create_test_app_state(chrono_tz::UTC, instant));
        let response = utc
            .oneshot(alert_request("/due_date_alert", "jo-1", "joint_office"))
            .await
            .unwrap();
        let api_response: DueDateAlertResponse = read_json(response).await;
        assert!(!api_response.show_alert);
        assert_eq!(api_response.heading, "");
        assert_eq!(api_response.text, "");
    }

    #[tokio::test]
    async fn test_due_date_alert_without_session_headers_is_unauthorized() {
        let app_state = create_test_app_state(chrono_tz::UTC, fixed_instant(2025, 2, 1, 12));
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/due_date_alert")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);

        let error_response: ErrorResponse = read_json(response).await;
        assert!(error_response.error);
        assert!(error_response.message.contains("x-actor-id"));
    }

    #[tokio::test]
    async fn test_due_date_alert_with_blank_actor_id_is_unauthorized() {
        let app_state = create_test_app_state(chrono_tz::UTC, fixed_instant(2025, 2, 1, 12));
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(alert_request("/due_date_alert", "", "direct_recipient"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_due_date_alert_with_unknown_role_is_bad_request() {
        let app_state = create_test_app_state(chrono_tz::UTC, fixed_instant(2025, 2, 1, 12));
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(alert_request("/due_date_alert", "x-1", "vendor"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let error_response: ErrorResponse = read_json(response).await;
        assert!(error_response.error);
        assert!(error_response.message.contains("organization_role"));
    }

    #[tokio::test]
    async fn test_due_date_alert_with_invalid_date_is_bad_request() {
        let app_state = create_test_app_state(chrono_tz::UTC, fixed_instant(2025, 2, 1, 12));
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(alert_request(
                "/due_date_alert?date=2025-13-01",
                "dr-1",
                "direct_recipient",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);

        let error_response: ErrorResponse = read_json(response).await;
        assert!(error_response.error);
        assert!(error_response.message.contains("date"));
    }

    #[tokio::test]
    async fn test_reporting_schedule_defaults_to_current_year() {
        let app_state = create_test_app_state(chrono_tz::UTC, fixed_instant(2026, 10, 16, 9));
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reporting_schedule")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let schedule: ReportingScheduleResponse = read_json(response).await;
        assert_eq!(schedule.year, 2026);
        assert_eq!(schedule.windows.len(), 5);
        assert_eq!(schedule.windows[3].due_date, "2026-10-31");
    }

    #[tokio::test]
    async fn test_reporting_schedule_rejects_out_of_range_year() {
        let app_state = create_test_app_state(chrono_tz::UTC, fixed_instant(2026, 10, 16, 9));
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reporting_schedule?year=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_reports_local_date() {
        let app_state = create_test_app_state(
            chrono_tz::America::Los_Angeles,
            fixed_instant(2026, 1, 1, 5),
        );
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);

        let health: HealthResponse = read_json(response).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.timezone, "America/Los_Angeles");
        assert_eq!(health.today, "2025-12-31");
    }

    #[tokio::test]
    async fn test_reporting_schedule_rejects_non_numeric_year_with_json_body() {
        for uri in [
            "/reporting_schedule?year=abc",
            "/reporting_schedule?year=99999999999",
        ] {
            let app_state =
                create_test_app_state(chrono_tz::UTC, fixed_instant(2026, 10, 16, 9));
            let app: Router = build_router(app_state);

            let response = app
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST, "{uri}");

            let error_response: ErrorResponse = read_json(response).await;
            assert!(error_response.error);
            assert!(error_response.message.contains("'year'"));
        }
    }
}
