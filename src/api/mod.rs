mod payload;

use axum::{
    Router,
    extract::{Json, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::core::{
    Assumptions, ValidationError, build_dashboard, compute_retirement_outlook, faq, loan_report,
    summarize_compound_interest, validate_query,
};
use payload::{
    ChatPayload, CompoundInterestPayload, LoanPayload, PlanPayload, RetirementPayload,
    compound_interest_from_payload, loan_from_payload, profile_from_payload,
    retirement_from_payload,
};

const INDEX_HTML: &str = include_str!("../../web/index.html");
const STYLES_CSS: &str = include_str!("../../web/styles.css");
const APP_JS: &str = include_str!("../../web/app.js");

#[derive(Clone, Debug)]
struct AppState {
    assumptions: Assumptions,
}

#[derive(Debug, Serialize)]
struct ChatResponse {
    reply: &'static str,
}

#[derive(Debug, Serialize)]
struct SuggestionsResponse {
    greeting: &'static str,
    suggestions: [&'static str; 5],
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn build_router(assumptions: Assumptions) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/app.js", get(app_js_handler))
        .route(
            "/api/compound-interest",
            get(compound_get_handler).post(compound_post_handler),
        )
        .route(
            "/api/retirement",
            get(retirement_get_handler).post(retirement_post_handler),
        )
        .route("/api/loan", get(loan_get_handler).post(loan_post_handler))
        .route("/api/plan", post(plan_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/chat/suggestions", get(suggestions_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { assumptions })
}

pub async fn run_http_server(port: u16, assumptions: Assumptions) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = build_router(assumptions);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, ?assumptions, "wealthwhiz HTTP API listening");
    info!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn index_handler() -> impl IntoResponse {
    with_cache_control(Html(INDEX_HTML))
}

async fn styles_handler() -> impl IntoResponse {
    with_cache_control((
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLES_CSS,
    ))
}

async fn app_js_handler() -> impl IntoResponse {
    with_cache_control((
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        APP_JS,
    ))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn compound_get_handler(Query(payload): Query<CompoundInterestPayload>) -> Response {
    compound_handler_impl(payload)
}

async fn compound_post_handler(Json(payload): Json<CompoundInterestPayload>) -> Response {
    compound_handler_impl(payload)
}

fn compound_handler_impl(payload: CompoundInterestPayload) -> Response {
    let input = match compound_interest_from_payload(payload) {
        Ok(input) => input,
        Err(err) => return validation_error_response("compound-interest", err),
    };
    let result = summarize_compound_interest(&input);
    debug!(?input, final_balance = result.final_balance, "compound interest computed");
    json_response(StatusCode::OK, result)
}

async fn retirement_get_handler(
    State(state): State<AppState>,
    Query(payload): Query<RetirementPayload>,
) -> Response {
    retirement_handler_impl(&state, payload)
}

async fn retirement_post_handler(
    State(state): State<AppState>,
    Json(payload): Json<RetirementPayload>,
) -> Response {
    retirement_handler_impl(&state, payload)
}

fn retirement_handler_impl(state: &AppState, payload: RetirementPayload) -> Response {
    let input = match retirement_from_payload(payload) {
        Ok(input) => input,
        Err(err) => return validation_error_response("retirement", err),
    };
    let outlook = compute_retirement_outlook(&input, &state.assumptions);
    debug!(?input, coverage = ?outlook.coverage, "retirement outlook computed");
    json_response(StatusCode::OK, outlook)
}

async fn loan_get_handler(Query(payload): Query<LoanPayload>) -> Response {
    loan_handler_impl(payload)
}

async fn loan_post_handler(Json(payload): Json<LoanPayload>) -> Response {
    loan_handler_impl(payload)
}

fn loan_handler_impl(payload: LoanPayload) -> Response {
    let input = match loan_from_payload(&payload) {
        Ok(input) => input,
        Err(err) => return validation_error_response("loan", err),
    };
    let report = loan_report(&input, payload.schedule.unwrap_or(false));
    debug!(
        ?input,
        monthly_payment = report.summary.monthly_payment,
        "loan summary computed"
    );
    json_response(StatusCode::OK, report)
}

async fn plan_handler(
    State(state): State<AppState>,
    Json(payload): Json<PlanPayload>,
) -> Response {
    let profile = match profile_from_payload(payload) {
        Ok(profile) => profile,
        Err(err) => return validation_error_response("plan", err),
    };
    let dashboard = build_dashboard(&profile, &state.assumptions);
    debug!(
        years_to_goal = dashboard.years_to_goal,
        goal_capped = dashboard.goal_capped,
        "dashboard built"
    );
    json_response(StatusCode::OK, dashboard)
}

async fn chat_handler(Json(payload): Json<ChatPayload>) -> Response {
    let query = match validate_query(&payload.message) {
        Ok(query) => query,
        Err(err) => return validation_error_response("chat", err),
    };
    json_response(
        StatusCode::OK,
        ChatResponse {
            reply: faq::answer(query),
        },
    )
}

async fn suggestions_handler() -> Response {
    json_response(
        StatusCode::OK,
        SuggestionsResponse {
            greeting: faq::GREETING,
            suggestions: faq::SUGGESTIONS,
        },
    )
}

fn with_cache_control<R: IntoResponse>(response: R) -> Response {
    let mut response = response.into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    with_cache_control((status, Json(body)))
}

fn validation_error_response(endpoint: &str, err: ValidationError) -> Response {
    warn!(endpoint, %err, "rejected request");
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    async fn send(request: Request<Body>) -> (StatusCode, Response) {
        let response = build_router(Assumptions::default())
            .oneshot(request)
            .await
            .expect("router is infallible");
        (response.status(), response)
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("valid request")
    }

    fn post_json(uri: &str, json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("valid request")
    }

    #[tokio::test]
    async fn compound_interest_query_returns_derived_values() {
        let (status, response) = send(get(
            "/api/compound-interest?principal=10000&monthlyContribution=500&annualRate=7&years=1",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"no-store"[..])
        );
        let json = body_json(response).await;
        assert_approx(json["finalBalance"].as_f64().expect("number"), 16_700.0);
        assert_approx(json["totalContributions"].as_f64().expect("number"), 16_000.0);
        assert_approx(json["interestEarned"].as_f64().expect("number"), 700.0);
    }

    #[tokio::test]
    async fn loan_post_includes_schedule_on_request() {
        let (status, response) = send(post_json(
            "/api/loan",
            r#"{ "amount": 120000, "interestRate": 0, "termYears": 10, "schedule": true }"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["monthlyPayment"].as_f64(), Some(1_000.0));
        assert_eq!(json["totalInterest"].as_f64(), Some(0.0));
        let schedule = json["schedule"].as_array().expect("schedule rows");
        assert_eq!(schedule.len(), 120);
        assert_eq!(schedule[119]["balance"].as_f64(), Some(0.0));
    }

    #[tokio::test]
    async fn loan_get_omits_schedule_by_default() {
        let (status, response) = send(get("/api/loan")).await;
        assert_eq!(status, StatusCode::OK);
        let json = body_json(response).await;
        let payment = json["monthlyPayment"].as_f64().expect("number");
        assert!((payment - 1_520.06).abs() < 0.005);
        assert!(json.get("schedule").is_none());
    }

    #[tokio::test]
    async fn retirement_reports_tagged_coverage() {
        let (status, response) = send(post_json(
            "/api/retirement",
            r#"{ "currentAge": 60, "retirementAge": 60, "currentSavings": 5000000,
                 "monthlyContribution": 0, "yearlyExpenses": 40000 }"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["yearsOfRetirementCovered"].as_f64(), Some(0.0));
        assert_eq!(json["coverage"]["kind"], "indefinite");
        assert_eq!(json["savingsAtRetirement"].as_f64(), Some(5_000_000.0));
        assert_eq!(json["verdict"], "You're on track for a secure retirement!");
    }

    #[tokio::test]
    async fn retirement_rejects_earlier_retirement_age() {
        let (status, response) =
            send(get("/api/retirement?currentAge=50&retirementAge=45")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        let message = json["error"].as_str().expect("error message");
        assert!(message.contains("retirementAge"));
    }

    #[tokio::test]
    async fn plan_returns_dashboard() {
        let (status, response) = send(post_json(
            "/api/plan",
            r#"{ "monthlyIncome": 5000, "riskTolerance": "conservative" }"#,
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let json = body_json(response).await;
        let years = json["yearsToGoal"].as_u64().expect("years");
        let projection = json["projection"].as_array().expect("projection");
        assert_eq!(projection.len() as u64, years + 1);
        assert_eq!(projection[0]["projectedValue"].as_f64(), Some(30_000.0));
        assert_eq!(json["goalCapped"], false);
        assert_eq!(json["expenseBreakdown"].as_array().map(Vec::len), Some(5));
        let housing = json["expenseInsights"]["housing"].as_str().expect("message");
        assert!(housing.contains("within the recommended range"));
        assert!(json["expenseInsights"]["housingCostPercent"].is_number());
        let risk = json["recommendations"]["riskTolerance"]
            .as_str()
            .expect("message");
        assert!(risk.contains("conservative"));
    }

    #[tokio::test]
    async fn plan_rejects_invalid_profile() {
        let (status, response) =
            send(post_json("/api/plan", r#"{ "investmentTimeframe": 2 }"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "investmentTimeframe must be between 5 and 50");
    }

    #[tokio::test]
    async fn chat_answers_and_rejects_blank_messages() {
        let (status, response) =
            send(post_json("/api/chat", r#"{ "message": "What is SIP?" }"#)).await;
        assert_eq!(status, StatusCode::OK);
        let json = body_json(response).await;
        let reply = json["reply"].as_str().expect("reply");
        assert!(reply.starts_with("Systematic Investment Plan"));

        let (status, _) = send(post_json("/api/chat", r#"{ "message": "   " }"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn suggestions_and_static_assets_are_served() {
        let (status, response) = send(get("/api/chat/suggestions")).await;
        assert_eq!(status, StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["suggestions"].as_array().map(Vec::len), Some(5));

        let (status, response) = send(get("/app.js")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(&b"application/javascript; charset=utf-8"[..])
        );

        let (status, _) = send(get("/")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let (status, response) = send(get("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Not found");
    }
}
