mod common;

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use common::{app_state, canned_report, gemini_envelope};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    htmx: bool,
    body: Option<serde_json::Value>,
) -> (StatusCode, Vec<(String, String)>, String) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    if htmx {
        req = req.header("HX-Request", "true");
    }
    let req = match body {
        Some(value) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => req.body(Body::empty()),
    }
    .expect("request should build");

    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");

    let status = resp.status();
    let headers = resp
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or_default().to_string()))
        .collect();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    (status, headers, String::from_utf8_lossy(&bytes).into_owned())
}

/// GET the dashboard once to mint a session, returning the cookie pair.
async fn bootstrap_session(app: &Router) -> String {
    let (status, headers, _) = send(app, Method::GET, "/", None, false, None).await;
    assert_eq!(status, StatusCode::OK);
    let set_cookie = headers
        .iter()
        .find(|(k, _)| k == "set-cookie")
        .expect("first visit should set a session cookie");
    set_cookie
        .1
        .split(';')
        .next()
        .expect("cookie value")
        .to_string()
}

/// Poll a view until its body contains the marker, or panic after ~3s.
async fn poll_until(app: &Router, cookie: &str, uri: &str, marker: &str) -> String {
    for _ in 0..150 {
        let (_, _, body) = send(app, Method::GET, uri, Some(cookie), true, None).await;
        if body.contains(marker) {
            return body;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("timed out waiting for {marker:?} at {uri}");
}

#[tokio::test]
async fn state_changing_requests_without_htmx_header_are_rejected() {
    let server = mockito::Server::new_async().await;
    let app = clarityplan::router(app_state(&server.url()));

    let (status, _, body) = send(&app, Method::POST, "/start-quiz", None, false, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("CSRF"));
}

#[tokio::test]
async fn incomplete_submission_is_blocked_and_never_reaches_the_boundary() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let app = clarityplan::router(app_state(&server.url()));
    let cookie = bootstrap_session(&app).await;

    // Answer a single question, then try to submit.
    let (status, _, body) = send(
        &app,
        Method::POST,
        "/quiz/answer",
        Some(&cookie),
        true,
        Some(json!({"question_id": "q1", "rating": "4"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("1 / 16"), "progress fragment: {body}");

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/quiz/submit",
        Some(&cookie),
        true,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Please answer all questions"));

    mock.assert_async().await;
}

#[tokio::test]
async fn out_of_range_ratings_are_rejected() {
    let server = mockito::Server::new_async().await;
    let app = clarityplan::router(app_state(&server.url()));
    let cookie = bootstrap_session(&app).await;

    let (status, _, _) = send(
        &app,
        Method::POST,
        "/quiz/answer",
        Some(&cookie),
        true,
        Some(json!({"question_id": "q1", "rating": 9})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn report_views_fall_back_to_the_dashboard_without_a_report() {
    let server = mockito::Server::new_async().await;
    let app = clarityplan::router(app_state(&server.url()));
    let cookie = bootstrap_session(&app).await;

    for uri in ["/report", "/action-plan", "/daily-tasks"] {
        let (status, _, body) = send(&app, Method::GET, uri, Some(&cookie), true, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            body.contains("Lead with Presence and Clarity"),
            "{uri} should render the intro, got: {body}"
        );
    }
}

#[tokio::test]
async fn happy_path_generates_a_full_plan() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_envelope(&canned_report()).to_string())
        .create_async()
        .await;

    let app = clarityplan::router(app_state(&server.url()));
    let cookie = bootstrap_session(&app).await;

    // Answer all sixteen questions with a neutral rating.
    let mut last_progress = String::new();
    for section in clarityplan::catalog::sections() {
        for question in &section.questions {
            let (status, _, body) = send(
                &app,
                Method::POST,
                "/quiz/answer",
                Some(&cookie),
                true,
                Some(json!({"question_id": question.id, "rating": 3})),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            last_progress = body;
        }
    }
    assert!(last_progress.contains("16 / 16"), "fully answered: {last_progress}");

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/quiz/submit",
        Some(&cookie),
        true,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("building your growth plan"), "loading view: {body}");

    let report_page = poll_until(&app, &cookie, "/report", "Cultivate Mindful Presence").await;
    assert!(report_page.contains("Plan at a Glance"));

    // The plain-text export confirms the plan's shape end to end.
    let (status, _, export) =
        send(&app, Method::GET, "/report/export", Some(&cookie), true, None).await;
    assert_eq!(status, StatusCode::OK);
    for area in clarityplan::report::FocusAreaKind::ALL {
        assert!(export.contains(area.label()), "missing {}", area.label());
    }
    assert!(export.contains("Goal #3"));
    assert!(export.contains("Month 6"));

    // Report-dependent views are now reachable.
    let (_, _, plan) = send(&app, Method::GET, "/action-plan", Some(&cookie), true, None).await;
    assert!(plan.contains("Your Top 3 Priorities"));
    let (_, _, tasks) = send(&app, Method::GET, "/daily-tasks", Some(&cookie), true, None).await;
    assert!(tasks.contains("Morning intention"));
}

#[tokio::test]
async fn malformed_boundary_response_returns_to_the_quiz_with_answers_intact() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_envelope(&json!("I'd be happy to help!")).to_string())
        .create_async()
        .await;

    let app = clarityplan::router(app_state(&server.url()));
    let cookie = bootstrap_session(&app).await;

    let (status, _, _) = send(&app, Method::POST, "/demo-run", Some(&cookie), true, None).await;
    assert_eq!(status, StatusCode::OK);

    let quiz = poll_until(
        &app,
        &cookie,
        "/quiz",
        "we encountered an error while generating your report",
    )
    .await;
    // The auto-filled answers survive the failure: radios stay checked.
    assert!(quiz.contains("checked"));

    // Still no report, so the guard holds.
    let (_, _, body) = send(&app, Method::GET, "/report", Some(&cookie), true, None).await;
    assert!(body.contains("we encountered an error") || body.contains("Lead with Presence"));
}

#[tokio::test]
async fn retake_discards_the_plan_and_relocks_report_views() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_envelope(&canned_report()).to_string())
        .create_async()
        .await;

    let app = clarityplan::router(app_state(&server.url()));
    let cookie = bootstrap_session(&app).await;

    send(&app, Method::POST, "/demo-run", Some(&cookie), true, None).await;
    poll_until(&app, &cookie, "/report", "Plan at a Glance").await;

    let (status, _, body) = send(&app, Method::POST, "/retake", Some(&cookie), true, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Lead with Presence and Clarity"), "back to intro");

    let (_, _, body) = send(&app, Method::GET, "/report", Some(&cookie), true, None).await;
    assert!(body.contains("Lead with Presence and Clarity"), "guard re-engaged");

    let (status, _, _) =
        send(&app, Method::GET, "/report/export", Some(&cookie), true, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST, "nothing left to export");
}

#[tokio::test]
async fn local_mutations_flow_through_the_http_surface() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", GENERATE_PATH)
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(gemini_envelope(&canned_report()).to_string())
        .create_async()
        .await;

    let app = clarityplan::router(app_state(&server.url()));
    let cookie = bootstrap_session(&app).await;

    send(&app, Method::POST, "/demo-run", Some(&cookie), true, None).await;
    poll_until(&app, &cookie, "/report", "Plan at a Glance").await;

    // Mutation responses re-render whichever view the session is on, so
    // move there first, as the UI does.
    send(&app, Method::GET, "/daily-tasks", Some(&cookie), true, None).await;
    let (status, _, body) = send(
        &app,
        Method::POST,
        "/task/add",
        Some(&cookie),
        true,
        Some(json!({
            "title": "Evening shutdown",
            "description": "Close the day deliberately.",
            "category": "Reflection",
            "cadence": "Daily",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Evening shutdown"));

    send(&app, Method::GET, "/action-plan", Some(&cookie), true, None).await;
    let (status, _, body) = send(
        &app,
        Method::POST,
        "/priority/add",
        Some(&cookie),
        true,
        Some(json!({
            "title": "Delegate the Monday standup",
            "description": "Free up focus time.",
            "expected_result": "A team that runs its own cadence.",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("4. Delegate the Monday standup"));

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/priority/4/toggle",
        Some(&cookie),
        true,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Delegate the Monday standup"));
}
