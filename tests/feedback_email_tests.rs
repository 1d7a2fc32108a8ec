// Integration tests for the feedback mailer endpoint

use actix_web::{http::StatusCode, test, web, App};
use mockito::{Matcher, Server};
use moving_gateway::config::{EmailSettings, MapsSettings};
use moving_gateway::core::email_template::{FEEDBACK_SUBJECT, REMINDER_SUBJECT};
use moving_gateway::routes::{self, cors, AppState};
use moving_gateway::services::{FeedbackMailer, MapsClient};
use serde_json::{json, Value};
use std::sync::Arc;

const RESEND_KEY: &str = "re_test_key";
const FROM: &str = "Flytt Feedback <feedback@flytt.example>";

fn state(email_url: &str, email_key: Option<&str>) -> AppState {
    let maps = MapsClient::new(&MapsSettings::default()).unwrap();

    let mailer = FeedbackMailer::new(&EmailSettings {
        api_key: email_key.map(str::to_string),
        base_url: email_url.to_string(),
        from_address: FROM.to_string(),
    })
    .unwrap();

    AppState {
        maps: Arc::new(maps),
        mailer: Arc::new(mailer),
    }
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state))
                .app_data(routes::json_config())
                .wrap(cors::permissive())
                .wrap(cors::default_headers())
                .configure(routes::configure_routes),
        )
        .await
    };
}

fn feedback_post(body: Value) -> test::TestRequest {
    test::TestRequest::post().uri("/api/v1/feedback-email").set_json(body)
}

fn feedback_body(is_reminder: Option<bool>) -> Value {
    let mut body = json!({
        "customerEmail": "anna@example.com",
        "customerName": "Anna Andersson",
        "feedbackLink": "https://www.flytt.example/feedback/abc123"
    });
    if let Some(flag) = is_reminder {
        body["isReminder"] = json!(flag);
    }
    body
}

#[actix_web::test]
async fn test_sends_standard_feedback_email() {
    let mut server = Server::new_async().await;
    let upstream = server
        .mock("POST", "/emails")
        .match_header("authorization", format!("Bearer {}", RESEND_KEY).as_str())
        .match_body(Matcher::PartialJson(json!({
            "from": FROM,
            "to": ["anna@example.com"],
            "subject": FEEDBACK_SUBJECT
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"}).to_string())
        .expect(2)
        .create_async()
        .await;

    let app = test_app!(state(&server.url(), Some(RESEND_KEY)));

    for flag in [None, Some(false)] {
        let resp = test::call_service(&app, feedback_post(feedback_body(flag)).to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"success": true, "emailId": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794"})
        );
    }

    upstream.assert_async().await;
}

#[actix_web::test]
async fn test_reminder_uses_reminder_subject() {
    let mut server = Server::new_async().await;
    let upstream = server
        .mock("POST", "/emails")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({"subject": REMINDER_SUBJECT})),
            Matcher::Regex("Anna Andersson".to_string()),
            Matcher::Regex("https://www.flytt.example/feedback/abc123".to_string()),
        ]))
        .with_status(200)
        .with_body(json!({"id": "reminder-1"}).to_string())
        .create_async()
        .await;

    let app = test_app!(state(&server.url(), Some(RESEND_KEY)));
    let resp = test::call_service(&app, feedback_post(feedback_body(Some(true))).to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["emailId"], "reminder-1");

    upstream.assert_async().await;
}

#[actix_web::test]
async fn test_upstream_rejection_is_500() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/emails")
        .with_status(422)
        .with_body(
            json!({
                "statusCode": 422,
                "name": "validation_error",
                "message": "Invalid `to` field."
            })
            .to_string(),
        )
        .create_async()
        .await;

    let app = test_app!(state(&server.url(), Some(RESEND_KEY)));
    let resp = test::call_service(&app, feedback_post(feedback_body(None)).to_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.headers().get("access-control-allow-origin").unwrap(), "*");
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Resend API error: 422 - Invalid `to` field."}));
}

#[actix_web::test]
async fn test_missing_fields_never_reach_upstream() {
    let mut server = Server::new_async().await;
    let upstream = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let app = test_app!(state(&server.url(), Some(RESEND_KEY)));

    let mut body = feedback_body(None);
    body.as_object_mut().unwrap().remove("customerName");
    let resp = test::call_service(&app, feedback_post(body).to_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Validation failed"), "unexpected error: {}", message);

    upstream.assert_async().await;
}

#[actix_web::test]
async fn test_missing_api_key_is_config_error() {
    let mut server = Server::new_async().await;
    let upstream = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let app = test_app!(state(&server.url(), None));
    let resp = test::call_service(&app, feedback_post(feedback_body(None)).to_request()).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Resend API key not configured"}));

    upstream.assert_async().await;
}
