//! Webhook delivery against a local mock server.

use std::time::Duration;

use httpmock::prelude::*;

use mattersend::Error;
use mattersend::delivery::WebhookClient;
use mattersend::message::Message;

fn message(server: &MockServer) -> Message {
    let mut message = Message {
        url: Some(server.url("/hooks/abcdefghi123456")),
        channel: Some("town-square".to_string()),
        ..Message::default()
    };
    message.append("deploy finished", None);
    message
}

fn client() -> WebhookClient {
    WebhookClient::with_timeout(Duration::from_secs(5)).unwrap()
}

#[test]
fn test_payload_is_posted_as_form_field() {
    let server = MockServer::start();
    let msg = message(&server);

    let hook = server.mock(|when, then| {
        when.method(POST)
            .path("/hooks/abcdefghi123456")
            .header("content-type", "application/x-www-form-urlencoded")
            .is_true(|req| {
                let body = String::from_utf8_lossy(req.body().as_ref());
                body.starts_with("payload=") && !body.contains('&') && body.contains("town-square")
            });
        then.status(200).body("ok");
    });

    msg.send(&client()).unwrap();
    hook.assert();
}

#[test]
fn test_json_error_body_is_reported() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST).path("/hooks/abcdefghi123456");
        then.status(502)
            .header("content-type", "application/json")
            .body(r#"{"message": "X"}"#);
    });

    let err = message(&server).send(&client()).unwrap_err();
    hook.assert();
    assert!(matches!(err, Error::Delivery { status: 502, .. }));
    assert_eq!(err.to_string(), "X (502)");
}

#[test]
fn test_plain_error_body_is_reported_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(500).body("Internal Server Error");
    });

    let err = message(&server).send(&client()).unwrap_err();
    assert_eq!(err.to_string(), "Internal Server Error (500)");
}

#[test]
fn test_success_other_than_200_is_a_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(204);
    });

    let err = message(&server).send(&client()).unwrap_err();
    assert_eq!(err.status(), Some(204));
}

#[test]
fn test_missing_channel_never_reaches_the_server() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST);
        then.status(200);
    });

    let mut msg = message(&server);
    msg.channel = None;
    let err = msg.send(&client()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    hook.assert_calls(0);
}

#[test]
fn test_single_attempt_on_failure() {
    let server = MockServer::start();
    let hook = server.mock(|when, then| {
        when.method(POST);
        then.status(503).body("busy");
    });

    assert!(message(&server).send(&client()).is_err());
    hook.assert_calls(1);
}

#[test]
fn test_unreachable_server_is_a_transport_error() {
    let msg = Message {
        url: Some("http://127.0.0.1:9/hooks/nothing-listens-here".to_string()),
        channel: Some("town-square".to_string()),
        ..Message::default()
    };
    let err = msg.send(&client()).unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
