use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_text_messages(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/bot/text", &json!({ "text": "What is nearby?" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body,
        Some(json!({
            "message": "You said: \"What is nearby?\". This is a simulated bot response.",
            "type": "bot"
        }))
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_speech_transcripts(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/bot/speech", &json!({ "speech": "take me to the tower" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.string_field("message"),
        Some("You spoke: \"take me to the tower\". This is a simulated bot response.")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_describe_uploaded_images(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/bot/image", &json!({ "image": "data:image/png;base64,iVBORw0KGgo=" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.string_field("message"),
        Some("This is a description of the photo you uploaded: A beautiful landmark!")
    );
    assert_eq!(response.string_field("type"), Some("bot"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_describe_locations(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/bot/location", &json!({ "latitude": 48.8584, "longitude": 2.2945 }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.string_field("message"),
        Some("You're at coordinates (48.8584, 2.2945). Here's a nearby landmark: The Great Tower, a place with rich history and stunning views.")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_bot_requests(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/api/bot/location", &json!({ "latitude": "north" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_body("Invalid request body");

    // Bot routes never touch the speech provider
    assert_eq!(ctx.provider.call_count(), 0);
}
