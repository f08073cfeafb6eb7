use crate::helpers::{spawn_app, spawn_app_with_greeting, TestApp};
use greet_service::domain::ErrorResponse;

#[actix_rt::test]
async fn default_greeting_uses_the_configured_phrase() {
    let test_app = spawn_app().await;

    let response = test_app.get_default().await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Hello World!" }));
}

#[actix_rt::test]
async fn missing_greeting_config_falls_back_to_ciao() {
    let test_app = spawn_app_with_greeting(None).await;

    let response = test_app.get_default().await;

    assert_eq!(TestApp::message_of(response).await, "Ciao World!");
}

#[actix_rt::test]
async fn named_greeting_echoes_the_path_segment() {
    let test_app = spawn_app().await;
    let test_cases = vec![
        ("Joe", "Hello Joe!"),
        ("John%20Doe", "Hello John Doe!"),
        ("Jos%C3%A9", "Hello José!"),
        ("%3Cscript%3E", "Hello <script>!"),
        ("greeting", "Hello greeting!"),
    ];
    for (segment, expected) in test_cases {
        let response = test_app.get_named(segment).await;
        assert_eq!(200, response.status().as_u16(), "failed for {}", segment);
        assert_eq!(TestApp::message_of(response).await, expected);
    }
}

#[actix_rt::test]
async fn update_returns_204_and_is_visible_right_away() {
    let test_app = spawn_app().await;

    let response = test_app
        .put_greeting(r#"{"greeting": "Howdy"}"#.into())
        .await;
    assert_eq!(204, response.status().as_u16());
    assert!(response.text().await.unwrap().is_empty());

    let response = test_app.get_default().await;
    assert_eq!(TestApp::message_of(response).await, "Howdy World!");
    let response = test_app.get_named("Joe").await;
    assert_eq!(TestApp::message_of(response).await, "Howdy Joe!");
}

#[actix_rt::test]
async fn update_accepts_an_empty_greeting() {
    let test_app = spawn_app().await;

    let response = test_app.put_greeting(r#"{"greeting": ""}"#.into()).await;
    assert_eq!(204, response.status().as_u16());

    let response = test_app.get_default().await;
    assert_eq!(TestApp::message_of(response).await, " World!");
}

// "table-driven" = "parametrised" test
#[actix_rt::test]
async fn update_returns_a_400_when_greeting_is_missing() {
    let test_app = spawn_app().await;
    let test_cases = vec![
        ("{}", "an empty object"),
        (r#"{"salutation": "Howdy"}"#, "a different key"),
        (r#"{"greeting": null}"#, "a null greeting"),
        ("", "an empty body"),
        ("{\"greeting\": ", "truncated json"),
    ];
    for (body, description) in test_cases {
        let response = test_app.put_greeting(body.into()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let error: ErrorResponse = response.json().await.unwrap();
        assert_eq!(error.error, "No greeting provided");
    }

    //nothing above should have touched the greeting
    let response = test_app.get_default().await;
    assert_eq!(TestApp::message_of(response).await, "Hello World!");
}

#[actix_rt::test]
async fn operational_names_are_ordinary_subjects() {
    let test_app = spawn_app().await;

    for name in &["health", "metrics"] {
        let response = test_app.get_named(name).await;

        assert_eq!(200, response.status().as_u16(), "failed for {}", name);
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "message": format!("Hello {}!", name) }));
    }
}

#[actix_rt::test]
async fn greeting_routes_are_not_served_on_the_admin_port() {
    let test_app = spawn_app().await;

    let response = test_app
        .api_client
        .get(&format!("{}/", &test_app.admin_address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}
