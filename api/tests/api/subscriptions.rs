use crate::helpers::spawn_app;

#[tokio::test]
async fn subscribe_returns_a_200_for_valid_form_data() {
    // Arrange
    let app = spawn_app().await;
    let body = "email=james%40test.com";

    // Act
    let response = app.post_subscriptions(body.into()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());
}

#[tokio::test]
async fn subscribe_persists_the_new_subscriber() {
    // Arrange
    let app = spawn_app().await;
    let body = "email=james%40test.com";

    // Act
    app.post_subscriptions(body.into()).await;

    // Assert
    let saved = app.stored_subscribers();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0]["email"], "james@test.com");
    assert_eq!(saved[0]["status"], "active");
    assert!(saved[0]["timestamp"].is_string());
}

#[tokio::test]
async fn subscribe_accepts_the_same_address_twice() {
    // Arrange
    let app = spawn_app().await;
    let body = "email=james%40test.com";

    // Act
    let first = app.post_subscriptions(body.into()).await;
    let second = app.post_subscriptions(body.into()).await;

    // Assert
    assert_eq!(200, first.status().as_u16());
    assert_eq!(200, second.status().as_u16());
    assert_eq!(app.stored_subscribers().len(), 2);
}

#[tokio::test]
async fn subscribe_returns_a_400_when_data_is_missing() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![("", "missing the email"), ("name=james", "wrong field")];

    for (invalid_body, error_message) in test_cases {
        // Act
        let response = app.post_subscriptions(invalid_body.into()).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            error_message
        );
    }
}

#[tokio::test]
async fn subscribe_returns_a_400_when_the_email_is_invalid() {
    // Arrange
    let app = spawn_app().await;
    let test_cases = vec![
        ("email=", "empty email"),
        ("email=%20%20", "whitespace email"),
        ("email=definitely-not-an-email", "no @ symbol"),
    ];

    for (body, description) in test_cases {
        // Act
        let response = app.post_subscriptions(body.into()).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request when the payload was {}.",
            description
        );
    }
    assert!(app.stored_subscribers().is_empty());
}
