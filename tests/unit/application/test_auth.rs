use crate::common::{JWT, api_key_config, authenticated_client, bearer, mock_auth, user_config};
use chrono::{Duration, Utc};
use knuverse_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_authenticate_installs_bearer_header() {
    let mut server = Server::new_async().await;
    let auth = mock_auth(&mut server, JWT, 1).await;
    let status = server
        .mock("GET", "/api/v1/status")
        .match_header("authorization", bearer().as_str())
        .match_header("accept", "application/json")
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    let client = Client::new(api_key_config(&server)).unwrap();
    let token = client.authenticate().await.unwrap();
    assert_eq!(token.jwt, JWT);
    assert!(!token.is_stale());

    let body = client.status().await.unwrap();
    assert_eq!(body, json!({"status": "ok"}));

    auth.assert_async().await;
    status.assert_async().await;
}

#[tokio::test]
async fn test_user_credentials_login_body() {
    let mut server = Server::new_async().await;
    let auth = server
        .mock("POST", "/api/v1/auth")
        .match_body(Matcher::Json(json!({"user": "admin", "password": "pw"})))
        .with_status(200)
        .with_body(json!({ "jwt": JWT }).to_string())
        .expect(1)
        .create_async()
        .await;

    let client = Client::connect(user_config(&server)).await.unwrap();
    assert_eq!(client.token().await.unwrap().jwt, JWT);
    auth.assert_async().await;
}

#[tokio::test]
async fn test_first_protected_call_authenticates() {
    let mut server = Server::new_async().await;
    let auth = mock_auth(&mut server, JWT, 1).await;
    let warnings = server
        .mock("GET", "/api/v1/status/warnings")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let client = Client::new(api_key_config(&server)).unwrap();
    assert!(client.token().await.is_none());

    client.warnings().await.unwrap();
    client.warnings().await.unwrap();

    auth.assert_async().await;
    warnings.assert_async().await;
}

#[tokio::test]
async fn test_token_reused_at_nine_minutes() {
    let mut server = Server::new_async().await;
    let auth = mock_auth(&mut server, "new.jwt", 0).await;
    let status = server
        .mock("GET", "/api/v1/status")
        .match_header("authorization", "Bearer old.jwt")
        .with_status(200)
        .with_body("{}")
        .expect(1)
        .create_async()
        .await;

    let client = Client::new(api_key_config(&server)).unwrap();
    let acquired = Utc::now() - Duration::minutes(9);
    client
        .auth()
        .install_token(AuthToken::with_acquired_at("old.jwt", acquired))
        .await
        .unwrap();

    client.status().await.unwrap();

    assert_eq!(client.token().await.unwrap().acquired_at, acquired);
    auth.assert_async().await;
    status.assert_async().await;
}

#[tokio::test]
async fn test_token_renewed_at_eleven_minutes() {
    let mut server = Server::new_async().await;
    let auth = mock_auth(&mut server, "new.jwt", 1).await;
    let status = server
        .mock("GET", "/api/v1/status")
        .match_header("authorization", "Bearer new.jwt")
        .with_status(200)
        .with_body("{}")
        .expect(2)
        .create_async()
        .await;

    let client = Client::new(api_key_config(&server)).unwrap();
    client
        .auth()
        .install_token(AuthToken::with_acquired_at(
            "old.jwt",
            Utc::now() - Duration::minutes(11),
        ))
        .await
        .unwrap();

    client.status().await.unwrap();
    client.status().await.unwrap();

    let token = client.token().await.unwrap();
    assert_eq!(token.jwt, "new.jwt");
    assert!(!token.is_stale());
    auth.assert_async().await;
    status.assert_async().await;
}

#[tokio::test]
async fn test_concurrent_calls_authenticate_once() {
    let mut server = Server::new_async().await;
    let auth = mock_auth(&mut server, JWT, 1).await;
    let status = server
        .mock("GET", "/api/v1/status")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body("{}")
        .expect(3)
        .create_async()
        .await;

    let client = Client::new(api_key_config(&server)).unwrap();
    let (a, b, c) = tokio::join!(client.status(), client.status(), client.status());
    assert!(a.is_ok() && b.is_ok() && c.is_ok());

    auth.assert_async().await;
    status.assert_async().await;
}

#[tokio::test]
async fn test_failed_login_stops_protected_call() {
    let mut server = Server::new_async().await;
    let auth = server
        .mock("POST", "/api/v1/auth")
        .with_status(401)
        .with_body("invalid credentials")
        .create_async()
        .await;
    let status = server
        .mock("GET", "/api/v1/status")
        .expect(0)
        .create_async()
        .await;

    let client = Client::new(api_key_config(&server)).unwrap();
    let err = client.status().await.unwrap_err();
    match err {
        AppError::Unauthorized(text) => assert_eq!(text, "invalid credentials"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(client.token().await.is_none());

    auth.assert_async().await;
    status.assert_async().await;
}

#[tokio::test]
async fn test_login_without_jwt_is_rejected() {
    let mut server = Server::new_async().await;
    let _auth = server
        .mock("POST", "/api/v1/auth")
        .with_status(200)
        .with_body(r#"{"token": "nope"}"#)
        .create_async()
        .await;

    let client = Client::new(api_key_config(&server)).unwrap();
    let err = client.authenticate().await.unwrap_err();
    assert!(matches!(err, AppError::Deserialization(_)));
    assert!(client.token().await.is_none());
}

#[tokio::test]
async fn test_refresh_replaces_token() {
    let mut server = Server::new_async().await;
    let refresh = server
        .mock("GET", "/api/v1/auth/refresh")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body(r#"{"jwt": "refreshed.jwt"}"#)
        .expect(1)
        .create_async()
        .await;
    let status = server
        .mock("GET", "/api/v1/status")
        .match_header("authorization", "Bearer refreshed.jwt")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = authenticated_client(api_key_config(&server)).await;
    let token = client.auth_refresh().await.unwrap();
    assert_eq!(token.jwt, "refreshed.jwt");

    client.status().await.unwrap();
    refresh.assert_async().await;
    status.assert_async().await;
}

#[tokio::test]
async fn test_refresh_without_token_logs_in() {
    let mut server = Server::new_async().await;
    let auth = mock_auth(&mut server, JWT, 1).await;
    let refresh = server
        .mock("GET", "/api/v1/auth/refresh")
        .expect(0)
        .create_async()
        .await;

    let client = Client::new(api_key_config(&server)).unwrap();
    let token = client.auth_refresh().await.unwrap();
    assert_eq!(token.jwt, JWT);

    auth.assert_async().await;
    refresh.assert_async().await;
}

#[tokio::test]
async fn test_logout_forces_new_login() {
    let mut server = Server::new_async().await;
    let auth = mock_auth(&mut server, "second.jwt", 1).await;
    let status = server
        .mock("GET", "/api/v1/status")
        .match_header("authorization", "Bearer second.jwt")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = authenticated_client(api_key_config(&server)).await;
    client.logout().await;
    assert!(client.token().await.is_none());

    client.status().await.unwrap();
    assert_eq!(client.token().await.unwrap().jwt, "second.jwt");

    auth.assert_async().await;
    status.assert_async().await;
}
