use crate::common::{api_key_config, authenticated_client, bearer, mock_auth};
use knuverse_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

const VERIFICATION_ID: &str = "00112233445566778899aabbccddeeff";

#[tokio::test]
async fn test_verification_start_defaults() {
    let mut server = Server::new_async().await;
    let start = server
        .mock("POST", "/api/v1/verifications")
        .match_body(Matcher::Json(json!({
            "name": "alice",
            "user_agent": format!("knuverse-sdk-rust-v{}", version()),
            "row_doubling": "off"
        })))
        .with_status(201)
        .with_body(json!({ "verification_id": VERIFICATION_ID }).to_string())
        .create_async()
        .await;

    let client = authenticated_client(api_key_config(&server)).await;
    let body = client
        .verification_start(&VerificationRequest::new("alice"))
        .await
        .unwrap();
    assert_eq!(body["verification_id"], VERIFICATION_ID);
    start.assert_async().await;
}

#[tokio::test]
async fn test_verification_start_with_options() {
    let mut server = Server::new_async().await;
    let start = server
        .mock("POST", "/api/v1/verifications")
        .match_body(Matcher::PartialJson(json!({
            "name": "alice",
            "mode": "audiopin",
            "verification_speed": 50,
            "row_doubling": "train"
        })))
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let client = authenticated_client(api_key_config(&server)).await;
    let request = VerificationRequest::new("alice")
        .with_mode(Mode::AudioPin)
        .with_verification_speed(50)
        .with_row_doubling(Some(RowDoubling::Train));
    client.verification_start(&request).await.unwrap();
    start.assert_async().await;
}

#[tokio::test]
async fn test_verification_upload_audio() {
    let mut server = Server::new_async().await;
    let upload = server
        .mock("PUT", format!("/api/v1/verifications/{VERIFICATION_ID}").as_str())
        .match_header("content-type", Matcher::Regex("^multipart/form-data".into()))
        .match_body(Matcher::Regex(r#"filename="answer.wav""#.into()))
        .with_status(202)
        .with_body("{}")
        .create_async()
        .await;

    let client = authenticated_client(api_key_config(&server)).await;
    let upload_data = VerificationUpload::Audio(AudioFile::new("answer.wav", vec![0u8; 16]));
    client
        .verification_upload(VERIFICATION_ID, upload_data)
        .await
        .unwrap();
    upload.assert_async().await;
}

#[tokio::test]
async fn test_verification_upload_bypass() {
    let mut server = Server::new_async().await;
    let upload = server
        .mock("PUT", format!("/api/v1/verifications/{VERIFICATION_ID}").as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="bypass""#.into()),
            Matcher::Regex(r#"name="bypass_code""#.into()),
            Matcher::Regex("778899".into()),
        ]))
        .with_status(202)
        .with_body("{}")
        .create_async()
        .await;

    let client = authenticated_client(api_key_config(&server)).await;
    let bypass = VerificationUpload::Bypass {
        pin: None,
        bypass_code: Some("778899".into()),
    };
    client.verification_upload(VERIFICATION_ID, bypass).await.unwrap();
    upload.assert_async().await;
}

#[tokio::test]
async fn test_verification_resource_secure_uses_given_token() {
    let mut server = Server::new_async().await;
    let auth = mock_auth(&mut server, "unused", 0).await;
    let resource = server
        .mock("GET", format!("/api/v1/verifications/{VERIFICATION_ID}").as_str())
        .match_header("authorization", "Bearer verification.jwt")
        .with_status(200)
        .with_body(r#"{"verified": true}"#)
        .create_async()
        .await;

    let client = Client::new(api_key_config(&server)).unwrap();
    let body = client
        .verification_resource_secure(VERIFICATION_ID, "verification.jwt")
        .await
        .unwrap();
    assert_eq!(body["verified"], true);

    auth.assert_async().await;
    resource.assert_async().await;
}

#[tokio::test]
async fn test_verification_resource_secure_overrides_session_token() {
    let mut server = Server::new_async().await;
    let path = format!("/api/v1/verifications/{VERIFICATION_ID}");
    let with_session = server
        .mock("GET", path.as_str())
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body(r#"{"sent": "session token"}"#)
        .expect(0)
        .create_async()
        .await;
    let with_verification = server
        .mock("GET", path.as_str())
        .match_header("authorization", "Bearer verification.jwt")
        .with_status(200)
        .with_body(r#"{"sent": "verification token"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = authenticated_client(api_key_config(&server)).await;
    let body = client
        .verification_resource_secure(VERIFICATION_ID, "verification.jwt")
        .await
        .unwrap();
    assert_eq!(body["sent"], "verification token");

    // the session token stays installed for later calls
    assert!(client.token().await.is_some());
    let status = server
        .mock("GET", "/api/v1/status")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;
    client.status().await.unwrap();

    with_session.assert_async().await;
    with_verification.assert_async().await;
    status.assert_async().await;
}

#[tokio::test]
async fn test_verification_resource_and_delete() {
    let mut server = Server::new_async().await;
    let path = format!("/api/v1/verifications/{VERIFICATION_ID}");
    let resource = server
        .mock("GET", path.as_str())
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body(r#"{"verified": false}"#)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", path.as_str())
        .with_status(204)
        .create_async()
        .await;

    let client = authenticated_client(api_key_config(&server)).await;
    let body = client.verification_resource(VERIFICATION_ID).await.unwrap();
    assert_eq!(body["verified"], false);
    client.verification_delete(VERIFICATION_ID).await.unwrap();

    resource.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn test_verification_list_and_count() {
    let mut server = Server::new_async().await;
    let list = server
        .mock("GET", "/api/v1/verifications")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("limit".into(), "5".into()),
            Matcher::UrlEncoded("offset".into(), "10".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data": []}"#)
        .create_async()
        .await;
    let count = server
        .mock("HEAD", "/api/v1/verifications")
        .with_status(200)
        .with_header("x-verification-count", "17")
        .create_async()
        .await;

    let client = authenticated_client(api_key_config(&server)).await;
    let query = ListQuery::new().with_limit(5).with_offset(10);
    let body = client.verification_list(&query).await.unwrap();
    assert_eq!(body["data"], json!([]));
    assert_eq!(client.verification_count().await.unwrap(), 17);

    list.assert_async().await;
    count.assert_async().await;
}
