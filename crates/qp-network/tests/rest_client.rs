//! RestClient tests against a local mock server.

use mockito::Matcher;

use qp_core::composer::{PictureFile, PostDraft};
use qp_core::config::ApiConfig;
use qp_core::ports::{ApiError, BlogApiPort};
use qp_network::RestClient;

fn client_for(server: &mockito::Server) -> RestClient {
    let config = ApiConfig {
        base_url: server.url(),
        timeout_secs: 5,
    };
    RestClient::new(&config).expect("build client")
}

#[tokio::test]
async fn login_returns_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/login")
        .match_body(Matcher::JsonString(
            r#"{"username":"alice","password":"Abc123!"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"tok-1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let token = client.login("alice", "Abc123!").await.unwrap();
    assert_eq!(token, "tok-1");
    mock.assert_async().await;
}

#[tokio::test]
async fn server_error_message_is_carried_verbatim() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/login")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Invalid credentials"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.login("alice", "nope").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            code: 400,
            message: "Invalid credentials".into()
        }
    );
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn plain_text_error_body_is_used_as_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/register")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.register(&Default::default()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            code: 500,
            message: "boom".into()
        }
    );
}

#[tokio::test]
async fn rejected_token_maps_to_unauthorized() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/posts/feedPosts")
        .with_status(401)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.fetch_feed("stale").await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
}

#[tokio::test]
async fn fetch_feed_sends_bearer_and_unwraps_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/posts/feedPosts")
        .match_header("authorization", "Bearer tok-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"body":[{"id":7,"title":"Hello","content":"First!","authorName":"alice"}]}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let posts = client.fetch_feed("tok-1").await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 7);
    assert_eq!(posts[0].author_name, "alice");
    mock.assert_async().await;
}

#[tokio::test]
async fn create_post_without_picture_omits_file_part() {
    let mut server = mockito::Server::new_async().await;
    let file_part = server
        .mock("POST", "/api/posts/createPost")
        .match_body(Matcher::Regex(r#"name="file""#.to_string()))
        .with_status(201)
        .expect(0)
        .create_async()
        .await;
    let dto_only = server
        .mock("POST", "/api/posts/createPost")
        .match_body(Matcher::Regex(r#"name="dto""#.to_string()))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Post created"}"#)
        .create_async()
        .await;

    let draft = PostDraft {
        title: "Hello".into(),
        content: "First!".into(),
        ..Default::default()
    };
    let client = client_for(&server);
    let message = client.create_post("tok-1", &draft, None).await.unwrap();
    assert_eq!(message, "Post created");
    dto_only.assert_async().await;
    file_part.assert_async().await;
}

#[tokio::test]
async fn create_post_with_picture_sends_both_parts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/posts/createPost")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="dto""#.to_string()),
            Matcher::Regex(r#"name="file""#.to_string()),
            Matcher::Regex(r#"filename="cat.png""#.to_string()),
        ]))
        .with_status(201)
        .with_body(r#"{"message":"Post created"}"#)
        .create_async()
        .await;

    let draft = PostDraft {
        title: "Cats".into(),
        content: "A cat.".into(),
        picture_name: Some("cat.png".into()),
        image_type: Some("image/png".into()),
    };
    let picture = PictureFile {
        file_name: "cat.png".into(),
        media_type: "image/png".into(),
        bytes: b"pngbytes".to_vec(),
    };
    let client = client_for(&server);
    client
        .create_post("tok-1", &draft, Some(&picture))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn search_encodes_username_query() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/users/search")
        .match_query(Matcher::UrlEncoded("username".into(), "alice".into()))
        .match_header("authorization", "Bearer tok-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let users = client.search_users("tok-1", "alice").await.unwrap();
    assert!(users.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn send_otp_returns_reset_token_and_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/send-otp")
        .match_query(Matcher::UrlEncoded(
            "email".into(),
            "alice@example.com".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"reset-tok","message":"OTP sent to your email"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let issued = client.send_otp("alice@example.com").await.unwrap();
    assert_eq!(issued.token, "reset-tok");
    assert_eq!(issued.message.as_deref(), Some("OTP sent to your email"));
}

#[tokio::test]
async fn list_comments_hits_post_scoped_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/comments/post/42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"content":"Nice","user":{"fullName":"Bob"}}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let comments = client.list_comments("tok-1", 42).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(
        comments[0].user.as_ref().unwrap().full_name.as_deref(),
        Some("Bob")
    );
    mock.assert_async().await;
}
