//! REST client for the remote blog service.
//!
//! 远程博客服务的 REST 客户端。

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use qp_core::blog::{Comment, Post, ProfileUpdate, UserProfile, UserProfileView, UserSummary};
use qp_core::composer::{PictureFile, PostDraft};
use qp_core::config::ApiConfig;
use qp_core::ports::{ApiError, BlogApiPort, OtpIssued};
use qp_core::registration::RegistrationForm;

use crate::wire::{
    CommentRequest, ErrorBody, FeedEnvelope, LoginRequest, MessageBody, OtpResponse,
    ResetPasswordRequest, TokenResponse,
};

/// Stateless HTTP client for the blog service.
///
/// The base URL and timeout come from [`ApiConfig`]; the bearer token is
/// passed per call by the application layer.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(transport_error)?;
        ensure_success(response).await
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(e.to_string())
    }
}

/// Map non-success statuses to [`ApiError`], surfacing the server message
/// verbatim when the body carries one.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| {
            let text = body.trim();
            if text.is_empty() {
                format!("request failed with status {}", status.as_u16())
            } else {
                text.to_string()
            }
        });
    Err(ApiError::Status {
        code: status.as_u16(),
        message,
    })
}

async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Read a success body as a human-readable message: either a `{"message"}`
/// object or the raw text.
async fn message_body(response: Response) -> Result<String, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Ok(body) = serde_json::from_str::<MessageBody>(&text) {
        return Ok(body.message);
    }
    Ok(text.trim().to_string())
}

fn picture_part(picture: &PictureFile) -> Result<Part, ApiError> {
    Part::bytes(picture.bytes.clone())
        .file_name(picture.file_name.clone())
        .mime_str(&picture.media_type)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl BlogApiPort for RestClient {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        debug!("POST /login");
        let request = self
            .http
            .post(self.url("/login"))
            .json(&LoginRequest { username, password });
        let response = self.send(request).await?;
        let body: TokenResponse = json_body(response).await?;
        Ok(body.token)
    }

    async fn send_otp(&self, email: &str) -> Result<OtpIssued, ApiError> {
        debug!("POST /send-otp");
        let request = self
            .http
            .post(self.url("/send-otp"))
            .query(&[("email", email)]);
        let response = self.send(request).await?;
        let body: OtpResponse = json_body(response).await?;
        Ok(OtpIssued {
            token: body.token,
            message: body.message,
        })
    }

    async fn reset_password(
        &self,
        token: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<String, ApiError> {
        debug!("PUT /api/users/reset-password");
        let request = self
            .http
            .put(self.url("/api/users/reset-password"))
            .bearer_auth(token)
            .json(&ResetPasswordRequest { otp, new_password });
        let response = self.send(request).await?;
        message_body(response).await
    }

    async fn register(&self, form: &RegistrationForm) -> Result<String, ApiError> {
        debug!("POST /register");
        let request = self.http.post(self.url("/register")).json(form);
        let response = self.send(request).await?;
        message_body(response).await
    }

    async fn fetch_feed(&self, token: &str) -> Result<Vec<Post>, ApiError> {
        debug!("GET /api/posts/feedPosts");
        let request = self
            .http
            .get(self.url("/api/posts/feedPosts"))
            .bearer_auth(token);
        let response = self.send(request).await?;
        let envelope: FeedEnvelope = json_body(response).await?;
        Ok(envelope.body)
    }

    async fn create_post(
        &self,
        token: &str,
        draft: &PostDraft,
        picture: Option<&PictureFile>,
    ) -> Result<String, ApiError> {
        debug!("POST /api/posts/createPost");
        let dto = serde_json::to_string(draft).map_err(|e| ApiError::Decode(e.to_string()))?;
        let dto_part = Part::text(dto)
            .mime_str("application/json")
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        let mut form = Form::new().part("dto", dto_part);
        if let Some(picture) = picture {
            form = form.part("file", picture_part(picture)?);
        }

        let request = self
            .http
            .post(self.url("/api/posts/createPost"))
            .bearer_auth(token)
            .multipart(form);
        let response = self.send(request).await?;
        message_body(response).await
    }

    async fn list_comments(&self, token: &str, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        debug!("GET /api/comments/post/{}", post_id);
        let request = self
            .http
            .get(self.url(&format!("/api/comments/post/{}", post_id)))
            .bearer_auth(token);
        let response = self.send(request).await?;
        json_body(response).await
    }

    async fn create_comment(
        &self,
        token: &str,
        post_id: u64,
        content: &str,
    ) -> Result<(), ApiError> {
        debug!("POST /api/comments/create");
        let request = self
            .http
            .post(self.url("/api/comments/create"))
            .bearer_auth(token)
            .json(&CommentRequest { post_id, content });
        self.send(request).await?;
        Ok(())
    }

    async fn get_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        debug!("GET /api/users/profile");
        let request = self
            .http
            .get(self.url("/api/users/profile"))
            .bearer_auth(token);
        let response = self.send(request).await?;
        json_body(response).await
    }

    async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<String, ApiError> {
        debug!("PUT /api/users/profile");
        let request = self
            .http
            .put(self.url("/api/users/profile"))
            .bearer_auth(token)
            .json(update);
        let response = self.send(request).await?;
        message_body(response).await
    }

    async fn upload_profile_picture(
        &self,
        token: &str,
        picture: &PictureFile,
    ) -> Result<String, ApiError> {
        debug!("POST /api/users/upload-profile-picture");
        let form = Form::new().part("file", picture_part(picture)?);
        let request = self
            .http
            .post(self.url("/api/users/upload-profile-picture"))
            .bearer_auth(token)
            .multipart(form);
        let response = self.send(request).await?;
        message_body(response).await
    }

    async fn view_user(&self, token: &str, user_id: u64) -> Result<UserProfileView, ApiError> {
        debug!("GET /api/posts/getUserProfile/{}", user_id);
        let request = self
            .http
            .get(self.url(&format!("/api/posts/getUserProfile/{}", user_id)))
            .bearer_auth(token);
        let response = self.send(request).await?;
        json_body(response).await
    }

    async fn search_users(
        &self,
        token: &str,
        username: &str,
    ) -> Result<Vec<UserSummary>, ApiError> {
        debug!("GET /api/users/search");
        let request = self
            .http
            .get(self.url("/api/users/search"))
            .query(&[("username", username)])
            .bearer_auth(token);
        let response = self.send(request).await?;
        json_body(response).await
    }
}
