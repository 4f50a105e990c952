use async_trait::async_trait;

use crate::blog::{Comment, Post, ProfileUpdate, UserProfile, UserProfileView, UserSummary};
use crate::composer::{PictureFile, PostDraft};
use crate::registration::RegistrationForm;

use super::errors::ApiError;

/// Result of requesting a password-reset OTP: the service issues a short
/// lived reset token alongside the mail confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpIssued {
    pub token: String,
    pub message: Option<String>,
}

/// The remote blog service.
///
/// One method per endpoint; authenticated calls take the bearer token
/// explicitly so the implementation stays stateless.
#[async_trait]
pub trait BlogApiPort: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;

    async fn send_otp(&self, email: &str) -> Result<OtpIssued, ApiError>;

    async fn reset_password(
        &self,
        token: &str,
        otp: &str,
        new_password: &str,
    ) -> Result<String, ApiError>;

    async fn register(&self, form: &RegistrationForm) -> Result<String, ApiError>;

    async fn fetch_feed(&self, token: &str) -> Result<Vec<Post>, ApiError>;

    async fn create_post(
        &self,
        token: &str,
        draft: &PostDraft,
        picture: Option<&PictureFile>,
    ) -> Result<String, ApiError>;

    async fn list_comments(&self, token: &str, post_id: u64) -> Result<Vec<Comment>, ApiError>;

    async fn create_comment(
        &self,
        token: &str,
        post_id: u64,
        content: &str,
    ) -> Result<(), ApiError>;

    async fn get_profile(&self, token: &str) -> Result<UserProfile, ApiError>;

    async fn update_profile(
        &self,
        token: &str,
        update: &ProfileUpdate,
    ) -> Result<String, ApiError>;

    async fn upload_profile_picture(
        &self,
        token: &str,
        picture: &PictureFile,
    ) -> Result<String, ApiError>;

    async fn view_user(&self, token: &str, user_id: u64) -> Result<UserProfileView, ApiError>;

    async fn search_users(&self, token: &str, username: &str)
        -> Result<Vec<UserSummary>, ApiError>;
}
