//! Shared fakes for flow and use-case tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use qp_core::blog::{Comment, Post, ProfileUpdate, UserProfile, UserProfileView, UserSummary};
use qp_core::composer::{PictureFile, PostDraft};
use qp_core::ports::{ApiError, BlogApiPort, OtpIssued, SettingsPort, TokenStorePort};
use qp_core::registration::RegistrationForm;
use qp_core::settings::model::Settings;

/// In-memory API double: records every call and can be told to fail.
pub struct StubApi {
    pub calls: Mutex<Vec<String>>,
    pub fail_with: Mutex<Option<ApiError>>,
}

impl StubApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        })
    }

    pub async fn fail_next_with(&self, error: ApiError) {
        *self.fail_with.lock().await = Some(error);
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().await.push(call);
        match self.fail_with.lock().await.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BlogApiPort for StubApi {
    async fn login(&self, username: &str, _password: &str) -> Result<String, ApiError> {
        self.record(format!("login:{username}")).await?;
        Ok("tok-stub".to_string())
    }

    async fn send_otp(&self, email: &str) -> Result<OtpIssued, ApiError> {
        self.record(format!("send_otp:{email}")).await?;
        Ok(OtpIssued {
            token: "reset-tok".to_string(),
            message: Some("OTP sent to your email".to_string()),
        })
    }

    async fn reset_password(
        &self,
        _token: &str,
        otp: &str,
        _new_password: &str,
    ) -> Result<String, ApiError> {
        self.record(format!("reset_password:{otp}")).await?;
        Ok(String::new())
    }

    async fn register(&self, form: &RegistrationForm) -> Result<String, ApiError> {
        self.record(format!("register:{}", form.username)).await?;
        Ok("Registration successful!".to_string())
    }

    async fn fetch_feed(&self, _token: &str) -> Result<Vec<Post>, ApiError> {
        self.record("fetch_feed".to_string()).await?;
        Ok(vec![Post {
            id: 1,
            title: "Hello".into(),
            content: "First!".into(),
            author_name: "alice".into(),
            ..Default::default()
        }])
    }

    async fn create_post(
        &self,
        _token: &str,
        draft: &PostDraft,
        picture: Option<&PictureFile>,
    ) -> Result<String, ApiError> {
        let attachment = picture.map(|p| p.file_name.as_str()).unwrap_or("none");
        self.record(format!("create_post:{}:{attachment}", draft.title))
            .await?;
        Ok("Post created".to_string())
    }

    async fn list_comments(&self, _token: &str, post_id: u64) -> Result<Vec<Comment>, ApiError> {
        self.record(format!("list_comments:{post_id}")).await?;
        Ok(Vec::new())
    }

    async fn create_comment(
        &self,
        _token: &str,
        post_id: u64,
        content: &str,
    ) -> Result<(), ApiError> {
        self.record(format!("create_comment:{post_id}:{content}"))
            .await?;
        Ok(())
    }

    async fn get_profile(&self, _token: &str) -> Result<UserProfile, ApiError> {
        self.record("get_profile".to_string()).await?;
        Ok(UserProfile {
            username: "alice".into(),
            full_name: "Alice Example".into(),
            ..Default::default()
        })
    }

    async fn update_profile(
        &self,
        _token: &str,
        update: &ProfileUpdate,
    ) -> Result<String, ApiError> {
        self.record(format!("update_profile:{}", update.username))
            .await?;
        Ok("Profile updated successfully".to_string())
    }

    async fn upload_profile_picture(
        &self,
        _token: &str,
        picture: &PictureFile,
    ) -> Result<String, ApiError> {
        self.record(format!("upload_picture:{}", picture.file_name))
            .await?;
        Ok(String::new())
    }

    async fn view_user(&self, _token: &str, user_id: u64) -> Result<UserProfileView, ApiError> {
        self.record(format!("view_user:{user_id}")).await?;
        Ok(UserProfileView::default())
    }

    async fn search_users(
        &self,
        _token: &str,
        username: &str,
    ) -> Result<Vec<UserSummary>, ApiError> {
        self.record(format!("search:{username}")).await?;
        Ok(Vec::new())
    }
}

/// Token store backed by a mutex-held option.
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            token: Mutex::new(None),
        })
    }

    pub fn seeded(token: &str) -> Arc<Self> {
        Arc::new(Self {
            token: Mutex::new(Some(token.to_string())),
        })
    }
}

#[async_trait]
impl TokenStorePort for MemoryTokenStore {
    async fn load(&self) -> anyhow::Result<Option<String>> {
        Ok(self.token.lock().await.clone())
    }

    async fn store(&self, token: &str) -> anyhow::Result<()> {
        *self.token.lock().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> anyhow::Result<()> {
        *self.token.lock().await = None;
        Ok(())
    }
}

/// Settings repository backed by memory.
pub struct MemorySettings {
    settings: Mutex<Settings>,
}

impl MemorySettings {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            settings: Mutex::new(Settings::default()),
        })
    }
}

#[async_trait]
impl SettingsPort for MemorySettings {
    async fn load(&self) -> anyhow::Result<Settings> {
        Ok(self.settings.lock().await.clone())
    }

    async fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        *self.settings.lock().await = settings.clone();
        Ok(())
    }
}
