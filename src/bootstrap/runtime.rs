//! # Application Runtime / 应用运行时
//!
//! [`AppRuntime`] holds the wired dependencies plus the long-lived stores
//! (session, wizard flows, notices) and hands out use cases with their
//! dependencies pre-wired via [`AppRuntime::usecases`].
//!
//! Commands call `runtime.usecases().xxx()` to get use case instances.

use std::sync::Arc;

use qp_app::flows::{ComposerFlow, RegistrationFlow};
use qp_app::usecases::{
    CreateComment, FetchFeed, GetProfile, GetSettings, ListComments, LoginUser, Logout,
    ResetPassword, SearchUsers, SendOtp, ToggleTheme, UpdateProfile, UpdateSettings,
    UploadProfilePicture, ViewUserProfile,
};
use qp_app::{AppDeps, NoticeBoard, RequestGate, SessionStore};

/// Application runtime with dependencies.
///
/// 包含所有应用依赖的运行时。
pub struct AppRuntime {
    deps: AppDeps,
    session: Arc<SessionStore>,
    registration: Arc<RegistrationFlow>,
    composer: Arc<ComposerFlow>,
    notices: Arc<NoticeBoard>,
    /// One gate per re-fetchable page, so a newer fetch supersedes an
    /// older in-flight one.
    feed_gate: Arc<RequestGate>,
    search_gate: Arc<RequestGate>,
}

impl AppRuntime {
    pub fn new(deps: AppDeps) -> Self {
        let session = Arc::new(SessionStore::new(deps.tokens.clone()));
        let notices = Arc::new(NoticeBoard::new());
        let registration = Arc::new(RegistrationFlow::new(deps.api.clone(), notices.clone()));
        let composer = Arc::new(ComposerFlow::new(
            deps.api.clone(),
            session.clone(),
            notices.clone(),
        ));
        Self {
            deps,
            session,
            registration,
            composer,
            notices,
            feed_gate: Arc::new(RequestGate::new()),
            search_gate: Arc::new(RequestGate::new()),
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn registration(&self) -> &Arc<RegistrationFlow> {
        &self.registration
    }

    pub fn composer(&self) -> &Arc<ComposerFlow> {
        &self.composer
    }

    pub fn notices(&self) -> &Arc<NoticeBoard> {
        &self.notices
    }

    pub fn usecases(&self) -> UseCases<'_> {
        UseCases { runtime: self }
    }
}

/// Use case accessor with dependencies pre-wired.
///
/// 用例访问器：依赖已注入。
pub struct UseCases<'a> {
    runtime: &'a AppRuntime,
}

impl UseCases<'_> {
    pub fn login(&self) -> LoginUser {
        LoginUser::new(self.runtime.deps.api.clone(), self.runtime.session.clone())
    }

    pub fn logout(&self) -> Logout {
        Logout::new(self.runtime.session.clone())
    }

    pub fn send_otp(&self) -> SendOtp {
        SendOtp::new(self.runtime.deps.api.clone(), self.runtime.session.clone())
    }

    pub fn reset_password(&self) -> ResetPassword {
        ResetPassword::new(
            self.runtime.deps.api.clone(),
            self.runtime.session.clone(),
            self.runtime.notices.clone(),
        )
    }

    pub fn fetch_feed(&self) -> FetchFeed {
        FetchFeed::new(
            self.runtime.deps.api.clone(),
            self.runtime.session.clone(),
            self.runtime.feed_gate.clone(),
        )
    }

    pub fn list_comments(&self) -> ListComments {
        ListComments::new(self.runtime.deps.api.clone(), self.runtime.session.clone())
    }

    pub fn create_comment(&self) -> CreateComment {
        CreateComment::new(
            self.runtime.deps.api.clone(),
            self.runtime.session.clone(),
            self.runtime.notices.clone(),
        )
    }

    pub fn get_profile(&self) -> GetProfile {
        GetProfile::new(self.runtime.deps.api.clone(), self.runtime.session.clone())
    }

    pub fn update_profile(&self) -> UpdateProfile {
        UpdateProfile::new(
            self.runtime.deps.api.clone(),
            self.runtime.session.clone(),
            self.runtime.notices.clone(),
        )
    }

    pub fn upload_profile_picture(&self) -> UploadProfilePicture {
        UploadProfilePicture::new(
            self.runtime.deps.api.clone(),
            self.runtime.session.clone(),
            self.runtime.notices.clone(),
        )
    }

    pub fn view_user_profile(&self) -> ViewUserProfile {
        ViewUserProfile::new(self.runtime.deps.api.clone(), self.runtime.session.clone())
    }

    pub fn search_users(&self) -> SearchUsers {
        SearchUsers::new(
            self.runtime.deps.api.clone(),
            self.runtime.session.clone(),
            self.runtime.search_gate.clone(),
        )
    }

    pub fn get_settings(&self) -> GetSettings {
        GetSettings::new(self.runtime.deps.settings.clone())
    }

    pub fn update_settings(&self) -> UpdateSettings {
        UpdateSettings::new(self.runtime.deps.settings.clone())
    }

    pub fn toggle_theme(&self) -> ToggleTheme {
        ToggleTheme::new(self.runtime.deps.settings.clone())
    }
}
