//! Session domain model.
//!
//! 会话领域模型。

use serde::{Deserialize, Serialize};

/// The client-held record of whether a user is authenticated.
///
/// The token and the `logged_in` flag move together: a token is present
/// exactly when `logged_in` is true. The constructors below are the only
/// way to build a `Session`, which keeps that pairing intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub logged_in: bool,
    pub token: Option<String>,
}

impl Session {
    /// A session with no credential.
    pub fn anonymous() -> Self {
        Self {
            logged_in: false,
            token: None,
        }
    }

    /// A session holding a bearer token.
    ///
    /// The token is opaque; no format validation is performed.
    pub fn authenticated(token: impl Into<String>) -> Self {
        Self {
            logged_in: true,
            token: Some(token.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.logged_in
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
