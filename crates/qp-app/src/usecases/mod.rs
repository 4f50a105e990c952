//! Application use cases, one per page operation.
//!
//! Each use case is a small struct with a `new()` constructor taking its
//! ports and an async `execute()`; commands build them fresh per call
//! through the runtime accessor.

pub mod auth;
pub mod comments;
pub mod feed;
pub mod profile;
pub mod search;
pub mod settings;

pub use auth::{LoginUser, Logout, ResetPassword, SendOtp};
pub use comments::{CreateComment, ListComments};
pub use feed::FetchFeed;
pub use profile::{GetProfile, UpdateProfile, UploadProfilePicture, ViewUserProfile};
pub use search::SearchUsers;
pub use settings::{GetSettings, ToggleTheme, UpdateSettings};
