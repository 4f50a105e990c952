pub mod get_profile;
pub mod update_profile;
pub mod upload_picture;
pub mod view_user;

pub use get_profile::GetProfile;
pub use update_profile::UpdateProfile;
pub use upload_picture::UploadProfilePicture;
pub use view_user::ViewUserProfile;
