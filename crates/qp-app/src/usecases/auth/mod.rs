pub mod login;
pub mod logout;
pub mod reset_password;
pub mod send_otp;

pub use login::LoginUser;
pub use logout::Logout;
pub use reset_password::ResetPassword;
pub use send_otp::SendOtp;
