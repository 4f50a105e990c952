pub mod create_comment;
pub mod list_comments;

pub use create_comment::CreateComment;
pub use list_comments::ListComments;
