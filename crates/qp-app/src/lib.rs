//! QuillPad application orchestration layer.
//!
//! Holds the in-memory stores shared by every page (session, wizards,
//! notices) and the use cases the command layer drives.

pub mod deps;
pub mod flows;
pub mod gate;
pub mod notice;
pub mod session;
pub mod usecases;

pub use deps::AppDeps;
pub use gate::RequestGate;
pub use notice::{Notice, NoticeBoard, NoticeKind};
pub use session::SessionStore;
