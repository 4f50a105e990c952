//! Post composer wizard domain.

pub mod draft;
pub mod machine;

pub use draft::{media_type_for, DraftUpdate, PictureFile, PostDraft};
pub use machine::{
    ComposerAction, ComposerEvent, ComposerMachine, ComposerStep, PostWizard,
};
