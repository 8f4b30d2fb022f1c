pub mod aggregate;
pub mod status;

pub use aggregate::*;
pub use status::{EditorEffect, EditorEvent, EditorState};
