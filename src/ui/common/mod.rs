//! Common reusable UI components

pub mod message;
pub mod spinner;

pub use message::{InlineError, SuccessNotice};
pub use spinner::Spinner;
