//! Core waitlist logic shared by the server and the browser

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
pub mod email;
pub mod reveal;
pub mod settings;
pub mod submitter;
pub mod waitlist;

pub use email::{is_valid_email, normalize_email};
pub use reveal::{RevealFlags, RevealSection};
pub use settings::{SubmitMode, WaitlistSettings};
pub use submitter::{
    HttpSubmitter, SimulatedSubmitter, SubmitError, WaitlistClient, WaitlistSubmitter,
};
pub use waitlist::{
    SubmissionOutcome, SubmissionStore, WaitlistError, WaitlistStatus, WaitlistSubmission, submit,
};
