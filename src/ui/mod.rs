pub mod common;
pub mod icon;
pub mod pages;
pub mod reveal;
pub mod scroll_top;
pub mod waitlist_form;

pub use icon::{Icon, icons};
pub use reveal::{provide_reveal_flags, use_revealed};
pub use scroll_top::ScrollToTop;
pub use waitlist_form::{FormVariant, WaitlistForm, provide_waitlist_client};
