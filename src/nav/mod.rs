//! Navigation bar behavior: scroll-dependent styling, the optional progress
//! bar, and in-page anchor scrolling.

pub mod anchors;
pub mod scroll;

pub const NAV_ID: &str = "nav";
pub const NAV_SCROLLED_CLASS: &str = "nav-scrolled";
