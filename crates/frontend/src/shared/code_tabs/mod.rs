//! Tabbed code blocks synchronized across the page.
//!
//! Every [`CodeTabs`] on a page reads and writes one shared selection held in
//! [`CodeContext`](crate::shared::code_context::CodeContext). Selecting "Go"
//! in one group switches every group that has a "Go" pane; groups without one
//! stay on their own last choice.

pub mod component;
pub mod labels;
pub mod scroll;
pub mod selection;

pub use component::{CodeTab, CodeTabs};
pub use labels::TabItem;
