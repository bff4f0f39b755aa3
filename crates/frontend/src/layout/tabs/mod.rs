//! Tab management
//!
//! - `page`: TabPage, the wrapper around one tab's content
//! - `registry`: tab.key → View
//! - `tab_labels`: tab titles and detail-tab keys

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_key, title_for_key};
