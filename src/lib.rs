// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. message::MessageOptions)
    clippy::module_name_repetitions
)]

//! # Mattersend
//!
//! Send messages to Mattermost incoming webhooks.
//!
//! A message is composed from:
//! - Inline text and text read from standard input
//! - Files, attached with syntax-highlighted code fences
//! - CSV data rendered as Markdown tables
//! - An icon URL or emoji shortcode
//!
//! and delivered with a single HTTP POST.
//!
//! ## Modules
//!
//! - [`message`]: Message, attachment and payload model
//! - [`compose`]: Building a message from options and input
//! - [`delivery`]: Prepared requests, dry runs and the webhook client
//! - [`highlight`]: Syntax detection and code fences
//! - [`tabular`]: CSV dialect sniffing and Markdown tables
//! - [`emoji`]: Icon resolution
//! - [`config`]: Configuration files and option merging
//! - [`error`]: Error types

pub mod compose;
pub mod config;
pub mod delivery;
pub mod emoji;
pub mod error;
pub mod highlight;
pub mod message;
pub mod tabular;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::compose::{ComposeRequest, Input};
    pub use crate::config::MessageOptions;
    pub use crate::delivery::{PreparedRequest, WebhookClient};
    pub use crate::highlight::SyntaxMode;
    pub use crate::message::{Attachment, Field, Message};
    pub use crate::tabular::TabularDialect;
}
