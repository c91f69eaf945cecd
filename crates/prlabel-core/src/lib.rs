//! # prlabel core
//!
//! Core of a pull-request review-label cycler: classify a page URL to a
//! host, resolve Basic credentials, read and mutate the review label over
//! the issues REST API, and drive the four-state review cycle
//! `None → Requested → InReview → Done → None`.
//!
//! Rendering (toolbar icons, in-page badges) is behind the
//! [`session::Present`] trait; the core decides *which* state to show and
//! the presenter owns *how*.
//!
//! ## Example
//!
//! ```no_run
//! use prlabel_core::{LabelClient, Settings};
//!
//! # async fn example() -> prlabel_core::Result<()> {
//! let client = LabelClient::new(Settings::from_env());
//! let current = client
//!     .fetch_current_label("https://github.com/acme/widgets/pull/42")
//!     .await?;
//! let next = prlabel_core::advance(
//!     &client,
//!     "https://github.com/acme/widgets/pull/42",
//!     current,
//! )
//! .await?;
//! assert_eq!(next, current.next());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs, rust_2018_idioms)]

pub mod auth;
pub mod config;
pub mod error;
pub mod host;
pub mod http;
pub mod session;
pub mod state;
pub mod transition;

pub use config::Settings;
pub use error::{Error, ErrorKind, Result};
pub use host::{classify_host, parse_ref, HostKind, PullRequestRef};
pub use http::LabelClient;
pub use session::{Present, Session, TabId, TabTracker};
pub use state::ReviewState;
pub use transition::advance;
