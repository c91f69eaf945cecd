//! REST client for reading and mutating the review label on a pull request

use crate::auth;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::host::{self, PullRequestRef};
use crate::state::ReviewState;
use serde::Deserialize;

/// API response entry for a label
///
/// The API returns richer objects; only the name matters here.
#[derive(Debug, Deserialize)]
struct LabelEntry {
    name: String,
}

/// Client for the three label operations on a pull request
///
/// Refs and credentials are derived fresh from the page URL on every call;
/// nothing is cached between operations.
pub struct LabelClient {
    client: reqwest::Client,
    settings: Settings,
}

/// Fully resolved request target: where to send it and how to authenticate
#[derive(Debug)]
struct Target {
    endpoint: String,
    authorization: String,
}

impl LabelClient {
    /// Create a new label client over the given settings
    pub fn new(settings: Settings) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("prlabel/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, settings }
    }

    /// Settings this client was built with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve a page URL into the labels endpoint and an authorization
    /// header, failing fast when the URL is not a trackable pull request or
    /// no credential is configured for its host. Both outcomes are terminal
    /// for the operation; neither is a network error.
    fn target(&self, page_url: &str) -> Result<Target> {
        let r: PullRequestRef = host::parse_ref(page_url, &self.settings)
            .ok_or_else(|| Error::NotTrackable(page_url.to_string()))?;

        let prefix = r
            .host
            .api_prefix(&self.settings)
            .ok_or_else(|| Error::NotTrackable(page_url.to_string()))?;

        let authorization = auth::authorization(r.host, &self.settings)
            .ok_or_else(|| Error::Unauthenticated(format!("{:?}", r.host)))?;

        Ok(Target {
            endpoint: format!(
                "{}repos/{}/{}/issues/{}/labels",
                prefix, r.owner, r.repo, r.issue
            ),
            authorization,
        })
    }

    /// Fetch the current review state of the pull request at `page_url`.
    ///
    /// Scans the returned label list for recognized review labels; when more
    /// than one is attached the last one in response order wins (defined
    /// tie-break). An empty or unrecognized list maps to
    /// [`ReviewState::None`]. Any non-200 response is a [`Error::RequestFailed`].
    pub async fn fetch_current_label(&self, page_url: &str) -> Result<ReviewState> {
        let target = self.target(page_url)?;
        tracing::debug!(endpoint = %target.endpoint, "fetching labels");

        let response = self
            .client
            .get(&target.endpoint)
            .header(reqwest::header::AUTHORIZATION, &target.authorization)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(Error::RequestFailed(format!(
                "labels fetch returned {}",
                response.status()
            )));
        }

        let labels: Vec<LabelEntry> = response.json().await?;
        let state = labels
            .iter()
            .filter_map(|l| ReviewState::from_label(&l.name))
            .last()
            .unwrap_or(ReviewState::None);

        Ok(state)
    }

    /// Attach the label for `state` to the pull request at `page_url`.
    ///
    /// The response status is deliberately not inspected; the operation
    /// completes on any response and only transport errors surface.
    /// Flagged for product-owner confirmation (likely latent bug rather
    /// than intentional design; do not tighten without it).
    pub async fn add_label(&self, page_url: &str, state: ReviewState) -> Result<()> {
        let Some(label) = state.label() else {
            return Ok(()); // ReviewState::None has no wire label
        };
        let target = self.target(page_url)?;
        tracing::debug!(endpoint = %target.endpoint, label, "adding label");

        self.client
            .post(&target.endpoint)
            .header(reqwest::header::AUTHORIZATION, &target.authorization)
            .json(&[label])
            .send()
            .await?;

        Ok(())
    }

    /// Detach the label for `state` from the pull request at `page_url`.
    ///
    /// The label travels as a path segment of its own sub-resource and is
    /// non-ASCII, so it is percent-encoded; the encoded form addresses the
    /// identical server-side resource. Same permissive completion contract
    /// as [`add_label`](Self::add_label).
    pub async fn remove_label(&self, page_url: &str, state: ReviewState) -> Result<()> {
        let Some(label) = state.label() else {
            return Ok(());
        };
        let target = self.target(page_url)?;
        tracing::debug!(endpoint = %target.endpoint, label, "removing label");

        let url = format!("{}/{}", target.endpoint, urlencoding::encode(label));
        self.client
            .delete(&url)
            .header(reqwest::header::AUTHORIZATION, &target.authorization)
            .send()
            .await?;

        Ok(())
    }
}
