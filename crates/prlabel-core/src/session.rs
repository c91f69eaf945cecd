//! UI-event entry points and the presentation seam
//!
//! The core never renders anything itself. Event handlers receive a
//! [`Present`] handle and tell it which state to show; toolbar icons,
//! in-page badges and whatever else stays on the presenter's side of the
//! seam.

use crate::config::Settings;
use crate::error::Result;
use crate::http::LabelClient;
use crate::state::ReviewState;
use crate::transition;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Identity of a browser tab, opaque to the core
pub type TabId = u64;

/// Presentation adapter the core drives but does not implement
pub trait Present {
    /// Update the toolbar appearance for `state`
    fn set_indicator(&self, state: ReviewState);
    /// Draw the visible in-page marker for `state` on `tab`
    fn set_badge(&self, tab: TabId, state: ReviewState);
}

/// Per-tab generation counters for in-flight operations.
///
/// Starting a new operation for a tab supersedes any prior in-flight one;
/// a superseded operation must not reach the presenter. This closes the
/// stale-update race when a user switches tabs while a fetch is in flight.
#[derive(Default)]
pub struct TabTracker {
    generations: Mutex<HashMap<TabId, u64>>,
}

/// Token identifying one started operation on one tab
#[derive(Debug, Clone, Copy)]
pub struct Generation {
    tab: TabId,
    seq: u64,
}

impl TabTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin an operation on `tab`, superseding any prior in-flight one
    pub fn begin(&self, tab: TabId) -> Generation {
        let mut generations = self.generations.lock();
        let seq = generations.entry(tab).or_insert(0);
        *seq += 1;
        Generation { tab, seq: *seq }
    }

    /// Whether `generation` is still the newest operation on its tab
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generations
            .lock()
            .get(&generation.tab)
            .is_some_and(|seq| *seq == generation.seq)
    }
}

/// One running instance of the label cycler: a client plus the per-tab
/// bookkeeping shared by all event handlers
pub struct Session {
    client: LabelClient,
    tracker: TabTracker,
}

impl Session {
    /// Create a session over the given settings
    pub fn new(settings: Settings) -> Self {
        Self {
            client: LabelClient::new(settings),
            tracker: TabTracker::new(),
        }
    }

    /// The underlying label client
    pub fn client(&self) -> &LabelClient {
        &self.client
    }

    /// Passive path (tab activated, tab load finished): reflect the current
    /// state of `page_url` on the presenter.
    ///
    /// Pages that are not trackable pull requests, missing credentials and
    /// failed reads all collapse into a neutral `None` indicator; only a
    /// successful read also draws the in-page badge. Returns the state that
    /// was displayed.
    pub async fn sync(&self, tab: TabId, page_url: &str, presenter: &impl Present) -> ReviewState {
        let generation = self.tracker.begin(tab);

        let fetched = self.client.fetch_current_label(page_url).await;
        if !self.tracker.is_current(generation) {
            tracing::debug!(tab, "dropping superseded sync result");
            return ReviewState::None;
        }

        match fetched {
            Ok(state) => {
                presenter.set_indicator(state);
                presenter.set_badge(tab, state);
                state
            }
            Err(e) => {
                tracing::debug!(tab, error = %e, "sync fell back to neutral display");
                presenter.set_indicator(ReviewState::None);
                ReviewState::None
            }
        }
    }

    /// Active path (toolbar clicked): advance the label one step in the
    /// cycle and reflect the new state on the presenter.
    ///
    /// Errors are logged and returned; no retry.
    pub async fn click(
        &self,
        tab: TabId,
        page_url: &str,
        presenter: &impl Present,
    ) -> Result<ReviewState> {
        let generation = self.tracker.begin(tab);

        let result = async {
            let current = self.client.fetch_current_label(page_url).await?;
            transition::advance(&self.client, page_url, current).await
        }
        .await;

        match result {
            Ok(next) => {
                // The remote mutation has landed either way; a stale
                // generation only suppresses the rendering.
                if self.tracker.is_current(generation) {
                    presenter.set_indicator(next);
                    presenter.set_badge(tab, next);
                }
                Ok(next)
            }
            Err(e) => {
                tracing::warn!(tab, error = %e, "label advance failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[derive(Default)]
    struct RecordingPresenter {
        indicator: Mutex<Vec<ReviewState>>,
        badges: Mutex<Vec<(TabId, ReviewState)>>,
    }

    impl Present for RecordingPresenter {
        fn set_indicator(&self, state: ReviewState) {
            self.indicator.lock().push(state);
        }
        fn set_badge(&self, tab: TabId, state: ReviewState) {
            self.badges.lock().push((tab, state));
        }
    }

    #[test]
    fn test_tracker_generations_supersede() {
        let tracker = TabTracker::new();
        let first = tracker.begin(7);
        assert!(tracker.is_current(first));

        let second = tracker.begin(7);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_tracker_tabs_are_independent() {
        let tracker = TabTracker::new();
        let a = tracker.begin(1);
        let b = tracker.begin(2);
        assert!(tracker.is_current(a));
        assert!(tracker.is_current(b));
    }

    #[tokio::test]
    async fn test_sync_swallows_untrackable_into_neutral_display() {
        let session = Session::new(Settings::default());
        let presenter = RecordingPresenter::default();

        let shown = session
            .sync(1, "https://example.com/not/a/pull", &presenter)
            .await;

        assert_eq!(shown, ReviewState::None);
        assert_eq!(*presenter.indicator.lock(), vec![ReviewState::None]);
        // No badge on the error path
        assert!(presenter.badges.lock().is_empty());
    }

    #[tokio::test]
    async fn test_click_surfaces_unauthenticated() {
        let session = Session::new(Settings::default());
        let presenter = RecordingPresenter::default();

        let err = session
            .click(1, "https://github.com/acme/widgets/pull/42", &presenter)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unauthenticated);
        assert!(presenter.indicator.lock().is_empty());
    }
}
