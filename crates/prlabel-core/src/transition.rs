//! The orchestrated label transition: remove the old label, add the new one

use crate::error::Result;
use crate::http::LabelClient;
use crate::state::ReviewState;

/// Advance the review label on the pull request at `page_url` one step in
/// the cycle, given its `current` state.
///
/// The removal of the current label and the addition of the next one are
/// issued concurrently and joined; the transition reports completion only
/// once both finish. Ordering between their completions is neither
/// guaranteed nor required.
///
/// If the removal lands and the addition then fails, the remote side is
/// left label-less while the returned state claims the next label — a known
/// inconsistency window with no rollback or compensation.
///
/// Returns the state that was advanced to.
pub async fn advance(
    client: &LabelClient,
    page_url: &str,
    current: ReviewState,
) -> Result<ReviewState> {
    let next = current.next();

    let remove = async {
        match current {
            ReviewState::None => Ok(()),
            _ => client.remove_label(page_url, current).await,
        }
    };
    let add = async {
        match next {
            ReviewState::None => Ok(()),
            _ => client.add_label(page_url, next).await,
        }
    };

    let (removed, added) = futures::join!(remove, add);
    removed?;
    added?;

    Ok(next)
}
