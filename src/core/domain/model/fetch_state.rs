//! Observable state of the fetch orchestrator.

use crate::core::domain::error::NagboardError;
use crate::core::domain::model::grouped_view::GroupedView;

/// The fetch cycle's state machine, consumed by the presentation layer.
///
/// Transitions: `Idle -> Loading -> Ready | Failed`, then back to
/// `Loading` on the next refresh. `Ready` is only reached when every
/// required query succeeded; there is no partial state.
#[derive(Debug)]
pub enum FetchState {
    /// No fetch cycle has been started yet.
    Idle,
    /// A fetch cycle is in flight.
    Loading,
    /// The last fetch cycle succeeded; carries the fully derived view.
    Ready(GroupedView),
    /// The last fetch cycle failed; carries the triggering error.
    Failed(NagboardError),
}

impl FetchState {
    /// Returns `true` if the state carries data.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    /// The derived view, if the last cycle succeeded.
    #[must_use]
    pub fn view(&self) -> Option<&GroupedView> {
        match self {
            FetchState::Ready(view) => Some(view),
            _ => None,
        }
    }

    /// The triggering error, if the last cycle failed.
    #[must_use]
    pub fn error(&self) -> Option<&NagboardError> {
        match self {
            FetchState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
