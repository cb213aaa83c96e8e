//! The fetch orchestrator: one state machine per dashboard.

use crate::core::domain::error::NagboardResult;
use crate::core::domain::model::{FetchState, GroupedView, StatusSnapshot};
use crate::core::domain::service::aggregator::ServiceBindings;
use crate::core::infrastructure::source::StatusSource;
use tracing::info;

/// Drives fetch cycles against a `StatusSource` and exposes the
/// resulting `FetchState` to the presentation layer.
///
/// A cycle is atomic from the core's point of view: both required
/// queries run concurrently and must succeed before any data becomes
/// visible; a single failure discards all partial results. Each
/// refresh replaces the previous state wholesale, with no cross-cycle
/// caching.
#[derive(Debug)]
pub struct FetchOrchestrator<S: StatusSource> {
    source: S,
    bindings: ServiceBindings,
    state: FetchState,
}

impl<S: StatusSource> FetchOrchestrator<S> {
    /// Creates an orchestrator with the stock service-label bindings.
    pub fn new(source: S) -> Self {
        Self::with_bindings(source, ServiceBindings::default())
    }

    /// Creates an orchestrator with custom service-label bindings.
    pub fn with_bindings(source: S, bindings: ServiceBindings) -> Self {
        Self {
            source,
            bindings,
            state: FetchState::Idle,
        }
    }

    /// The current observable state.
    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Runs one complete fetch cycle.
    ///
    /// Transitions to `Loading`, then to `Ready` with the fully derived
    /// view, or to `Failed` with the first error.
    pub async fn refresh(&mut self) -> &FetchState {
        self.state = FetchState::Loading;
        self.state = match self.fetch_cycle().await {
            Ok(view) => FetchState::Ready(view),
            Err(e) => FetchState::Failed(e),
        };
        &self.state
    }

    async fn fetch_cycle(&self) -> NagboardResult<GroupedView> {
        let (host_groups, checks) =
            tokio::try_join!(self.source.host_groups(), self.source.service_checks())?;

        let snapshot = StatusSnapshot {
            host_groups,
            checks,
        };
        info!(
            groups = snapshot.host_groups.len(),
            hosts = snapshot.checks.len(),
            "fetch cycle complete"
        );

        Ok(snapshot.grouped_view(&self.bindings))
    }
}
