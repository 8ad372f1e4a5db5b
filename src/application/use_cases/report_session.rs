use crate::application::dto::{ObligationReport, ReportRequest, DEFAULT_MAX_CONCURRENT_FETCHES};
use crate::application::use_cases::GenerateObligationReportUseCase;
use crate::obligation_report::domain::{AggregatedRow, ProjectId};
use crate::ports::outbound::{
    NotificationSink, ProgressReporter, ProjectRepository, SessionProvider, SessionStatus,
};
use crate::shared::error::ObligationError;
use crate::shared::Result;
use std::sync::{Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;

/// Why an activation did not start a report run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InertReason {
    /// No credential; a sign-in was requested
    Unauthenticated,
    /// The session service has not settled yet
    SessionLoading,
}

/// Result of one [`ObligationReportSession::activate`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The run finished and its rows are now the current view
    Completed { rows: usize },
    /// Nothing was fetched
    Inert(InertReason),
    /// The run was superseded or deactivated; the view was left alone
    Cancelled,
    /// The run failed; the message was sent to the notification sink
    Failed(String),
}

/// Read-only copy of the view state
#[derive(Debug, Clone, Default)]
pub struct ReportSnapshot {
    pub report: Option<ObligationReport>,
    pub processing: bool,
}

impl ReportSnapshot {
    pub fn rows(&self) -> &[AggregatedRow] {
        self.report
            .as_ref()
            .map(|report| report.rows.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Default)]
struct ViewState {
    report: Option<ObligationReport>,
    processing: bool,
    generation: u64,
    cancel: Option<CancellationToken>,
    project_id: Option<ProjectId>,
}

/// ObligationReportSession - owns the obligation view and the run that fills it
///
/// Every activation gets a fresh cancellation token and a generation number.
/// Only the run holding the current generation may write the view; a run
/// that was superseded or deactivated finishes without touching it.
///
/// When a fatal error ends a run, the rows of the previous successful run
/// stay in place. They are dropped only when a different project is activated.
pub struct ObligationReportSession<R, PR, S, N> {
    use_case: GenerateObligationReportUseCase<R, PR>,
    session: S,
    notifications: N,
    max_concurrent_fetches: usize,
    state: Mutex<ViewState>,
}

impl<R, PR, S, N> ObligationReportSession<R, PR, S, N>
where
    R: ProjectRepository,
    PR: ProgressReporter,
    S: SessionProvider,
    N: NotificationSink,
{
    pub fn new(use_case: GenerateObligationReportUseCase<R, PR>, session: S, notifications: N) -> Self {
        Self {
            use_case,
            session,
            notifications,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
            state: Mutex::new(ViewState::default()),
        }
    }

    pub fn with_max_concurrent_fetches(mut self, max_concurrent_fetches: usize) -> Self {
        self.max_concurrent_fetches = max_concurrent_fetches;
        self
    }

    /// Runs the report pipeline for `project_id`, superseding any run in progress
    pub async fn activate(&self, project_id: ProjectId) -> RefreshOutcome {
        let token = match self.session.status() {
            SessionStatus::Authenticated(token) => token,
            SessionStatus::Unauthenticated => {
                log::info!("Not signed in; requesting sign-in before loading obligations");
                self.session.request_sign_in();
                return RefreshOutcome::Inert(InertReason::Unauthenticated);
            }
            SessionStatus::Loading => {
                log::debug!("Session still loading; obligation report not started");
                return RefreshOutcome::Inert(InertReason::SessionLoading);
            }
        };

        let (generation, cancel) = self.begin_run(&project_id);
        let request = ReportRequest::new(project_id)
            .with_max_concurrent_fetches(self.max_concurrent_fetches);

        let result = self.use_case.execute(&request, &token, &cancel).await;
        self.finish_run(generation, &cancel, result)
    }

    /// Cancels the run in progress, if any
    pub fn deactivate(&self) {
        let mut state = self.lock_state();
        if let Some(cancel) = state.cancel.take() {
            log::debug!("Cancelling obligation report run {}", state.generation);
            cancel.cancel();
        }
        state.processing = false;
    }

    pub fn snapshot(&self) -> ReportSnapshot {
        let state = self.lock_state();
        ReportSnapshot {
            report: state.report.clone(),
            processing: state.processing,
        }
    }

    fn begin_run(&self, project_id: &ProjectId) -> (u64, CancellationToken) {
        let mut state = self.lock_state();
        if let Some(previous) = state.cancel.take() {
            log::debug!("Superseding obligation report run {}", state.generation);
            previous.cancel();
        }

        if state.project_id.as_ref() != Some(project_id) {
            state.report = None;
            state.project_id = Some(project_id.clone());
        }

        state.generation += 1;
        state.processing = true;
        let cancel = CancellationToken::new();
        state.cancel = Some(cancel.clone());
        (state.generation, cancel)
    }

    fn finish_run(
        &self,
        generation: u64,
        cancel: &CancellationToken,
        result: Result<ObligationReport>,
    ) -> RefreshOutcome {
        let mut state = self.lock_state();
        let is_current = state.generation == generation && !cancel.is_cancelled();

        match result {
            Err(e) if ObligationError::is_cancellation(&e) || !is_current => {
                log::debug!("Discarding result of obligation report run {}", generation);
                RefreshOutcome::Cancelled
            }
            Ok(_) if !is_current => {
                log::debug!("Discarding result of obligation report run {}", generation);
                RefreshOutcome::Cancelled
            }
            Ok(report) => {
                let rows = report.rows.len();
                state.report = Some(report);
                state.processing = false;
                state.cancel = None;
                RefreshOutcome::Completed { rows }
            }
            Err(e) => {
                state.processing = false;
                state.cancel = None;
                drop(state);

                let message = format!("{:#}", e);
                log::error!("Obligation report failed: {}", message);
                self.notifications.notify_error(&message);
                RefreshOutcome::Failed(message)
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
