use std::time::{Duration, Instant};

use crate::error::{DashboardError, Result};

/// Delay applied before a create form commits, simulating a round trip.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(800);

/// A validated draft waiting out the submit delay.
#[derive(Debug, Clone)]
pub struct Pending<T> {
    draft: T,
    ready_at: Instant,
}

impl<T> Pending<T> {
    pub fn new(draft: T, submitted_at: Instant, delay: Duration) -> Self {
        Self {
            draft,
            ready_at: submitted_at + delay,
        }
    }

    pub fn is_ready(&self, now: Instant) -> bool {
        now >= self.ready_at
    }

    /// Time left before the draft may be committed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.ready_at.saturating_duration_since(now)
    }

    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn into_draft(self) -> T {
        self.draft
    }
}

/// State behind one create dialog: whether it is open and what it is waiting on.
///
/// At most one submission can be in flight per form; the dialog uses
/// [`FormState::is_pending`] to disable its submit button meanwhile.
#[derive(Debug, Clone)]
pub struct FormState<T> {
    pub open: bool,
    pending: Option<Pending<T>>,
}

impl<T> Default for FormState<T> {
    fn default() -> Self {
        Self {
            open: false,
            pending: None,
        }
    }
}

impl<T> FormState<T> {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&Pending<T>> {
        self.pending.as_ref()
    }

    /// Queue `draft`. Refused while an earlier submission is still waiting.
    pub fn submit(&mut self, draft: T, now: Instant, delay: Duration) -> Result<()> {
        if self.pending.is_some() {
            return Err(DashboardError::SubmissionPending);
        }
        self.pending = Some(Pending::new(draft, now, delay));
        Ok(())
    }

    /// Hand back the draft once its delay has elapsed and close the form.
    pub fn take_ready(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.is_ready(now)) {
            self.open = false;
            self.pending.take().map(Pending::into_draft)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_becomes_ready_after_delay() {
        let start = Instant::now();
        let pending = Pending::new("draft", start, Duration::from_millis(800));
        assert!(!pending.is_ready(start));
        assert_eq!(pending.remaining(start), Duration::from_millis(800));
        assert!(!pending.is_ready(start + Duration::from_millis(799)));
        assert!(pending.is_ready(start + Duration::from_millis(800)));
        assert_eq!(pending.remaining(start + Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn form_refuses_double_submit() {
        let start = Instant::now();
        let mut form: FormState<i32> = FormState::default();
        form.open = true;
        form.submit(1, start, DEFAULT_SUBMIT_DELAY).unwrap();
        assert!(form.is_pending());

        let err = form.submit(2, start, DEFAULT_SUBMIT_DELAY).unwrap_err();
        assert!(matches!(err, DashboardError::SubmissionPending));
        assert_eq!(form.pending().map(|p| *p.draft()), Some(1));
    }

    #[test]
    fn take_ready_waits_then_closes_form() {
        let start = Instant::now();
        let mut form: FormState<&str> = FormState::default();
        form.open = true;
        form.submit("x", start, Duration::from_millis(10)).unwrap();

        assert_eq!(form.take_ready(start), None);
        assert!(form.open);

        assert_eq!(form.take_ready(start + Duration::from_millis(10)), Some("x"));
        assert!(!form.open);
        assert!(!form.is_pending());
        assert_eq!(form.take_ready(start + Duration::from_secs(1)), None);
    }
}
