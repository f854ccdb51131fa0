use std::sync::Mutex;

use async_trait::async_trait;

use super::r#trait::{CreateEvent, ScheduleError, ScheduleService};

/// Recording scheduler adapter for tests and dev wiring.
///
/// Accepts every request and records it; a queued failure makes the next
/// call fail with that error instead.
#[derive(Debug, Default)]
pub struct InMemoryScheduler {
    recorded: Mutex<Vec<CreateEvent>>,
    next_failure: Mutex<Option<ScheduleError>>,
}

impl InMemoryScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests accepted so far, in call order.
    pub fn recorded(&self) -> Vec<CreateEvent> {
        self.recorded.lock().unwrap().clone()
    }

    /// Make the next `create_event` call fail with `error`.
    pub fn fail_next(&self, error: ScheduleError) {
        *self.next_failure.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl ScheduleService for InMemoryScheduler {
    async fn create_event(&self, request: CreateEvent) -> Result<(), ScheduleError> {
        if let Some(err) = self.next_failure.lock().unwrap().take() {
            return Err(err);
        }
        self.recorded.lock().unwrap().push(request);
        Ok(())
    }
}
