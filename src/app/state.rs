//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Local};

use crate::models::Request;

/// Session state: the single last-request slot
#[derive(Clone, Debug, Default)]
pub struct AppState {
    last_request: Option<Request>,
    last_sent: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored request; the previous one is gone for good
    pub fn store(&mut self, request: Request) {
        self.last_request = Some(request);
        self.last_sent = None;
    }

    pub fn mark_sent(&mut self) {
        self.last_sent = Some(Local::now());
    }

    pub fn last_request(&self) -> Option<&Request> {
        self.last_request.as_ref()
    }

    pub fn last_sent(&self) -> Option<DateTime<Local>> {
        self.last_sent
    }
}
