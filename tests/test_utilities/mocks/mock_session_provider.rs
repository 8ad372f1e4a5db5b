use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use sw360_obligations::prelude::*;

/// Mock SessionProvider whose status can be changed between activations
#[derive(Clone)]
pub struct MockSessionProvider {
    status: Arc<Mutex<SessionStatus>>,
    sign_in_requests: Arc<AtomicUsize>,
}

impl MockSessionProvider {
    pub fn authenticated() -> Self {
        Self::with_status(SessionStatus::Authenticated(AccessToken::bearer("token")))
    }

    pub fn with_status(status: SessionStatus) -> Self {
        Self {
            status: Arc::new(Mutex::new(status)),
            sign_in_requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn set_status(&self, status: SessionStatus) {
        *self.status.lock().unwrap() = status;
    }

    pub fn sign_in_requests(&self) -> usize {
        self.sign_in_requests.load(Ordering::SeqCst)
    }
}

impl SessionProvider for MockSessionProvider {
    fn status(&self) -> SessionStatus {
        self.status.lock().unwrap().clone()
    }

    fn request_sign_in(&self) {
        self.sign_in_requests.fetch_add(1, Ordering::SeqCst);
    }
}
