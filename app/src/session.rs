//! # Session seam
//!
//! The client keeps the authenticated user in a key-value store under the
//! `"user"` key. The core only ever reads it, and only to know who is
//! submitting (upload pipeline) or reviewing (self-exclusion rule).

use std::sync::Mutex;

use shared::SessionUser;

use crate::domain::filter::ReviewerExclusions;

/// Read-only view of the persisted client session.
pub trait SessionStore: Send + Sync {
    /// The `"user"` entry, if someone is signed in.
    fn get_user(&self) -> Option<SessionUser>;
}

/// In-memory session store for the desktop build and the tests.
pub struct MemorySession {
    user: Mutex<Option<SessionUser>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self {
            user: Mutex::new(None),
        }
    }

    pub fn set_user(&self, user: SessionUser) {
        *self.user.lock().unwrap() = Some(user);
    }

    pub fn clear(&self) {
        *self.user.lock().unwrap() = None;
    }
}

impl Default for MemorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySession {
    fn get_user(&self) -> Option<SessionUser> {
        self.user.lock().unwrap().clone()
    }
}

/// Production-mode exclusion set for the review queue: the configured test
/// accounts plus the signed-in reviewer's own address. With nobody signed in
/// the set degrades to the test accounts alone.
pub fn reviewer_exclusions(session: &dyn SessionStore) -> ReviewerExclusions {
    match session.get_user() {
        Some(user) => ReviewerExclusions::for_reviewer(&user.email),
        None => ReviewerExclusions::with_accounts(
            crate::domain::filter::TEST_ACCOUNTS
                .iter()
                .map(|account| account.to_string()),
        ),
    }
}
