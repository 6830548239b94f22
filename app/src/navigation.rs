//! # Navigation seam
//!
//! Routing is an external collaborator: the core hands it a route and never
//! waits for it. The legacy hash paths are kept so the routing layer stays
//! wire-compatible.

use log::info;

/// The three destinations the pipelines navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Employee bill list
    Bills,
    /// Employee new-bill form
    NewBill,
    /// Admin review panel root
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }
}

/// Fire-and-forget routing callback.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that only logs the hop; used when no routing layer is wired up.
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, route: Route) {
        info!("navigating to {}", route.path());
    }
}

#[cfg(test)]
pub(crate) struct RecordingNavigator {
    visited: std::sync::Mutex<Vec<Route>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub fn new() -> Self {
        Self {
            visited: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visited.lock().unwrap().push(route);
    }
}
