//! Two-view client-side router with an in-memory history stack.

use p2h_domain::route::Route;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    fn current(&self) -> &str {
        self.entries.get(self.cursor).map_or("/", String::as_str)
    }
}

/// Holds the current [`Route`] and the navigation history behind it.
///
/// Cloning is cheap and every clone observes the same history. Route changes are
/// published on a watch channel, see [`Router::subscribe`].
#[derive(Debug, Clone)]
pub struct Router {
    history: Arc<Mutex<History>>,
    route: watch::Sender<Route>,
}

impl Router {
    /// Starts a history whose only entry is `initial_path`.
    #[must_use]
    pub fn new(initial_path: impl Into<String>) -> Self {
        let initial_path = initial_path.into();
        let route = Route::from_path(&initial_path);
        Self {
            history: Arc::new(Mutex::new(History { entries: vec![initial_path], cursor: 0 })),
            route: watch::Sender::new(route),
        }
    }

    #[must_use]
    pub fn current(&self) -> Route {
        *self.route.borrow()
    }

    /// Path of the active history entry.
    #[must_use]
    pub fn current_path(&self) -> String {
        self.history.lock().current().to_owned()
    }

    /// Receives every route change from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.route.subscribe()
    }

    /// Pushes `path` as a new history entry (dropping any forward entries) and
    /// switches the route synchronously.
    pub fn navigate(&self, path: impl Into<String>) -> Route {
        let path = path.into();
        let route = Route::from_path(&path);
        let mut history = self.history.lock();
        let keep = history.cursor + 1;
        history.entries.truncate(keep);
        history.entries.push(path);
        history.cursor = keep;
        debug!(path = history.current(), ?route, "Navigate");
        self.publish(route);
        route
    }

    /// Moves one entry back. Returns `None` at the start of the history.
    pub fn back(&self) -> Option<Route> {
        let mut history = self.history.lock();
        history.cursor = history.cursor.checked_sub(1)?;
        let route = Route::from_path(history.current());
        self.publish(route);
        Some(route)
    }

    /// Moves one entry forward. Returns `None` at the end of the history.
    pub fn forward(&self) -> Option<Route> {
        let mut history = self.history.lock();
        if history.cursor + 1 >= history.entries.len() {
            return None;
        }
        history.cursor += 1;
        let route = Route::from_path(history.current());
        self.publish(route);
        Some(route)
    }

    /// Handles a history change made outside the router (e.g. a host back/forward
    /// event) by adopting `path` as the current entry and re-deriving the route.
    pub fn sync(&self, path: impl Into<String>) -> Route {
        let path = path.into();
        let route = Route::from_path(&path);
        let mut history = self.history.lock();
        let cursor = history.cursor;
        if let Some(entry) = history.entries.get_mut(cursor) {
            *entry = path;
        }
        self.publish(route);
        route
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.lock().cursor > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        let history = self.history.lock();
        history.cursor + 1 < history.entries.len()
    }

    /// Callers hold the history lock so the published route follows history order.
    fn publish(&self, route: Route) {
        self.route.send_if_modified(|current| {
            let changed = *current != route;
            *current = route;
            changed
        });
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_truncates_forward_entries() {
        let router = Router::default();
        router.navigate("/thanks");
        router.navigate("/");
        assert_eq!(router.back(), Some(Route::Thanks));

        router.navigate("/faq");
        assert!(!router.can_go_forward());
        assert_eq!(router.current(), Route::Home);
        assert_eq!(router.current_path(), "/faq");
    }

    #[test]
    fn concurrent_navigation_keeps_route_and_history_in_step() {
        let router = Router::default();
        std::thread::scope(|scope| {
            for path in ["/thanks", "/"] {
                let router = router.clone();
                scope.spawn(move || {
                    for _ in 0..500 {
                        router.navigate(path);
                        router.back();
                        router.forward();
                    }
                });
            }
        });
        assert_eq!(router.current(), Route::from_path(&router.current_path()));
    }

    #[test]
    fn sync_replaces_current_entry() {
        let router = Router::default();
        router.navigate("/somewhere");
        assert_eq!(router.sync("/thanks"), Route::Thanks);
        assert_eq!(router.current_path(), "/thanks");
        assert_eq!(router.back(), Some(Route::Home));
        assert_eq!(router.forward(), Some(Route::Thanks));
    }
}
