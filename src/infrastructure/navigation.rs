use crate::{application::ports::navigation::PostNavigator, domain::post::PostId};
use std::sync::{Mutex, PoisonError};

/// Navigator for headless use: logs each route and remembers the last one.
#[derive(Debug, Default)]
pub struct TracingNavigator {
    last_route: Mutex<Option<String>>,
}

impl TracingNavigator {
    pub fn route_for(id: &PostId) -> String {
        format!("/post/{id}")
    }

    pub fn last_route(&self) -> Option<String> {
        self.last_route
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PostNavigator for TracingNavigator {
    fn open_post(&self, id: &PostId) {
        let route = Self::route_for(id);
        tracing::info!(route = %route, "navigating to post");
        *self
            .last_route
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remembers_last_route() {
        let navigator = TracingNavigator::default();
        assert_eq!(navigator.last_route(), None);

        let id = PostId::generate();
        navigator.open_post(&id);

        assert_eq!(navigator.last_route(), Some(format!("/post/{id}")));
    }
}
