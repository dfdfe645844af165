// tests/support/mocks/navigation.rs
use megablog_core::{application::ports::navigation::PostNavigator, domain::post::PostId};
use std::sync::Mutex;

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<PostId>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<PostId> {
        self.visits.lock().unwrap().clone()
    }
}

impl PostNavigator for RecordingNavigator {
    fn open_post(&self, id: &PostId) {
        self.visits.lock().unwrap().push(*id);
    }
}
