// src/application/ports/navigation.rs
use crate::domain::post::PostId;

/// Terminal action of a successful submit: move the user to the stored post.
pub trait PostNavigator: Send + Sync {
    fn open_post(&self, id: &PostId);
}
