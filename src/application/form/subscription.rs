use super::state::{FormInner, lock_inner};
use std::{
    fmt,
    sync::{
        Arc, Mutex, Weak,
        atomic::{AtomicBool, Ordering},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(super) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Live registration of a form listener.
///
/// Released exactly once: either through [`SubscriptionHandle::release`],
/// which consumes the handle, or when the handle is dropped together with
/// its owner. Once released the listener never runs again, including for
/// writes already being dispatched.
#[must_use = "dropping the handle releases the listener immediately"]
pub struct SubscriptionHandle {
    id: SubscriptionId,
    active: Arc<AtomicBool>,
    form: Weak<Mutex<FormInner>>,
}

impl SubscriptionHandle {
    pub(super) fn new(
        id: SubscriptionId,
        active: Arc<AtomicBool>,
        form: Weak<Mutex<FormInner>>,
    ) -> Self {
        Self { id, active, form }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if !self.active.swap(false, Ordering::AcqRel) {
            return;
        }

        let Some(form) = self.form.upgrade() else {
            return;
        };
        let removed = lock_inner(&form).remove_listener(self.id);
        // The listener closure is dropped here, with the form unlocked.
        drop(removed);
        tracing::trace!(subscription = self.id.0, "form listener released");
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
