use super::field::{FieldError, FieldName, FieldRule, FieldValue, FormErrors};
use super::subscription::{SubscriptionHandle, SubscriptionId};
use std::{
    collections::BTreeMap,
    fmt,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
};

pub(super) type Listener = Arc<dyn Fn(&FormState, &FieldChange) + Send + Sync>;

/// Event delivered to listeners after a field was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub name: FieldName,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Re-run the field's registered rule after the write.
    pub revalidate: bool,
}

impl SetOptions {
    pub fn revalidate() -> Self {
        Self { revalidate: true }
    }
}

pub(super) struct ListenerEntry {
    id: SubscriptionId,
    active: Arc<AtomicBool>,
    callback: Listener,
}

#[derive(Default)]
pub(super) struct FormInner {
    values: BTreeMap<FieldName, FieldValue>,
    rules: BTreeMap<FieldName, FieldRule>,
    errors: BTreeMap<FieldName, FieldError>,
    listeners: Vec<ListenerEntry>,
    next_subscription: u64,
}

impl FormInner {
    fn revalidate(&mut self, name: &FieldName) {
        let rule = self.rules.get(name).copied().unwrap_or_default();
        let missing = self.values.get(name).is_none_or(FieldValue::is_missing);

        if rule == FieldRule::Required && missing {
            self.errors
                .insert(name.clone(), FieldError::Required(name.clone()));
        } else {
            self.errors.remove(name);
        }
    }

    /// Detaches a listener. The entry is handed back so the caller can drop it
    /// after the lock is released.
    pub(super) fn remove_listener(&mut self, id: SubscriptionId) -> Option<ListenerEntry> {
        let position = self.listeners.iter().position(|entry| entry.id == id)?;
        Some(self.listeners.remove(position))
    }
}

pub(super) fn lock_inner(inner: &Mutex<FormInner>) -> MutexGuard<'_, FormInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared handle to a form's field values.
///
/// Clones refer to the same form. Listeners are invoked synchronously from
/// `set`, outside the internal lock, so a listener may write other fields.
#[derive(Clone, Default)]
pub struct FormState {
    inner: Arc<Mutex<FormInner>>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults<I, V>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (FieldName, V)>,
        V: Into<FieldValue>,
    {
        let state = Self::new();
        {
            let mut inner = state.lock();
            for (name, value) in defaults {
                inner.values.insert(name, value.into());
            }
        }
        state
    }

    fn lock(&self) -> MutexGuard<'_, FormInner> {
        lock_inner(&self.inner)
    }

    pub fn get(&self, name: &FieldName) -> Option<FieldValue> {
        self.lock().values.get(name).cloned()
    }

    pub fn text(&self, name: &FieldName) -> Option<String> {
        self.lock()
            .values
            .get(name)
            .and_then(FieldValue::as_text)
            .map(str::to_owned)
    }

    pub fn values(&self) -> BTreeMap<FieldName, FieldValue> {
        self.lock().values.clone()
    }

    pub fn set(&self, name: FieldName, value: impl Into<FieldValue>, options: SetOptions) {
        let listeners: Vec<(Arc<AtomicBool>, Listener)> = {
            let mut inner = self.lock();
            inner.values.insert(name.clone(), value.into());
            if options.revalidate {
                inner.revalidate(&name);
            }
            inner
                .listeners
                .iter()
                .map(|entry| (Arc::clone(&entry.active), Arc::clone(&entry.callback)))
                .collect()
        };

        let change = FieldChange { name };
        for (active, callback) in listeners {
            // A listener released by an earlier one in this round must not fire.
            if active.load(Ordering::Acquire) {
                callback(self, &change);
            }
        }
    }

    /// Registers a listener that runs after every field write until the
    /// returned handle is released or dropped.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionHandle
    where
        F: Fn(&FormState, &FieldChange) + Send + Sync + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        let mut inner = self.lock();
        inner.next_subscription += 1;
        let id = SubscriptionId(inner.next_subscription);
        inner.listeners.push(ListenerEntry {
            id,
            active: Arc::clone(&active),
            callback: Arc::new(listener),
        });
        tracing::trace!(subscription = id.0, "form listener registered");
        SubscriptionHandle::new(id, active, Arc::downgrade(&self.inner))
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

    pub fn register(&self, name: FieldName, rule: FieldRule) {
        self.lock().rules.insert(name, rule);
    }

    /// Checks every registered field and returns the resulting errors.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut inner = self.lock();
        let names: Vec<FieldName> = inner.rules.keys().cloned().collect();
        for name in &names {
            inner.revalidate(name);
        }
        if inner.errors.is_empty() {
            Ok(())
        } else {
            Err(FormErrors::from_map(inner.errors.clone()))
        }
    }

    /// Errors recorded by the latest revalidation of each field.
    pub fn errors(&self) -> FormErrors {
        FormErrors::from_map(self.lock().errors.clone())
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("FormState")
            .field("values", &inner.values)
            .field("errors", &inner.errors)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
