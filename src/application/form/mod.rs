//! Form-state container and the slug synchronisation built on top of it.
//!
//! `FormState` holds field values and notifies listeners synchronously on
//! every `set`. `SlugSynchronizer` keeps the `slug` field derived from a
//! source field, and `PostForm` wires both to the post submit workflow.

mod field;
mod post_form;
mod state;
mod subscription;
mod synchronizer;

pub use field::{FieldError, FieldName, FieldRule, FieldValue, FormErrors};
pub use post_form::PostForm;
pub use state::{FieldChange, FormState, SetOptions};
pub use subscription::{SubscriptionHandle, SubscriptionId};
pub use synchronizer::SlugSynchronizer;
