use super::{
    field::{FieldName, FieldValue},
    state::{FormState, SetOptions},
    subscription::SubscriptionHandle,
};
use crate::application::ports::{SlugGeneratorPort, util::SlugGenerator};
use std::sync::Arc;

/// Keeps a slug field derived from a source field, and normalises manual
/// edits of the slug with the same rule.
#[derive(Clone)]
pub struct SlugSynchronizer {
    generator: Arc<SlugGeneratorPort>,
    target: FieldName,
}

impl SlugSynchronizer {
    pub fn new(generator: Arc<SlugGeneratorPort>) -> Self {
        Self {
            generator,
            target: FieldName::SLUG,
        }
    }

    pub fn with_target(mut self, target: FieldName) -> Self {
        self.target = target;
        self
    }

    pub fn target(&self) -> &FieldName {
        &self.target
    }

    /// Slug for a field value. Anything that is not text yields `""`.
    pub fn derive(&self, value: Option<&FieldValue>) -> String {
        derive_with(self.generator.as_ref(), value)
    }

    /// Writes `derive(source)` into the target field every time `source`
    /// changes, until the returned handle is released.
    ///
    /// A source equal to the target is never synchronised.
    pub fn watch(&self, form: &FormState, source: FieldName) -> SubscriptionHandle {
        let generator = Arc::clone(&self.generator);
        let target = self.target.clone();

        form.subscribe(move |form, change| {
            if change.name != source || source == target {
                return;
            }
            let value = form.get(&source);
            let slug = derive_with(generator.as_ref(), value.as_ref());
            tracing::debug!(source_field = %source, target_field = %target, slug = %slug, "slug synchronised");
            form.set(target.clone(), slug, SetOptions::revalidate());
        })
    }

    pub fn on_manual_edit(&self, form: &FormState, raw: &str) -> String {
        let slug = self.generator.slugify(raw);
        form.set(self.target.clone(), slug.clone(), SetOptions::revalidate());
        slug
    }
}

fn derive_with(generator: &dyn SlugGenerator, value: Option<&FieldValue>) -> String {
    value
        .and_then(FieldValue::as_text)
        .map(|text| generator.slugify(text))
        .unwrap_or_default()
}
