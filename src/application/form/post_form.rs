use super::{
    field::{FieldName, FieldRule, FieldValue},
    state::{FormState, SetOptions},
    subscription::SubscriptionHandle,
    synchronizer::SlugSynchronizer,
};
use crate::{
    application::{
        commands::posts::SubmitPostCommand,
        error::{ApplicationError, ApplicationResult},
        ports::storage::ImageUpload,
    },
    domain::post::{Post, PostStatus},
};
use std::sync::Arc;

/// A mounted post form: field values, the title→slug watch and, in edit
/// mode, the post being edited.
///
/// The watch lives as long as the form. `close` releases it explicitly;
/// dropping the form has the same effect.
pub struct PostForm {
    state: FormState,
    synchronizer: Arc<SlugSynchronizer>,
    existing: Option<Post>,
    title_watch: Option<SubscriptionHandle>,
}

impl PostForm {
    pub fn create(synchronizer: Arc<SlugSynchronizer>) -> Self {
        Self::mount(synchronizer, None)
    }

    pub fn edit(synchronizer: Arc<SlugSynchronizer>, post: Post) -> Self {
        Self::mount(synchronizer, Some(post))
    }

    fn mount(synchronizer: Arc<SlugSynchronizer>, existing: Option<Post>) -> Self {
        let defaults = match &existing {
            Some(post) => [
                (FieldName::TITLE, post.title.as_str().to_owned()),
                (FieldName::SLUG, post.slug.as_str().to_owned()),
                (FieldName::CONTENT, post.content.as_str().to_owned()),
                (FieldName::STATUS, post.status.as_str().to_owned()),
            ],
            None => [
                (FieldName::TITLE, String::new()),
                (FieldName::SLUG, String::new()),
                (FieldName::CONTENT, String::new()),
                (FieldName::STATUS, PostStatus::Active.as_str().to_owned()),
            ],
        };
        let state = FormState::with_defaults(defaults);

        state.register(FieldName::TITLE, FieldRule::Required);
        state.register(FieldName::SLUG, FieldRule::Required);
        state.register(FieldName::STATUS, FieldRule::Required);
        let image_rule = if existing.is_some() {
            FieldRule::Optional
        } else {
            FieldRule::Required
        };
        state.register(FieldName::IMAGE, image_rule);

        if let Some(file_id) = existing.as_ref().and_then(|post| post.featured_image_id) {
            state.set(
                FieldName::FEATURED_IMAGE_ID,
                file_id.to_string(),
                SetOptions::default(),
            );
        }

        let title_watch = synchronizer.watch(&state, FieldName::TITLE);

        Self {
            state,
            synchronizer,
            existing,
            title_watch: Some(title_watch),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn existing(&self) -> Option<&Post> {
        self.existing.as_ref()
    }

    pub fn is_edit(&self) -> bool {
        self.existing.is_some()
    }

    pub fn is_watching(&self) -> bool {
        self.title_watch
            .as_ref()
            .is_some_and(SubscriptionHandle::is_active)
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.state
            .set(FieldName::TITLE, title.into(), SetOptions::default());
    }

    /// Normalises a slug typed by the user and stores it.
    pub fn edit_slug(&self, raw: &str) -> String {
        self.synchronizer.on_manual_edit(&self.state, raw)
    }

    pub fn set_content(&self, content: impl Into<String>) {
        self.state
            .set(FieldName::CONTENT, content.into(), SetOptions::default());
    }

    pub fn set_status(&self, status: PostStatus) {
        self.state
            .set(FieldName::STATUS, status.as_str(), SetOptions::default());
    }

    pub fn attach_image(&self, image: ImageUpload) {
        self.state
            .set(FieldName::IMAGE, image, SetOptions::revalidate());
    }

    pub fn clear_image(&self) {
        self.state
            .set(FieldName::IMAGE, FieldValue::Null, SetOptions::revalidate());
    }

    /// Validates the form and snapshots it for the submit workflow. The form
    /// stays mounted, so a failed submit can be retried after corrections.
    pub fn to_command(&self) -> ApplicationResult<SubmitPostCommand> {
        self.state
            .validate()
            .map_err(|errors| ApplicationError::validation(errors.to_string()))?;

        let text = |name: &FieldName| self.state.text(name).unwrap_or_default();
        let image = self
            .state
            .get(&FieldName::IMAGE)
            .and_then(|value| value.as_file().cloned());

        Ok(SubmitPostCommand {
            existing: self.existing.clone(),
            title: text(&FieldName::TITLE),
            slug: text(&FieldName::SLUG),
            content: text(&FieldName::CONTENT),
            status: text(&FieldName::STATUS),
            image,
        })
    }

    /// Unmounts the form, releasing the title watch.
    pub fn close(mut self) {
        if let Some(handle) = self.title_watch.take() {
            handle.release();
        }
    }
}
