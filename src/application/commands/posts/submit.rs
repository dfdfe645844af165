// src/application/commands/posts/submit.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::ApplicationResult,
        ports::storage::ImageUpload,
    },
    domain::post::{Post, PostContent, PostSlug, PostStatus, PostTitle},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Edit,
}

/// Snapshot of the post form at submit time.
///
/// `existing` selects the mode: `None` creates a post, `Some` edits it.
#[derive(Debug, Clone)]
pub struct SubmitPostCommand {
    pub existing: Option<Post>,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub status: String,
    pub image: Option<ImageUpload>,
}

impl SubmitPostCommand {
    pub fn builder() -> SubmitPostCommandBuilder {
        SubmitPostCommandBuilder::default()
    }

    pub fn mode(&self) -> SubmitMode {
        if self.existing.is_some() {
            SubmitMode::Edit
        } else {
            SubmitMode::Create
        }
    }
}

#[derive(Default)]
pub struct SubmitPostCommandBuilder {
    existing: Option<Post>,
    title: Option<String>,
    slug: Option<String>,
    content: String,
    status: Option<String>,
    image: Option<ImageUpload>,
}

impl SubmitPostCommandBuilder {
    pub fn editing(mut self, post: Post) -> Self {
        self.existing = Some(post);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = Some(status.as_str().to_owned());
        self
    }

    pub fn image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }

    pub fn build(self) -> Result<SubmitPostCommand, &'static str> {
        Ok(SubmitPostCommand {
            existing: self.existing,
            title: self.title.ok_or("title is required")?,
            slug: self.slug.ok_or("slug is required")?,
            content: self.content,
            status: self
                .status
                .unwrap_or_else(|| PostStatus::default().as_str().to_owned()),
            image: self.image,
        })
    }
}

/// Form values after validation into value objects.
pub(super) struct PostFields {
    pub(super) title: PostTitle,
    pub(super) slug: PostSlug,
    pub(super) content: PostContent,
    pub(super) status: PostStatus,
}

impl PostFields {
    fn parse(title: String, slug: String, content: String, status: &str) -> ApplicationResult<Self> {
        Ok(Self {
            title: PostTitle::new(title)?,
            slug: PostSlug::new(slug)?,
            content: PostContent::new(content),
            status: status.parse()?,
        })
    }
}

impl PostCommandService {
    /// Creates or updates a post from a form snapshot, then navigates to it.
    ///
    /// Upload failures surface as `ApplicationError::Upload`, record failures
    /// as `ApplicationError::RecordWrite`. Navigation only happens on success.
    pub async fn submit_post(
        &self,
        actor: &AuthenticatedUser,
        command: SubmitPostCommand,
    ) -> ApplicationResult<PostDto> {
        let SubmitPostCommand {
            existing,
            title,
            slug,
            content,
            status,
            image,
        } = command;
        let fields = PostFields::parse(title, slug, content, &status)?;

        let post = match existing {
            None => self.create_post(actor, fields, image).await?,
            Some(existing) => self.edit_post(existing, fields, image).await?,
        };

        self.navigator.open_post(&post.id);
        Ok(post.into())
    }
}
