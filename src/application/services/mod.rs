// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::posts::PostCommandService,
        form::{PostForm, SlugSynchronizer},
        ports::{ClockPort, FileStoragePort, PostNavigatorPort, SlugGeneratorPort},
        queries::posts::PostQueryService,
    },
    domain::post::{Post, PostReadRepository, PostWriteRepository},
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    slug_synchronizer: Arc<SlugSynchronizer>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        storage: Arc<FileStoragePort>,
        navigator: Arc<PostNavigatorPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
    ) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_write_repo),
            Arc::clone(&post_read_repo),
            Arc::clone(&storage),
            Arc::clone(&navigator),
            Arc::clone(&clock),
        ));

        let post_queries = Arc::new(PostQueryService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&storage),
        ));

        let slug_synchronizer = Arc::new(SlugSynchronizer::new(Arc::clone(&slugger)));

        Self {
            post_commands,
            post_queries,
            slug_synchronizer,
        }
    }

    pub fn slug_synchronizer(&self) -> Arc<SlugSynchronizer> {
        Arc::clone(&self.slug_synchronizer)
    }

    /// Mounts a post form: edit mode when `existing` is given, create mode
    /// otherwise.
    pub fn open_post_form(&self, existing: Option<Post>) -> PostForm {
        let synchronizer = self.slug_synchronizer();
        match existing {
            Some(post) => PostForm::edit(synchronizer, post),
            None => PostForm::create(synchronizer),
        }
    }
}
