//! Authoring core for blog posts.
//!
//! Derives URL slugs from titles, keeps a form's `slug` field in step with
//! its `title`, and runs the create/edit submit workflow against a document
//! store and a file store supplied as ports.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
