// src/application/commands/posts/mod.rs
mod create;
mod delete;
mod service;
mod submit;
mod update;

pub use delete::DeletePostCommand;
pub use service::PostCommandService;
pub use submit::{SubmitMode, SubmitPostCommand, SubmitPostCommandBuilder};
