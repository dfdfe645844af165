// src/infrastructure/repositories/mod.rs
mod memory_post;

pub use memory_post::InMemoryPostRepository;
