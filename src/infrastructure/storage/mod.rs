mod memory;

pub use memory::{InMemoryFileStorage, UploadPolicy};
