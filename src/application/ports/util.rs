// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Turns free text into a URL-safe slug. Total: never fails.
    fn slugify(&self, input: &str) -> String;
}
