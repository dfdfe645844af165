// src/application/ports/mod.rs
pub mod navigation;
pub mod storage;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type FileStoragePort = dyn storage::FileStorage;
pub type PostNavigatorPort = dyn navigation::PostNavigator;
