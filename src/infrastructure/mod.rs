pub mod navigation;
pub mod repositories;
pub mod storage;
pub mod time;
pub mod util;
