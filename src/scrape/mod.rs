// src/scrape/mod.rs
mod batch;
mod portal;
mod retry;

pub use batch::fetch_all;
pub use portal::{fetch_and_parse, LivePortal, WardSource};
pub use retry::fetch_ward_with_retry;
