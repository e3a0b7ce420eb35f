//! Reading experiment definitions and shift statistics from TOML files.
//!
//! Both formats are plain `serde` documents. Shift libraries carry pre-computed
//! per-dimension parameters and confidence boxes; nothing is fitted at load time.

pub mod experiments;
pub mod library;
