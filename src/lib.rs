//! i18n-split - split a bilingual translation module into per-section files
//!
//! Reads one generated content file holding a primary (`en`) and a secondary
//! (`ar`) locale block, extracts named entries from both blocks and writes
//! them into one file per configured grouping.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading, defaults and validation
//! - `core`: Scanner, extraction, assembly and the split pipeline

pub mod cli;
pub mod config;
pub mod core;
