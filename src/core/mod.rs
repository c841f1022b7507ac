//! Core splitting engine.
//!
//! The split runs in three steps:
//!
//! 1. **Locale split** ([`locale`]): cut the source document into the primary
//!    and secondary locale sections.
//! 2. **Extraction** ([`section`]): find each named entry (`key: { ... }`) in a
//!    section with the brace [`scanner`].
//! 3. **Assembly** ([`assemble`]): render the entries of one grouping into an
//!    output file.
//!
//! [`pipeline`] drives the three steps over a configured grouping table and
//! does the file I/O; everything else works on borrowed text.

pub mod assemble;
pub mod keys;
pub mod locale;
pub mod pipeline;
pub mod scanner;
pub mod section;

pub use assemble::{AssembledFile, OutputTemplate, assemble};
pub use keys::top_level_keys;
pub use locale::{LocaleBoundary, LocaleSections, split_locales};
pub use pipeline::{GroupingOutcome, OutputStatus, SplitReport, WriteMode, run_split};
pub use scanner::{Brace, BraceKind, ScanMode, Scanner, balanced_end};
pub use section::extract_section;
