//! Word-level building blocks and the injected capabilities.
//!
//! - [`word`] - Submission normalization, letter pools and substring checks
//! - [`dictionary`] - The [`Dictionary`] oracle deciding whether a word is real
//! - [`root_word`] - The [`RootWordSource`] supplying a new root word on demand

pub use self::{dictionary::*, root_word::*, word::*};

pub mod dictionary;
pub mod root_word;
pub mod word;
