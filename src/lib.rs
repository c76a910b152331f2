// SPDX-License-Identifier: PMPL-1.0-or-later

//! ngram-langid: character n-gram language identification.
//!
//! Text is reduced to a letter stream, cut into boundary-padded
//! single-character tokens and counted as n-grams of orders 1 through 5.
//! The 300 most frequent n-grams form a ranked profile. A sample is
//! assigned to the language whose stored profile has the smallest
//! out-of-place rank distance to the sample's own profile.
//!
//! PIPELINE:
//! 1. **lexeme**: alphabet filter and tokenization.
//! 2. **ngram**: sliding-window counts, merged across orders.
//! 3. **profile**: stable rank-and-truncate.
//! 4. **distance**: signed out-of-place distance with an OOV penalty.
//! 5. **classify**: minimum distance over the profile set.
//!
//! ```
//! use ngram_langid::{classify, build_profile, Language, LanguageProfileSet};
//!
//! let profiles: LanguageProfileSet = [
//!     (Language::English, build_profile(&"a".repeat(100))),
//!     (Language::German, build_profile(&"b".repeat(100))),
//! ]
//! .into_iter()
//! .collect();
//!
//! let result = classify("aaa", &profiles).unwrap();
//! assert_eq!(result.language, Language::English);
//! ```

pub mod classify;
pub mod config;
pub mod corpus;
pub mod distance;
pub mod error;
pub mod evaluate;
pub mod lexeme;
pub mod ngram;
pub mod profile;
pub mod report;
pub mod storage;
pub mod train;
pub mod types;

pub use classify::{classify, Classification, LanguageScore};
pub use error::{LangIdError, Result};
pub use profile::{build_profile, LanguageProfileSet, RankedProfile, PROFILE_SIZE};
pub use types::{Language, LanguageDescriptor, NGram};
