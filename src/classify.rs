//! The completion context classifier: given the words typed so far and the
//! index of the word being completed, decide what kind of candidates to
//! offer. A pure function of its inputs; nothing persists between calls.
use crate::options::{OptionClass, OptionTables};
use crate::path::PathKind;

/// The colon sentinel that introduces a playlist keyword.
pub const KEYWORD_SENTINEL: char = ':';

/// What the word under the cursor accepts. Fixed lists carry their table
/// slice; path completion is a description of an enumeration to run, not
/// a materialized set.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Domain {
    /// Colon-prefixed playlist keywords.
    Keywords(&'static [&'static str]),
    /// Filesystem paths.
    Paths(PathKind),
    /// Container formats accepted by the recode option.
    Formats(&'static [&'static str]),
    /// Every known option spelling.
    Flags(&'static [&'static str]),
}

/// Classifies the word at `cword`. Total: every input maps to exactly one
/// domain, and an unrecognized previous word falls through to the flag
/// list rather than failing.
pub fn classify(words: &[String], cword: usize, tables: &OptionTables) -> Domain {
    let current = words.get(cword).map(|w| w.as_str()).unwrap_or("");
    trace!("classify: cword={} current={:?}", cword, current);

    // A colon word is always a playlist keyword, whatever precedes it.
    if current.starts_with(KEYWORD_SENTINEL) {
        return Domain::Keywords(tables.keywords);
    }

    // The previous word decides what the current one is an argument to.
    // The first word has none and cannot be anyone's argument.
    if cword > 0 {
        if let Some(prev) = words.get(cword - 1) {
            match tables.class_of(prev) {
                OptionClass::FilePath => return Domain::Paths(PathKind::Any),
                OptionClass::DirectoryPath => return Domain::Paths(PathKind::DirOnly),
                OptionClass::VideoCodec => return Domain::Formats(tables.recode_formats),
                OptionClass::None => (),
            }
        }
    }

    Domain::Flags(tables.flags)
}
