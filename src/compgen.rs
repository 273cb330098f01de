//! Turns a classified domain into the candidate strings to offer, in the
//! spirit of `compgen(1)`: feed it a wordlist or a path enumeration,
//! filter by what the user has typed, pull the results lazily.
use std::path::Path;

use crate::classify::Domain;
use crate::path::{PathKind, PathScanner};

pub struct CompGen {
    wordlist: &'static [&'static str],
    paths: Option<PathKind>,
    query: String,
}

impl CompGen {
    pub fn new() -> CompGen {
        CompGen {
            wordlist: &[],
            paths: None,
            query: String::new(),
        }
    }

    /// Offers a fixed wordlist, kept in its given order.
    pub fn wordlist(&mut self, words: &'static [&'static str]) {
        self.wordlist = words;
    }

    /// Offers filesystem paths of the given kind.
    pub fn include_paths(&mut self, kind: PathKind) {
        self.paths = Some(kind);
    }

    /// Keeps only candidates the typed word is a prefix of.
    pub fn filter_by(&mut self, query: &str) {
        self.query = query.to_owned();
    }

    /// Produces the candidates. Path enumeration happens as the iterator
    /// is pulled; dropping it abandons the walk.
    pub fn generate<'a>(self, scanner: &'a dyn PathScanner) -> Box<dyn Iterator<Item = String> + 'a> {
        let CompGen {
            wordlist,
            paths,
            query,
        } = self;

        let word_query = query.clone();
        let fixed = wordlist
            .iter()
            .filter(move |w| w.starts_with(word_query.as_str()))
            .map(|w| (*w).to_owned());

        let paths = match paths {
            Some(kind) => {
                // `dl/vi' completes the entries of `dl/'; a word without
                // a slash completes the current directory.
                let (dir, prefix) = match query.rfind('/') {
                    Some(pos) => (query[..=pos].to_owned(), query[pos + 1..].to_owned()),
                    None => (String::new(), query),
                };

                let scan_dir = if dir.is_empty() { ".".to_owned() } else { dir.clone() };
                let entries = scanner.scan(Path::new(&scan_dir), kind);
                let iter = entries
                    .filter(move |name| name.starts_with(prefix.as_str()))
                    .map(move |name| format!("{}{}", dir, name));
                Box::new(iter) as Box<dyn Iterator<Item = String> + 'a>
            }
            None => Box::new(std::iter::empty()),
        };

        Box::new(fixed.chain(paths))
    }
}

/// Resolves a classified domain against the word being completed.
pub fn candidates<'a>(
    domain: Domain,
    current: &str,
    scanner: &'a dyn PathScanner,
) -> Box<dyn Iterator<Item = String> + 'a> {
    let mut compgen = CompGen::new();
    match domain {
        Domain::Keywords(words) | Domain::Formats(words) | Domain::Flags(words) => {
            compgen.wordlist(words);
        }
        Domain::Paths(kind) => {
            compgen.include_paths(kind);
        }
    }

    compgen.filter_by(current);
    compgen.generate(scanner)
}
