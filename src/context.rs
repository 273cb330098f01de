//! Splits a command line into completion words, the way bash fills
//! `$COMP_WORDS` and `$COMP_CWORD`. Quotes and backslashes only affect
//! where words break; the word text itself is kept verbatim, no
//! expansion of any kind happens here.
use std::mem;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LineContext {
    // Words of the command line (`$COMP_WORDS`).
    pub words: Vec<String>,
    // The index of the word being completed (`$COMP_CWORD`).
    pub cword: usize,
}

/// Splits `line` and locates the word the cursor (`point`, a byte
/// offset) is in. A cursor in whitespace belongs to a fresh empty word
/// inserted there, so `"dl -a "` completes a new third word rather than
/// `-a` itself.
pub fn split(line: &str, point: usize) -> LineContext {
    let point = point.min(line.len());

    let mut words = Vec::new();
    let mut spans = Vec::new();
    let mut word = String::new();
    let mut start = None;
    let mut quote = None;
    let mut escaped = false;

    for (offset, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            word.push(ch);
            continue;
        }

        match ch {
            '\\' if quote != Some('\'') => {
                escaped = true;
                if start.is_none() {
                    start = Some(offset);
                }
                word.push(ch);
            }
            '\'' | '"' if quote == Some(ch) => {
                quote = None;
                word.push(ch);
            }
            '\'' | '"' if quote.is_none() => {
                quote = Some(ch);
                if start.is_none() {
                    start = Some(offset);
                }
                word.push(ch);
            }
            ' ' | '\t' if quote.is_none() => {
                if let Some(s) = start.take() {
                    spans.push(s..offset);
                    words.push(mem::replace(&mut word, String::new()));
                }
            }
            _ => {
                if start.is_none() {
                    start = Some(offset);
                }
                word.push(ch);
            }
        }
    }

    if let Some(s) = start {
        spans.push(s..line.len());
        words.push(word);
    }

    let mut cword = None;
    for (i, span) in spans.iter().enumerate() {
        if span.start <= point && point <= span.end {
            cword = Some(i);
            break;
        }
    }

    let cword = match cword {
        Some(i) => i,
        None => {
            let i = spans.iter().filter(|span| span.end < point).count();
            words.insert(i, String::new());
            i
        }
    };

    LineContext { words, cword }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_line() {
        assert_eq!(
            split("", 0),
            LineContext {
                words: vec!["".to_owned()],
                cword: 0,
            }
        );
    }

    #[test]
    fn cursor_at_the_end_of_a_word() {
        let line = "youtube-dl --recode-video mp4";
        assert_eq!(
            split(line, line.len()),
            LineContext {
                words: vec![
                    "youtube-dl".to_owned(),
                    "--recode-video".to_owned(),
                    "mp4".to_owned(),
                ],
                cword: 2,
            }
        );
    }

    #[test]
    fn cursor_inside_a_word() {
        let line = "youtube-dl --rec https://example.com/v";
        let point = 14; /* after `--r` */
        assert_eq!(
            split(line, point),
            LineContext {
                words: vec![
                    "youtube-dl".to_owned(),
                    "--rec".to_owned(),
                    "https://example.com/v".to_owned(),
                ],
                cword: 1,
            }
        );
    }

    #[test]
    fn trailing_whitespace_begins_a_new_word() {
        let line = "youtube-dl -a ";
        assert_eq!(
            split(line, line.len()),
            LineContext {
                words: vec!["youtube-dl".to_owned(), "-a".to_owned(), "".to_owned()],
                cword: 2,
            }
        );
    }

    #[test]
    fn cursor_in_a_gap_between_words() {
        let line = "youtube-dl --cache-dir   /var/cache";
        let point = 24; /* between the spaces */
        assert_eq!(
            split(line, point),
            LineContext {
                words: vec![
                    "youtube-dl".to_owned(),
                    "--cache-dir".to_owned(),
                    "".to_owned(),
                    "/var/cache".to_owned(),
                ],
                cword: 2,
            }
        );
    }

    #[test]
    fn quotes_hold_a_word_together() {
        let line = "youtube-dl --batch-file 'my urls.txt'";
        assert_eq!(
            split(line, line.len()),
            LineContext {
                words: vec![
                    "youtube-dl".to_owned(),
                    "--batch-file".to_owned(),
                    "'my urls.txt'".to_owned(),
                ],
                cword: 2,
            }
        );

        let line = "youtube-dl \"a b\" c";
        assert_eq!(
            split(line, line.len()),
            LineContext {
                words: vec![
                    "youtube-dl".to_owned(),
                    "\"a b\"".to_owned(),
                    "c".to_owned(),
                ],
                cword: 2,
            }
        );
    }

    #[test]
    fn backslash_escapes_a_space() {
        let line = "youtube-dl my\\ urls.txt";
        assert_eq!(
            split(line, line.len()),
            LineContext {
                words: vec!["youtube-dl".to_owned(), "my\\ urls.txt".to_owned()],
                cword: 1,
            }
        );
    }

    #[test]
    fn unterminated_quote_still_splits() {
        let line = "youtube-dl 'my vid";
        assert_eq!(
            split(line, line.len()),
            LineContext {
                words: vec!["youtube-dl".to_owned(), "'my vid".to_owned()],
                cword: 1,
            }
        );
    }

    #[test]
    fn point_past_the_end_is_clamped() {
        assert_eq!(
            split("youtube-dl", 9999),
            LineContext {
                words: vec!["youtube-dl".to_owned()],
                cword: 0,
            }
        );
    }
}
