//! Static completion tables for youtube-dl.
//!
//! The spellings below are maintained by hand against youtube-dl's option
//! parser: the flag list is what its own completion generators embed into
//! the shell scripts, and the file/directory sets are the options declared
//! with a FILE/DIR metavar there.
use phf::phf_set;

/// The command these completions are attached to.
pub static COMMAND: &'static str = "youtube-dl";

/// Every long option spelling, in help order.
pub static FLAGS: &'static [&'static str] = &[
    // General options.
    "--help",
    "--version",
    "--update",
    "--ignore-errors",
    "--abort-on-error",
    "--dump-user-agent",
    "--list-extractors",
    "--extractor-descriptions",
    "--force-generic-extractor",
    "--default-search",
    "--ignore-config",
    "--config-location",
    "--flat-playlist",
    "--mark-watched",
    "--no-mark-watched",
    "--no-color",
    // Network options.
    "--proxy",
    "--socket-timeout",
    "--source-address",
    "--force-ipv4",
    "--force-ipv6",
    // Geo-restriction options.
    "--geo-verification-proxy",
    "--cn-verification-proxy",
    "--geo-bypass",
    "--no-geo-bypass",
    "--geo-bypass-country",
    "--geo-bypass-ip-block",
    // Video selection options.
    "--playlist-start",
    "--playlist-end",
    "--playlist-items",
    "--match-title",
    "--reject-title",
    "--max-downloads",
    "--min-filesize",
    "--max-filesize",
    "--date",
    "--datebefore",
    "--dateafter",
    "--min-views",
    "--max-views",
    "--match-filter",
    "--no-playlist",
    "--yes-playlist",
    "--age-limit",
    "--download-archive",
    "--include-ads",
    // Download options.
    "--limit-rate",
    "--retries",
    "--fragment-retries",
    "--skip-unavailable-fragments",
    "--abort-on-unavailable-fragment",
    "--keep-fragments",
    "--buffer-size",
    "--no-resize-buffer",
    "--http-chunk-size",
    "--test",
    "--playlist-reverse",
    "--playlist-random",
    "--xattr-set-filesize",
    "--hls-prefer-native",
    "--hls-prefer-ffmpeg",
    "--hls-use-mpegts",
    "--external-downloader",
    "--external-downloader-args",
    // Filesystem options.
    "--batch-file",
    "--id",
    "--output",
    "--output-na-placeholder",
    "--autonumber-size",
    "--autonumber-start",
    "--restrict-filenames",
    "--auto-number",
    "--title",
    "--literal",
    "--no-overwrites",
    "--continue",
    "--no-continue",
    "--no-part",
    "--no-mtime",
    "--write-description",
    "--write-info-json",
    "--write-annotations",
    "--load-info-json",
    "--cookies",
    "--cache-dir",
    "--no-cache-dir",
    "--rm-cache-dir",
    // Thumbnail options.
    "--write-thumbnail",
    "--write-all-thumbnails",
    "--list-thumbnails",
    // Verbosity and simulation options.
    "--quiet",
    "--no-warnings",
    "--simulate",
    "--skip-download",
    "--get-url",
    "--get-title",
    "--get-id",
    "--get-thumbnail",
    "--get-description",
    "--get-duration",
    "--get-filename",
    "--get-format",
    "--dump-json",
    "--dump-single-json",
    "--print-json",
    "--newline",
    "--no-progress",
    "--console-title",
    "--verbose",
    "--dump-pages",
    "--write-pages",
    "--youtube-print-sig-code",
    "--print-traffic",
    "--call-home",
    "--no-call-home",
    // Workaround options.
    "--encoding",
    "--no-check-certificate",
    "--prefer-insecure",
    "--user-agent",
    "--referer",
    "--add-header",
    "--bidi-workaround",
    "--sleep-interval",
    "--max-sleep-interval",
    // Video format options.
    "--format",
    "--all-formats",
    "--prefer-free-formats",
    "--list-formats",
    "--youtube-include-dash-manifest",
    "--youtube-skip-dash-manifest",
    "--merge-output-format",
    // Subtitle options.
    "--write-sub",
    "--write-auto-sub",
    "--all-subs",
    "--list-subs",
    "--sub-format",
    "--sub-lang",
    // Authentication options.
    "--username",
    "--password",
    "--twofactor",
    "--netrc",
    "--video-password",
    // Adobe Pass options.
    "--ap-mso",
    "--ap-username",
    "--ap-password",
    "--ap-list-mso",
    // Post-processing options.
    "--extract-audio",
    "--audio-format",
    "--audio-quality",
    "--recode-video",
    "--postprocessor-args",
    "--keep-video",
    "--no-post-overwrites",
    "--embed-subs",
    "--embed-thumbnail",
    "--add-metadata",
    "--metadata-from-title",
    "--xattrs",
    "--fixup",
    "--prefer-avconv",
    "--prefer-ffmpeg",
    "--ffmpeg-location",
    "--exec",
    "--convert-subs",
];

/// Options whose argument is a file path. Both spellings of an option
/// belong here since the previous word is matched as typed.
static FILE_OPTS: phf::Set<&'static str> = phf_set! {
    "-a",
    "--batch-file",
    "--download-archive",
    "--cookies",
    "--load-info-json",
    "--load-info",
};

/// Options whose argument is a directory path.
static DIR_OPTS: phf::Set<&'static str> = phf_set! {
    "--cache-dir",
};

/// The option whose argument picks a target container format.
pub static RECODE_OPT: &'static str = "--recode-video";

/// Container formats `--recode-video` accepts.
pub static RECODE_FORMATS: &'static [&'static str] = &[
    "mp4",
    "flv",
    "ogg",
    "webm",
    "mkv",
];

/// Playlist keywords usable in place of a URL, colon prefix included.
pub static KEYWORDS: &'static [&'static str] = &[
    ":ytfavorites",
    ":ytrecommended",
    ":ytsubscriptions",
    ":ytwatchlater",
    ":ythistory",
];

/// What kind of value an option expects as its argument.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OptionClass {
    /// A file path. Directories are offered too so the user can descend.
    FilePath,
    /// A directory path.
    DirectoryPath,
    /// One of the recode container formats.
    VideoCodec,
    /// Anything else: no argument, a free-form argument, or not an option.
    None,
}

/// The lookup tables the classifier consults. Bundled so tests can inject
/// substitutes for the built-in youtube-dl set.
pub struct OptionTables {
    pub flags: &'static [&'static str],
    pub file_opts: &'static phf::Set<&'static str>,
    pub dir_opts: &'static phf::Set<&'static str>,
    pub recode_opt: &'static str,
    pub recode_formats: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

impl OptionTables {
    /// Creates a table set. The file and directory tables must not share
    /// a spelling; lookup order would silently decide the winner.
    pub fn new(
        flags: &'static [&'static str],
        file_opts: &'static phf::Set<&'static str>,
        dir_opts: &'static phf::Set<&'static str>,
        recode_opt: &'static str,
        recode_formats: &'static [&'static str],
        keywords: &'static [&'static str],
    ) -> OptionTables {
        for opt in file_opts.iter() {
            assert!(
                !dir_opts.contains(*opt),
                "option `{}' is in both the file and directory tables",
                opt
            );
        }
        assert!(
            !file_opts.contains(recode_opt) && !dir_opts.contains(recode_opt),
            "the recode option `{}' must not appear in the path tables",
            recode_opt
        );

        OptionTables {
            flags,
            file_opts,
            dir_opts,
            recode_opt,
            recode_formats,
            keywords,
        }
    }

    /// Exact-match lookup of what `opt` expects as its argument.
    pub fn class_of(&self, opt: &str) -> OptionClass {
        if self.file_opts.contains(opt) {
            OptionClass::FilePath
        } else if self.dir_opts.contains(opt) {
            OptionClass::DirectoryPath
        } else if opt == self.recode_opt {
            OptionClass::VideoCodec
        } else {
            OptionClass::None
        }
    }
}

lazy_static! {
    static ref BUILTIN: OptionTables = OptionTables::new(
        FLAGS,
        &FILE_OPTS,
        &DIR_OPTS,
        RECODE_OPT,
        RECODE_FORMATS,
        KEYWORDS,
    );
}

/// The built-in youtube-dl tables.
pub fn builtin() -> &'static OptionTables {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn file_and_dir_tables_are_disjoint() {
        let tables = builtin();
        for opt in tables.file_opts.iter() {
            assert!(!tables.dir_opts.contains(*opt));
        }
        for opt in tables.dir_opts.iter() {
            assert!(!tables.file_opts.contains(*opt));
        }
    }

    #[test]
    fn classes_are_mutually_exclusive() {
        let tables = builtin();
        assert_eq!(tables.class_of("--batch-file"), OptionClass::FilePath);
        assert_eq!(tables.class_of("-a"), OptionClass::FilePath);
        assert_eq!(tables.class_of("--cache-dir"), OptionClass::DirectoryPath);
        assert_eq!(tables.class_of("--recode-video"), OptionClass::VideoCodec);
        assert_eq!(tables.class_of("--quiet"), OptionClass::None);
        assert_eq!(tables.class_of("not-an-option"), OptionClass::None);
    }

    #[test]
    fn lookup_is_case_sensitive_and_exact() {
        let tables = builtin();
        assert_eq!(tables.class_of("--Batch-File"), OptionClass::None);
        assert_eq!(tables.class_of("--batch"), OptionClass::None);
        assert_eq!(tables.class_of("--batch-file="), OptionClass::None);
    }

    static OVERLAPPING: phf::Set<&'static str> = phf_set! { "--into" };
    static EMPTY: phf::Set<&'static str> = phf_set! {};

    #[test]
    #[should_panic(expected = "recode option")]
    fn recode_option_must_not_take_paths() {
        OptionTables::new(&[], &OVERLAPPING, &EMPTY, "--into", &[], &[]);
    }

    #[test]
    fn flag_table_contains_every_classified_option() {
        // Short spellings aside, an option the tables know should also be
        // offered when flags are listed.
        let tables = builtin();
        for opt in tables.file_opts.iter() {
            if opt.starts_with("--") && *opt != "--load-info" {
                assert!(tables.flags.contains(opt), "{} missing from FLAGS", opt);
            }
        }
        assert!(tables.flags.contains(&tables.recode_opt));
        for opt in tables.dir_opts.iter() {
            assert!(tables.flags.contains(opt), "{} missing from FLAGS", opt);
        }
    }
}
