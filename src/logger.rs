//! File logging for debugging completion sessions. Nothing here may
//! touch stdout: the shell reads candidates from it and any stray
//! output would end up inserted into the user's command line.
use std::path::PathBuf;

use backtrace::Backtrace;
use log::Level;

static LOG_ENV_VAR: &'static str = "YTDL_COMPLETE_LOG";

fn log_file_path(value: &str) -> PathBuf {
    if value.is_empty() {
        let mut path = dirs::home_dir().expect("where's your home dir?");
        path.push(".ytdl-complete.log");
        path
    } else {
        PathBuf::from(value)
    }
}

/// Installs the file logger if `$YTDL_COMPLETE_LOG` is set. An empty
/// value logs to `~/.ytdl-complete.log`; a non-empty one names the log
/// file. Completion runs with the variable unset log nowhere.
pub fn init() {
    let value = match std::env::var(LOG_ENV_VAR) {
        Ok(value) => value,
        Err(_) => return,
    };

    let file = match fern::log_file(log_file_path(&value)) {
        Ok(file) => file,
        Err(_) => return,
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}] {}{}\x1b[0m",
                match record.level() {
                    Level::Error => "\x1b[1;31m",
                    Level::Warn => "\x1b[1;33m",
                    _ => "\x1b[34m",
                },
                record.file().unwrap_or_else(|| record.target()),
                record.line().unwrap_or(0),
                match record.level() {
                    Level::Error => "\x1b[1;31m",
                    Level::Warn => "\x1b[1;33m",
                    _ => "\x1b[0m",
                },
                message
            ))
        })
        .level(if cfg!(debug_assertions) {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        })
        .chain(file)
        .apply()
        .ok();

    std::panic::set_hook(Box::new(|info| {
        error!("{}", info);
        prettify_backtrace(Backtrace::new());
    }));
}

fn prettify_backtrace(backtrace: Backtrace) {
    for (i, frame) in backtrace.frames().iter().enumerate() {
        for symbol in frame.symbols() {
            if let Some(path) = symbol.filename() {
                let filename = path.to_str().unwrap_or("(non-utf8 path)");
                if filename.contains("/.rustup/")
                    || filename.contains("/.cargo/")
                    || filename.starts_with("/rustc/")
                {
                    continue;
                }

                error!(
                    "    #{} {}:{}, col {}",
                    i,
                    filename,
                    symbol.lineno().unwrap_or(0),
                    symbol.colno().unwrap_or(0),
                );
            }
        }
    }
}
