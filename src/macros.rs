lazy_static! {
    pub static ref COLORS_ENABLED: bool = {
        use std::os::unix::io::AsRawFd;
        nix::unistd::isatty(std::io::stdout().as_raw_fd()).unwrap_or(false)
    };
}

#[macro_export]
macro_rules! print_err {
    ($fmt:expr) => {
        if *crate::macros::COLORS_ENABLED {
            eprintln!(concat!("{}{}ytdl-complete: ", $fmt, "{}"),
                ::crossterm::style::SetAttribute(::crossterm::style::Attribute::Bold),
                ::crossterm::style::SetForegroundColor(::crossterm::style::Color::Yellow),
                ::crossterm::style::SetAttribute(::crossterm::style::Attribute::Reset));
        } else {
            eprintln!(concat!("ytdl-complete: ", $fmt));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *crate::macros::COLORS_ENABLED {
            eprintln!(concat!("{}{}ytdl-complete: ", $fmt, "{}"),
                ::crossterm::style::SetAttribute(::crossterm::style::Attribute::Bold),
                ::crossterm::style::SetForegroundColor(::crossterm::style::Color::Yellow),
                $($arg)*,
                ::crossterm::style::SetAttribute(::crossterm::style::Attribute::Reset));
        } else {
            eprintln!(concat!("ytdl-complete: ", $fmt), $($arg)*);
        }
    };
}
