#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate failure;

#[macro_use]
mod macros;

mod classify;
mod compgen;
mod context;
mod logger;
mod options;
mod path;
mod script;

use std::io::Write;
use std::process::exit;

use structopt::StructOpt;

use crate::path::FsScanner;
use crate::script::Shell;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ytdl-complete",
    about = "Context-aware shell completions for youtube-dl."
)]
enum Opt {
    /// Prints the completion candidates for a command line, one per line.
    #[structopt(name = "complete")]
    Complete {
        /// The index of the word being completed (`$COMP_CWORD`).
        #[structopt(long = "cword")]
        cword: Option<usize>,
        /// The words of the command line (`$COMP_WORDS`). When omitted,
        /// the line is taken from `$COMP_LINE` and `$COMP_POINT`.
        #[structopt(name = "word")]
        words: Vec<String>,
    },
    /// Prints the completion script for a shell.
    #[structopt(name = "script")]
    Script {
        /// The shell to generate a script for: bash, zsh, or fish.
        #[structopt(name = "shell")]
        shell: String,
        /// The command to register the completions for.
        #[structopt(long = "command")]
        command: Option<String>,
    },
}

fn run_complete(cword: Option<usize>, words: Vec<String>) {
    let (words, cword) = if words.is_empty() {
        // A `complete -C' style invocation: bash hands us the whole
        // line and the cursor offset through the environment.
        let line = match std::env::var("COMP_LINE") {
            Ok(line) => line,
            Err(_) => {
                print_err!("no words given and $COMP_LINE is not set");
                exit(1);
            }
        };
        let point = match std::env::var("COMP_POINT") {
            Ok(point) => match point.parse() {
                Ok(point) => point,
                Err(_) => {
                    warn!("ignoring a non-numeric $COMP_POINT: {:?}", point);
                    line.len()
                }
            },
            Err(_) => line.len(),
        };
        let ctx = context::split(&line, point);
        (ctx.words, ctx.cword)
    } else {
        let cword = cword.unwrap_or(words.len() - 1);
        (words, cword)
    };

    let tables = options::builtin();
    let domain = classify::classify(&words, cword, tables);
    let current = words.get(cword).map(|word| word.as_str()).unwrap_or("");

    let scanner = FsScanner;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for candidate in compgen::candidates(domain, current, &scanner) {
        // The shell may close the pipe as soon as it has seen enough.
        if writeln!(out, "{}", candidate).is_err() {
            break;
        }
    }
}

fn run_script(shell: &str, command: Option<String>) {
    let shell: Shell = match shell.parse() {
        Ok(shell) => shell,
        Err(err) => {
            print_err!("{}", err);
            exit(1);
        }
    };

    let prog = std::env::current_exe()
        .ok()
        .and_then(|path| path.to_str().map(|path| path.to_owned()))
        .unwrap_or_else(|| "ytdl-complete".to_owned());
    let command = command.unwrap_or_else(|| options::COMMAND.to_owned());

    print!("{}", script::render(shell, &prog, &command));
}

fn main() {
    logger::init();

    match Opt::from_args() {
        Opt::Complete { cword, words } => run_complete(cword, words),
        Opt::Script { shell, command } => run_script(&shell, command),
    }
}
