//! Completion script generation. Each shell gets a small shim which
//! forwards the words and the cursor index to this program and offers
//! whatever comes back on stdout, one candidate per line.
use std::str::FromStr;

use failure::Error;

#[derive(Debug, Fail)]
#[fail(display = "unknown shell `{}' (expected bash, zsh, or fish)", name)]
pub struct UnknownShellError {
    name: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl FromStr for Shell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Shell, Error> {
        match s {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            _ => Err(UnknownShellError { name: s.to_owned() }.into()),
        }
    }
}

static BASH_TEMPLATE: &'static str = r#"{{func}}() {
    local IFS=$'\n'
    COMPREPLY=( $("{{prog}}" complete --cword "$COMP_CWORD" -- "${COMP_WORDS[@]}") )
}
complete -F {{func}} {{target}}
"#;

static ZSH_TEMPLATE: &'static str = r#"#compdef {{target}}

{{func}}() {
    local -a candidates
    candidates=(${(f)"$("{{prog}}" complete --cword $((CURRENT - 1)) -- "${(@)words}")"})
    compadd -- "${candidates[@]}"
}

{{func}} "$@"
"#;

static FISH_TEMPLATE: &'static str = r#"function {{func}}
    set -l tokens (commandline -opc) (commandline -ct)
    "{{prog}}" complete --cword (math (count $tokens) - 1) -- $tokens
end
complete -c {{target}} -f -a "({{func}})"
"#;

/// Renders the completion script for `shell`. `prog` is the path this
/// program will be invoked as and `target` the command to complete.
pub fn render(shell: Shell, prog: &str, target: &str) -> String {
    let func: String = target
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect();
    let func = format!("__{}", func);

    let template = match shell {
        Shell::Bash => BASH_TEMPLATE,
        Shell::Zsh => ZSH_TEMPLATE,
        Shell::Fish => FISH_TEMPLATE,
    };

    template
        .replace("{{func}}", &func)
        .replace("{{prog}}", prog)
        .replace("{{target}}", target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_shell_names() {
        assert_eq!("bash".parse::<Shell>().unwrap(), Shell::Bash);
        assert_eq!("zsh".parse::<Shell>().unwrap(), Shell::Zsh);
        assert_eq!("fish".parse::<Shell>().unwrap(), Shell::Fish);
        assert!("tcsh".parse::<Shell>().is_err());
    }

    #[test]
    fn bash_script_registers_the_function() {
        let script = render(Shell::Bash, "/usr/bin/ytdl-complete", "youtube-dl");
        assert!(script.contains("complete -F __youtube_dl youtube-dl"));
        assert!(script.contains(r#""/usr/bin/ytdl-complete" complete --cword "$COMP_CWORD""#));
        assert!(!script.contains("{{"));
    }

    #[test]
    fn zsh_script_is_a_compdef() {
        let script = render(Shell::Zsh, "ytdl-complete", "youtube-dl");
        assert!(script.starts_with("#compdef youtube-dl\n"));
        assert!(script.contains("$((CURRENT - 1))"));
        assert!(!script.contains("{{"));
    }

    #[test]
    fn fish_script_registers_the_function() {
        let script = render(Shell::Fish, "ytdl-complete", "youtube-dl");
        assert!(script.contains("complete -c youtube-dl -f -a \"(__youtube_dl)\""));
        assert!(script.contains("commandline -opc"));
        assert!(!script.contains("{{"));
    }

    #[test]
    fn function_names_stay_shell_safe() {
        let script = render(Shell::Bash, "ytdl-complete", "youtube-dl.exe");
        assert!(script.contains("complete -F __youtube_dl_exe youtube-dl.exe"));
    }
}
