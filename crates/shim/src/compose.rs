//! Command-line composer.
//!
//! Layouts (byte exact, the receiving shell parses quotes):
//! - direct: `"<runtime>" ["<companion>"] <tail>`
//! - shell:  `<shell> /c ""<preamble>" & "<runtime>" ["<companion>"] <tail>"`
//!
//! Paths are always quoted and the tail is appended verbatim after a single
//! space. The shell form keeps that space even for an empty tail, so the line
//! always ends in `" "`; the direct form omits it when there is nothing to
//! forward.

use std::fmt;

/// The line handed to the spawn primitive. Built once, never edited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedCommandLine(String);

impl ComposedCommandLine {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComposedCommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn push_quoted(out: &mut String, path: &str) {
    out.push('"');
    out.push_str(path);
    out.push('"');
}

fn push_programs(out: &mut String, runtime: &str, companion: Option<&str>) {
    push_quoted(out, runtime);
    if let Some(companion) = companion {
        out.push(' ');
        push_quoted(out, companion);
    }
}

/// `"<runtime>" ["<companion>"] <tail>`.
///
/// With an empty tail the line ends at the last closing quote; no trailing
/// space is emitted, unlike [`compose_with_preamble`].
pub fn compose(runtime: &str, companion: Option<&str>, tail: &str) -> ComposedCommandLine {
    let mut out = String::with_capacity(runtime.len() + tail.len() + 8);
    push_programs(&mut out, runtime, companion);
    if !tail.is_empty() {
        out.push(' ');
        out.push_str(tail);
    }
    ComposedCommandLine(out)
}

/// Run `preamble` and then the runtime inside one `<shell> /c` invocation.
pub fn compose_with_preamble(
    shell: &str,
    preamble: &str,
    runtime: &str,
    companion: Option<&str>,
    tail: &str,
) -> ComposedCommandLine {
    let len = shell.len() + preamble.len() + runtime.len() + tail.len();
    let mut out = String::with_capacity(len + 16);
    out.push_str(shell);
    out.push_str(" /c \"");
    push_quoted(&mut out, preamble);
    out.push_str(" & ");
    push_programs(&mut out, runtime, companion);
    out.push(' ');
    out.push_str(tail);
    out.push('"');
    ComposedCommandLine(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_companion_and_tail() {
        let line = compose(r"C:\r\run.exe", Some(r"C:\r\app.zip"), "--flag val");
        assert_eq!(line.as_str(), r#""C:\r\run.exe" "C:\r\app.zip" --flag val"#);
    }

    #[test]
    fn runtime_only() {
        let line = compose(r"C:\venv\Bin\python.exe", None, r#"-m pip "a b""#);
        assert_eq!(line.as_str(), r#""C:\venv\Bin\python.exe" -m pip "a b""#);
        assert_eq!(compose("/r/run", None, "").as_str(), r#""/r/run""#);
    }

    #[test]
    fn tail_is_forwarded_verbatim() {
        let tail = r#"  spaced   "q \" x"  "#;
        let line = compose("rt", None, tail);
        assert_eq!(line.as_str(), format!("\"rt\" {tail}"));
    }

    #[test]
    fn shell_preamble_layout() {
        let line = compose_with_preamble(
            "cmd.exe",
            r"C:\j\activate-julia-environment.cmd",
            r"C:\j\julia\bin\julia.exe",
            None,
            "script.jl -x",
        );
        assert_eq!(
            line.as_str(),
            r#"cmd.exe /c ""C:\j\activate-julia-environment.cmd" & "C:\j\julia\bin\julia.exe" script.jl -x""#
        );
    }

    #[test]
    fn shell_preamble_keeps_space_before_closing_quote() {
        let line = compose_with_preamble("cmd.exe", "pre.cmd", "rt.exe", None, "");
        assert_eq!(line.as_str(), r#"cmd.exe /c ""pre.cmd" & "rt.exe" ""#);
        let line = compose_with_preamble("cmd.exe", "pre.cmd", "rt.exe", Some("app.zip"), "");
        assert_eq!(line.as_str(), r#"cmd.exe /c ""pre.cmd" & "rt.exe" "app.zip" ""#);
    }

    #[test]
    fn paths_with_spaces_are_quoted() {
        let line = compose(r"C:\Program Files\r\run.exe", Some(r"C:\my app\a.py"), "x");
        assert_eq!(line.as_str(), r#""C:\Program Files\r\run.exe" "C:\my app\a.py" x"#);
    }
}
