//! Path deriver: base directory and program name of the launcher.
//!
//! Paths are handled as text. Both `\` and `/` count as separators when
//! scanning, whatever the host; new segments are joined with the host's
//! main separator.

use crate::error::LaunchError;
use std::path::MAIN_SEPARATOR;

/// Executable suffix stripped from the program name (compared case-insensitively).
pub const EXE_SUFFIX: &str = "exe";

/// Directory used when the launcher path has no separator at all.
pub const CURRENT_DIR: &str = ".";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedPaths {
    pub base_directory: String,
    pub program_name: String,
}

impl DerivedPaths {
    pub fn from_path(path: &str) -> Self {
        Self {
            base_directory: base_directory(path).to_string(),
            program_name: program_name(path).to_string(),
        }
    }
}

pub fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

fn last_separator(path: &str) -> Option<usize> {
    path.rfind(is_separator)
}

/// Text before the last separator, or `.` when there is none.
///
/// A launcher sitting directly under the root (`/app`) yields the empty
/// prefix, which joins back to root-level paths.
pub fn base_directory(path: &str) -> &str {
    match last_separator(path) {
        Some(i) => &path[..i],
        None => CURRENT_DIR,
    }
}

/// File name with one trailing `.exe` removed.
///
/// The suffix is only dropped when something precedes the dot, so a file
/// literally named `.exe` keeps its name.
pub fn program_name(path: &str) -> &str {
    let name = match last_separator(path) {
        Some(i) => &path[i + 1..],
        None => path,
    };
    strip_exe_suffix(name)
}

fn strip_exe_suffix(name: &str) -> &str {
    let cut = name.len().saturating_sub(EXE_SUFFIX.len() + 1);
    if cut == 0 || !name.is_char_boundary(cut) {
        return name;
    }
    let (stem, suffix) = name.split_at(cut);
    match suffix.strip_prefix('.') {
        Some(ext) if ext.eq_ignore_ascii_case(EXE_SUFFIX) => stem,
        _ => name,
    }
}

/// Append components to `base`, each preceded by the host separator.
pub fn join(base: &str, components: &[&str]) -> String {
    let extra: usize = components.iter().map(|c| c.len() + 1).sum();
    let mut out = String::with_capacity(base.len() + extra);
    out.push_str(base);
    for component in components {
        out.push(MAIN_SEPARATOR);
        out.push_str(component);
    }
    out
}

/// Strip the last component; `None` once no separator is left.
pub fn strip_last_component(path: &str) -> Option<&str> {
    last_separator(path).map(|i| &path[..i])
}

/// Absolute path of the running executable, taken from the OS rather than argv[0].
pub fn launcher_path() -> Result<String, LaunchError> {
    let exe = std::env::current_exe()
        .map_err(|err| LaunchError::malformed(format!("cannot resolve own path: {err}")))?;
    exe.into_os_string()
        .into_string()
        .map_err(|_| LaunchError::malformed("launcher path is not valid unicode"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_directory_is_prefix_before_last_separator() {
        assert_eq!(base_directory(r"C:\apps\tool\myapp.exe"), r"C:\apps\tool");
        assert_eq!(base_directory("/opt/tool/myapp"), "/opt/tool");
        assert_eq!(base_directory(r"C:\apps/tool\myapp.exe"), r"C:\apps/tool");
        assert_eq!(base_directory("myapp.exe"), ".");
        assert_eq!(base_directory("/myapp"), "");
    }

    #[test]
    fn program_name_strips_one_exe_suffix() {
        assert_eq!(program_name(r"C:\apps\myapp.exe"), "myapp");
        assert_eq!(program_name(r"C:\apps\myapp.EXE"), "myapp");
        assert_eq!(program_name(r"C:\apps\myapp.ExE"), "myapp");
        assert_eq!(program_name("myapp.exe.exe"), "myapp.exe");
        assert_eq!(program_name("/myapp"), "myapp");
    }

    #[test]
    fn program_name_unchanged_without_dotted_suffix() {
        assert_eq!(program_name("/opt/tool/myapp"), "myapp");
        assert_eq!(program_name("/opt/tool/myappexe"), "myappexe");
        assert_eq!(program_name("/opt/tool/myapp.ex"), "myapp.ex");
        assert_eq!(program_name("/opt/tool/.exe"), ".exe");
        assert_eq!(program_name("/opt/tool/"), "");
        assert_eq!(program_name("/opt/tool/né.exé"), "né.exé");
    }

    #[test]
    fn join_and_strip() {
        let sep = MAIN_SEPARATOR;
        assert_eq!(
            join("base", &["bin", "python.exe"]),
            format!("base{sep}bin{sep}python.exe")
        );
        assert_eq!(join("base", &[]), "base");
        assert_eq!(strip_last_component("/a/b"), Some("/a"));
        assert_eq!(strip_last_component("/a"), Some(""));
        assert_eq!(strip_last_component(""), None);
    }

    #[test]
    fn derived_paths_from_path() {
        let d = DerivedPaths::from_path(r"D:\x\y\tool.exe");
        assert_eq!(d.base_directory, r"D:\x\y");
        assert_eq!(d.program_name, "tool");
    }
}
