//! Command-line reconstructor.
//!
//! The raw command line is split once, at the first unquoted space or tab,
//! into the program token and the argument tail. The tail is never re-parsed:
//! it is forwarded to the runtime byte for byte, internal quoting included.
//!
//! Every `"` in the program token toggles the quote state. Windows applies no
//! backslash escaping to argv[0], so there is no escaped quote to honour here.
//! Unbalanced quoting simply means the whole line is the program token.

mod quote;

pub use quote::{join_args, quote_arg, split_args};

use crate::error::LaunchError;

/// The command line exactly as the OS handed it over. Immutable once captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawCommandLine(String);

impl RawCommandLine {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Read the current process's command line.
    ///
    /// Windows keeps the verbatim line (`GetCommandLineW`). Other hosts only
    /// keep an argument vector; it is re-quoted with the Windows rules so the
    /// tail splits back into the same arguments (see [`join_args`] for how
    /// argv[0] is treated).
    pub fn capture() -> Result<Self, LaunchError> {
        os_command_line().map(Self)
    }

    pub fn split(&self) -> SplitCommandLine {
        split_command_line(&self.0)
    }
}

/// A raw command line cut into program token and argument tail.
///
/// `program_token + separator + tail` reproduces the raw line exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitCommandLine {
    /// Leading token, verbatim (quotes kept).
    pub program_token: String,
    /// The single whitespace character that ended the token, if any.
    pub separator: Option<char>,
    /// Everything after the separator, verbatim.
    pub tail: String,
}

impl SplitCommandLine {
    /// Program token with one pair of surrounding quotes removed.
    pub fn program(&self) -> &str {
        let token = self.program_token.as_str();
        match token.strip_prefix('"').and_then(|t| t.strip_suffix('"')) {
            Some(inner) => inner,
            None => token,
        }
    }

    pub fn has_arguments(&self) -> bool {
        !self.tail.is_empty()
    }

    pub fn reconstruct(&self) -> String {
        let mut out = String::with_capacity(self.program_token.len() + 1 + self.tail.len());
        out.push_str(&self.program_token);
        if let Some(sep) = self.separator {
            out.push(sep);
        }
        out.push_str(&self.tail);
        out
    }
}

fn is_boundary(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Single forward pass; the scan is bounded by the string length, not by a
/// closing quote.
pub fn split_command_line(raw: &str) -> SplitCommandLine {
    let mut in_quote = false;
    for (i, c) in raw.char_indices() {
        if c == '"' {
            in_quote = !in_quote;
        } else if is_boundary(c) && !in_quote {
            return SplitCommandLine {
                program_token: raw[..i].to_string(),
                separator: Some(c),
                tail: raw[i + c.len_utf8()..].to_string(),
            };
        }
    }
    SplitCommandLine {
        program_token: raw.to_string(),
        separator: None,
        tail: String::new(),
    }
}

#[cfg(windows)]
fn os_command_line() -> Result<String, LaunchError> {
    use std::ffi::OsString;
    use std::os::windows::ffi::OsStringExt;

    #[link(name = "kernel32")]
    extern "system" {
        fn GetCommandLineW() -> *const u16;
    }

    // SAFETY: GetCommandLineW returns a NUL-terminated buffer owned by the
    // process that stays valid and unmodified for the process lifetime.
    let wide = unsafe {
        let ptr = GetCommandLineW();
        if ptr.is_null() {
            return Err(LaunchError::malformed("GetCommandLineW returned null"));
        }
        let mut len = 0usize;
        while *ptr.add(len) != 0 {
            len += 1;
        }
        std::slice::from_raw_parts(ptr, len)
    };
    OsString::from_wide(wide)
        .into_string()
        .map_err(|_| LaunchError::malformed("command line is not valid unicode"))
}

#[cfg(not(windows))]
fn os_command_line() -> Result<String, LaunchError> {
    let mut args = Vec::new();
    for arg in std::env::args_os() {
        let arg = arg
            .into_string()
            .map_err(|_| LaunchError::malformed("command line is not valid unicode"))?;
        args.push(arg);
    }
    Ok(join_args(&args))
}
