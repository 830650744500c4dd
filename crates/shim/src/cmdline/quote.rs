//! Windows argument quoting and splitting (the `CommandLineToArgvW` rules).
//!
//! Used where the host has no raw command line: to rebuild one from the
//! argument vector, and to split a composed line back into arguments before
//! spawning.

use std::borrow::Cow;

fn needs_quotes(arg: &str) -> bool {
    arg.is_empty() || arg.contains([' ', '\t', '\n', '\u{b}', '"'])
}

/// Quote one argument so that `split_args` returns it unchanged.
///
/// Backslashes are only special before a `"`: a run of n backslashes followed
/// by a quote becomes 2n+1 backslashes plus the quote, and a run at the very
/// end (before the closing quote) is doubled.
pub fn quote_arg(arg: &str) -> Cow<'_, str> {
    if !needs_quotes(arg) {
        return Cow::Borrowed(arg);
    }
    let mut out = String::with_capacity(arg.len() + 2);
    out.push('"');
    let mut backslashes = 0usize;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                out.extend(std::iter::repeat('\\').take(backslashes * 2 + 1));
                out.push('"');
                backslashes = 0;
            }
            _ => {
                out.extend(std::iter::repeat('\\').take(backslashes));
                out.push(c);
                backslashes = 0;
            }
        }
    }
    out.extend(std::iter::repeat('\\').take(backslashes * 2));
    out.push('"');
    Cow::Owned(out)
}

/// Rebuild a command line from an argument vector.
///
/// The program token is scanned without escape processing, so argv[0] cannot
/// carry a literal `"`. Its quote characters are dropped and the rest is
/// wrapped in quotes when it holds whitespace. The program token of the
/// result then always ends where argv[0] ends.
pub fn join_args<S: AsRef<str>>(args: &[S]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        let arg = arg.as_ref();
        if i == 0 {
            let program: String = arg.chars().filter(|&c| c != '"').collect();
            if program.is_empty() || program.contains([' ', '\t']) {
                out.push('"');
                out.push_str(&program);
                out.push('"');
            } else {
                out.push_str(&program);
            }
        } else {
            out.push(' ');
            out.push_str(&quote_arg(arg));
        }
    }
    out
}

/// Split a command line into arguments.
pub fn split_args(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut chars = line.chars().peekable();
    loop {
        while matches!(chars.peek(), Some(' ' | '\t')) {
            chars.next();
        }
        if chars.peek().is_none() {
            break;
        }
        let mut current = String::new();
        let mut in_quote = false;
        while let Some(&c) = chars.peek() {
            match c {
                ' ' | '\t' if !in_quote => break,
                '\\' => {
                    let mut run = 0usize;
                    while chars.peek() == Some(&'\\') {
                        chars.next();
                        run += 1;
                    }
                    if chars.peek() == Some(&'"') {
                        current.extend(std::iter::repeat('\\').take(run / 2));
                        if run % 2 == 1 {
                            current.push('"');
                            chars.next();
                        }
                    } else {
                        current.extend(std::iter::repeat('\\').take(run));
                    }
                }
                '"' => {
                    chars.next();
                    if in_quote && chars.peek() == Some(&'"') {
                        current.push('"');
                        chars.next();
                    } else {
                        in_quote = !in_quote;
                    }
                }
                _ => {
                    current.push(c);
                    chars.next();
                }
            }
        }
        args.push(current);
    }
    args
}
