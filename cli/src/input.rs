//! Content resolution.

use std::io::Read;

use qrterm_core::Result;

/// Encoded when no argument is given and nothing is piped in.
pub const DEFAULT_CONTENT: &str = "https://github.com/qrterm/qrterm";

/// Pick the content to encode: the positional argument if present,
/// then piped stdin with its trailing newline trimmed, then the
/// built-in default.
pub fn resolve_content(arg: Option<String>) -> Result<String> {
    if let Some(content) = arg {
        return Ok(content);
    }

    if atty::isnt(atty::Stream::Stdin) {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(trim_trailing_newline(buf));
    }

    Ok(DEFAULT_CONTENT.to_string())
}

/// Strip one final newline, so `echo text | qrterm` encodes `text`.
fn trim_trailing_newline(mut s: String) -> String {
    if s.ends_with('\n') {
        s.pop();
        if s.ends_with('\r') {
            s.pop();
        }
    }
    s
}
