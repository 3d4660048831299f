//! Transcript sanitization
//!
//! Raw terminal captures carry VT control sequences and carriage returns that
//! have no place in a saved transcript. [`sanitize`] removes the recognized
//! constructs and nothing else: every other character survives in its
//! original order and count.

use once_cell::sync::Lazy;
use regex::Regex;

/// CSI sequences: `ESC [` followed by digit/semicolon parameters and exactly
/// one terminating letter.
static CSI: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").unwrap());

/// OSC sequences: `ESC ]` followed by one digit, a semicolon, and a payload
/// terminated by BEL.
static OSC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1b\][0-9];[^\x07]*\x07").unwrap());

/// Keypad/mode switch sequences: `ESC >` and `ESC =`.
static MODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\x1b[>=]").unwrap());

/// Strip recognized escape sequences and carriage returns from captured text.
///
/// The rules are applied independently over the whole string; only exact
/// matches are removed, so malformed or truncated sequences pass through
/// untouched. The function is pure and idempotent.
pub fn sanitize(raw: &str) -> String {
    let text = CSI.replace_all(raw, "");
    let text = OSC.replace_all(&text, "");
    let text = MODE.replace_all(&text, "");
    text.replace('\r', "")
}
