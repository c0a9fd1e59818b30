//! Rewrites the symbols a calculator keypad produces into the plain form
//! the tokenizer understands. The input string is never mutated; a fresh
//! string is returned.

/// Canonicalizes keypad symbols: `×`/`÷` become `*`/`/`, the unicode minus
/// becomes `-`, `π` becomes `pi`, `√` becomes `sqrt`, and `%` becomes a
/// division by 100 per calculator convention. Letters pass through
/// untouched, so function names such as `exp` keep their `e` and the
/// tokenizer alone decides which identifiers are constants.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '−' => out.push('-'),
            'π' => out.push_str("pi"),
            '√' => out.push_str("sqrt"),
            '%' => {
                out.push_str("/100");
                // a digit right after the percent must not glue onto the 100
                if matches!(chars.peek(), Some(d) if d.is_ascii_digit() || *d == '.') {
                    out.push(' ');
                }
            }
            _ => out.push(c),
        }
    }
    out
}
