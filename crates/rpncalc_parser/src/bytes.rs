const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Render raw bytes as a quoted byte literal, e.g. `b"1 2"` becomes `b'1 2'`.
///
/// Single quotes are used unless the bytes contain `'` but no `"`. Backslash,
/// tab, newline, carriage return and the active quote are escaped; anything
/// outside printable ASCII becomes `\xhh`. A literal space stays a space, so
/// it still separates tokens after rendering.
pub fn render_bytes(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };

    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote as char);
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b if b == quote => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(byte as char),
            _ => {
                out.push_str("\\x");
                out.push(HEX_DIGITS[usize::from(byte >> 4)] as char);
                out.push(HEX_DIGITS[usize::from(byte & 0x0f)] as char);
            }
        }
    }
    out.push(quote as char);
    out
}
