//! Low-level tokenization for NDR lines and HSN label strings.
//!
//! Names come in two spellings: a bare token (maximal run of bytes that
//! are not whitespace, `*` or `?`) or a brace-quoted token where `\`
//! escapes the next character. Brace-quoted names are kept verbatim,
//! braces and escape backslashes included; everything downstream
//! (duplicate detection, name tables) works on that raw spelling.

/// Whitespace classes recognized by the format: space, tab, CR, LF.
pub fn is_space_byte(b: u8) -> bool {
    b == b' ' || b == 0x9 || b == 0xa || b == 0xd
}

/// Advance `pos` past whitespace. Never crosses the end of `line`.
pub fn skip_space(line: &str, pos: &mut usize) {
    let bytes = line.as_bytes();
    while let Some(&b) = bytes.get(*pos) {
        if !is_space_byte(b) {
            break;
        }
        *pos += 1;
    }
}

/// Advance `pos` past one non-whitespace token.
pub fn skip_token(line: &str, pos: &mut usize) {
    let bytes = line.as_bytes();
    while let Some(&b) = bytes.get(*pos) {
        if is_space_byte(b) {
            break;
        }
        *pos += 1;
    }
}

/// Extract one name starting at `pos`, returning it as a slice of `line`.
///
/// A leading `{` switches to brace-quoted mode: bytes are consumed up to
/// and including the first unescaped `}`. Otherwise the name is the
/// maximal bare token. An empty slice is a legal result (e.g. at end of
/// line).
pub fn take_name<'a>(line: &'a str, pos: &mut usize) -> &'a str {
    let bytes = line.as_bytes();
    let start = *pos;
    if bytes.get(*pos) == Some(&b'{') {
        // Two-state escape automaton: a backslash shields exactly one
        // following byte from terminating the name.
        let mut escaped = false;
        while let Some(&b) = bytes.get(*pos) {
            if b == 0xa || b == 0xd {
                break;
            }
            *pos += 1;
            if escaped {
                escaped = false;
            } else if b == b'}' {
                break;
            } else if b == b'\\' {
                escaped = true;
            }
        }
    } else {
        while let Some(&b) = bytes.get(*pos) {
            if is_space_byte(b) || b == b'*' || b == b'?' {
                break;
            }
            *pos += 1;
        }
    }
    &line[start..*pos]
}

/// `atoi`-style integer parse: optional leading whitespace and sign,
/// then a run of decimal digits; anything else yields 0.
pub fn parse_int(text: &str) -> i64 {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() && is_space_byte(bytes[i]) {
        i += 1;
    }
    let mut negative = false;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        negative = bytes[i] == b'-';
        i += 1;
    }
    let mut value: i64 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        value = value
            .saturating_mul(10)
            .saturating_add((bytes[i] - b'0') as i64);
        i += 1;
    }
    if negative { -value } else { value }
}

/// The weight on an `e` line is the second-to-last whitespace-delimited
/// token (the last one is an anchor), found by scanning backward from
/// the end of the line.
pub fn trailing_weight(line: &str) -> i64 {
    let bytes = line.as_bytes();
    if bytes.is_empty() {
        return 0;
    }
    let mut i = bytes.len() - 1;
    while i > 0 && is_space_byte(bytes[i]) {
        i -= 1;
    }
    while i > 0 && !is_space_byte(bytes[i]) {
        i -= 1;
    }
    while i > 0 && is_space_byte(bytes[i]) {
        i -= 1;
    }
    while i > 0 && !is_space_byte(bytes[i]) {
        i -= 1;
    }
    parse_int(&line[i + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_at(line: &str, start: usize) -> (String, usize) {
        let mut pos = start;
        let name = take_name(line, &mut pos).to_string();
        (name, pos)
    }

    #[test]
    fn bare_name_stops_at_delimiters() {
        assert_eq!(name_at("p1 t1", 0), ("p1".to_string(), 2));
        assert_eq!(name_at("p1*2", 0), ("p1".to_string(), 2));
        assert_eq!(name_at("p1?-1", 0), ("p1".to_string(), 2));
        assert_eq!(name_at("p1\tx", 0), ("p1".to_string(), 2));
    }

    #[test]
    fn braced_name_is_kept_verbatim() {
        let (name, pos) = name_at("{a b c} rest", 0);
        assert_eq!(name, "{a b c}");
        assert_eq!(pos, 7);
    }

    #[test]
    fn braced_name_honours_escapes() {
        let (name, _) = name_at(r"{a\}b} x", 0);
        assert_eq!(name, r"{a\}b}");
        let (name, _) = name_at(r"{a\\} x", 0);
        assert_eq!(name, r"{a\\}");
    }

    #[test]
    fn empty_name_at_end_of_line() {
        assert_eq!(name_at("", 0), (String::new(), 0));
    }

    #[test]
    fn atoi_semantics() {
        assert_eq!(parse_int("42"), 42);
        assert_eq!(parse_int("  -7 junk"), -7);
        assert_eq!(parse_int("+3"), 3);
        assert_eq!(parse_int("x12"), 0);
        assert_eq!(parse_int(""), 0);
    }

    #[test]
    fn weight_is_second_to_last_token() {
        assert_eq!(trailing_weight("e p1 t1 3 n"), 3);
        assert_eq!(trailing_weight("e p1 45 90 t1 -2 n"), -2);
        assert_eq!(trailing_weight("e p1 t1 0 n"), 0);
    }

    #[test]
    fn skip_helpers() {
        let line = "  ab  cd";
        let mut pos = 0;
        skip_space(line, &mut pos);
        assert_eq!(pos, 2);
        skip_token(line, &mut pos);
        assert_eq!(pos, 4);
        skip_space(line, &mut pos);
        skip_token(line, &mut pos);
        assert_eq!(pos, line.len());
    }
}
