use std::fmt::Write;

/// Parses a packed hex string such as `21150235`, ignoring an optional
/// `0x` prefix. Returns `None` for odd lengths or non-hex characters.
pub fn hex_to_bytes(s: &str) -> Option<Vec<u8>> {
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if s.is_empty() || !s.len().is_multiple_of(2) {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| {
            s.get(i..i + 2)
                .and_then(|sub| u8::from_str_radix(sub, 16).ok())
        })
        .collect()
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Space separated form, `21 15 02 35`.
pub fn bytes_to_spaced_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses an integer literal the way shells and D-Bus tools print them:
/// `0x` hex, `0o` octal, `0b` binary, otherwise decimal, with an optional sign.
pub fn parse_int_auto_radix(token: &str) -> Option<i64> {
    let token = token.trim();
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let lower = digits.to_ascii_lowercase();
    let (radix, body) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else {
        (10, lower.as_str())
    };
    let body = body.replace('_', "");
    if body.is_empty() {
        return None;
    }
    let value = i64::from_str_radix(&body, radix).ok()?;
    if negative { value.checked_neg() } else { Some(value) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("21150235"), Some(vec![0x21, 0x15, 0x02, 0x35]));
        assert_eq!(hex_to_bytes("0xFF00"), Some(vec![0xff, 0x00]));
        assert_eq!(hex_to_bytes("211"), None);
        assert_eq!(hex_to_bytes("zz"), None);
        assert_eq!(hex_to_bytes(""), None);
    }

    #[test]
    fn test_bytes_to_hex() {
        assert_eq!(bytes_to_hex(&[0x21, 0x15, 0x02, 0x35]), "21150235");
        assert_eq!(bytes_to_spaced_hex(&[0x21, 0x15, 0x02, 0x35]), "21 15 02 35");
        assert_eq!(bytes_to_spaced_hex(&[]), "");
    }

    #[test]
    fn test_parse_int_auto_radix() {
        assert_eq!(parse_int_auto_radix("53"), Some(53));
        assert_eq!(parse_int_auto_radix("0x35"), Some(0x35));
        assert_eq!(parse_int_auto_radix("0X3F"), Some(0x3f));
        assert_eq!(parse_int_auto_radix("0o17"), Some(15));
        assert_eq!(parse_int_auto_radix("0b101"), Some(5));
        assert_eq!(parse_int_auto_radix("-1"), Some(-1));
        assert_eq!(parse_int_auto_radix("1_000"), Some(1000));
        assert_eq!(parse_int_auto_radix("0x"), None);
        assert_eq!(parse_int_auto_radix("abc"), None);
    }
}
