use std::borrow::Cow;

/// Finds the first `NN%` / `NN.NN%` token in a downloader line.
///
/// Tokens are whitespace separated; colour escapes around a token are
/// ignored. A token that looks numeric but does not parse (`1.2.3%`) is
/// skipped rather than ending the scan.
pub fn extract_percentage(line: &str) -> Option<u8> {
    if !line.contains('%') {
        return None;
    }

    line.split_whitespace().find_map(|token| {
        let token = strip_ansi(token);
        let body = token.strip_suffix('%')?;
        if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return None;
        }
        let value: f32 = body.parse().ok()?;
        Some(value.clamp(0.0, 100.0) as u8)
    })
}

/// Removes CSI escape sequences (`ESC [ ... final-byte`).
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            // parameters and intermediates, then one final byte in @..=~
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_first_percentage_token() {
        let line = "Vid 1920x1080 | 4000 Kbps ━━━━━━━━━━ 120/400 30.00% 12.5MB/41.2MB 2.1MBps 00:00:13";
        assert_eq!(extract_percentage(line), Some(30));

        assert_eq!(extract_percentage("50% then 70%"), Some(50));
    }

    #[test]
    fn fractions_truncate() {
        assert_eq!(extract_percentage("progress 99.99%"), Some(99));
        assert_eq!(extract_percentage("0.5%"), Some(0));
    }

    #[test]
    fn non_numeric_tokens_are_ignored() {
        assert_eq!(extract_percentage("no percent here"), None);
        assert_eq!(extract_percentage("ratio %"), None);
        assert_eq!(extract_percentage("100%done"), None);
        assert_eq!(extract_percentage("(45%)"), None);
        assert_eq!(extract_percentage("-5%"), None);
    }

    #[test]
    fn malformed_number_does_not_stop_the_scan() {
        assert_eq!(extract_percentage("1.2.3% then 42%"), Some(42));
    }

    #[test]
    fn values_over_one_hundred_clamp() {
        assert_eq!(extract_percentage("done 250%"), Some(100));
    }

    #[test]
    fn colour_escapes_are_unwrapped() {
        assert_eq!(extract_percentage("Aud \x1b[32m64.10%\x1b[0m 3MB"), Some(64));
        assert_eq!(strip_ansi("\x1b[1;31mERROR\x1b[0m"), "ERROR");
        assert!(matches!(strip_ansi("plain"), Cow::Borrowed("plain")));
    }
}
