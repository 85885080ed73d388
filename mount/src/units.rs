//! Value parsers shared by the mount option keys.

const KIB: u64 = 1 << 10;
const MIB: u64 = 1 << 20;
const GIB: u64 = 1 << 30;
const TIB: u64 = 1 << 40;
const PIB: u64 = 1 << 50;

/// Parses a human-readable memory size into bytes, using binary multipliers.
///
/// Accepts `<number>[.<fraction>][ ][k|m|g|t|p][i][b]`, case-insensitive,
/// so `1024`, `500k`, `1mb`, `1.5 GiB` are all valid.
pub fn ram_in_bytes(input: &str) -> Option<u64> {
    let split = input
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.')
        .map(|(idx, _)| idx)
        .unwrap_or(input.len());
    let (number, suffix) = input.split_at(split);

    if !number.split('.').all(|part| !part.is_empty()) {
        return None;
    }
    let size: f64 = number.parse().ok()?;

    let mut suffix = suffix.strip_prefix(' ').unwrap_or(suffix).chars().peekable();
    let multiplier = match suffix.peek().map(|c| c.to_ascii_lowercase()) {
        Some('k') => KIB,
        Some('m') => MIB,
        Some('g') => GIB,
        Some('t') => TIB,
        Some('p') => PIB,
        _ => 1,
    };
    if multiplier != 1 {
        suffix.next();
    }
    suffix.next_if(|c| c.eq_ignore_ascii_case(&'i'));
    suffix.next_if(|c| c.eq_ignore_ascii_case(&'b'));
    if suffix.next().is_some() {
        return None;
    }

    let bytes = size * multiplier as f64;
    if !bytes.is_finite() || bytes >= u64::MAX as f64 {
        return None;
    }
    Some(bytes as u64)
}

/// Parses the boolean spellings accepted on the command line.
pub fn parse_bool(input: &str) -> Option<bool> {
    match input {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_in_bytes_accepts_units() {
        assert_eq!(ram_in_bytes("42"), Some(42));
        assert_eq!(ram_in_bytes("42b"), Some(42));
        assert_eq!(ram_in_bytes("500k"), Some(500 * 1024));
        assert_eq!(ram_in_bytes("1mb"), Some(1024 * 1024));
        assert_eq!(ram_in_bytes("1MiB"), Some(1024 * 1024));
        assert_eq!(ram_in_bytes("2 GB"), Some(2 * 1024 * 1024 * 1024));
        assert_eq!(ram_in_bytes("1t"), Some(1 << 40));
        assert_eq!(ram_in_bytes("1p"), Some(1 << 50));
        assert_eq!(ram_in_bytes("1.5m"), Some(1_572_864));
    }

    #[test]
    fn test_ram_in_bytes_rejects_garbage() {
        for bad in ["", "abc", "-1", "1x", "1kk", "1.", ".5", "1.2.3", "1  k", "k", "1kbb"] {
            assert_eq!(ram_in_bytes(bad), None, "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_ram_in_bytes_overflow() {
        assert_eq!(ram_in_bytes("99999999999p"), None);
    }

    #[test]
    fn test_parse_bool() {
        for yes in ["1", "t", "T", "true", "TRUE", "True"] {
            assert_eq!(parse_bool(yes), Some(true));
        }
        for no in ["0", "f", "F", "false", "FALSE", "False"] {
            assert_eq!(parse_bool(no), Some(false));
        }
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("tRuE"), None);
        assert_eq!(parse_bool(""), None);
    }
}
