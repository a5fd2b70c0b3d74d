use tracing::debug;

/// Unit suffixes and their byte multipliers, longest suffix first so that
/// `gib` is never mistaken for a bare `b`.
const UNITS: [(&str, u64); 4] = [
    ("gib", 1 << 30),
    ("mib", 1 << 20),
    ("kib", 1 << 10),
    ("b", 1),
];

/// Converts size strings like "690.24 MiB" to bytes.
///
/// Whitespace is ignored and units are case-insensitive. A number without a
/// unit is taken as bytes. The product is truncated toward zero. Anything that
/// does not parse (unknown unit, malformed or negative number) yields 0; size
/// is cosmetic and must never fail a conversion.
pub fn parse_size(size: &str) -> u64 {
    let normalized: String = size
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    let (number, multiplier) = UNITS
        .iter()
        .find_map(|(suffix, multiplier)| {
            normalized
                .strip_suffix(*suffix)
                .map(|number| (number, *multiplier))
        })
        .unwrap_or((normalized.as_str(), 1));

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => {
            let bytes = value * multiplier as f64;
            if bytes >= u64::MAX as f64 {
                debug!("Size string {:?} exceeds u64, saturating", size);
            }
            bytes as u64
        }
        _ => {
            debug!("Unparseable size string {:?}, using 0", size);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_units() {
        assert_eq!(parse_size("1 GiB"), 1_073_741_824);
        assert_eq!(parse_size("2 MiB"), 2 * 1_048_576);
        assert_eq!(parse_size("4 KiB"), 4096);
        assert_eq!(parse_size("512 B"), 512);
    }

    #[test]
    fn test_fractional_size_is_truncated() {
        // 690.24 * 1048576 = 723769098.24
        assert_eq!(parse_size("690.24 MiB"), 723_769_098);
        assert_eq!(parse_size("1.5 KiB"), 1536);
        assert_eq!(parse_size("0.9 B"), 0);
    }

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        assert_eq!(parse_size("1gib"), 1_073_741_824);
        assert_eq!(parse_size("  3 mIb "), 3 * 1_048_576);
        assert_eq!(parse_size("1\t0 KIB"), 10 * 1024);
    }

    #[test]
    fn test_bare_number_is_bytes() {
        assert_eq!(parse_size("2048"), 2048);
    }

    #[test]
    fn test_oversized_value_saturates() {
        assert_eq!(parse_size("1e30 GiB"), u64::MAX);
        assert_eq!(parse_size("1e300"), u64::MAX);
    }

    #[test]
    fn test_unparseable_sizes_are_zero() {
        assert_eq!(parse_size("bogus"), 0);
        assert_eq!(parse_size(""), 0);
        assert_eq!(parse_size("12 GB"), 0);
        assert_eq!(parse_size("1.2.3 MiB"), 0);
        assert_eq!(parse_size("MiB"), 0);
        assert_eq!(parse_size("-5 MiB"), 0);
        assert_eq!(parse_size("inf GiB"), 0);
    }
}
