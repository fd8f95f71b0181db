/// Human readable file size.
///
/// Picks the first unit, from bytes up to tebibytes, under which the magnitude is at most
/// 512, so sizes switch units early: 600 bytes render as `0.6 KiB`. Values at 10 and above,
/// and values within 0.1 of an integer, are formatted without decimals (truncated, not
/// rounded); everything else gets one decimal place.
/// ```
/// use s3_uploader::humanize::humanize_size;
/// assert_eq!(humanize_size(1536), "1.5 KiB");
/// ```
pub fn humanize_size(size: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = size as f64;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if value > 512.0 {
            value /= 1024.0;
            unit = next;
        } else {
            break;
        }
    }
    if value >= 10.0 || value.fract() < 0.1 {
        format!("{} {}", value as u64, unit)
    } else {
        format!("{value:.1} {unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(humanize_size(0), "0 B");
    }

    #[test]
    fn test_bytes() {
        assert_eq!(humanize_size(42), "42 B");
        assert_eq!(humanize_size(512), "512 B");
    }

    #[test]
    fn test_early_unit_switch() {
        // the 512 threshold switches units before the next power of 1024
        assert_eq!(humanize_size(600), "0.6 KiB");
    }

    #[test]
    fn test_one_decimal() {
        assert_eq!(humanize_size(1536), "1.5 KiB");
    }

    #[test]
    fn test_no_decimals_at_ten_and_above() {
        assert_eq!(humanize_size(10 * 1024 * 1024), "10 MiB");
    }

    #[test]
    fn test_near_integer_truncates() {
        // 2.05 GiB is within 0.1 of an integer and renders truncated
        let size = 2 * 1024 * 1024 * 1024 + 50 * 1024 * 1024;
        assert_eq!(humanize_size(size), "2 GiB");
    }

    #[test]
    fn test_tebibytes() {
        assert_eq!(humanize_size(1024_u64.pow(4)), "1 TiB");
    }
}
