use std::sync::LazyLock;

use regex::Regex;

static LEADING_INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+").expect("valid integer regex"));

/// Converts `rgba(R, G, B, A)` into a short `#RGB` string, dropping alpha.
///
/// Each channel is written as its own base-16 number, so only values below
/// 16 produce a single digit; larger values widen the output. Integers are
/// read as `f64`, so very long digit strings keep their magnitude but lose
/// precision past 2^53. Components that do not start with an integer come
/// out as `NaN`. There is no error path.
pub fn rgba_to_hex_lossy(rgba: &str) -> String {
    let args = match rgba.find('(') {
        Some(open) => &rgba[open + 1..],
        None => rgba.get(1..).unwrap_or_default(),
    };
    let mut parts = args.split(',');

    let mut hex = String::from("#");
    for _ in 0..3 {
        let channel = parts.next().and_then(leading_int);
        hex.push_str(&radix16(channel));
    }
    hex
}

fn leading_int(part: &str) -> Option<f64> {
    LEADING_INT_RE
        .find(part.trim())
        .and_then(|m| m.as_str().parse().ok())
}

fn radix16(value: Option<f64>) -> String {
    match value {
        None => "NaN".to_string(),
        Some(v) if v.is_infinite() && v < 0.0 => "-Infinity".to_string(),
        Some(v) if v.is_infinite() => "Infinity".to_string(),
        Some(v) if v < 0.0 => format!("-{}", integral_hex(-v)),
        Some(v) => integral_hex(v),
    }
}

// `v` is a finite, non-negative whole number.
fn integral_hex(v: f64) -> String {
    const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;
    if v < TWO_POW_64 {
        return format!("{:x}", v as u64);
    }
    let bits = v.to_bits();
    let mantissa = (bits & ((1u64 << 52) - 1)) | (1u64 << 52);
    let exponent = ((bits >> 52) & 0x7ff) as usize - 1075;
    format!(
        "{:x}{}",
        mantissa << (exponent % 4),
        "0".repeat(exponent / 4)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit_channels() {
        assert_eq!(rgba_to_hex_lossy("rgba(1,1,1,1)"), "#111");
        assert_eq!(rgba_to_hex_lossy("rgba( 10 , 11,  15 , 0.5 )"), "#abf");
    }

    #[test]
    fn wide_channels_overflow_the_short_form() {
        assert_eq!(rgba_to_hex_lossy("rgba(255, 0, 16, 1)"), "#ff010");
    }

    #[test]
    fn garbage_components_surface_as_nan() {
        assert_eq!(rgba_to_hex_lossy("rgba(x, 2)"), "#NaN2NaN");
        assert_eq!(rgba_to_hex_lossy(""), "#NaNNaNNaN");
    }

    #[test]
    fn integers_beyond_64_bits_still_convert() {
        assert_eq!(
            rgba_to_hex_lossy("rgba(99999999999999999999,1,1,1)"),
            "#56bc75e2d6310000011"
        );
        assert_eq!(rgba_to_hex_lossy("rgba(-26, 0, 1, 1)"), "#-1a01");
    }

    #[test]
    fn alpha_is_ignored() {
        assert_eq!(
            rgba_to_hex_lossy("rgba(1, 2, 3, 0)"),
            rgba_to_hex_lossy("rgba(1, 2, 3, 1)")
        );
    }
}
