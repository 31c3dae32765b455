//! Size parsing, slider bounds and clamping.
//!
//! Free-typed size text is parsed with integer-prefix semantics: leading
//! whitespace is skipped, an optional sign is accepted and digits are read
//! until the first non-digit (`"42px"` parses as 42, `"px42"` does not parse).

/// Fallback lower bound when the slider carries no usable `min` attribute.
pub const FALLBACK_MIN: i64 = 1;
/// Fallback upper bound when the slider carries no usable `max` attribute.
pub const FALLBACK_MAX: i64 = 10_000;
/// Fallback step when the slider carries no usable `step` attribute.
pub const FALLBACK_STEP: i64 = 1;

/// Parse the leading integer of `raw`, or `None` if there is none.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long digit runs.
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse `raw`, treating a missing, unparseable or zero value as `fallback`.
pub fn parse_or(raw: Option<&str>, fallback: i64) -> i64 {
    match raw.and_then(parse_int) {
        Some(0) | None => fallback,
        Some(v) => v,
    }
}

/// Resolved numeric bounds of the size slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl SizeBounds {
    /// Resolve bounds from the slider's raw attribute strings.
    pub fn from_attributes(min: Option<&str>, max: Option<&str>, step: Option<&str>) -> Self {
        Self {
            min: parse_or(min, FALLBACK_MIN),
            max: parse_or(max, FALLBACK_MAX),
            step: parse_or(step, FALLBACK_STEP),
        }
    }

    /// Round `n` half up and constrain it into `[min, max]`.
    ///
    /// Non-finite input resolves to `fallback` before clamping. The lower
    /// bound is applied first, so inverted bounds resolve to `max`.
    pub fn clamp(&self, n: f64, fallback: i64) -> i64 {
        let mut v = if n.is_finite() {
            round_half_up(n)
        } else {
            fallback
        };
        if v < self.min {
            v = self.min;
        }
        if v > self.max {
            v = self.max;
        }
        v
    }

    pub fn contains(&self, v: i64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Whether `v` is reachable from `min` in whole slider steps.
    pub fn is_step_aligned(&self, v: i64) -> bool {
        v.wrapping_sub(self.min).wrapping_rem(self.step) == 0
    }

    /// Whether the slider may be snapped to a typed value.
    pub fn accepts(&self, v: i64) -> bool {
        self.contains(v) && self.is_step_aligned(v)
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min: FALLBACK_MIN,
            max: FALLBACK_MAX,
            step: FALLBACK_STEP,
        }
    }
}

fn round_half_up(n: f64) -> i64 {
    // `as` saturates at the i64 range.
    (n + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_reads_leading_digits() {
        assert_eq!(parse_int("42"), Some(42));
        assert_eq!(parse_int("  42  "), Some(42));
        assert_eq!(parse_int("42px"), Some(42));
        assert_eq!(parse_int("3.9"), Some(3));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+7"), Some(7));
    }

    #[test]
    fn parse_int_rejects_non_numeric() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("px42"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("+-3"), None);
    }

    #[test]
    fn parse_int_saturates_long_runs() {
        assert_eq!(parse_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn parse_or_treats_zero_as_unset() {
        assert_eq!(parse_or(Some("0"), 5), 5);
        assert_eq!(parse_or(Some("junk"), 5), 5);
        assert_eq!(parse_or(None, 5), 5);
        assert_eq!(parse_or(Some("12"), 5), 12);
    }

    #[test]
    fn bounds_fall_back_per_attribute() {
        let b = SizeBounds::from_attributes(Some("32"), None, Some("x"));
        assert_eq!(b, SizeBounds { min: 32, max: 10_000, step: 1 });
    }

    #[test]
    fn clamp_rounds_half_up() {
        let b = SizeBounds::default();
        assert_eq!(b.clamp(2.5, 128), 3);
        assert_eq!(b.clamp(2.49, 128), 2);

        let wide = SizeBounds { min: -10, max: 10, step: 1 };
        assert_eq!(wide.clamp(-2.5, 0), -2);
    }

    #[test]
    fn clamp_non_finite_uses_fallback() {
        let b = SizeBounds { min: 32, max: 512, step: 8 };
        assert_eq!(b.clamp(f64::NAN, 128), 128);
        assert_eq!(b.clamp(f64::INFINITY, 128), 128);
        assert_eq!(b.clamp(f64::NAN, 4), 32);
    }

    #[test]
    fn clamp_stays_in_bounds_for_all_integers() {
        let b = SizeBounds { min: 32, max: 512, step: 8 };
        for n in -2_000..2_000 {
            let v = b.clamp(n as f64, 128);
            assert!(b.contains(v), "{} clamped to {}", n, v);
            assert_eq!(b.clamp(v as f64, 128), v);
        }
        assert_eq!(b.clamp(i64::MIN as f64, 128), 32);
        assert_eq!(b.clamp(i64::MAX as f64, 128), 512);
    }

    #[test]
    fn inverted_bounds_resolve_to_max() {
        let b = SizeBounds { min: 100, max: 50, step: 1 };
        assert_eq!(b.clamp(10.0, 1), 50);
    }

    #[test]
    fn step_alignment_counts_from_min() {
        let b = SizeBounds { min: 32, max: 512, step: 8 };
        assert!(b.accepts(32));
        assert!(b.accepts(504));
        assert!(!b.accepts(500));
        assert!(!b.accepts(520));
        assert!(!b.accepts(24));

        let neg = SizeBounds { min: 32, max: 512, step: -8 };
        assert!(neg.is_step_aligned(40));
    }
}
