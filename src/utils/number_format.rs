//! Number parsing and display helpers for the asset table.
//!
//! Parsing is deliberately permissive: anything that is not a number becomes
//! `NaN` and is displayed as such, never an error.

/// Thousands separator of the default (`en-US`) locale.
const GROUP_SEPARATOR: char = ',';
/// Decimal point of the default (`en-US`) locale.
const DECIMAL_POINT: char = '.';

// Extra digits printed past the rounding position. Enough to tell an exact
// decimal tie from its nearest non-tie neighbour for any value we display.
const GUARD_DIGITS: usize = 30;

/// Parse the longest numeric prefix of `s`, browser `parseFloat` style.
///
/// Leading whitespace is skipped, trailing garbage is ignored
/// (`"12.5abc"` -> `12.5`) and `"Infinity"` is understood. No digits -> `NaN`.
pub fn parse_float(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        i = j;
    }
    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts if at least one digit follows it.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_digits_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

/// Anything the table may be asked to format: wire strings or plain numbers.
pub trait LooseNumber {
    fn to_loose_f64(&self) -> f64;
}

impl LooseNumber for &str {
    fn to_loose_f64(&self) -> f64 {
        parse_float(self)
    }
}

impl LooseNumber for String {
    fn to_loose_f64(&self) -> f64 {
        parse_float(self)
    }
}

impl LooseNumber for &String {
    fn to_loose_f64(&self) -> f64 {
        parse_float(self)
    }
}

macro_rules! impl_loose_number_for_primitive {
    ($($t:ty),*) => {
        $(impl LooseNumber for $t {
            fn to_loose_f64(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

impl_loose_number_for_primitive!(f64, f32, i32, i64, u32, u64, usize);

/// Format `value` with exactly `decimals` fraction digits and `,` grouping.
///
/// `format_currency(1234.5, 2)` -> `"1,234.50"`, `format_currency(0, 0)` -> `"0"`.
/// Unparseable input gives `"NaN"`.
pub fn format_currency(value: impl LooseNumber, decimals: usize) -> String {
    let x = value.to_loose_f64();
    if x.is_nan() {
        return "NaN".to_string();
    }
    let sign = if x.is_sign_negative() { "-" } else { "" };
    if x.is_infinite() {
        return format!("{}∞", sign);
    }

    let fixed = to_fixed_half_up(x.abs(), decimals);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(DECIMAL_POINT);
        out.push_str(frac);
    }
    out
}

/// `abs` with `decimals` fraction digits, ties rounded away from zero.
///
/// Unlike `{:.N}` (ties to even, `2.5` -> `"2"`). Rounding is decided on the
/// exact decimal expansion of the binary value, so `1.005` (stored just below
/// the tie) still gives `"1.00"`.
fn to_fixed_half_up(abs: f64, decimals: usize) -> String {
    let wide = format!("{:.*}", decimals + GUARD_DIGITS, abs);
    let (int_part, frac_part) = wide.split_once('.').unwrap_or((wide.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|&d| d >= b'5');

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 1);
    out.extend(digits[..int_len].iter().map(|&d| d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| d as char));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(c);
    }
    out
}

/// Style bucket of a 24h change value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeClass {
    /// Zero or above.
    Positive,
    /// Below zero, or not a number at all.
    Negative,
}

impl ChangeClass {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            ChangeClass::Positive
        } else {
            ChangeClass::Negative
        }
    }
}

/// `"-1.2345"` -> `"-1.23%"`. Always two fraction digits, no grouping.
pub fn format_change_pct(value: f64) -> String {
    if value.is_nan() {
        return "NaN%".to_string();
    }
    // `-0` prints as `0.00%`; only values below zero carry a sign.
    let sign = if value < 0.0 { "-" } else { "" };
    if value.is_infinite() {
        return format!("{}Infinity%", sign);
    }
    format!("{}{}%", sign, to_fixed_half_up(value.abs(), 2))
}
