//! printf-style number formatting used by the writer

/// `%12.8f`: fixed point, eight decimals, right aligned in twelve columns.
pub fn format_fixed(value: f64) -> String {
    if value.is_finite() {
        format!("{:12.8}", value)
    } else {
        format!("{:>12}", non_finite(value))
    }
}

/// `%.7g`: seven significant digits, trailing zeros removed, scientific
/// notation once the decimal exponent leaves `[-4, 7)`.
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 7;

    if !value.is_finite() {
        return non_finite(value).to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to PRECISION digits can bump the exponent (9999999.5 -> 1e7),
    // so take the exponent from the rounded scientific form.
    let scientific = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (PRECISION - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "nan"
    } else if value > 0.0 {
        "inf"
    } else {
        "-inf"
    }
}
