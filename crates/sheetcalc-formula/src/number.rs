//! Number parsing and rendering shared by the function library and arithmetic

use lazy_regex::regex;

/// Parse the leading number of a cell's text, ignoring anything after it
///
/// Leading whitespace is skipped, then the longest prefix of the form
/// `[+-]?(Infinity|digits[.digits][e[+-]digits]|.digits[e[+-]digits])` is read.
/// `"12px"` reads as `12`, `"x12"` and `""` read as nothing.
pub fn parse_number_prefix(text: &str) -> Option<f64> {
    let caps = regex!(r"^\s*([+-]?)(Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .captures(text)?;

    let negative = &caps[1] == "-";
    let magnitude = match &caps[2] {
        "Infinity" => f64::INFINITY,
        digits => digits.parse::<f64>().ok()?,
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Render a number the way results are shown in cells
///
/// Integral values print without a fraction, other values use the shortest text that
/// reads back to the same double. Magnitudes of `1e21` and above or below `1e-6` switch
/// to exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let text = format!("{:e}", n);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }

    format!("{}", n)
}
