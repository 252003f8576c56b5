//! Colombian peso display formatting.

use num_format::{Locale, ToFormattedString};

/// Format an amount as whole Colombian pesos: `$` symbol, `.`-separated
/// thousands groups, no decimals — `$ 1.234.567`.
///
/// Rounds half away from zero to the nearest peso; negative amounts keep a
/// leading `-`. The function only controls display rounding, so fractional
/// and negative input is accepted as-is. Non-finite input renders as zero.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$ 0".to_string();
    }
    let pesos = amount.round() as i64;
    let grouped = pesos.unsigned_abs().to_formatted_string(&Locale::es_CO);
    if pesos < 0 {
        format!("-$ {grouped}")
    } else {
        format!("$ {grouped}")
    }
}
