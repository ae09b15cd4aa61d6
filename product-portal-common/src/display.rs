//! Formatting helpers for values rendered on the product cards

const CURRENCY_PREFIX: &str = "Rs";

/// Format a price as Pakistani rupees with thousands grouping. Whole amounts carry no decimals,
/// fractional amounts keep at most two.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc() as u64;
    let fraction = (cents % 100.0) as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if price < 0.0 && cents > 0.0 { "-" } else { "" };
    match fraction {
        0 => format!("{sign}{CURRENCY_PREFIX} {grouped}"),
        f if f % 10 == 0 => format!("{sign}{CURRENCY_PREFIX} {grouped}.{}", f / 10),
        f => format!("{sign}{CURRENCY_PREFIX} {grouped}.{f:02}"),
    }
}
