use serde::{Deserialize, Serialize};
use std::{fmt, iter::Sum, ops::Add};
use tracing::debug;

/// Non-negative money amount held as a whole number of cents.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Converts a decimal amount with `round(amount * 100)`. Negative and
    /// non-finite amounts become zero.
    pub fn from_decimal(amount: f64) -> Self {
        if !amount.is_finite() || amount <= 0.0 {
            return Self::ZERO;
        }
        Self {
            cents: (amount * 100.0).round() as u64,
        }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |total, amount| total + amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_locale_money(*self))
    }
}

/// Parses a comma-decimal amount such as `"9,99"` or `"1.234,56"`.
///
/// Whitespace is dropped, every `.` is read as a thousands separator and `,`
/// as the decimal separator. The longest leading numeric prefix is used, so
/// `"12 ₽"` reads as twelve. Anything without a usable prefix, or negative,
/// reads as zero.
pub fn parse_locale_money(text: &str) -> Money {
    let normalized: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match leading_decimal(&normalized).and_then(|s| s.parse::<f64>().ok()) {
        Some(amount) if amount >= 0.0 => Money::from_decimal(amount),
        Some(amount) => {
            debug!("negative money amount {amount} in {text:?}, reading as zero");
            Money::ZERO
        }
        None => {
            if !text.trim().is_empty() {
                debug!("unparseable money amount {text:?}, reading as zero");
            }
            Money::ZERO
        }
    }
}

fn leading_decimal(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    (digits > 0).then(|| &s[..end])
}

/// Renders exactly two fractional digits with `,` as the separator and no
/// thousands grouping.
pub fn format_locale_money(amount: Money) -> String {
    format!("{},{:02}", amount.cents / 100, amount.cents % 100)
}

pub fn multiply_money(unit_price: Money, quantity: u32) -> Money {
    Money::from_cents(unit_price.cents.saturating_mul(u64::from(quantity)))
}

pub fn sum_money<I>(amounts: I) -> Money
where
    I: IntoIterator<Item = Money>,
{
    amounts.into_iter().sum()
}

/// Splits rendered text like `"29,97 руб."` into its amount and label.
/// Returns `None` unless there is at least one space-separated label part.
pub fn split_amount_label(text: &str) -> Option<(Money, String)> {
    let mut parts = text.trim().split(' ');
    let amount = parts.next()?;
    let label = parts.collect::<Vec<_>>().join(" ");

    if label.is_empty() {
        return None;
    }

    Some((parse_locale_money(amount), label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grouped_and_plain_amounts() {
        assert_eq!(parse_locale_money("9,99"), Money::from_cents(999));
        assert_eq!(parse_locale_money("1.234,56"), Money::from_cents(123_456));
        assert_eq!(parse_locale_money(" 1 234,5 "), Money::from_cents(123_450));
        assert_eq!(parse_locale_money("42"), Money::from_cents(4200));
        assert_eq!(parse_locale_money(",5"), Money::from_cents(50));
    }

    #[test]
    fn malformed_amounts_read_as_zero() {
        assert_eq!(parse_locale_money(""), Money::ZERO);
        assert_eq!(parse_locale_money("abc"), Money::ZERO);
        assert_eq!(parse_locale_money(","), Money::ZERO);
        assert_eq!(parse_locale_money("-5,00"), Money::ZERO);
    }

    #[test]
    fn uses_leading_numeric_prefix() {
        assert_eq!(parse_locale_money("12₽"), Money::from_cents(1200));
        assert_eq!(parse_locale_money("3,5abc"), Money::from_cents(350));
    }

    #[test]
    fn formats_without_grouping() {
        assert_eq!(format_locale_money(Money::from_cents(123_456)), "1234,56");
        assert_eq!(format_locale_money(Money::from_cents(5)), "0,05");
        assert_eq!(format_locale_money(Money::ZERO), "0,00");
    }

    #[test]
    fn format_then_parse_is_identity_on_cents() {
        for cents in [0, 1, 10, 99, 100, 999, 123_456, 100_000_001] {
            let money = Money::from_cents(cents);
            assert_eq!(parse_locale_money(&format_locale_money(money)), money);
        }
    }

    #[test]
    fn multiply_matches_cent_rounding() {
        for price in [0.1, 0.29, 9.99, 19.995, 1234.56, 0.07] {
            for quantity in 1..=99u32 {
                let expected = ((price * 100.0_f64).round() * quantity as f64).round() / 100.0;
                let product = multiply_money(Money::from_decimal(price), quantity);
                assert_eq!(product.to_decimal(), expected, "{price} x {quantity}");
            }
        }
    }

    #[test]
    fn sum_is_cent_exact() {
        let a = multiply_money(parse_locale_money("0,10"), 3);
        let b = multiply_money(parse_locale_money("0,20"), 1);
        assert_eq!(sum_money([a, b]), Money::from_cents(50));
        assert_eq!(sum_money([a, b]), a + b);
        assert_eq!(sum_money(Vec::new()), Money::ZERO);
    }

    #[test]
    fn splits_rendered_subtotal() {
        assert_eq!(
            split_amount_label("29,97 руб."),
            Some((Money::from_cents(2997), "руб.".to_string()))
        );
        assert_eq!(
            split_amount_label(" 1.234,56 US dollars "),
            Some((Money::from_cents(123_456), "US dollars".to_string()))
        );
        assert_eq!(split_amount_label("29,97"), None);
        assert_eq!(split_amount_label(""), None);
    }
}
