/// Group the integer digits of a non-negative decimal string: 1234567 -> 1,234,567
fn group_digits(int_part: &str) -> String {
    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    with_commas.chars().rev().collect()
}

/// Format an amount with thousands separators. Whole amounts render without
/// decimals (matching the dashboard's locale formatting: 15000 -> "15,000"),
/// fractional amounts keep two places (45200.5 -> "45,200.50").
pub fn amount(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let body = if abs.fract() == 0.0 {
        group_digits(&format!("{abs:.0}"))
    } else {
        let cents = format!("{abs:.2}");
        let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));
        format!("{}.{}", group_digits(int_part), dec_part)
    };
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// Format an amount with a currency/unit label suffix: "15,000 ريال",
/// "8,500 USD". The unit is whatever the page displays — Arabic riyal
/// labels and ISO codes both pass through unchanged.
pub fn currency(val: f64, unit: &str) -> String {
    format!("{} {unit}", amount(val))
}

/// Plain numeric text for prefilled form fields: no grouping, no trailing
/// zeros (15000.0 -> "15000", 25.5 -> "25.5").
pub fn editable(val: f64) -> String {
    if val.fract() == 0.0 {
        format!("{val:.0}")
    } else {
        val.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editable_is_plain() {
        assert_eq!(editable(15000.0), "15000");
        assert_eq!(editable(25.5), "25.5");
        assert_eq!(editable(0.0), "0");
    }

    #[test]
    fn test_amount_grouping() {
        assert_eq!(amount(15000.0), "15,000");
        assert_eq!(amount(1234.56), "1,234.56");
        assert_eq!(amount(0.0), "0");
        assert_eq!(amount(1000000.99), "1,000,000.99");
        assert_eq!(amount(45200.5), "45,200.50");
        assert_eq!(amount(-500.0), "-500");
    }

    #[test]
    fn test_currency_units() {
        assert_eq!(currency(15000.0, "ريال"), "15,000 ريال");
        assert_eq!(currency(50000.0, "ر.س"), "50,000 ر.س");
        assert_eq!(currency(8500.0, "USD"), "8,500 USD");
    }
}
