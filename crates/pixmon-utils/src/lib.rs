//! Display helpers

use rust_decimal::Decimal;

/// Group a digit string with pt-BR thousands separators
pub fn format_number<T: ToString>(n: T) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;
    for c in s.chars().rev() {
        if count == 3 && c.is_ascii_digit() {
            result.push('.');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Format an amount as Brazilian currency: "R$ 1.234,56"
pub fn format_brl(amount: Decimal) -> String {
    let negative = amount < Decimal::ZERO;
    let abs = if negative { -amount } else { amount };
    let text = format!("{:.2}", abs);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let grouped = format_number(int_part);
    if negative {
        format!("-R$ {},{}", grouped, frac_part)
    } else {
        format!("R$ {},{}", grouped, frac_part)
    }
}

/// Escape HTML-sensitive characters for safe interpolation into markup
pub fn escape_html(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(15420), "15.420");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_brl() {
        let amount: Decimal = "1234.56".parse().unwrap();
        assert_eq!(format_brl(amount), "R$ 1.234,56");
        assert_eq!(format_brl("0".parse().unwrap()), "R$ 0,00");
        assert_eq!(format_brl("50".parse().unwrap()), "R$ 50,00");
        assert_eq!(format_brl("-800.5".parse().unwrap()), "-R$ 800,50");
        assert_eq!(format_brl("2500000.00".parse().unwrap()), "R$ 2.500.000,00");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("João & Maria"), "João &amp; Maria");
    }
}
