//! Input masks and pt-BR display formatting.
//!
//! All functions are total: they never reject input, they only reshape the
//! digits they find in it.

use crate::domain::clients::PersonKind;

const CNPJ_GROUPS: [(usize, Option<char>); 5] =
    [(2, None), (3, Some('.')), (3, Some('.')), (4, Some('/')), (2, Some('-'))];
const CPF_GROUPS: [(usize, Option<char>); 4] =
    [(3, None), (3, Some('.')), (3, Some('.')), (2, Some('-'))];

fn digits_of(raw: &str) -> impl Iterator<Item = char> + '_ {
    raw.chars().filter(|c| c.is_ascii_digit())
}

/// Progressive mask: a group's separator appears once the group holds at
/// least one digit. Digits past the last group are dropped.
fn mask(raw: &str, groups: &[(usize, Option<char>)]) -> String {
    let mut digits = digits_of(raw);
    let mut out = String::new();
    for &(len, separator) in groups {
        let chunk: String = digits.by_ref().take(len).collect();
        if chunk.is_empty() {
            break;
        }
        if let Some(sep) = separator {
            out.push(sep);
        }
        out.push_str(&chunk);
    }
    out
}

/// `NN.NNN.NNN/NNNN-NN` for PJ, `NNN.NNN.NNN-NN` for PF.
pub fn format_tax_id(raw: &str, kind: PersonKind) -> String {
    match kind {
        PersonKind::PJ => mask(raw, &CNPJ_GROUPS),
        PersonKind::PF => mask(raw, &CPF_GROUPS),
    }
}

/// Picks the mask by digit count: up to 11 digits is a CPF, more is a CNPJ.
pub fn format_document_auto(raw: &str) -> String {
    if digits_of(raw).count() <= PersonKind::PF.digits() {
        format_tax_id(raw, PersonKind::PF)
    } else {
        format_tax_id(raw, PersonKind::PJ)
    }
}

/// Groups an unsigned digit string with `.` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Most significant digits a currency input keeps, centavos included
/// (`9.999.999.999.999,99`). Further keystrokes are ignored.
pub const MAX_CURRENCY_DIGITS: usize = 15;

/// Significant digits of `raw`, leading zeros dropped, capped at
/// [`MAX_CURRENCY_DIGITS`].
fn currency_digits(raw: &str) -> String {
    digits_of(raw)
        .skip_while(|&d| d == '0')
        .take(MAX_CURRENCY_DIGITS)
        .collect()
}

/// "Type cents, see reais": the digits are a count of centavos.
///
/// `"150000"` → `"1.500,00"`, `""` → `"0,00"`.
pub fn format_currency_input(raw: &str) -> String {
    let padded = format!("{:0>3}", currency_digits(raw));
    let (integer, cents) = padded.split_at(padded.len() - 2);
    format!("{},{}", group_thousands(integer), cents)
}

/// Parses a value produced by [`format_currency_input`] back into centavos.
///
/// Reads at most [`MAX_CURRENCY_DIGITS`] significant digits, the same cap the
/// mask applies, so the result always matches what the field displays.
pub fn parse_currency_input(formatted: &str) -> u64 {
    currency_digits(formatted)
        .chars()
        .filter_map(|d| d.to_digit(10))
        .fold(0u64, |acc, d| acc * 10 + u64::from(d))
}

/// Integer with pt-BR thousands separators: `1247` → `1.247`.
pub fn format_thousands(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Whole reais: `45000` → `R$ 45.000`.
pub fn format_brl(value: i64) -> String {
    format!("R$ {}", format_thousands(value))
}

/// Format ISO date string to DD/MM/YYYY.
/// Example: "2024-06-15" or "2024-06-15 09:15" -> "15/06/2024"
pub fn format_date_br(date_str: &str) -> String {
    let date_part = date_str
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tax_id_full() {
        assert_eq!(format_tax_id("12345678000190", PersonKind::PJ), "12.345.678/0001-90");
        assert_eq!(format_tax_id("12345678900", PersonKind::PF), "123.456.789-00");
    }

    #[test]
    fn test_format_tax_id_strips_non_digits() {
        assert_eq!(format_tax_id("12.345.678/0001-90", PersonKind::PJ), "12.345.678/0001-90");
        assert_eq!(format_tax_id("abc123 456-789x00", PersonKind::PF), "123.456.789-00");
    }

    #[test]
    fn test_format_tax_id_partial() {
        assert_eq!(format_tax_id("", PersonKind::PJ), "");
        assert_eq!(format_tax_id("1", PersonKind::PJ), "1");
        assert_eq!(format_tax_id("123", PersonKind::PJ), "12.3");
        assert_eq!(format_tax_id("12345678", PersonKind::PJ), "12.345.678");
        assert_eq!(format_tax_id("123456789", PersonKind::PJ), "12.345.678/9");
        assert_eq!(format_tax_id("1234", PersonKind::PF), "123.4");
        assert_eq!(format_tax_id("1234567890", PersonKind::PF), "123.456.789-0");
    }

    #[test]
    fn test_format_tax_id_drops_extra_digits() {
        assert_eq!(format_tax_id("1234567800019099", PersonKind::PJ), "12.345.678/0001-90");
        assert_eq!(format_tax_id("123456789001", PersonKind::PF), "123.456.789-00");
    }

    #[test]
    fn test_format_document_auto() {
        assert_eq!(format_document_auto("12345678900"), "123.456.789-00");
        assert_eq!(format_document_auto("123456789001"), "12.345.678/9001");
        assert_eq!(format_document_auto("98765432000110"), "98.765.432/0001-10");
    }

    #[test]
    fn test_format_currency_input() {
        assert_eq!(format_currency_input("150000"), "1.500,00");
        assert_eq!(format_currency_input(""), "0,00");
        assert_eq!(format_currency_input("5"), "0,05");
        assert_eq!(format_currency_input("0012"), "0,12");
        assert_eq!(format_currency_input("123"), "1,23");
        assert_eq!(format_currency_input("R$ 4.500,00"), "4.500,00");
        assert_eq!(format_currency_input("123456789012"), "1.234.567.890,12");
    }

    #[test]
    fn test_currency_input_appending_digit_shifts_left() {
        let mut raw = String::new();
        let expected = ["0,01", "0,12", "1,23", "12,34", "123,45", "1.234,56"];
        for (digit, want) in "123456".chars().zip(expected) {
            raw = format_currency_input(&raw);
            raw.push(digit);
            assert_eq!(format_currency_input(&raw), want);
        }
    }

    #[test]
    fn test_currency_input_ignores_digits_past_the_cap() {
        let typed = "123456789012345678901234";
        assert_eq!(format_currency_input(typed), "1.234.567.890.123,45");
        assert_eq!(parse_currency_input(&format_currency_input(typed)), 123_456_789_012_345);
        assert_eq!(parse_currency_input(typed), 123_456_789_012_345);
        // Leading zeros do not count against the cap.
        assert_eq!(format_currency_input("000000123456789012345"), "1.234.567.890.123,45");
    }

    #[test]
    fn test_parse_currency_input() {
        assert_eq!(parse_currency_input("1.500,00"), 150000);
        assert_eq!(parse_currency_input(""), 0);
    }

    #[test]
    fn test_format_thousands_and_brl() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1247), "1.247");
        assert_eq!(format_thousands(1395000), "1.395.000");
        assert_eq!(format_thousands(-45000), "-45.000");
        assert_eq!(format_brl(45000), "R$ 45.000");
    }

    #[test]
    fn test_format_date_br() {
        assert_eq!(format_date_br("2024-06-15"), "15/06/2024");
        assert_eq!(format_date_br("2024-06-18 09:15"), "18/06/2024");
        assert_eq!(format_date_br("invalid"), "invalid");
    }
}
