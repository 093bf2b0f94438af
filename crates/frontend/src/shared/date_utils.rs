/// Date helpers for the pt-BR screens.
use arcus_core::shared::format::format_date_br;

/// Local date as `YYYY-MM-DD`, the format the records store.
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Local date as `DD/MM/YYYY`.
pub fn today_br() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

/// Format "YYYY-MM-DD HH:MM[:SS]" to "DD/MM/YYYY HH:MM[:SS]".
/// Input without a time part is formatted as a plain date.
pub fn format_datetime_br(datetime_str: &str) -> String {
    match datetime_str.split_once(|c: char| c == 'T' || c == ' ') {
        Some((date_part, time_part)) => {
            let time = time_part.split('.').next().unwrap_or(time_part);
            format!("{} {}", format_date_br(date_part), time)
        }
        None => format_date_br(datetime_str),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime_br() {
        assert_eq!(format_datetime_br("2024-06-18 09:15:23"), "18/06/2024 09:15:23");
        assert_eq!(format_datetime_br("2024-06-18T09:15:23.123Z"), "18/06/2024 09:15:23");
        assert_eq!(format_datetime_br("2024-06-18"), "18/06/2024");
    }

    #[test]
    fn test_today_formats_agree() {
        let iso = today_iso();
        assert_eq!(iso.len(), 10);
        assert_eq!(format_date_br(&iso).len(), today_br().len());
    }
}
