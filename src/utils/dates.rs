use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

const JOURS: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

const MOIS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre",
];

/// "2026-09-12T20:30:00" -> "samedi 12 septembre 2026 à 20:30"
/// La date brute est renvoyée telle quelle si elle ne se parse pas.
pub fn format_datetime_fr(iso: &str) -> String {
    let trimmed = iso.trim_end_matches('Z');
    match NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => format!(
            "{} {} {} {} à {:02}:{:02}",
            JOURS[dt.weekday().num_days_from_monday() as usize],
            dt.day(),
            MOIS[dt.month0() as usize],
            dt.year(),
            dt.hour(),
            dt.minute(),
        ),
        Err(_) => iso.to_string(),
    }
}

/// "2026-09-12" (ou un ISO complet) -> "12 septembre 2026"
pub fn format_date_fr(iso: &str) -> String {
    let date_part = iso.split('T').next().unwrap_or(iso);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => format!("{} {} {}", d.day(), MOIS[d.month0() as usize], d.year()),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_datetime_in_french() {
        assert_eq!(
            format_datetime_fr("2026-09-12T20:30:00"),
            "samedi 12 septembre 2026 à 20:30"
        );
    }

    #[test]
    fn date_only_in_french() {
        assert_eq!(format_date_fr("2024-02-10"), "10 février 2024");
        assert_eq!(format_date_fr("2026-03-01T10:00:00"), "1 mars 2026");
    }

    #[test]
    fn unparseable_input_is_returned_verbatim() {
        assert_eq!(format_datetime_fr("bientôt"), "bientôt");
        assert_eq!(format_date_fr(""), "");
    }
}
