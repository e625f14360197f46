// Timestamp formatting, Brazilian Portuguese locale
//
// The card shows the publication time in three forms:
// - absolute long form, "d 'de' MMMM 'às' HH:mm'h'" ("1 de janeiro às 12:00h")
// - relative human form with suffix ("há 5 minutos", "em 2 horas")
// - machine-readable ISO-8601 for the headless render
//
// All three are derived on every render from the immutable `published_at`;
// nothing here mutates or stores the timestamp. Both past and future
// instants are accepted.

use chrono::{DateTime, Datelike, SecondsFormat, Timelike, Utc};

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Absolute long-form label, pt-BR: "1 de janeiro às 12:00h"
pub fn format_published(ts: DateTime<Utc>) -> String {
    format!(
        "{} de {} às {:02}:{:02}h",
        ts.day(),
        MONTHS[ts.month0() as usize],
        ts.hour(),
        ts.minute()
    )
}

/// Relative human label with pt-BR suffix
///
/// Past instants get the "há" prefix, future instants "em". The distance
/// buckets follow the usual date-library conventions: sub-minute collapses
/// to "menos de um minuto", hours and larger get an approximate "cerca de".
pub fn format_relative(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(ts);
    let seconds = delta.num_seconds();
    let distance = distance_label(seconds.unsigned_abs());

    if seconds >= 0 {
        format!("há {}", distance)
    } else {
        format!("em {}", distance)
    }
}

/// Machine-readable ISO-8601 form; round-trips exactly via RFC 3339 parsing
pub fn iso8601(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn distance_label(seconds: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;
    const MONTH: u64 = 30 * DAY;
    const YEAR: u64 = 365 * DAY;

    match seconds {
        0..=44 => "menos de um minuto".to_string(),
        45..=89 => "1 minuto".to_string(),
        s if s < 45 * MINUTE => format!("{} minutos", div_round(s, MINUTE)),
        s if s < 90 * MINUTE => "cerca de 1 hora".to_string(),
        s if s < DAY => format!("cerca de {} horas", div_round(s, HOUR)),
        s if s < 2 * DAY => "1 dia".to_string(),
        s if s < MONTH => format!("{} dias", s / DAY),
        s if s < 2 * MONTH => "cerca de 1 mês".to_string(),
        s if s < YEAR => format!("{} meses", s / MONTH),
        s if s < 2 * YEAR => "cerca de 1 ano".to_string(),
        s => format!("{} anos", s / YEAR),
    }
}

/// Integer division rounded to nearest, for minute/hour bucketing
fn div_round(value: u64, unit: u64) -> u64 {
    (value + unit / 2) / unit
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn absolute_label_matches_locale_pattern() {
        let ts = at("2023-01-01T12:00:00Z");
        assert_eq!(format_published(ts), "1 de janeiro às 12:00h");

        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 0).unwrap();
        assert_eq!(format_published(ts), "15 de março às 09:05h");
    }

    #[test]
    fn iso_round_trips_exactly() {
        let ts = at("2023-01-01T12:00:00Z");
        let iso = iso8601(ts);
        assert_eq!(iso, "2023-01-01T12:00:00Z");
        assert_eq!(at(&iso), ts);
    }

    #[test]
    fn relative_past_uses_ha_prefix() {
        let now = at("2023-01-01T12:00:00Z");

        let cases = [
            ("2023-01-01T11:59:50Z", "há menos de um minuto"),
            ("2023-01-01T11:59:00Z", "há 1 minuto"),
            ("2023-01-01T11:55:00Z", "há 5 minutos"),
            ("2023-01-01T11:00:00Z", "há cerca de 1 hora"),
            ("2023-01-01T07:00:00Z", "há cerca de 5 horas"),
            ("2022-12-31T06:00:00Z", "há 1 dia"),
            ("2022-12-25T12:00:00Z", "há 7 dias"),
            ("2022-11-20T12:00:00Z", "há cerca de 1 mês"),
            ("2022-07-01T12:00:00Z", "há 6 meses"),
            ("2021-10-01T12:00:00Z", "há cerca de 1 ano"),
            ("2019-01-01T12:00:00Z", "há 4 anos"),
        ];
        for (ts, expected) in cases {
            assert_eq!(format_relative(at(ts), now), expected, "for {}", ts);
        }
    }

    #[test]
    fn relative_future_uses_em_prefix() {
        let now = at("2023-01-01T12:00:00Z");
        assert_eq!(
            format_relative(at("2023-01-01T12:10:00Z"), now),
            "em 10 minutos"
        );
        assert_eq!(
            format_relative(at("2023-01-02T18:00:00Z"), now),
            "em 1 dia"
        );
    }

    #[test]
    fn formatting_is_pure() {
        let ts = at("2023-01-01T12:00:00Z");
        let now = at("2023-01-01T13:00:00Z");
        assert_eq!(format_relative(ts, now), format_relative(ts, now));
        assert_eq!(format_published(ts), format_published(ts));
    }
}
