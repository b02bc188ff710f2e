//! Locates semantically named columns by substring match on their headers, since the
//! upstream header text (units, spelling) is not stable.

use crate::tabular::record::RawRecord;
use chrono::{NaiveDate, NaiveDateTime};

const DATE_COLUMN_TOKENS: [&str; 3] = ["date", "data", "day"];
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%m/%d/%Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Columns of `record` whose lowercased header contains any of `candidates`, in column order.
fn matching_cells<'a>(
    record: &'a RawRecord,
    candidates: &'a [&'a str],
) -> impl Iterator<Item = &'a str> + 'a {
    record.fields().filter_map(move |(header, value)| {
        if header.is_empty() {
            return None;
        }
        let header = header.to_lowercase();
        candidates
            .iter()
            .any(|candidate| header.contains(&candidate.to_lowercase()))
            .then_some(value)
    })
}

/// Finds the calendar date of a row.
///
/// Columns whose header mentions "date", "data" or "day" are tried in order. Each value
/// is parsed as an ISO date, `YYYY/MM/DD`, `DD/MM/YYYY`, `MM/DD/YYYY` and finally an
/// ISO date-time (keeping only the date). The first value that parses wins.
pub fn resolve_date(record: &RawRecord) -> Option<NaiveDate> {
    matching_cells(record, &DATE_COLUMN_TOKENS).find_map(parse_date)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|datetime| datetime.date())
        })
}

/// Returns the first finite number found in a column whose header contains any of
/// `candidates` (case-insensitive). Cells that do not parse are skipped.
pub fn resolve_number(record: &RawRecord, candidates: &[&str]) -> Option<f64> {
    matching_cells(record, candidates).find_map(|value| {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs.iter().copied().collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_date_formats() {
        let cases = [
            ("2024-08-05", date(2024, 8, 5)),
            ("2024/08/05", date(2024, 8, 5)),
            ("25/08/2024", date(2024, 8, 25)),
            ("08/25/2024", date(2024, 8, 25)),
            ("2024-08-05T13:45:00", date(2024, 8, 5)),
            ("2024-08-05T13:45", date(2024, 8, 5)),
            ("  2024-08-05 ", date(2024, 8, 5)),
        ];
        for (raw, expected) in cases {
            let rec = record(&[("Date", raw)]);
            assert_eq!(resolve_date(&rec), Some(expected), "input {:?}", raw);
        }
    }

    #[test]
    fn test_day_first_wins_when_ambiguous() {
        let rec = record(&[("Date", "03/04/2024")]);
        assert_eq!(resolve_date(&rec), Some(date(2024, 4, 3)));
    }

    #[test]
    fn test_resolve_date_header_variants() {
        assert_eq!(
            resolve_date(&record(&[("Obs DATE", "2024-01-02")])),
            Some(date(2024, 1, 2))
        );
        assert_eq!(
            resolve_date(&record(&[("Data", "2024-01-03")])),
            Some(date(2024, 1, 3))
        );
        assert_eq!(
            resolve_date(&record(&[("Day", "2024-01-04")])),
            Some(date(2024, 1, 4))
        );
    }

    #[test]
    fn test_resolve_date_tries_next_matching_column() {
        let rec = record(&[
            ("Day", "4"),
            ("Station", "HKO"),
            ("Date", "2024-08-04"),
        ]);
        assert_eq!(resolve_date(&rec), Some(date(2024, 8, 4)));
    }

    #[test]
    fn test_resolve_date_absent() {
        assert_eq!(resolve_date(&record(&[("Time", "2024-08-01")])), None);
        assert_eq!(resolve_date(&record(&[("Date", "yesterday")])), None);
        assert_eq!(resolve_date(&record(&[("Date", "2024-02-30")])), None);
        assert_eq!(resolve_date(&RawRecord::default()), None);
    }

    #[test]
    fn test_resolve_number_matches_substrings_case_insensitively() {
        let rec = record(&[("Date", "2024-08-01"), ("Daily Mean (°C)", " 29.4 ")]);
        assert_eq!(resolve_number(&rec, &["daily mean"]), Some(29.4));
        assert_eq!(resolve_number(&rec, &["MEAN"]), Some(29.4));
        assert_eq!(resolve_number(&rec, &["max"]), None);
    }

    #[test]
    fn test_resolve_number_skips_malformed_cells() {
        let rec = record(&[("Rain flag", "Trace"), ("Rainfall (mm)", "3.2")]);
        assert_eq!(resolve_number(&rec, &["rain"]), Some(3.2));

        let rec = record(&[("Mean", "***"), ("Mean", "NaN"), ("Mean", "inf")]);
        assert_eq!(resolve_number(&rec, &["mean"]), None);
    }

    #[test]
    fn test_resolve_number_candidate_order_does_not_reorder_columns() {
        // Column order decides, not the order of the candidates.
        let rec = record(&[("Max", "33.0"), ("Mean", "30.0")]);
        assert_eq!(resolve_number(&rec, &["mean", "max"]), Some(33.0));
    }

    #[test]
    fn test_empty_header_is_ignored() {
        assert_eq!(resolve_number(&record(&[("", "12.0")]), &[""]), None);
        let rec = record(&[("", "12.0"), ("Max", "31.0")]);
        assert_eq!(resolve_number(&rec, &["max"]), Some(31.0));
    }
}
