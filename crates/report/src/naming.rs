//! Timestamps and download file names.

use chrono::{DateTime, SecondsFormat, Utc};

use deepauth_core::Modality;

/// ISO-8601 in UTC with millisecond precision, e.g. `2026-10-19T08:15:30.123Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `{image|text}-analysis-<timestamp>.json`, with `:` and `.` in the
/// timestamp replaced by `-` so the name is safe on every filesystem.
pub fn report_file_name(modality: Modality, at: DateTime<Utc>) -> String {
    let stamp = iso_timestamp(at).replace([':', '.'], "-");
    format!("{}-analysis-{stamp}.json", modality.as_str())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use regex::Regex;

    use super::*;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap()
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn timestamp_has_millisecond_precision() {
        assert_eq!(iso_timestamp(fixed_time()), "2026-10-19T08:15:30.123Z");
    }

    #[test]
    fn file_name_replaces_colons_and_dots() {
        assert_eq!(
            report_file_name(Modality::Text, fixed_time()),
            "text-analysis-2026-10-19T08-15-30-123Z.json"
        );
        assert_eq!(
            report_file_name(Modality::Image, fixed_time()),
            "image-analysis-2026-10-19T08-15-30-123Z.json"
        );
    }

    #[test]
    fn current_file_name_matches_download_pattern() {
        let pattern = Regex::new(r"^text-analysis-\d{4}-\d{2}-\d{2}T\d{2}-\d{2}-\d{2}-\d{3}Z\.json$")
            .unwrap();
        let name = report_file_name(Modality::Text, Utc::now());
        assert!(pattern.is_match(&name), "{name}");
        assert_eq!(name.matches('.').count(), 1);
        assert!(!name.contains(':'));
    }
}
