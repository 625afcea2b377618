//! Report configuration

use ganttprint_core::{Instant, PageSize};
use serde::{Deserialize, Serialize};

/// Options for one report, usually loaded from a TOML file
///
/// ```toml
/// page-size = "A3"
/// summary-page = true
/// title = "Shutdown Plan"
/// author = "Planning Office"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReportOptions {
    /// Paper size, always landscape
    pub page_size: PageSize,
    /// Append a page with item count, resolved range and render time
    pub summary_page: bool,
    pub title: String,
    pub author: String,
    /// Timestamp printed on the summary page; the current time when unset
    pub generated_at: Option<Instant>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A2,
            summary_page: false,
            title: "Gantt Chart Print".into(),
            author: "ganttprint".into(),
            generated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_gives_defaults() {
        let options: ReportOptions = toml::from_str("").unwrap();
        assert_eq!(options, ReportOptions::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let options: ReportOptions = toml::from_str(
            r#"
            page-size = "A3"
            summary-page = true
            author = "Planning Office"
            generated-at = "2025-01-06T08:00:00Z"
            "#,
        )
        .unwrap();

        assert_eq!(options.page_size, PageSize::A3);
        assert!(options.summary_page);
        assert_eq!(options.author, "Planning Office");
        assert_eq!(options.title, "Gantt Chart Print");
        assert_eq!(
            options.generated_at,
            Some(Utc.with_ymd_and_hms(2025, 1, 6, 8, 0, 0).unwrap())
        );
    }

    #[test]
    fn lowercase_page_size_is_accepted() {
        let options: ReportOptions = toml::from_str(r#"page-size = "a4""#).unwrap();
        assert_eq!(options.page_size, PageSize::A4);
    }

    #[test]
    fn unknown_page_size_is_rejected() {
        assert!(toml::from_str::<ReportOptions>(r#"page-size = "letter""#).is_err());
    }
}
