//! Report options from TOML files and command-line flags

use anyhow::{Context, Result};
use ganttprint_core::PageSize;
use ganttprint_render::ReportOptions;
use std::path::Path;

/// Load report options from `path`, or the defaults when no file is given
pub fn load_options(path: Option<&Path>) -> Result<ReportOptions> {
    let Some(path) = path else {
        return Ok(ReportOptions::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
}

/// Flags win over the config file
pub fn apply_overrides(
    mut options: ReportOptions,
    page_size: Option<PageSize>,
    summary_page: bool,
) -> ReportOptions {
    if let Some(page_size) = page_size {
        options.page_size = page_size;
    }
    if summary_page {
        options.summary_page = true;
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_path_gives_defaults() {
        assert_eq!(load_options(None).unwrap(), ReportOptions::default());
    }

    #[test]
    fn options_load_from_toml() {
        let file = config_file("page-size = \"A4\"\ntitle = \"Shutdown Plan\"\n");
        let options = load_options(Some(file.path())).unwrap();

        assert_eq!(options.page_size, PageSize::A4);
        assert_eq!(options.title, "Shutdown Plan");
        assert!(!options.summary_page);
    }

    #[test]
    fn malformed_toml_names_the_file() {
        let file = config_file("page-size = ");
        let err = load_options(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn flags_override_file_values() {
        let options = ReportOptions {
            page_size: PageSize::A4,
            ..ReportOptions::default()
        };

        let options = apply_overrides(options, Some(PageSize::A3), true);
        assert_eq!(options.page_size, PageSize::A3);
        assert!(options.summary_page);
    }

    #[test]
    fn absent_flags_keep_file_values() {
        let options = ReportOptions {
            page_size: PageSize::A4,
            summary_page: true,
            ..ReportOptions::default()
        };

        let options = apply_overrides(options, None, false);
        assert_eq!(options.page_size, PageSize::A4);
        assert!(options.summary_page);
    }
}
