//! View model for dashboard records
//!
//! A [`RecordView`] is everything a renderer needs to draw one list entry or
//! the detail pane of a selected entry. It is derived from a [`Record`] once
//! and never carries markup.

use serde::Serialize;
use url::Url;

use crate::error::Result;
use crate::record::Record;

/// Directory the recorder writes videos under on the grid nodes
pub const DEFAULT_VIDEO_ROOT: &str = "/home/seluser/videos";

/// Structured projection of a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordView {
    pub session_id: String,
    pub test_name: String,
    pub timestamp: String,
    pub added_to_dashboard_time: i64,
    pub browser: String,
    pub browser_version: String,
    pub platform_logo: String,
    pub proxy_name: String,
    pub test_status: String,
    pub time_zone: String,
    pub build: String,
    pub screen_dimension: String,
    pub retention_date: String,
    /// Video path relative to the dashboard base
    pub video: String,
    /// Selenium log path relative to the dashboard base
    pub selenium_log: String,
    /// Browser driver log path relative to the dashboard base
    pub browser_driver_log: String,
}

impl RecordView {
    pub fn new(record: &Record, video_root: &str) -> Self {
        let build_dir = build_directory(&record.video_folder_path, video_root);

        Self {
            session_id: record.selenium_session_id.clone(),
            test_name: record.test_name.clone(),
            timestamp: record.timestamp.clone(),
            added_to_dashboard_time: record.added_to_dashboard_time,
            browser: record.browser.clone(),
            browser_version: record.browser_version.clone(),
            platform_logo: platform_logo(&record.platform),
            proxy_name: record.proxy_name.clone(),
            test_status: record.test_status.clone(),
            time_zone: record.time_zone.clone(),
            build: record.build.clone(),
            screen_dimension: record.screen_dimension.clone(),
            retention_date: record.retention_date.clone(),
            video: format!("{}{}", build_dir, record.file_name),
            selenium_log: log_path(&build_dir, &record.selenium_log_file_name),
            browser_driver_log: log_path(&build_dir, &record.browser_driver_log_file_name),
        }
    }

    /// Text the list entry shows: test name, date and browser version
    pub fn label(&self) -> String {
        format!("{}{}{}", self.test_name, self.timestamp, self.browser_version)
    }

    /// Uppercase search text: label, browser, platform, build, status,
    /// proxy and time zone, concatenated without delimiters.
    pub fn haystack(&self) -> String {
        let mut haystack = self.label();
        for part in [
            &self.browser,
            &self.platform_logo,
            &self.build,
            &self.test_status,
            &self.proxy_name,
            &self.time_zone,
        ] {
            haystack.push_str(part);
        }
        haystack.to_uppercase()
    }

    pub fn status_icon(&self) -> String {
        icon(&self.test_status)
    }

    pub fn browser_icon(&self) -> String {
        icon(&self.browser)
    }

    pub fn platform_icon(&self) -> String {
        icon(&self.platform_logo)
    }

    pub fn proxy_icon(&self) -> String {
        icon(&self.proxy_name)
    }

    /// Detail pane rows. Screen size, time zone and build only appear
    /// when the record has them.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Test", self.test_name.clone()),
            ("Status", self.test_status.clone()),
            ("Date", self.timestamp.clone()),
            ("Platform", self.platform_logo.clone()),
            ("Browser", format!("{} {}", self.browser, self.browser_version)),
            ("Proxy", self.proxy_name.clone()),
        ];
        if !self.screen_dimension.is_empty() {
            rows.push(("Screen", self.screen_dimension.clone()));
        }
        if !self.time_zone.is_empty() {
            rows.push(("Time Zone", self.time_zone.clone()));
        }
        if !self.build.is_empty() {
            rows.push(("Build", self.build.clone()));
        }
        rows.push(("Retention Date", self.retention_date.clone()));
        rows
    }

    pub fn video_url(&self, base: &Url) -> Result<Url> {
        Ok(base.join(&self.video)?)
    }

    /// `None` when the record has no Selenium log
    pub fn selenium_log_url(&self, base: &Url) -> Result<Option<Url>> {
        optional_url(base, &self.selenium_log)
    }

    /// `None` when the record has no browser driver log
    pub fn browser_driver_log_url(&self, base: &Url) -> Result<Option<Url>> {
        optional_url(base, &self.browser_driver_log)
    }
}

/// Map a platform name onto the logo the dashboard ships
pub fn platform_logo(platform: &str) -> String {
    let lower = platform.to_lowercase();
    if lower.contains("mac") {
        "apple".to_string()
    } else if lower.contains("windows") {
        "windows".to_string()
    } else {
        lower
    }
}

fn icon(name: &str) -> String {
    format!("img/{}.png", name.to_lowercase())
}

/// Per-build subdirectory of the video root, with a trailing slash, or
/// empty when the video sits directly in the root.
fn build_directory(video_folder_path: &str, video_root: &str) -> String {
    let dir = video_folder_path.replacen(video_root, "", 1);
    if dir.trim().is_empty() {
        String::new()
    } else {
        format!("{}/", dir.replacen('/', "", 1))
    }
}

fn log_path(build_dir: &str, file_name: &str) -> String {
    if file_name.is_empty() {
        String::new()
    } else {
        format!("{}{}", build_dir, file_name)
    }
}

fn optional_url(base: &Url, path: &str) -> Result<Option<Url>> {
    if path.is_empty() {
        Ok(None)
    } else {
        Ok(Some(base.join(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            added_to_dashboard_time: 100,
            selenium_session_id: "s-1".into(),
            test_name: "checkout".into(),
            timestamp: "10:00".into(),
            browser: "chrome".into(),
            browser_version: "120".into(),
            platform: "Mac OS X".into(),
            proxy_name: "Zalenium".into(),
            test_status: "SUCCESS".into(),
            video_folder_path: "/home/seluser/videos/nightly".into(),
            file_name: "checkout.mp4".into(),
            selenium_log_file_name: "logs/selenium.log".into(),
            retention_date: "Feb 5".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_platform_logo() {
        assert_eq!(platform_logo("Mac OS X"), "apple");
        assert_eq!(platform_logo("WINDOWS 10"), "windows");
        assert_eq!(platform_logo("LINUX"), "linux");
        assert_eq!(platform_logo(""), "");
    }

    #[test]
    fn test_build_directory_paths() {
        let view = RecordView::new(&record(), DEFAULT_VIDEO_ROOT);
        assert_eq!(view.video, "nightly/checkout.mp4");
        assert_eq!(view.selenium_log, "nightly/logs/selenium.log");
        assert_eq!(view.browser_driver_log, "");
    }

    #[test]
    fn test_video_in_root() {
        let r = Record {
            video_folder_path: "/home/seluser/videos".into(),
            ..record()
        };
        let view = RecordView::new(&r, DEFAULT_VIDEO_ROOT);
        assert_eq!(view.video, "checkout.mp4");
    }

    #[test]
    fn test_custom_video_root() {
        let r = Record {
            video_folder_path: "/data/rec/build-7".into(),
            ..record()
        };
        let view = RecordView::new(&r, "/data/rec");
        assert_eq!(view.video, "build-7/checkout.mp4");
    }

    #[test]
    fn test_haystack_is_uppercase_concatenation() {
        let view = RecordView::new(&record(), DEFAULT_VIDEO_ROOT);
        assert_eq!(view.label(), "checkout10:00120");
        assert_eq!(view.haystack(), "CHECKOUT10:00120CHROMEAPPLESUCCESSZALENIUM");
    }

    #[test]
    fn test_details_skip_empty_sections() {
        let view = RecordView::new(&record(), DEFAULT_VIDEO_ROOT);
        let names: Vec<&str> = view.details().iter().map(|(k, _)| *k).collect();
        assert!(!names.contains(&"Screen"));
        assert!(!names.contains(&"Time Zone"));
        assert!(!names.contains(&"Build"));
        assert_eq!(names.last(), Some(&"Retention Date"));

        let full = RecordView::new(
            &Record {
                screen_dimension: "1920x1080".into(),
                time_zone: "UTC".into(),
                build: "7".into(),
                ..record()
            },
            DEFAULT_VIDEO_ROOT,
        );
        let names: Vec<&str> = full.details().iter().map(|(k, _)| *k).collect();
        assert!(names.contains(&"Screen"));
        assert!(names.contains(&"Time Zone"));
        assert!(names.contains(&"Build"));
    }

    #[test]
    fn test_urls_resolve_against_base() {
        let base = Url::parse("http://grid:4444/dashboard/").unwrap();
        let view = RecordView::new(&record(), DEFAULT_VIDEO_ROOT);
        assert_eq!(
            view.video_url(&base).unwrap().as_str(),
            "http://grid:4444/dashboard/nightly/checkout.mp4"
        );
        assert!(view.selenium_log_url(&base).unwrap().is_some());
        assert!(view.browser_driver_log_url(&base).unwrap().is_none());
    }

    #[test]
    fn test_icons() {
        let view = RecordView::new(&record(), DEFAULT_VIDEO_ROOT);
        assert_eq!(view.status_icon(), "img/success.png");
        assert_eq!(view.platform_icon(), "img/apple.png");
        assert_eq!(view.proxy_icon(), "img/zalenium.png");
        assert_eq!(view.browser_icon(), "img/chrome.png");
    }
}
