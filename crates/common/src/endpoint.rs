//! Dashboard URL handling

use std::fmt;

use url::Url;

use crate::error::Result;

/// Backend maintenance actions exposed under `cleanup`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupAction {
    /// Remove recorded videos and logs, keep nothing
    Cleanup,
    /// Reset the dashboard listing
    Reset,
}

impl CleanupAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleanupAction::Cleanup => "doCleanup",
            CleanupAction::Reset => "doReset",
        }
    }
}

impl fmt::Display for CleanupAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base address of a dashboard plus the query it was opened with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardEndpoint {
    base: Url,
    initial_query: Option<String>,
}

impl DashboardEndpoint {
    /// Parse a dashboard URL such as `http://grid:4444/dashboard/?q=firefox`.
    ///
    /// Query and fragment are dropped from the base and the path gets a
    /// trailing slash, so `information` and `cleanup` resolve inside it.
    pub fn parse(raw: &str) -> Result<Self> {
        let url = Url::parse(raw)?;

        let initial_query = url
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());

        let mut base = url;
        base.set_query(None);
        base.set_fragment(None);
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self {
            base,
            initial_query,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Decoded `q` parameter of the URL, if present and non-empty
    pub fn initial_query(&self) -> Option<&str> {
        self.initial_query.as_deref()
    }

    pub fn information_url(&self, watermark: i64) -> Result<Url> {
        let mut url = self.base.join("information")?;
        url.query_pairs_mut()
            .append_pair("lastDateAddedToDashboard", &watermark.to_string());
        Ok(url)
    }

    pub fn cleanup_url(&self, action: CleanupAction) -> Result<Url> {
        let mut url = self.base.join("cleanup")?;
        url.query_pairs_mut().append_pair("action", action.as_str());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_information_url() {
        let endpoint = DashboardEndpoint::parse("http://grid:4444/dashboard/").unwrap();
        assert_eq!(
            endpoint.information_url(200).unwrap().as_str(),
            "http://grid:4444/dashboard/information?lastDateAddedToDashboard=200"
        );
    }

    #[test]
    fn test_missing_trailing_slash() {
        let endpoint = DashboardEndpoint::parse("http://grid:4444/dashboard").unwrap();
        assert_eq!(endpoint.base().as_str(), "http://grid:4444/dashboard/");
    }

    #[test]
    fn test_query_and_fragment_dropped() {
        let endpoint =
            DashboardEndpoint::parse("http://grid:4444/dashboard/?q=chrome%20linux#top").unwrap();
        assert_eq!(endpoint.base().as_str(), "http://grid:4444/dashboard/");
        assert_eq!(endpoint.initial_query(), Some("chrome linux"));
    }

    #[test]
    fn test_empty_q_is_ignored() {
        let endpoint = DashboardEndpoint::parse("http://grid/dashboard/?q=").unwrap();
        assert_eq!(endpoint.initial_query(), None);
        let endpoint = DashboardEndpoint::parse("http://grid/dashboard/?other=1").unwrap();
        assert_eq!(endpoint.initial_query(), None);
    }

    #[test]
    fn test_cleanup_urls() {
        let endpoint = DashboardEndpoint::parse("http://grid/dashboard/").unwrap();
        assert_eq!(
            endpoint.cleanup_url(CleanupAction::Cleanup).unwrap().as_str(),
            "http://grid/dashboard/cleanup?action=doCleanup"
        );
        assert_eq!(
            endpoint.cleanup_url(CleanupAction::Reset).unwrap().as_str(),
            "http://grid/dashboard/cleanup?action=doReset"
        );
    }

    #[test]
    fn test_invalid_url() {
        assert!(DashboardEndpoint::parse("not a url").is_err());
    }
}
