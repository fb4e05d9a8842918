//! Tracker connection settings.

use crate::config::ConfigError;
use serde::Deserialize;
use std::fmt;
use url::Url;

/// Configuration file contents before validation.
///
/// Every field is optional so that validation can report all missing
/// fields in one error instead of failing on the first.
#[derive(Clone, Default, Deserialize)]
pub(crate) struct RawTrackerConfig {
    pub(crate) jira_url: Option<String>,
    pub(crate) api_token: Option<String>,
    pub(crate) user_email: Option<String>,
    pub(crate) project_key: Option<String>,
}

/// Values supplied outside the configuration file (CLI flags, environment).
///
/// Any field that is set replaces the value read from the file.
#[derive(Clone, Default)]
pub struct ConfigOverrides {
    /// Tracker base URL.
    pub jira_url: Option<String>,
    /// API token used as the Basic auth password.
    pub api_token: Option<String>,
    /// Account email used as the Basic auth username.
    pub user_email: Option<String>,
    /// Key of the project new issues are created in.
    pub project_key: Option<String>,
}

impl ConfigOverrides {
    /// Returns true if every field is supplied, making the file optional.
    ///
    /// Blank values count as unset.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [
            &self.jira_url,
            &self.api_token,
            &self.user_email,
            &self.project_key,
        ]
        .into_iter()
        .all(|value| non_blank(value).is_some())
    }

    /// Merges into file values. A blank override (an exported but empty
    /// environment variable) leaves the file value in place.
    pub(crate) fn apply(&self, raw: RawTrackerConfig) -> RawTrackerConfig {
        RawTrackerConfig {
            jira_url: non_blank(&self.jira_url).or(raw.jira_url),
            api_token: non_blank(&self.api_token).or(raw.api_token),
            user_email: non_blank(&self.user_email).or(raw.user_email),
            project_key: non_blank(&self.project_key).or(raw.project_key),
        }
    }
}

impl fmt::Debug for ConfigOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOverrides")
            .field("jira_url", &self.jira_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("user_email", &self.user_email)
            .field("project_key", &self.project_key)
            .finish()
    }
}

/// Validated settings for talking to the issue tracker.
#[derive(Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    base_url: String,
    api_token: String,
    user_email: String,
    project_key: String,
}

impl TrackerConfig {
    /// Builds a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if a value is empty or the
    /// base URL is not an absolute `http`/`https` URL.
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        user_email: impl Into<String>,
        project_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let raw = RawTrackerConfig {
            jira_url: Some(base_url.into()),
            api_token: Some(api_token.into()),
            user_email: Some(user_email.into()),
            project_key: Some(project_key.into()),
        };
        Self::validate(raw, "<arguments>")
    }

    /// Validates raw values, reporting every missing field at once.
    pub(crate) fn validate(raw: RawTrackerConfig, origin: &str) -> Result<Self, ConfigError> {
        let base_url = non_empty(raw.jira_url);
        let api_token = non_empty(raw.api_token);
        let user_email = non_empty(raw.user_email);
        let project_key = non_empty(raw.project_key);

        let (Some(base_url), Some(api_token), Some(user_email), Some(project_key)) =
            (base_url.clone(), api_token.clone(), user_email.clone(), project_key.clone())
        else {
            let missing: Vec<&str> = [
                ("jira_url", base_url.is_none()),
                ("api_token", api_token.is_none()),
                ("user_email", user_email.is_none()),
                ("project_key", project_key.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, is_missing)| is_missing.then_some(name))
            .collect();

            return Err(ConfigError::ValidationError {
                path: origin.to_string(),
                message: format!("missing required fields: {}", missing.join(", ")),
            });
        };

        let parsed = Url::parse(&base_url).map_err(|e| ConfigError::ValidationError {
            path: origin.to_string(),
            message: format!("jira_url '{base_url}' is not a valid URL: {e}"),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                path: origin.to_string(),
                message: format!("jira_url '{base_url}' must use http or https"),
            });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            user_email,
            project_key,
        })
    }

    /// Returns the tracker base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the API token.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Returns the account email.
    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// Returns the project key.
    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// Returns the issue creation endpoint.
    pub fn issue_endpoint(&self) -> String {
        format!("{}/rest/api/3/issue", self.base_url)
    }
}

impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("user_email", &self.user_email)
            .field("project_key", &self.project_key)
            .finish()
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
