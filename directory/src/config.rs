//! Directory configuration loaded via OrthoConfig.

use std::ffi::OsString;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::domain::{DEFAULT_IMAGE_BASE_URL, DEFAULT_IMAGE_START, ImageUrlAssigner};

/// Users page requested when no override is configured.
pub const DEFAULT_USERS_URL: &str = "https://dummyjson.com/users?limit=10";

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `users_url` is not an absolute URL.
    #[error("invalid users url `{value}`: {message}")]
    InvalidUsersUrl {
        /// Configured value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
    /// A request timeout of zero seconds was configured.
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
    /// The configuration layers could not be merged.
    #[error("load configuration: {message}")]
    Load {
        /// Loader diagnostic.
        message: String,
    },
}

/// Configuration values controlling where and how the directory loads users.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DIRECTORY")]
pub struct DirectorySettings {
    /// Override for the users page endpoint.
    pub users_url: Option<String>,
    /// Override for the avatar base URL.
    pub image_base_url: Option<String>,
    /// Counter assigned to the first avatar of a page.
    #[ortho_config(default = 3101)]
    pub image_start: u32,
    /// Per-request timeout in seconds; the HTTP client default applies when
    /// unset.
    pub request_timeout_secs: Option<u64>,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            users_url: None,
            image_base_url: None,
            image_start: DEFAULT_IMAGE_START,
            request_timeout_secs: None,
        }
    }
}

impl DirectorySettings {
    /// Load defaults, configuration files and `DIRECTORY_*` variables.
    ///
    /// Command-line parsing belongs to the shell, so only the program name is
    /// passed to the loader.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when the layers cannot be merged.
    pub fn from_environment() -> Result<Self, SettingsError> {
        Self::load_from_iter([OsString::from("directory")]).map_err(|error| {
            SettingsError::Load {
                message: error.to_string(),
            }
        })
    }

    /// Return the configured users endpoint, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidUsersUrl`] when the value does not
    /// parse as an absolute URL.
    pub fn users_url(&self) -> Result<Url, SettingsError> {
        let value = self.users_url.as_deref().unwrap_or(DEFAULT_USERS_URL);
        Url::parse(value).map_err(|error| SettingsError::InvalidUsersUrl {
            value: value.to_owned(),
            message: error.to_string(),
        })
    }

    /// Return the configured avatar base URL, falling back to the default.
    pub fn image_base_url(&self) -> &str {
        self.image_base_url
            .as_deref()
            .unwrap_or(DEFAULT_IMAGE_BASE_URL)
    }

    /// Return the configured first avatar counter.
    pub const fn image_start(&self) -> u32 {
        self.image_start
    }

    /// Return the configured request timeout, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] when the timeout is zero.
    pub fn request_timeout(&self) -> Result<Option<Duration>, SettingsError> {
        match self.request_timeout_secs {
            Some(0) => Err(SettingsError::ZeroTimeout),
            Some(secs) => Ok(Some(Duration::from_secs(secs))),
            None => Ok(None),
        }
    }

    /// Build the image assigner described by these settings.
    #[must_use]
    pub fn image_assigner(&self) -> ImageUrlAssigner {
        ImageUrlAssigner::new(self.image_base_url(), self.image_start())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for directory configuration parsing.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "DIRECTORY_USERS_URL",
        "DIRECTORY_IMAGE_BASE_URL",
        "DIRECTORY_IMAGE_START",
        "DIRECTORY_REQUEST_TIMEOUT_SECS",
    ];

    fn load_from_empty_args() -> DirectorySettings {
        DirectorySettings::from_environment().expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.users_url().expect("default url parses").as_str(),
            DEFAULT_USERS_URL
        );
        assert_eq!(settings.image_base_url(), DEFAULT_IMAGE_BASE_URL);
        assert_eq!(settings.image_start(), DEFAULT_IMAGE_START);
        assert_eq!(settings.request_timeout(), Ok(None));
        assert_eq!(
            settings.image_assigner(),
            ImageUrlAssigner::default(),
            "loaded defaults must match the built-in assigner"
        );
    }

    #[rstest]
    fn partial_overrides_keep_remaining_defaults() {
        let _guard = lock_env([
            ("DIRECTORY_USERS_URL", None::<String>),
            ("DIRECTORY_IMAGE_BASE_URL", None::<String>),
            ("DIRECTORY_IMAGE_START", Some("42".to_owned())),
            ("DIRECTORY_REQUEST_TIMEOUT_SECS", None::<String>),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.image_start(), 42);
        assert_eq!(settings.image_base_url(), DEFAULT_IMAGE_BASE_URL);
        assert!(settings.users_url.is_none());
    }

    #[rstest]
    fn non_numeric_image_start_fails_to_load() {
        let _guard = lock_env([("DIRECTORY_IMAGE_START", Some("soon".to_owned()))]);

        let error = DirectorySettings::from_environment().expect_err("not a number");

        assert!(matches!(error, SettingsError::Load { .. }));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "DIRECTORY_USERS_URL",
                Some("http://127.0.0.1:8080/users?limit=2".to_owned()),
            ),
            (
                "DIRECTORY_IMAGE_BASE_URL",
                Some("https://img.example/".to_owned()),
            ),
            ("DIRECTORY_IMAGE_START", Some("7".to_owned())),
            ("DIRECTORY_REQUEST_TIMEOUT_SECS", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.users_url().expect("override parses").as_str(),
            "http://127.0.0.1:8080/users?limit=2"
        );
        assert_eq!(
            settings.image_assigner().url_for(0),
            "https://img.example/000007.jpg"
        );
        assert_eq!(
            settings.request_timeout(),
            Ok(Some(Duration::from_secs(3)))
        );
    }

    #[rstest]
    fn relative_users_url_is_rejected() {
        let settings = DirectorySettings {
            users_url: Some("users?limit=10".to_owned()),
            ..DirectorySettings::default()
        };

        let error = settings.users_url().expect_err("relative url fails");

        assert!(matches!(
            error,
            SettingsError::InvalidUsersUrl { ref value, .. } if value == "users?limit=10"
        ));
    }

    #[rstest]
    fn zero_timeout_is_rejected() {
        let settings = DirectorySettings {
            request_timeout_secs: Some(0),
            ..DirectorySettings::default()
        };

        assert_eq!(settings.request_timeout(), Err(SettingsError::ZeroTimeout));
    }
}
