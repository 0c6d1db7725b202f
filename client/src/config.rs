//! Supabase connection settings baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so the project URL and the
//! public anon key are captured with `option_env!` when the crate is
//! compiled. A missing or malformed value disables auth instead of failing
//! the whole page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Build-time variable holding the Supabase project URL.
pub const URL_VAR: &str = "SUPABASE_URL";
/// Build-time variable holding the Supabase public anon key.
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not set")]
    Missing { var: &'static str },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Validated Supabase project settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    url: String,
    anon_key: String,
}

impl SupabaseConfig {
    /// Validate and normalize a project URL and anon key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for blank values and
    /// [`ConfigError::InvalidUrl`] when the URL lacks an `http(s)://` scheme.
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        let anon_key = anon_key.trim();
        if url.is_empty() {
            return Err(ConfigError::Missing { var: URL_VAR });
        }
        if anon_key.is_empty() {
            return Err(ConfigError::Missing { var: ANON_KEY_VAR });
        }
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl { var: URL_VAR, value: url.to_owned() });
        }
        Ok(Self { url: url.trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned() })
    }

    /// Read the settings captured from the build environment.
    ///
    /// # Errors
    ///
    /// See [`SupabaseConfig::new`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(
            option_env!("SUPABASE_URL").unwrap_or_default(),
            option_env!("SUPABASE_ANON_KEY").unwrap_or_default(),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Project reference: the first label of the URL host
    /// (`abcd` for `https://abcd.supabase.co`).
    pub fn project_ref(&self) -> &str {
        let host = self.url.split_once("://").map_or(self.url.as_str(), |(_, rest)| rest);
        let host = host.split(['/', ':']).next().unwrap_or(host);
        host.split('.').next().unwrap_or(host)
    }

    /// `localStorage` key the session is persisted under.
    pub fn storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }

    pub(crate) fn auth_endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.url)
    }
}
