//! Daemon endpoint construction from configured connection settings.

use remora_config::Config;
use url::Url;

use crate::error::{RpcError, RpcResult};

/// Fixed RPC path exposed by the daemon.
const RPC_PATH: &str = "/transmission/rpc";

/// Connection parameters for one daemon endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaemonSettings {
    /// Daemon host, optionally carrying an explicit scheme prefix.
    pub host: String,
    /// Daemon RPC port.
    pub port: u16,
    /// RPC username; empty disables authentication.
    pub username: String,
    /// RPC password, embedded only when a username is configured.
    pub password: String,
}

impl From<&Config> for DaemonSettings {
    fn from(config: &Config) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }
}

impl DaemonSettings {
    /// Build the RPC endpoint URL for these settings.
    ///
    /// The scheme defaults to `http` unless the configured host explicitly
    /// starts with `https://`; any scheme prefix and path component are
    /// stripped from the host, and credentials are embedded only when a
    /// username is present.
    ///
    /// # Errors
    ///
    /// Returns [`RpcError::InvalidEndpoint`] when the host is empty after
    /// stripping or cannot form a valid URL.
    pub fn endpoint(&self) -> RpcResult<Url> {
        let scheme = if self.host.starts_with("https://") {
            "https"
        } else {
            "http"
        };
        let stripped = self
            .host
            .trim_start_matches("http://")
            .trim_start_matches("https://");
        let authority = stripped.split('/').next().unwrap_or_default();
        if authority.is_empty() {
            return Err(RpcError::InvalidEndpoint {
                host: self.host.clone(),
                reason: "host is empty",
            });
        }

        let rendered = format!("{scheme}://{authority}:{port}{RPC_PATH}", port = self.port);
        let mut endpoint = Url::parse(&rendered).map_err(|_| RpcError::InvalidEndpoint {
            host: self.host.clone(),
            reason: "host does not form a valid url",
        })?;

        if !self.username.is_empty() {
            endpoint
                .set_username(&self.username)
                .and_then(|()| endpoint.set_password(Some(&self.password)))
                .map_err(|()| RpcError::InvalidEndpoint {
                    host: self.host.clone(),
                    reason: "cannot embed credentials",
                })?;
        }

        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(host: &str) -> DaemonSettings {
        DaemonSettings {
            host: host.to_string(),
            port: 9091,
            username: String::new(),
            password: String::new(),
        }
    }

    #[test]
    fn plain_host_defaults_to_http() {
        let endpoint = settings("nas.local").endpoint().expect("endpoint");
        assert_eq!(endpoint.as_str(), "http://nas.local:9091/transmission/rpc");
    }

    #[test]
    fn https_prefix_selects_secure_scheme_and_is_stripped() {
        let endpoint = settings("https://seedbox.example").endpoint().expect("endpoint");
        assert_eq!(
            endpoint.as_str(),
            "https://seedbox.example:9091/transmission/rpc"
        );
    }

    #[test]
    fn http_prefix_and_path_component_are_discarded() {
        let endpoint = settings("http://nas.local/web/index.html")
            .endpoint()
            .expect("endpoint");
        assert_eq!(endpoint.as_str(), "http://nas.local:9091/transmission/rpc");
    }

    #[test]
    fn credentials_embed_only_with_username() {
        let mut with_auth = settings("nas.local");
        with_auth.username = "admin".to_string();
        with_auth.password = "secret".to_string();
        let endpoint = with_auth.endpoint().expect("endpoint");
        assert_eq!(endpoint.username(), "admin");
        assert_eq!(endpoint.password(), Some("secret"));

        let anonymous = settings("nas.local").endpoint().expect("endpoint");
        assert_eq!(anonymous.username(), "");
        assert_eq!(anonymous.password(), None);
    }

    #[test]
    fn empty_host_is_rejected() {
        let err = settings("https://").endpoint().expect_err("must fail");
        assert!(matches!(
            err,
            RpcError::InvalidEndpoint {
                reason: "host is empty",
                ..
            }
        ));
    }

    #[test]
    fn settings_derive_from_config_connection_fields() {
        let config = Config {
            host: "https://seedbox.example".to_string(),
            port: 443,
            username: "admin".to_string(),
            password: "secret".to_string(),
            ..Config::default()
        };
        let settings = DaemonSettings::from(&config);
        assert_eq!(settings.host, "https://seedbox.example");
        assert_eq!(settings.port, 443);
        assert_eq!(settings.username, "admin");
    }
}
