use std::collections::HashSet;
use std::net::SocketAddr;

use serde::Deserialize;
use mediaguard_core::error::{MediaGuardError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub media: MediaSection,

    /// Static ticket table. Stands in for a real authentication backend.
    #[serde(default)]
    pub identities: Vec<IdentityConfig>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MediaGuardError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.media.validate()?;

        let mut tickets = HashSet::new();
        for id in &self.identities {
            id.validate()?;
            if !tickets.insert(id.ticket.as_str()) {
                return Err(MediaGuardError::BadRequest(format!(
                    "duplicate ticket for identity {}",
                    id.username
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<SocketAddr>().map_err(|_| {
            MediaGuardError::BadRequest(format!(
                "gateway.listen must be a valid SocketAddr: {}",
                self.listen
            ))
        })?;
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaSection {
    /// Mount point of the media tree, e.g. `/media`.
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,

    /// Directory served under `url_prefix`.
    #[serde(default = "default_root")]
    pub root: String,

    /// Outcome for paths no policy claims.
    #[serde(default = "default_allow")]
    pub default_allow: bool,
}

impl Default for MediaSection {
    fn default() -> Self {
        Self {
            url_prefix: default_url_prefix(),
            root: default_root(),
            default_allow: default_allow(),
        }
    }
}

impl MediaSection {
    pub fn validate(&self) -> Result<()> {
        let p = &self.url_prefix;
        if !p.starts_with('/') || p.len() < 2 || p.ends_with('/') {
            return Err(MediaGuardError::BadRequest(
                "media.url_prefix must start with '/', be non-root, and have no trailing '/'".into(),
            ));
        }
        if self.root.trim().is_empty() {
            return Err(MediaGuardError::BadRequest("media.root must not be empty".into()));
        }
        Ok(())
    }
}

fn default_url_prefix() -> String {
    "/media".into()
}
fn default_root() -> String {
    "media".into()
}
fn default_allow() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityConfig {
    pub ticket: String,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl IdentityConfig {
    pub fn validate(&self) -> Result<()> {
        if self.ticket.is_empty() {
            return Err(MediaGuardError::BadRequest("identities[].ticket must not be empty".into()));
        }
        if self.username.is_empty() || self.username.contains('/') {
            return Err(MediaGuardError::BadRequest(format!(
                "identities[].username must be non-empty and contain no '/': {:?}",
                self.username
            )));
        }
        Ok(())
    }
}
