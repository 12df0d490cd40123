//! Host configuration.
//!
//! Leptos build/runtime settings come from the `[[workspace.metadata.leptos]]`
//! section (or the `LEPTOS_*` variables cargo-leptos exports). `PORT`, when
//! set, overrides the listen address with `0.0.0.0:$PORT`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use leptos::prelude::{LeptosOptions, get_configuration};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub leptos_options: LeptosOptions,
}

impl ServerConfig {
    /// Load Leptos options and apply the `PORT` override.
    ///
    /// # Errors
    ///
    /// Returns an error if the Leptos configuration cannot be loaded or
    /// `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let port = std::env::var("PORT").ok();
        let addr = resolve_addr(leptos_options.site_addr, port.as_deref())?;
        Ok(Self { addr, leptos_options })
    }

    /// Directory holding the compiled site (`pkg/`, styles, images).
    pub fn site_root(&self) -> PathBuf {
        PathBuf::from(self.leptos_options.site_root.as_ref())
    }
}

/// Listen address: `0.0.0.0:<port>` when a port override is given, else the
/// configured site address.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPort`] when `port` is not a `u16`.
pub fn resolve_addr(site_addr: SocketAddr, port: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let Some(raw) = port else {
        return Ok(site_addr);
    };
    let port = raw.trim().parse::<u16>().map_err(|source| ConfigError::InvalidPort {
        value: raw.to_owned(),
        source,
    })?;
    Ok(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
}
