use std::env;
use std::net::SocketAddr;

use crate::error::{DashboardError, Result};
use crate::geo::GEOJSON_URL;

pub(crate) const DEFAULT_ADDR: &str = "0.0.0.0:4000";
pub(crate) const ADDR_VAR: &str = "COVID_HUB_ADDR";
pub(crate) const GEOJSON_URL_VAR: &str = "COVID_HUB_GEOJSON_URL";

#[derive(Clone, Debug)]
pub(crate) struct Config {
    pub(crate) addr: SocketAddr,
    pub(crate) geojson_url: String,
}

impl Config {
    pub(crate) fn from_env() -> Result<Config> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for missing keys.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| DashboardError::Config(format!("{ADDR_VAR}={raw_addr}: {e}")))?;

        let geojson_url = lookup(GEOJSON_URL_VAR).unwrap_or_else(|| GEOJSON_URL.to_string());
        if geojson_url.parse::<axum::http::Uri>().is_err() {
            return Err(DashboardError::Config(format!("{GEOJSON_URL_VAR}={geojson_url} is not a url")));
        }

        Ok(Config { addr, geojson_url })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.addr.port(), 4000);
        assert_eq!(config.geojson_url, GEOJSON_URL);
    }

    #[test]
    fn overrides_from_lookup() {
        let vars = HashMap::from([
            (ADDR_VAR, "127.0.0.1:8080"),
            (GEOJSON_URL_VAR, "http://localhost:9000/world.geojson"),
        ]);
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.geojson_url, "http://localhost:9000/world.geojson");
    }

    #[test]
    fn rejects_bad_address() {
        let err = Config::from_lookup(|key| (key == ADDR_VAR).then(|| "not-an-addr".to_string()))
            .unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }
}
