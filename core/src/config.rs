//! Client configuration: the base address every transport is bound to, plus
//! headers sent with each request.

/// Base address used when `ITEMS_BASE_URL` is not set.
pub const DEFAULT_BASE_ADDRESS: &str = "https://localhost:5001";

/// Environment variable overriding the base address.
pub const BASE_ADDRESS_VAR: &str = "ITEMS_BASE_URL";

/// Environment variable supplying a `user-agent` default header.
pub const USER_AGENT_VAR: &str = "ITEMS_USER_AGENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_address: String,
    pub default_headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_ADDRESS)
    }
}

impl ClientConfig {
    pub fn new(base_address: &str) -> Self {
        Self {
            base_address: base_address.to_string(),
            default_headers: Vec::new(),
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// Validation is deferred to [`TransportHandle::new`](crate::TransportHandle::new),
    /// so a bad `ITEMS_BASE_URL` is reported as a construction failure there.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_address = lookup(BASE_ADDRESS_VAR).unwrap_or_else(|| DEFAULT_BASE_ADDRESS.to_string());
        let mut config = Self::new(&base_address);
        if let Some(agent) = lookup(USER_AGENT_VAR) {
            config = config.with_header("user-agent", &agent);
        }
        config
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.default_headers.push((name.to_string(), value.to_string()));
        self
    }
}
