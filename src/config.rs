use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "https://property-dashboard-api-4ywm.onrender.com";

#[derive(Clone, Debug)]
pub struct Configuration {
    api_base_url: String,
    http_host: String,
    http_port: u16,
    max_workers: usize,
    request_timeout_secs: u64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            api_base_url: String::from(DEFAULT_API_URL),
            http_host: String::from("127.0.0.1"),
            http_port: 3000,
            max_workers: 8,
            request_timeout_secs: 30,
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_ref()
    }

    pub fn http_host(&self) -> &str {
        self.http_host.as_ref()
    }

    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.http_host, self.http_port).parse()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Configuration {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn from_environment(self) -> Configuration {
        self.from_lookup(|key| env::var(key).ok())
    }

    /// Applies overrides from any key/value source. Unparseable numbers keep the default.
    pub fn from_lookup<F>(mut self, lookup: F) -> Configuration
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_url) = lookup("PROPERTY_API_URL") {
            self = self.with_api_base_url(api_url);
        }
        if let Some(http_host) = lookup("HTTP_HOST") {
            self.http_host = http_host;
        }
        if let Some(port) = parse_var(&lookup, "HTTP_PORT") {
            self.http_port = port;
        }
        if let Some(workers) = parse_var(&lookup, "MAX_WORKERS") {
            self.max_workers = workers;
        }
        if let Some(secs) = parse_var(&lookup, "REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = secs;
        }
        self
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable configuration value");
            None
        }
    }
}
