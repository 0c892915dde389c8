use crate::consts::consts::{DEFAULT_HTTP_WORKERS, DEFAULT_PORT};

#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub address: String,
    pub port: u16,
    pub http_workers: usize,
    pub log_http: bool,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl ServerOptions {
    pub fn set_address(mut self, address: String) -> Self {
        self.address = address;
        self
    }

    pub fn set_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Number of actix workers, each one handles requests on its own thread
    pub fn set_http_workers(mut self, http_workers: usize) -> Self {
        self.http_workers = http_workers;
        self
    }

    /// Enables the per request access log
    pub fn set_log_http(mut self, log_http: bool) -> Self {
        self.log_http = log_http;
        self
    }
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            http_workers: DEFAULT_HTTP_WORKERS,
            log_http: false,
        }
    }
}
