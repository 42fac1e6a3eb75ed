//! HTTP client for a CmdProxy server

mod http;

pub use http::HttpClient;
