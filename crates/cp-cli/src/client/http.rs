//! reqwest-backed implementation of [`CmdProxyApi`]
//!
//! One request per operation, awaited to completion before returning.
//! Anything but a 200 is an error; no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode};

use cp_core::{ClientError, CmdProxyApi, CommandReply, ConnectionKind};
use cp_protocol::{
    build_url, CommandRequest, CommandResponse, ConnectResponse, ConnectionType, Endpoint,
    SessionId, SESSIONID_PARAM,
};

use crate::output::print_info;

/// Client for one CmdProxy server
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    host: String,
    port: u16,
}

impl HttpClient {
    /// Create a client for `host:port`
    ///
    /// Without a timeout every request waits until the server answers or
    /// the connection fails.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            host: host.into(),
            port,
        })
    }

    /// URL of an endpoint on this server
    pub fn url(&self, connection: ConnectionType, endpoint: Endpoint) -> String {
        let url = build_url(&self.host, self.port, connection, endpoint);
        print_info(&format!("build URL: {}", url));
        url
    }

    /// Body of a 200 response, or the status as an error
    async fn success_body(response: Response, endpoint: Endpoint) -> Result<String, ClientError> {
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl CmdProxyApi for HttpClient {
    async fn connect(&self, kind: &ConnectionKind) -> Result<SessionId, ClientError> {
        let url = self.url(kind.connection_type(), Endpoint::Connect);

        let response = match kind {
            ConnectionKind::Console => self.http.get(&url).send().await?,
            ConnectionKind::Telnet(request) => {
                for field in request.missing_fields() {
                    tracing::warn!(
                        "Telnet connect without {}; the server will likely reject it",
                        field
                    );
                }
                tracing::debug!(host = %request.host, port = request.port, "Telnet connect");
                self.http.post(&url).json(request).send().await?
            }
        };

        let body = Self::success_body(response, Endpoint::Connect).await?;
        tracing::debug!("connect response: {}", body);

        Ok(ConnectResponse::from_body(&body)?.session_id)
    }

    async fn command(
        &self,
        connection: ConnectionType,
        request: &CommandRequest,
    ) -> Result<CommandReply, ClientError> {
        let url = self.url(connection, Endpoint::Command);

        let response = self.http.post(&url).json(request).send().await?;
        let raw = Self::success_body(response, Endpoint::Command).await?;
        let response = CommandResponse::from_body(&raw)?;

        Ok(CommandReply { response, raw })
    }

    async fn disconnect(
        &self,
        connection: ConnectionType,
        session_id: &SessionId,
    ) -> Result<(), ClientError> {
        let url = self.url(connection, Endpoint::Disconnect);

        let response = self
            .http
            .get(&url)
            .query(&[(SESSIONID_PARAM, session_id.as_str())])
            .send()
            .await?;
        Self::success_body(response, Endpoint::Disconnect).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_urls() {
        let client = HttpClient::new("h", 1, None).unwrap();
        assert_eq!(
            client.url(ConnectionType::Console, Endpoint::Command),
            "http://h:1/api/v1.0/console/command"
        );
        assert_eq!(
            client.url(ConnectionType::Telnet, Endpoint::Disconnect),
            "http://h:1/api/v1.0/telnet/disconnect"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Port 9 (discard) is closed on any sane test host
        let client = HttpClient::new("127.0.0.1", 9, Some(Duration::from_secs(2))).unwrap();
        let err = client.connect(&ConnectionKind::Console).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[tokio::test]
    async fn test_timeout_applies_to_silent_server() {
        // Accepts connections but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((stream, _)) = listener.accept().await {
                held.push(stream);
            }
        });

        let client =
            HttpClient::new("127.0.0.1", port, Some(Duration::from_millis(200))).unwrap();
        let err = client.connect(&ConnectionKind::Console).await.unwrap_err();
        match err {
            ClientError::Transport(e) => assert!(e.is_timeout(), "not a timeout: {}", e),
            other => panic!("expected transport timeout, got {:?}", other),
        }

        server.abort();
    }
}
