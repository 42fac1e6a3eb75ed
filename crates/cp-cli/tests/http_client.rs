//! HTTP client integration tests
//!
//! Runs the reqwest client against an in-process mock CmdProxy server.

mod common;

use cmdproxy_cli::client::HttpClient;
use common::{Behavior, MockServer, Recorded};
use cp_core::{ClientError, CmdProxyApi, ConnectionKind};
use cp_protocol::{
    CommandRequest, ConnectTelnetRequest, ConnectionType, Endpoint, ProtocolError, SessionId,
};

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new("127.0.0.1", server.port(), None).expect("Failed to build client")
}

#[tokio::test]
async fn test_console_connect_is_bare_get() {
    let server = MockServer::start(Behavior::default()).await;
    let client = client_for(&server);

    let session_id = client.connect(&ConnectionKind::Console).await.unwrap();

    assert_eq!(session_id.as_str(), "219602104153538926");
    assert_eq!(
        server.requests(),
        vec![Recorded::Connect {
            kind: "console".to_string(),
            method: "GET",
            body: None,
        }]
    );
}

#[tokio::test]
async fn test_telnet_connect_posts_target() {
    let server = MockServer::start(Behavior {
        session_id: "T-1".to_string(),
        ..Behavior::default()
    })
    .await;
    let client = client_for(&server);

    let request = ConnectTelnetRequest {
        host: "10.0.0.1".to_string(),
        port: 23,
        login: "u".to_string(),
        password: "p".to_string(),
        login_expected_string: "login:".to_string(),
        password_expected_string: "Password:".to_string(),
        hostname_expected_string: "router#".to_string(),
        continue_command_expected_string: "--More--".to_string(),
    };
    let session_id = client
        .connect(&ConnectionKind::Telnet(request))
        .await
        .unwrap();
    assert_eq!(session_id, SessionId::from("T-1"));

    let requests = server.requests();
    let Recorded::Connect { kind, method, body } = &requests[0] else {
        panic!("expected a connect request, got {:?}", requests);
    };
    assert_eq!(kind, "telnet");
    assert_eq!(*method, "POST");
    let body = body.as_ref().expect("telnet connect must carry a body");
    assert_eq!(body["host"], "10.0.0.1");
    assert_eq!(body["port"], 23);
    assert_eq!(body["login"], "u");
    assert_eq!(body["password"], "p");
    assert_eq!(body["loginExpectedString"], "login:");
    assert_eq!(body["continueCommandExpectedString"], "--More--");
}

#[tokio::test]
async fn test_command_posts_session_and_text() {
    let server = MockServer::start(Behavior::default()).await;
    let client = client_for(&server);

    let request = CommandRequest {
        session_id: SessionId::from("S"),
        command_id: Some(5),
        command: "ls -lah".to_string(),
    };
    let reply = client
        .command(ConnectionType::Console, &request)
        .await
        .unwrap();

    assert_eq!(reply.response.session_id, SessionId::from("S"));
    assert_eq!(reply.response.output, "total 0\n");
    assert_eq!(reply.response.command_id, Some(5));
    assert!(reply.raw.contains("\"sessionid\":\"S\""));

    let Recorded::Command { kind, body } = &server.requests()[0] else {
        panic!("expected a command request");
    };
    assert_eq!(kind, "console");
    assert_eq!(body["sessionid"], "S");
    assert_eq!(body["command"], "ls -lah");
    assert_eq!(body["commandid"], 5);
}

#[tokio::test]
async fn test_disconnect_passes_session_in_query() {
    let server = MockServer::start(Behavior::default()).await;
    let client = client_for(&server);

    client
        .disconnect(ConnectionType::Telnet, &SessionId::from("abc 123"))
        .await
        .unwrap();

    assert_eq!(
        server.requests(),
        vec![Recorded::Disconnect {
            kind: "telnet".to_string(),
            session_id: Some("abc 123".to_string()),
        }]
    );
}

#[tokio::test]
async fn test_non_200_is_unexpected_status() {
    let server = MockServer::start(Behavior {
        connect_status: 500,
        disconnect_status: 404,
        ..Behavior::default()
    })
    .await;
    let client = client_for(&server);

    let err = client.connect(&ConnectionKind::Console).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::UnexpectedStatus {
            endpoint: Endpoint::Connect,
            status: 500
        }
    ));

    let err = client
        .disconnect(ConnectionType::Console, &SessionId::from("S"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::UnexpectedStatus {
            endpoint: Endpoint::Disconnect,
            status: 404
        }
    ));
}

#[tokio::test]
async fn test_connect_without_session_id_is_protocol_error() {
    let server = MockServer::start(Behavior {
        connect_body: Some(r#"{"status":"ok"}"#.to_string()),
        ..Behavior::default()
    })
    .await;
    let client = client_for(&server);

    let err = client.connect(&ConnectionKind::Console).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::Protocol(ProtocolError::MissingField("sessionid"))
    ));
}
