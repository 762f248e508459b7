#![cfg(feature = "reqwest-client")]

use std::time::Duration;

use pronoundb::client::ClientOptions;
use pronoundb::{LookupError, Platform, PronounDbClient, TransportError};
use tokio::net::TcpListener;
use url::Url;

fn reqwest_client(base: Url) -> PronounDbClient<reqwest::Client> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(200))
        .no_proxy()
        .build()
        .unwrap();
    PronounDbClient::new(http, ClientOptions::new().base(base).build())
}

#[tokio::test]
async fn silent_server_times_out() {
    // accepts connections, never answers
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hold = tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((sock, _)) = listener.accept().await {
            open.push(sock);
        }
    });

    let base = Url::parse(&format!("http://{addr}")).unwrap();
    let err = reqwest_client(base)
        .lookup_one(Platform::Discord, "1")
        .await
        .unwrap_err();
    hold.abort();

    assert!(
        matches!(err, LookupError::Transport(TransportError::Timeout)),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn refused_connection_is_a_connect_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base = Url::parse(&format!("http://{addr}")).unwrap();
    let err = reqwest_client(base)
        .lookup_one(Platform::Github, "1")
        .await
        .unwrap_err();

    assert!(
        matches!(err, LookupError::Transport(TransportError::Connect(_))),
        "unexpected error: {err:?}"
    );
    assert_eq!(err.status(), None);
}
