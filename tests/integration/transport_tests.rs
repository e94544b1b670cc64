use monster_client::application::config::{Config, Credentials, RestApiConfig, TransportConfig};
use monster_client::constants::DEFAULT_OPTION_CHAIN_ROOT;
use monster_client::error::AppError;
use monster_client::model::http::{HttpClient, build_transport};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::time::timeout;

fn offline_config(host: &str, transport: TransportConfig) -> Config {
    Config {
        credentials: Credentials {
            username: "trader".to_string(),
            password: "secret".to_string(),
            source_app: "integration-tests".to_string(),
        },
        rest_api: RestApiConfig {
            host: host.to_string(),
            scheme: "http".to_string(),
            timeout: 2,
            option_chain_root: DEFAULT_OPTION_CHAIN_ROOT.to_string(),
        },
        transport,
        quotes_enabled: false,
    }
}

#[test]
fn transport_builds_with_socks_proxy_and_relaxed_tls() {
    let config = offline_config(
        "quotes.example.com",
        TransportConfig {
            socks_proxy_addr: Some("127.0.0.1:1080".to_string()),
            accept_invalid_certs: true,
        },
    );
    assert!(build_transport(&config).is_ok());
}

#[test]
fn transport_accepts_explicit_proxy_scheme() {
    let config = offline_config(
        "quotes.example.com",
        TransportConfig {
            socks_proxy_addr: Some("socks5h://proxy.internal:1080".to_string()),
            accept_invalid_certs: false,
        },
    );
    assert!(build_transport(&config).is_ok());
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // port 9 (discard) is closed on test machines
    let client =
        HttpClient::new_lazy(offline_config("127.0.0.1:9", TransportConfig::default())).unwrap();
    assert!(matches!(client.login().await, Err(AppError::Network(_))));
}

#[tokio::test]
async fn unreachable_socks_proxy_is_a_network_error() {
    let client = HttpClient::new_lazy(offline_config(
        "quotes.example.com",
        TransportConfig {
            socks_proxy_addr: Some("127.0.0.1:9".to_string()),
            accept_invalid_certs: false,
        },
    ))
    .unwrap();
    assert!(matches!(
        client.post("/services/quotesOptionService", "<getOptionChain/>").await,
        Err(AppError::Network(_))
    ));
}

// Minimal SOCKS5 server: answers the greeting, records the CONNECT target and
// refuses it
async fn record_socks_connect(listener: TcpListener) -> (u8, String, u16) {
    let (mut socket, _) = listener.accept().await.unwrap();

    let mut greeting = [0u8; 2];
    socket.read_exact(&mut greeting).await.unwrap();
    let mut methods = vec![0u8; greeting[1] as usize];
    socket.read_exact(&mut methods).await.unwrap();
    socket.write_all(&[5, 0]).await.unwrap();

    let mut head = [0u8; 4];
    socket.read_exact(&mut head).await.unwrap();
    let target = match head[3] {
        3 => {
            let len = socket.read_u8().await.unwrap();
            let mut name = vec![0u8; len as usize];
            socket.read_exact(&mut name).await.unwrap();
            String::from_utf8(name).unwrap()
        }
        1 => {
            let mut ip = [0u8; 4];
            socket.read_exact(&mut ip).await.unwrap();
            std::net::Ipv4Addr::from(ip).to_string()
        }
        _ => {
            let mut ip = [0u8; 16];
            socket.read_exact(&mut ip).await.unwrap();
            std::net::Ipv6Addr::from(ip).to_string()
        }
    };
    let port = socket.read_u16().await.unwrap();

    // general failure
    socket
        .write_all(&[5, 1, 0, 1, 0, 0, 0, 0, 0, 0])
        .await
        .unwrap();
    (head[3], target, port)
}

#[tokio::test]
async fn socks_proxy_receives_the_host_name() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let proxy_addr = listener.local_addr().unwrap();
    let proxy = tokio::spawn(record_socks_connect(listener));

    // resolvable only on the proxy side
    let client = HttpClient::new_lazy(offline_config(
        "monster.invalid:8080",
        TransportConfig {
            socks_proxy_addr: Some(proxy_addr.to_string()),
            accept_invalid_certs: false,
        },
    ))
    .unwrap();
    assert!(matches!(client.login().await, Err(AppError::Network(_))));

    let (atyp, host, port) = timeout(Duration::from_secs(5), proxy)
        .await
        .expect("proxy saw no CONNECT")
        .unwrap();
    assert_eq!(atyp, 3, "target should be sent as a domain name");
    assert_eq!(host, "monster.invalid");
    assert_eq!(port, 8080);
}

#[tokio::test]
async fn truncated_error_body_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\nshort")
            .await
            .unwrap();
        // closing before the advertised length cuts the body short
    });

    let client =
        HttpClient::new_lazy(offline_config(&addr.to_string(), TransportConfig::default()))
            .unwrap();
    assert!(matches!(client.login().await, Err(AppError::Network(_))));
}
