//! The server over a real TCP socket.

use ptax::{Server, app};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn raw_get(addr: std::net::SocketAddr, target: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("GET {target} HTTP/1.1\r\nhost: localhost\r\nconnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn serves_estimates_and_stops_on_signal() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop, stopped) = oneshot::channel::<()>();

    let server = tokio::spawn(Server::from_listener(listener).serve_with_shutdown(app(), async move {
        let _ = stopped.await;
    }));

    let ok = raw_get(addr, "/ptax?address=Denver%2C+CO&value=300000").await;
    assert!(ok.starts_with("HTTP/1.1 200 OK\r\n"), "{ok}");
    assert!(ok.to_ascii_lowercase().contains("content-type: application/json"), "{ok}");
    assert!(ok.ends_with(
        r#"{"property_tax_amount":"1710.00","property_tax_effective_rate":0.0057,"information":"Based on the Colorado statewide average property tax rate"}"#
    ), "{ok}");

    let bad = raw_get(addr, "/ptax?value=abc").await;
    assert!(bad.starts_with("HTTP/1.1 400 Bad Request\r\n"), "{bad}");
    assert!(bad.ends_with(r#"{"error":"Bad value provided"}"#), "{bad}");

    stop.send(()).unwrap();
    server.await.unwrap().unwrap();

    assert!(TcpStream::connect(addr).await.is_err(), "listener should be closed after shutdown");
}
