use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;

use super::*;

const NOTIFICATION: &str =
    r#"{"event":"notification","data":{"type":"notice","title":"Added","body":"<b>Show</b>"}}"#;

#[test]
fn for_host_builds_ui_socket_url() {
    let config = ListenerConfig::for_host("media.local", 8081).unwrap();
    assert_eq!(config.url.as_str(), "ws://media.local:8081/ws/ui");
}

#[test]
fn backoff_doubles_and_caps() {
    assert_eq!(NotificationListener::backoff_duration(1), Duration::from_secs(2));
    assert_eq!(NotificationListener::backoff_duration(2), Duration::from_secs(4));
    assert_eq!(NotificationListener::backoff_duration(5), Duration::from_secs(32));
    assert_eq!(NotificationListener::backoff_duration(6), Duration::from_secs(60));
    assert_eq!(NotificationListener::backoff_duration(40), Duration::from_secs(60));
}

#[tokio::test]
async fn rejects_non_websocket_url() {
    let config = ListenerConfig::new(Url::parse("http://127.0.0.1:8081/ws/ui").unwrap());
    assert!(matches!(
        NotificationListener::connect(config),
        Err(UiEventsError::InvalidUrl(_))
    ));
}

#[test]
fn decode_message_skips_bad_and_unknown_messages() {
    assert_eq!(NotificationListener::decode_message("{oops"), None);
    assert_eq!(
        NotificationListener::decode_message(r#"{"event":"queue_item","data":{}}"#),
        None
    );
    assert_eq!(
        NotificationListener::decode_message(NOTIFICATION),
        Some(UiEvent::notification("notice", "Added", "<b>Show</b>"))
    );
}

#[tokio::test]
async fn stops_when_shutdown_arrives_during_backoff() {
    // Bind then drop so the port refuses connections.
    let port = {
        let server = TcpListener::bind("127.0.0.1:0").await.unwrap();
        server.local_addr().unwrap().port()
    };
    let config = ListenerConfig::for_host("127.0.0.1", port).unwrap();
    let (mut rx, shutdown) = NotificationListener::connect(config).unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown.send(()).await.unwrap();

    let closed = tokio::time::timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("listener stops during backoff");
    assert_eq!(closed, None);
}

#[tokio::test]
async fn stops_when_shutdown_arrives_during_stalled_handshake() {
    let server = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = server.local_addr().unwrap().port();
    tokio::spawn(async move {
        // Accept TCP but never answer the upgrade request.
        let (_stream, _) = server.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(30)).await;
    });

    let config = ListenerConfig::for_host("127.0.0.1", port).unwrap();
    let (mut rx, shutdown) = NotificationListener::connect(config).unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;
    shutdown.send(()).await.unwrap();

    let closed = tokio::time::timeout(Duration::from_secs(3), rx.recv())
        .await
        .expect("listener stops while connecting");
    assert_eq!(closed, None);
}

#[tokio::test]
async fn stops_when_shutdown_arrives_while_forwarding_is_blocked() {
    let server = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = server.local_addr().unwrap().port();
    tokio::spawn(async move {
        let (stream, _) = server.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        for _ in 0..(EVENT_CHANNEL_CAPACITY + 8) {
            if ws.send(Message::text(NOTIFICATION.to_string())).await.is_err() {
                return;
            }
        }
        while let Some(Ok(_)) = ws.next().await {}
    });

    let config = ListenerConfig::for_host("127.0.0.1", port).unwrap();
    let (mut rx, shutdown) = NotificationListener::connect(config).unwrap();

    // Nobody reads, so the event channel fills up and forwarding blocks.
    tokio::time::timeout(Duration::from_secs(5), async {
        while rx.len() < EVENT_CHANNEL_CAPACITY {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("channel filled");
    shutdown.send(()).await.unwrap();

    let drained = tokio::time::timeout(Duration::from_secs(3), async {
        let mut count = 0;
        while rx.recv().await.is_some() {
            count += 1;
        }
        count
    })
    .await
    .expect("listener stops while forwarding is blocked");
    assert_eq!(drained, EVENT_CHANNEL_CAPACITY);
}

#[test]
fn connect_timeout_error_names_the_wait() {
    let err = UiEventsError::ConnectTimeout(CONNECT_TIMEOUT);
    assert!(err.to_string().contains("timed out"));
}

#[tokio::test]
async fn forwards_notifications_from_server() {
    let server = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = server.local_addr().unwrap().port();
    tokio::spawn(async move {
        let (stream, _) = server.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(stream).await.unwrap();
        for text in ["not json", r#"{"event":"scene_refresh","data":{}}"#, NOTIFICATION] {
            ws.send(Message::text(text.to_string())).await.unwrap();
        }
        while let Some(Ok(_)) = ws.next().await {}
    });

    let config = ListenerConfig::for_host("127.0.0.1", port).unwrap();
    let (mut rx, shutdown) = NotificationListener::connect(config).unwrap();

    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("event in time");
    assert_eq!(
        event,
        Some(UiEvent::notification("notice", "Added", "<b>Show</b>"))
    );

    shutdown.send(()).await.unwrap();
    let closed = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("listener stops");
    assert_eq!(closed, None);
}

#[tokio::test]
async fn reconnects_after_server_close() {
    let server = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = server.local_addr().unwrap().port();
    tokio::spawn(async move {
        let (stream, _) = server.accept().await.unwrap();
        let mut first = tokio_tungstenite::accept_async(stream).await.unwrap();
        let _ = first.close(None).await;
        drop(first);

        let (stream, _) = server.accept().await.unwrap();
        let mut second = tokio_tungstenite::accept_async(stream).await.unwrap();
        second.send(Message::text(NOTIFICATION.to_string())).await.unwrap();
        while let Some(Ok(_)) = second.next().await {}
    });

    let config = ListenerConfig::for_host("127.0.0.1", port).unwrap();
    let (mut rx, _shutdown) = NotificationListener::connect(config).unwrap();

    let event = tokio::time::timeout(Duration::from_secs(10), rx.recv())
        .await
        .expect("event after reconnect");
    assert!(matches!(event, Some(UiEvent::Notification(ref data)) if data.title == "Added"));
}
