use std::io::Cursor;
use std::time::Duration;

use odu_types::AppEvent;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::io::watch_lines;

#[tokio::test]
async fn test_tokio_spawn_from_sync_context() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    let sync_callback = move || {
        tracing::debug!("Sync callback: spawning tokio task");
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::TextInput("ಮನೆ".to_string()))
                .await
                .expect("send failed");
        });
    };

    sync_callback();

    let result = timeout(Duration::from_secs(2), rx.recv()).await;

    match result {
        Ok(Ok(AppEvent::TextInput(text))) => assert_eq!(text, "ಮನೆ"),
        Ok(Ok(_)) => panic!("Wrong event type"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - tokio::spawn from sync context failed!"),
    }
}

#[tokio::test]
async fn test_blocking_thread_feeds_async_receiver() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(4);
    let cancel = CancellationToken::new();

    let input = "ಇದು ಪದ\n:lookup ಮನೆ\n";
    let handle = std::thread::spawn(move || {
        let sender = tx.to_sync();
        watch_lines(Cursor::new(input), &cancel, &sender).expect("watch failed");
    });

    let events = timeout(Duration::from_secs(2), async {
        let mut events = Vec::new();
        for _ in 0..3 {
            events.push(rx.recv().await.expect("recv failed"));
        }
        events
    })
    .await
    .expect("Timeout waiting for events!");
    handle.join().unwrap();

    assert!(matches!(&events[0], AppEvent::TextInput(text) if text == "ಇದು ಪದ"));
    assert!(matches!(&events[1], AppEvent::LookupWord(word) if word == "ಮನೆ"));
    assert!(matches!(events[2], AppEvent::Shutdown));
}

#[tokio::test]
async fn test_multiple_spawned_sends() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    for i in 0..100 {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::TextInput(format!("msg{}", i)))
                .await
                .expect("send failed");
        });
    }

    let mut count = 0;
    let result = timeout(Duration::from_secs(2), async {
        while count < 100 {
            rx.recv().await.expect("recv failed");
            count += 1;
        }
    })
    .await;

    assert!(result.is_ok(), "Timeout waiting for events!");
    assert_eq!(count, 100);
}
