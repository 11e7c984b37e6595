use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::task;
use tokio::time::timeout;
use volara_events::{Event, EventBus};

const PUBLISH_TIMEOUT: Duration = Duration::from_secs(1);

#[tokio::test]
async fn load_does_not_stall_publishers() -> anyhow::Result<()> {
    let bus = Arc::new(EventBus::with_capacity(512));
    let mut stream = bus.subscribe();

    let publisher = {
        let bus = bus.clone();
        task::spawn(async move {
            for i in 0..500 {
                let publish_bus = bus.clone();
                timeout(PUBLISH_TIMEOUT, async move {
                    let _ = publish_bus.publish(Event::VolumeOverlayChanged { state: i % 4 });
                })
                .await
                .expect("publish timed out");
            }
        })
    };

    let consumer = task::spawn(async move {
        let mut ids = HashSet::new();
        while ids.len() < 500 {
            if let Some(envelope) = stream.next().await {
                ids.insert(envelope.id);
            }
        }
        ids
    });

    publisher.await?;
    let ids = consumer.await?;
    assert_eq!(ids.len(), 500);
    Ok(())
}

#[tokio::test]
async fn sticky_replay_survives_subscriber_churn() -> anyhow::Result<()> {
    let bus = EventBus::new();
    let last = bus.publish(Event::VolumeOverlayChanged { state: 1 });

    for _ in 0..3 {
        let mut stream = bus.subscribe();
        let envelope = timeout(PUBLISH_TIMEOUT, stream.next())
            .await?
            .expect("sticky envelope should be replayed");
        assert_eq!(envelope.id, last);
        assert_eq!(envelope.event, Event::VolumeOverlayChanged { state: 1 });
    }
    Ok(())
}
