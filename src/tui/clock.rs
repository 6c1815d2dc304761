// Mission clock - UTC wall clock shown in the title bar
//
// A background task ticks once a second and publishes the formatted time on a
// watch channel. The task lives exactly as long as the clock value: dropping
// the clock aborts it.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

const TICK: Duration = Duration::from_secs(1);

/// `HH:MM:SS UTC`
pub fn format_clock(now: DateTime<Utc>) -> String {
    now.format("%H:%M:%S UTC").to_string()
}

pub struct MissionClock {
    rx: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl MissionClock {
    /// Start ticking. Must be called inside a tokio runtime.
    pub fn mount() -> Self {
        let (tx, rx) = watch::channel(format_clock(Utc::now()));

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(format_clock(Utc::now())).is_err() {
                    break; // every receiver is gone
                }
            }
        });

        Self { rx, task }
    }

    /// Latest published time
    pub fn now(&self) -> String {
        self.rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.rx.clone()
    }
}

impl Drop for MissionClock {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_as_utc_time() {
        let t = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(format_clock(t), "07:05:03 UTC");
    }

    #[tokio::test]
    async fn publishes_ticks() {
        let clock = MissionClock::mount();
        let mut rx = clock.subscribe();

        let changed = tokio::time::timeout(Duration::from_secs(3), rx.changed()).await;
        assert!(matches!(changed, Ok(Ok(()))));

        let shown = clock.now();
        assert!(shown.ends_with(" UTC"));
        assert_eq!(shown.len(), "00:00:00 UTC".len());
    }

    #[tokio::test]
    async fn drop_stops_the_task() {
        let clock = MissionClock::mount();
        let mut rx = clock.subscribe();
        drop(clock);

        // The aborted task drops the sender, which closes the channel
        let closed = tokio::time::timeout(Duration::from_secs(3), async {
            while rx.changed().await.is_ok() {}
        })
        .await;
        assert!(closed.is_ok(), "clock task still running after drop");
    }
}
