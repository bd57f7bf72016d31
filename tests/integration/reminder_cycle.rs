//! End-to-end reminder lifecycle tests: tick decisions over synthetic
//! clocks, pause/resume behavior, fault handling, and the full
//! scheduler-to-sink pipeline.

use sip::NotificationSink;
use sip::scheduler::{Action, ReminderEvent, ReminderScheduler};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

struct RecordingSink {
    delivered: Arc<Mutex<Vec<(String, String)>>>,
}

impl NotificationSink for RecordingSink {
    fn notify(&self, title: &str, body: &str) -> sip::Result<()> {
        self.delivered
            .lock()
            .unwrap()
            .push((title.to_owned(), body.to_owned()));
        Ok(())
    }
}

fn make_scheduler(
    interval: Duration,
) -> (
    ReminderScheduler,
    mpsc::UnboundedReceiver<ReminderEvent>,
    CancellationToken,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();
    let scheduler = ReminderScheduler::new(tx, cancel.clone()).with_interval(interval);
    (scheduler, rx, cancel)
}

#[test]
fn hourly_reminder_fires_on_the_boundary() {
    let (mut scheduler, mut rx, _cancel) = make_scheduler(Duration::from_secs(3600));
    let t0 = Instant::now();

    // Tick every second up to one second before the boundary: nothing fires.
    scheduler.tick(t0);
    for s in [1, 60, 1800, 3599] {
        assert_eq!(scheduler.tick(t0 + Duration::from_secs(s)), Action::None);
    }
    assert!(rx.try_recv().is_err());

    // The boundary tick fires exactly once.
    assert!(matches!(
        scheduler.tick(t0 + Duration::from_secs(3600)),
        Action::Notify(_)
    ));
    assert!(rx.try_recv().is_ok());
    assert!(rx.try_recv().is_err());

    // The fire advanced the reference point to T0+3600.
    assert_eq!(scheduler.tick(t0 + Duration::from_secs(3601)), Action::None);
    assert!(matches!(
        scheduler.tick(t0 + Duration::from_secs(7200)),
        Action::Notify(_)
    ));
}

#[test]
fn resume_after_long_pause_fires_immediately() {
    let (scheduler, mut rx, _cancel) = make_scheduler(Duration::from_secs(3600));
    let pause = scheduler.pause_handle();
    let mut scheduler = scheduler;
    let t0 = Instant::now();

    scheduler.tick(t0);

    // Pause at T0+1800, then let the clock run to T0+7200.
    pause.set_paused(true);
    for s in [1800, 3600, 5400, 7200] {
        assert_eq!(scheduler.tick(t0 + Duration::from_secs(s)), Action::None);
    }
    assert!(rx.try_recv().is_err());

    // Resume: the elapsed time still counts from T0, so the next tick
    // fires without owing any extra delay.
    pause.set_paused(false);
    assert!(matches!(
        scheduler.tick(t0 + Duration::from_secs(7200)),
        Action::Notify(_)
    ));
}

#[test]
fn fault_produces_exactly_one_shutdown() {
    let (scheduler, rx, _cancel) = make_scheduler(Duration::from_secs(1));
    let mut scheduler = scheduler;
    let t0 = Instant::now();

    scheduler.tick(t0);
    drop(rx);

    assert_eq!(scheduler.tick(t0 + Duration::from_secs(1)), Action::Shutdown);
    assert!(scheduler.history().is_empty());
}

#[tokio::test]
async fn scheduler_loop_shuts_down_when_dispatcher_dies() {
    let (tx, rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();
    let scheduler = ReminderScheduler::new(tx, cancel.clone())
        .with_interval(Duration::from_millis(10))
        .with_tick_period(Duration::from_millis(5));

    drop(rx);
    let handle = scheduler.run();

    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("scheduler loop should stop after the fault")
        .unwrap();
    assert!(cancel.is_cancelled());
}

#[tokio::test]
async fn full_pipeline_delivers_reminders_to_the_sink() {
    let (tx, rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();
    let delivered = Arc::new(Mutex::new(Vec::new()));
    let sink = Box::new(RecordingSink {
        delivered: Arc::clone(&delivered),
    });

    let dispatcher = tokio::spawn(sip::notify::dispatch_events(rx, sink, cancel.clone()));

    let scheduler = ReminderScheduler::new(tx, cancel.clone())
        .with_interval(Duration::from_millis(20))
        .with_tick_period(Duration::from_millis(5));
    let shutdown = scheduler.shutdown_handle();
    let scheduler_task = scheduler.run();

    // Wait until at least two reminders made it all the way to the sink.
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if delivered.lock().unwrap().len() >= 2 {
            break;
        }
        assert!(Instant::now() < deadline, "reminders never reached the sink");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    shutdown.request_shutdown();
    assert!(shutdown.is_shutdown());
    tokio::time::timeout(Duration::from_secs(2), scheduler_task)
        .await
        .expect("scheduler should stop on request")
        .unwrap();
    tokio::time::timeout(Duration::from_secs(2), dispatcher)
        .await
        .expect("dispatcher should stop on request")
        .unwrap();

    let delivered = delivered.lock().unwrap();
    assert!(delivered.len() >= 2);
    assert_eq!(delivered[0].0, "Drink Water Notification");
}

#[tokio::test]
async fn paused_pipeline_stays_silent() {
    let (tx, rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();
    let delivered = Arc::new(Mutex::new(Vec::new()));
    let sink = Box::new(RecordingSink {
        delivered: Arc::clone(&delivered),
    });

    let dispatcher = tokio::spawn(sip::notify::dispatch_events(rx, sink, cancel.clone()));

    let scheduler = ReminderScheduler::new(tx, cancel.clone())
        .with_interval(Duration::from_millis(10))
        .with_tick_period(Duration::from_millis(5));
    let pause = scheduler.pause_handle();
    pause.set_paused(true);
    let scheduler_task = scheduler.run();

    // Several intervals elapse while paused.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(delivered.lock().unwrap().is_empty());

    cancel.cancel();
    let _ = tokio::time::timeout(Duration::from_secs(2), scheduler_task).await;
    let _ = tokio::time::timeout(Duration::from_secs(2), dispatcher).await;
}
