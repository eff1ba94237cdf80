use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt as _};

/// Counts warnings emitted by this crate.
#[derive(Clone, Default)]
pub struct WarnCounter(Arc<AtomicUsize>);

impl WarnCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() == Level::WARN && meta.target().starts_with("shelf_meta") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Route this thread's events through a fresh [`WarnCounter`] until the guard drops.
pub fn capture_warnings() -> (WarnCounter, DefaultGuard) {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (counter, guard)
}
