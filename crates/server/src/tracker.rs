use railsync::prelude::*;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{
    sync::RwLock,
    task::AbortHandle,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info};

/// What the renderer can read about the itinerary being tracked.
#[derive(Debug, Default)]
pub struct Session {
    /// Bumped on every track/stop. Cycles started under an older value
    /// never publish.
    pub generation: u64,
    pub tracked: Arc<TrackedSet>,
    pub snapshot: Option<Arc<StatusSnapshot>>,
}

/// Polls live status for one itinerary at a time.
///
/// `track` polls immediately and then on every interval tick. Each tick runs
/// its cycle as an independent task; a slow cycle is not cancelled by the next
/// tick and whichever finishes last wins. `stop`, a new `track` or dropping
/// the tracker ends the session.
pub struct Tracker<S> {
    poller: Arc<StatusPoller<S>>,
    resolver: Resolver,
    period: Duration,
    session: Arc<RwLock<Session>>,
    ticker: Mutex<Option<AbortHandle>>,
}

impl<S> Tracker<S>
where
    S: PositionSource + Send + Sync + 'static,
{
    pub fn new(poller: StatusPoller<S>, resolver: Resolver, period: Duration) -> Self {
        Self {
            poller: Arc::new(poller),
            resolver,
            period,
            session: Default::default(),
            ticker: Mutex::new(None),
        }
    }

    /// Replaces whatever is tracked with `itinerary` and starts polling.
    ///
    /// Leg identities are resolved here, once. The returned set is the one
    /// stored in the session.
    pub async fn track(&self, itinerary: Itinerary) -> Arc<TrackedSet> {
        let tracked = Arc::new(itinerary.tracked(&self.resolver, self.poller.rule()));
        info!(
            "Tracking {} trains on {} lines",
            tracked.trains.len(),
            tracked.lines.len()
        );

        let mut session = self.session.write().await;
        self.stop_ticker();
        session.generation += 1;
        session.tracked = tracked.clone();
        session.snapshot = None;

        if tracked.is_empty() {
            debug!("Nothing to poll for this itinerary");
        } else {
            let handle = tokio::spawn(run_ticker(
                self.poller.clone(),
                self.session.clone(),
                session.generation,
                tracked.clone(),
                self.period,
            ));
            self.set_ticker(Some(handle.abort_handle()));
        }
        tracked
    }

    /// Ends the current session. Cycles still in flight are discarded when
    /// they complete.
    pub async fn stop(&self) {
        let mut session = self.session.write().await;
        self.stop_ticker();
        session.generation += 1;
        session.tracked = Default::default();
        session.snapshot = None;
        info!("Stopped tracking");
    }

    pub async fn tracked(&self) -> Arc<TrackedSet> {
        self.session.read().await.tracked.clone()
    }

    pub async fn snapshot(&self) -> Option<Arc<StatusSnapshot>> {
        self.session.read().await.snapshot.clone()
    }

    fn stop_ticker(&self) {
        if let Some(handle) = self.set_ticker(None) {
            handle.abort();
        }
    }

    fn set_ticker(&self, handle: Option<AbortHandle>) -> Option<AbortHandle> {
        let mut ticker = self
            .ticker
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        std::mem::replace(&mut *ticker, handle)
    }
}

impl<S> Drop for Tracker<S> {
    fn drop(&mut self) {
        let ticker = self
            .ticker
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(handle) = ticker.take() {
            handle.abort();
        }
    }
}

async fn run_ticker<S>(
    poller: Arc<StatusPoller<S>>,
    session: Arc<RwLock<Session>>,
    generation: u64,
    tracked: Arc<TrackedSet>,
    period: Duration,
) where
    S: PositionSource + Send + Sync + 'static,
{
    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        // The first tick completes immediately.
        interval.tick().await;
        tokio::spawn(run_cycle(
            poller.clone(),
            session.clone(),
            generation,
            tracked.clone(),
        ));
    }
}

async fn run_cycle<S>(
    poller: Arc<StatusPoller<S>>,
    session: Arc<RwLock<Session>>,
    generation: u64,
    tracked: Arc<TrackedSet>,
) where
    S: PositionSource + Send + Sync + 'static,
{
    let Some(snapshot) = poller.poll(&tracked.lines, &tracked.trains).await else {
        return;
    };

    let mut session = session.write().await;
    if session.generation != generation {
        debug!("Dropping snapshot of an ended session");
        return;
    }
    debug!(
        "{} of {} tracked trains running",
        snapshot.running_count(),
        snapshot.len()
    );
    session.snapshot = Some(Arc::new(snapshot));
}

#[cfg(test)]
mod tests {
    use super::*;
    use railsync::live;
    use std::{
        collections::HashMap,
        future::Future,
        sync::atomic::{AtomicUsize, Ordering},
    };

    const RULE: TrainRule = TrainRule { core_digits: None };
    const PERIOD: Duration = Duration::from_secs(5);

    #[derive(Default)]
    struct FakeFeed {
        lines: HashMap<LineId, Vec<LivePosition>>,
        latency: Duration,
        requests: Arc<AtomicUsize>,
    }

    impl PositionSource for FakeFeed {
        fn positions(
            &self,
            line: &LineId,
        ) -> impl Future<Output = Result<Vec<LivePosition>, live::Error>> + Send {
            self.requests.fetch_add(1, Ordering::SeqCst);
            let result = self
                .lines
                .get(line)
                .cloned()
                .ok_or(live::Error::Status(404));
            let latency = self.latency;
            async move {
                time::sleep(latency).await;
                result
            }
        }
    }

    fn feed(latency: Duration) -> (FakeFeed, Arc<AtomicUsize>) {
        let requests = Arc::new(AtomicUsize::new(0));
        let mut lines = HashMap::new();
        lines.insert(
            LineId::new("yamanote"),
            vec![LivePosition {
                train_number: Some("1234G".into()),
                delay: Some(120),
                ..Default::default()
            }],
        );
        let feed = FakeFeed {
            lines,
            latency,
            requests: requests.clone(),
        };
        (feed, requests)
    }

    fn tracker(feed: FakeFeed) -> Tracker<FakeFeed> {
        Tracker::new(
            StatusPoller::new(feed, RULE),
            Resolver::new(Arc::new(Catalog::builtin())),
            PERIOD,
        )
    }

    fn itinerary(trip_id: &str) -> Itinerary {
        Itinerary {
            legs: vec![Leg {
                mode: Some(Mode::Transit("RAIL".into())),
                route: Some(Route {
                    long_name: Some("Yamanote Line".into()),
                    ..Default::default()
                }),
                trip_id: Some(trip_id.into()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn train(raw: &str) -> TrainNumber {
        TrainNumber::extract(raw, &RULE).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn first_poll_is_immediate() {
        let (feed, requests) = feed(Duration::ZERO);
        let tracker = tracker(feed);
        let tracked = tracker.track(itinerary("1:1234G")).await;
        assert_eq!(tracked.lines, vec![LineId::new("yamanote")]);
        assert!(Arc::ptr_eq(&tracked, &tracker.tracked().await));

        time::sleep(Duration::from_millis(10)).await;
        assert_eq!(requests.load(Ordering::SeqCst), 1);
        let snapshot = tracker.snapshot().await.unwrap();
        let status = snapshot.get(&train("1234G")).unwrap();
        assert!(status.running);
        assert_eq!(status.delay, 120);
    }

    #[tokio::test(start_paused = true)]
    async fn polls_every_period() {
        let (feed, requests) = feed(Duration::ZERO);
        let tracker = tracker(feed);
        tracker.track(itinerary("1:1234G")).await;

        time::sleep(Duration::from_secs(11)).await;
        assert_eq!(requests.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn unmatched_train_is_not_running() {
        let (feed, _) = feed(Duration::ZERO);
        let tracker = tracker(feed);
        tracker.track(itinerary("1:999G")).await;

        time::sleep(Duration::from_millis(10)).await;
        let snapshot = tracker.snapshot().await.unwrap();
        assert!(!snapshot.get(&train("999G")).unwrap().running);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_polling() {
        let (feed, requests) = feed(Duration::ZERO);
        let tracker = tracker(feed);
        tracker.track(itinerary("1:1234G")).await;
        time::sleep(Duration::from_millis(10)).await;

        tracker.stop().await;
        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(requests.load(Ordering::SeqCst), 1);
        assert!(tracker.snapshot().await.is_none());
        assert!(tracker.tracked().await.trains.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn late_response_after_stop_is_discarded() {
        let (feed, requests) = feed(Duration::from_secs(2));
        let tracker = tracker(feed);
        tracker.track(itinerary("1:1234G")).await;

        // Request is in flight when the session ends.
        time::sleep(Duration::from_millis(10)).await;
        assert_eq!(requests.load(Ordering::SeqCst), 1);
        tracker.stop().await;

        time::sleep(Duration::from_secs(3)).await;
        assert!(tracker.snapshot().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn late_response_of_previous_itinerary_is_discarded() {
        let (feed, _) = feed(Duration::from_secs(2));
        let tracker = tracker(feed);
        tracker.track(itinerary("1:1234G")).await;
        time::sleep(Duration::from_millis(10)).await;

        tracker.track(itinerary("1:999G")).await;
        time::sleep(Duration::from_millis(2500)).await;

        let snapshot = tracker.snapshot().await.unwrap();
        assert!(snapshot.get(&train("1234G")).is_none());
        assert!(!snapshot.get(&train("999G")).unwrap().running);
    }

    #[tokio::test(start_paused = true)]
    async fn track_returns_the_legs_it_stored() {
        let (feed, _) = feed(Duration::ZERO);
        let tracker = tracker(feed);
        let first = tracker.track(itinerary("1:1234G")).await;
        let second = tracker.track(itinerary("1:999G")).await;

        let stored = tracker.tracked().await;
        assert!(Arc::ptr_eq(&second, &stored));
        assert!(!Arc::ptr_eq(&first, &stored));
        assert_eq!(stored.legs.len(), 1);
        assert_eq!(stored.legs[0].line, Some(LineId::new("yamanote")));
        assert_eq!(stored.legs[0].train, Some(train("999G")));
    }

    #[tokio::test(start_paused = true)]
    async fn itinerary_without_trains_does_not_poll() {
        let (feed, requests) = feed(Duration::ZERO);
        let tracker = tracker(feed);
        let tracked = tracker.track(Itinerary::default()).await;
        assert!(tracked.is_empty());

        time::sleep(Duration::from_secs(11)).await;
        assert_eq!(requests.load(Ordering::SeqCst), 0);
        assert!(tracker.snapshot().await.is_none());
    }
}
