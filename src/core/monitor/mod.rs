use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::core::event::QueueEvent;
use crate::core::log::SafeLogger;
use crate::core::ring::{QueueError, RingBuffer};

/// Outcome of a single dequeue attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DequeueOutcome<T> {
    /// The oldest buffered item
    Item(T),
    /// The deadline passed before any item arrived
    TimedOut,
    /// No items remain and no producer is still active
    EndOfStream,
}

struct MonitorState<T> {
    ring: RingBuffer<T>,
    active_producers: usize,
}

/// Shared queue monitor: one lock over the ring and the producer counter,
/// one condition variable for consumers waiting on items.
///
/// Producers never block. A full ring doubles its capacity instead, so
/// `enqueue` always completes; there is no bound on growth. Consumers wait
/// with a deadline and observe producer completion through the same
/// condition variable.
pub struct BoundedQueueMonitor<T> {
    state: Mutex<MonitorState<T>>,
    items_available: Condvar,
    logger: SafeLogger<T>,
}

/// Thread-safe wrapper
pub type SafeQueueMonitor<T> = Arc<BoundedQueueMonitor<T>>;

impl<T: Clone> BoundedQueueMonitor<T> {
    /// Create a monitor with the given starting capacity and producer count.
    /// Both arguments are validated positive by the configuration layer.
    pub fn new(
        initial_capacity: usize,
        producer_count: usize,
        logger: SafeLogger<T>,
    ) -> Result<Self, QueueError> {
        assert!(initial_capacity >= 1, "initial capacity must be positive");
        assert!(producer_count >= 1, "producer count must be positive");

        let ring = RingBuffer::new(initial_capacity)?;
        let monitor = Self {
            state: Mutex::new(MonitorState {
                ring,
                active_producers: producer_count,
            }),
            items_available: Condvar::new(),
            logger,
        };
        monitor.record(QueueEvent::ExecutionStarted);
        Ok(monitor)
    }

    fn record(&self, event: QueueEvent<T>) {
        let mut logger = self.logger.lock().unwrap();
        logger.record(event);
    }

    /// Add an item, doubling the capacity first if the ring is full.
    /// Wakes one waiting consumer.
    pub fn enqueue(&self, item: T) -> Result<(), QueueError> {
        let mut state = self.state.lock().unwrap();

        if state.ring.is_full() {
            let new_capacity = state.ring.capacity() * 2;
            self.record(QueueEvent::QueueFull { new_capacity });
            state.ring.resize(new_capacity)?;
            self.record(QueueEvent::Resized { new_capacity });
        }

        state.ring.push_back(item.clone());
        self.record(QueueEvent::Produced {
            item,
            count: state.ring.len(),
        });

        // one item became available, so one waiter suffices
        self.items_available.notify_one();
        Ok(())
    }

    /// Remove the oldest item, waiting up to `timeout` for one to arrive.
    ///
    /// Returns `TimedOut` if the deadline passes while the queue is empty
    /// and producers remain, `EndOfStream` once the queue is empty and the
    /// last producer has finished. Halves the capacity when at most a
    /// quarter of it remains in use afterwards, never below 1.
    pub fn dequeue(&self, timeout: Duration) -> Result<DequeueOutcome<T>, QueueError> {
        let deadline = Instant::now() + timeout;
        let mut state = self.state.lock().unwrap();

        // predicate loop: condition variables admit spurious wakeups
        while state.ring.is_empty() && state.active_producers > 0 {
            let remaining = match deadline.checked_duration_since(Instant::now()) {
                Some(remaining) => remaining,
                None => return Ok(DequeueOutcome::TimedOut),
            };
            let (guard, _) = self.items_available.wait_timeout(state, remaining).unwrap();
            state = guard;
        }

        if state.ring.is_empty() && state.active_producers == 0 {
            return Ok(DequeueOutcome::EndOfStream);
        }

        // shrink decision uses the count after the pop; resizing first means
        // a failed allocation cannot lose the popped item
        let count_after = state.ring.len() - 1;
        let capacity = state.ring.capacity();
        if count_after > 0 && count_after <= capacity / 4 && capacity > 1 {
            let new_capacity = capacity / 2;
            self.record(QueueEvent::Shrinking { new_capacity });
            state.ring.resize(new_capacity)?;
            self.record(QueueEvent::Resized { new_capacity });
        }

        let item = state.ring.pop_front();
        self.record(QueueEvent::Consumed {
            item: item.clone(),
            count: state.ring.len(),
        });
        Ok(DequeueOutcome::Item(item))
    }

    /// Report one producer as finished. The last one wakes every waiting
    /// consumer so they can observe the end of the stream instead of
    /// sleeping out their timeout.
    pub fn notify_producer_done(&self) {
        let mut state = self.state.lock().unwrap();
        assert!(
            state.active_producers > 0,
            "each producer reports completion exactly once"
        );
        state.active_producers -= 1;
        if state.active_producers == 0 {
            self.items_available.notify_all();
        }
    }

    /// Record the final event; called once all tasks are joined
    pub fn finish(&self) {
        self.record(QueueEvent::ExecutionFinished);
    }

    /// Current (len, capacity) snapshot
    pub fn queue_state(&self) -> (usize, usize) {
        let state = self.state.lock().unwrap();
        (state.ring.len(), state.ring.capacity())
    }

    /// Producers that have not yet reported completion
    pub fn active_producers(&self) -> usize {
        self.state.lock().unwrap().active_producers
    }
}
