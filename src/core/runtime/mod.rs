use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::core::config::SimulationConfig;
use crate::core::event::QueueEvent;
use crate::core::log::SafeLogger;
use crate::core::monitor::{BoundedQueueMonitor, DequeueOutcome, SafeQueueMonitor};
use crate::core::ring::QueueError;

/// Items each producer contributes before reporting completion
pub const ITEMS_PER_PRODUCER: usize = 5;

/// Build the shared monitor, drive the configured producer and consumer
/// threads against it, and join them all.
///
/// Producer `i` enqueues `ITEMS_PER_PRODUCER` sequential integers and then
/// reports completion exactly once. Each consumer keeps dequeueing until it
/// times out or observes the end of the stream, records that it is
/// finishing, and stops.
pub fn run(config: &SimulationConfig, logger: SafeLogger<usize>) -> Result<(), QueueError> {
    let monitor: SafeQueueMonitor<usize> = Arc::new(BoundedQueueMonitor::new(
        config.initial_capacity,
        config.producers,
        logger.clone(),
    )?);
    let timeout = Duration::from_secs(config.timeout_secs);

    let mut handles = Vec::new();

    for producer_id in 0..config.producers {
        let monitor = monitor.clone();
        handles.push(thread::spawn(move || {
            for n in 1..=ITEMS_PER_PRODUCER {
                let item = producer_id * 100 + n;
                if monitor.enqueue(item).is_err() {
                    break;
                }
                thread::sleep(Duration::from_millis(10));
            }
            monitor.notify_producer_done();
        }));
    }

    for _ in 0..config.consumers {
        let monitor = monitor.clone();
        let logger = logger.clone();
        handles.push(thread::spawn(move || {
            loop {
                match monitor.dequeue(timeout) {
                    Ok(DequeueOutcome::Item(_)) => {}
                    Ok(DequeueOutcome::TimedOut)
                    | Ok(DequeueOutcome::EndOfStream)
                    | Err(_) => {
                        logger.lock().unwrap().record(QueueEvent::ConsumerFinished);
                        break;
                    }
                }
            }
        }));
    }

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    monitor.finish();
    Ok(())
}
