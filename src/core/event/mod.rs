use serde::{Serialize, Deserialize};
use std::fmt::{Display, Formatter};

/// Structured record of one monitor state change
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum QueueEvent<T> {
    /// Emitted once when the monitor is built
    ExecutionStarted,
    /// A full queue is about to double its capacity
    QueueFull { new_capacity: usize },
    /// Storage was reallocated to a new capacity
    Resized { new_capacity: usize },
    /// A sparsely filled queue is about to halve its capacity
    Shrinking { new_capacity: usize },
    /// An item entered the queue
    Produced { item: T, count: usize },
    /// An item left the queue
    Consumed { item: T, count: usize },
    /// A consumer stopped after a timeout or end of stream
    ConsumerFinished,
    /// Emitted once after every producer and consumer task is done
    ExecutionFinished,
}

impl<T: Display> Display for QueueEvent<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueEvent::ExecutionStarted => write!(f, "execution started"),
            QueueEvent::QueueFull { new_capacity } => {
                write!(f, "queue full, doubling capacity to {}", new_capacity)
            }
            QueueEvent::Resized { new_capacity } => {
                write!(f, "queue resized, new capacity = {}", new_capacity)
            }
            QueueEvent::Shrinking { new_capacity } => {
                write!(f, "shrinking queue capacity to {}", new_capacity)
            }
            QueueEvent::Produced { item, count } => {
                write!(f, "produced {}, elements in queue: {}", item, count)
            }
            QueueEvent::Consumed { item, count } => {
                write!(f, "consumed {}, elements in queue: {}", item, count)
            }
            QueueEvent::ConsumerFinished => {
                write!(f, "consumer finishing: no items or wait time exceeded")
            }
            QueueEvent::ExecutionFinished => write!(f, "execution finished"),
        }
    }
}
