use thiserror::Error;

/// Failure raised by queue storage operations
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    /// Storage for the requested capacity could not be allocated
    #[error("failed to allocate queue storage for capacity {capacity}")]
    AllocationFailure { capacity: usize },
}

/// Circular storage: handles only slot indexing and resize logic
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    count: usize,
}

impl<T> RingBuffer<T> {
    /// Create a ring with the given capacity, at least 1
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        assert!(capacity >= 1, "ring capacity must be at least 1");
        Ok(Self {
            slots: Self::alloc_slots(capacity)?,
            head: 0,
            count: 0,
        })
    }

    fn alloc_slots(capacity: usize) -> Result<Vec<Option<T>>, QueueError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| QueueError::AllocationFailure { capacity })?;
        slots.resize_with(capacity, || None);
        Ok(slots)
    }

    /// Write an item into the open tail slot
    pub fn push_back(&mut self, item: T) {
        // -- precondition: the caller resizes before pushing into a full ring
        assert!(self.count < self.capacity(), "push_back requires a free slot");

        let tail = (self.head + self.count) % self.capacity();
        self.slots[tail] = Some(item);
        self.count += 1;
    }

    /// Remove and return the oldest item
    pub fn pop_front(&mut self) -> T {
        assert!(self.count > 0, "pop_front requires a non-empty ring");

        let item = self.slots[self.head].take().expect("slot at head is occupied");
        self.head = (self.head + 1) % self.capacity();
        self.count -= 1;
        item
    }

    /// Reallocate to `new_capacity`, linearizing the live items from `head`
    /// to position 0. Leaves the ring untouched if allocation fails.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), QueueError> {
        assert!(new_capacity >= 1, "ring capacity must be at least 1");
        assert!(
            new_capacity >= self.count,
            "resize must keep room for every live item"
        );

        let mut slots = Self::alloc_slots(new_capacity)?;
        let old_capacity = self.capacity();
        for i in 0..self.count {
            slots[i] = self.slots[(self.head + i) % old_capacity].take();
        }
        self.slots = slots;
        self.head = 0;
        Ok(())
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.count
    }

    /// Current allocated length
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }
}
