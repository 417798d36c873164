use BoundedQueueMini::core::ring::RingBuffer;

#[test]
fn push_pop_preserves_fifo_order() {
    let mut ring: RingBuffer<usize> = RingBuffer::new(4).unwrap();

    for item in 1..=4 {
        ring.push_back(item);
    }
    assert!(ring.is_full());
    assert_eq!(ring.len(), 4);

    for expected in 1..=4 {
        assert_eq!(ring.pop_front(), expected);
    }
    assert!(ring.is_empty());
}

#[test]
fn wrapped_ring_keeps_order_across_resize() {
    let mut ring: RingBuffer<usize> = RingBuffer::new(4).unwrap();

    for item in 1..=4 {
        ring.push_back(item);
    }
    assert_eq!(ring.pop_front(), 1);
    assert_eq!(ring.pop_front(), 2);
    // tail wraps past the physical end before the resize
    ring.push_back(5);
    ring.push_back(6);

    ring.resize(8).unwrap();
    assert_eq!(ring.capacity(), 8);
    assert_eq!(ring.len(), 4);
    for expected in 3..=6 {
        assert_eq!(ring.pop_front(), expected);
    }
}

#[test]
fn resize_down_keeps_remaining_items() {
    let mut ring: RingBuffer<usize> = RingBuffer::new(8).unwrap();

    for item in 1..=3 {
        ring.push_back(item);
    }
    ring.resize(4).unwrap();
    assert_eq!(ring.capacity(), 4);
    assert_eq!(ring.len(), 3);

    for expected in 1..=3 {
        assert_eq!(ring.pop_front(), expected);
    }
}

#[test]
fn ring_refills_after_draining() {
    let mut ring: RingBuffer<usize> = RingBuffer::new(2).unwrap();

    for round in 0..5 {
        ring.push_back(round);
        ring.push_back(round + 10);
        assert_eq!(ring.pop_front(), round);
        assert_eq!(ring.pop_front(), round + 10);
        assert!(ring.is_empty());
    }
    assert_eq!(ring.capacity(), 2);
}
