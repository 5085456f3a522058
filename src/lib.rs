//! Fixed-capacity circular buffer with overwrite-on-full writes.
//!
//! [`RingBuffer`] keeps the most recent `capacity` elements of a stream:
//! writing to a full buffer silently discards the oldest element, reading
//! drains oldest-first, and [`RingBuffer::snapshot`] copies the live
//! contents in logical order. The backing storage is allocated once at
//! construction and never resized.
//!
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut ring = RingBuffer::new(3);
//! ring.push(10);
//! ring.push(20);
//! ring.push(30);
//! ring.push(40); // full: 10 is evicted
//! assert_eq!(ring.snapshot(), vec![20, 30, 40]);
//! assert_eq!(ring.pop(), Some(20));
//! ```
//!
//! The buffer is single-owner and unsynchronized; wrap it in a lock if it
//! has to be shared across threads.

mod ring;

pub use ring::{Iter, RingBuffer};
