//! # unilib
//!
//! Small generic containers that keep ownership explicit.
//!
//! This crate provides [`Sequence`], [`Optional`] and the [`ExternalIterator`] capability.
//!
//! ## Key Features
//!
//! * **Double-ended sequence:** [`Sequence`] (also exported as [`Queue`] and [`Deque`])
//!   pushes and pops at both ends, grows one slot at a time and can be resized explicitly.
//!   Shrinking below the current length drops the back-most elements.
//! * **Two ownership modes:** owning pushes move the element in and hand it back on
//!   failure; copy pushes store a clone.
//! * **Status codes:** every mutating operation reports a [`SequenceError`] whose numeric
//!   code is stable (`0` is success).
//! * **Pull iterators:** [`FnIterator`] assembles a source from a state value and two
//!   closures; [`IterSource`] adapts any standard iterator.
//!
//! ## Examples
//!
//! ### Sequence
//!
//! ```rust
//! use unilib::Sequence;
//!
//! // Default capacity is a single slot.
//! let mut seq: Sequence<i32> = Sequence::new().unwrap();
//! assert_eq!(seq.capacity(), 1);
//!
//! seq.push_back(7).unwrap();
//! seq.push_front(3).unwrap();
//! seq.push_back(9).unwrap();
//!
//! // Grew one slot per overflowing push.
//! assert_eq!(seq.capacity(), 3);
//! assert_eq!(seq.front(), Some(&3));
//! assert_eq!(seq.back(), Some(&9));
//!
//! // Shrinking below the length drops the back.
//! seq.resize(2).unwrap();
//! assert_eq!(seq.pop_back(), Some(7));
//! ```
//!
//! ### Optional
//!
//! ```rust
//! use unilib::Optional;
//!
//! let mut value = Optional::present(String::from("payload"));
//! assert!(value.is_present());
//!
//! value.release();
//! assert!(value.is_empty());
//! ```
//!
//! ### ExternalIterator
//!
//! ```rust
//! use unilib::{ExternalIterator, FnIterator};
//!
//! let mut it = FnIterator::new(
//!     vec![10, 20, 30].into_iter(),
//!     |source: &mut std::vec::IntoIter<i32>| source.next(),
//!     drop,
//! );
//!
//! assert_eq!(it.advance(), Some(10));
//! assert_eq!(ExternalIterator::advance_by(&mut it, 5), 2);
//! assert_eq!(it.advance(), None);
//! it.release();
//! ```

// --- Module Declarations ---

pub mod error;
pub mod iter;
pub mod optional;
pub mod sequence;

// --- Re-exports ---

pub use error::{PushError, Result, STATUS_OK, SequenceError, is_ok, status_code};
pub use iter::{ExternalIterator, FnIterator, IterSource};
pub use optional::{Optional, OptionalTag};
pub use sequence::{AnySequence, DEFAULT_CAPACITY, Deque, Queue, Sequence};
