//! Dynamic array views over shared fixed-size buffers.
//!
//! The two types of this crate split storage from visibility:
//!
//! - [`Buffer`]: a contiguous block of element slots, allocated once and
//!   never resized in place, shared by any number of views.
//! - [`View`]: a cheaply cloneable handle describing a visible window
//!   (offset + length) into a buffer, with room to grow up to the buffer's
//!   end (capacity).
//!
//! Views over the same buffer alias: an in-place write through one view is
//! observable through every other view whose range covers the written
//! index. [`View::append`] preserves this sharing while spare capacity
//! remains and silently moves to a freshly allocated buffer once it runs
//! out, at which point the aliasing is broken. Callers must not assume
//! either outcome; [`View::shares_buffer`] makes the distinction testable.
//!
//! ```
//! use vecview::View;
//!
//! let v = View::from_vec(vec![1, 2, 3, 4, 5]);
//! let s = v.slice(1, 4)?;
//! assert_eq!(s.to_vec(), vec![2, 3, 4]);
//! assert_eq!((s.len(), s.capacity()), (3, 4));
//! # Ok::<(), vecview_common::error::Error>(())
//! ```

pub mod buffer;
mod growth;
pub mod view;

pub use buffer::Buffer;
pub use view::View;
