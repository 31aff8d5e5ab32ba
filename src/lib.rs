//! A zero-copy bit vector over borrowed byte buffers, written in pure Rust.
//! `no_std` + `alloc`, no `unsafe`.
//!
//! [`BitVec`] reads and writes bits directly inside a caller-supplied
//! `&mut [u8]`, so the buffer itself is the stored representation: a bitmap
//! read from disk or received over the network can be queried and updated in
//! place, and written back as-is.
//!
//! # Examples
//! ```
//! use light_bitvec::{BitOrder, BitVec};
//!
//! let mut buf = [0u8; 24];
//! let mut bv = BitVec::fixed(&mut buf, BitOrder::Little).unwrap();
//! assert_eq!(bv.count(), 0);
//! assert!(!bv.get(10));
//! assert!(bv.set(10));
//! assert!(bv.get(10));
//! assert_eq!(bv.count(), 1);
//! drop(bv);
//! assert_eq!(buf[1], 0b100);
//! ```
//!
//! # Bit order
//!
//! The buffer is split into 8-byte words. Each word is interpreted as a
//! `u64` in the requested [`BitOrder`], independent of the host's own byte
//! order, and bit `i` of the vector is bit `i % 64` of word `i / 64`. The
//! host order is detected once at compile time ([`NATIVE_ORDER`]); when it
//! differs from the requested one, words are byte swapped on access.
//!
//! Setting bits `{0, 1, 3, 6, 10, 64, 127}` in a 24-byte buffer gives:
//!
//! | order                | bytes                                              |
//! |----------------------|----------------------------------------------------|
//! | [`BitOrder::Little`] | `75 4 0 0 0 0 0 0 · 1 0 0 0 0 0 0 128 · 0 …`       |
//! | [`BitOrder::Big`]    | `0 0 0 0 0 0 4 75 · 128 0 0 0 0 0 0 1 · 0 …`       |
//!
//! # Features
//!
//! - `#![no_std]` compatible, only `alloc` is needed for growth
//! - No copy of the caller's buffer, unaligned buffers are fine
//! - Per-bit operations that report out-of-range indices instead of
//!   panicking: `get`, `set`, `unset`, `toggle`
//! - Scans: `find_first_one`, `find_first_zero`, `find_last_one`, `count`
//! - Efficient iteration over set or unset bits:
//!   - `iter_ones()` (indices of set bits)
//!   - `iter_zeros()` (indices of unset bits)
//! - Optional geometric growth when setting bits past the end
//!
//! # Growth
//!
//! A vector created with [`BitVec::growable`] enlarges itself when `set`
//! targets a bit past its end. The first growth moves every bit into a
//! private store with spare capacity, after which the caller's buffer is
//! left as it was at that moment. Errors only ever come from construction;
//! a refused growth simply makes `set` return `false`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bitvec;
mod error;
mod order;
mod words;

pub use bitvec::{BitVec, IterOnes, IterZeros};
pub use error::Error;
pub use order::{BitOrder, NATIVE_ORDER, resolve_native_order};
