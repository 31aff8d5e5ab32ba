use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::iter::{FusedIterator, Iterator};

use crate::words::{WORD_BITS, WORD_BYTES, WordStore, idxs};
use crate::{BitOrder, Error};

/// A bit vector living directly inside a caller-supplied byte buffer.
///
/// Bit `i` lives in the 8-byte word at offset `(i / 64) * 8`. The word is
/// read as a `u64` in the vector's [`BitOrder`] and bit `i % 64` of that
/// integer (0 being the least significant) is the bit's value. The buffer is
/// never copied: every mutation is visible in it once the vector is dropped.
///
/// Out-of-range indices are not errors. [`get`] reports them as unset,
/// [`set`] and [`unset`] return `false`.
///
/// A growable vector extends itself when [`set`] targets a bit past the end.
/// Growth moves the bits into a private store and from then on the caller's
/// buffer is no longer read or written (see [`is_detached`]).
///
/// # Examples
/// ```
/// use light_bitvec::{BitOrder, BitVec};
///
/// let mut buf = [0u8; 16];
/// let mut bv = BitVec::fixed(&mut buf, BitOrder::Big).unwrap();
/// assert!(bv.set(0));
/// assert!(bv.set(10));
/// assert!(!bv.set(128));
/// drop(bv);
/// assert_eq!(buf[..8], [0, 0, 0, 0, 0, 0, 4, 1]);
/// ```
///
/// [`get`]: BitVec::get
/// [`set`]: BitVec::set
/// [`unset`]: BitVec::unset
/// [`is_detached`]: BitVec::is_detached
pub struct BitVec<'buf> {
    words: WordStore<'buf>,
    order: BitOrder,
    growable: bool,
}

impl<'buf> BitVec<'buf> {
    /// Creates a bit vector over `bytes` using `order`.
    ///
    /// `bytes` keeps its current contents, so a buffer filled by an earlier
    /// vector is read back unchanged. With `growable` set, [`set`] past the
    /// end enlarges the vector instead of failing.
    ///
    /// # Errors
    /// - [`Error::InvalidLength`] if `bytes` is empty or its length is not
    ///   a multiple of 8.
    /// - [`Error::UnsupportedArchitecture`] if the host is neither little
    ///   nor big endian.
    ///
    /// Unknown orders cannot be expressed as a [`BitOrder`]; raw values are
    /// validated by its `TryFrom<u8>` and `FromStr` impls.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec, Error};
    ///
    /// let mut buf = vec![0u8; 24];
    /// let bv = BitVec::new(&mut buf, BitOrder::Little, false).unwrap();
    /// assert_eq!(bv.bit_len(), 192);
    ///
    /// let mut odd = [0u8; 100];
    /// assert_eq!(
    ///     BitVec::new(&mut odd, BitOrder::Little, false).err(),
    ///     Some(Error::InvalidLength { len: 100 }),
    /// );
    /// ```
    ///
    /// [`set`]: BitVec::set
    pub fn new(bytes: &'buf mut [u8], order: BitOrder, growable: bool) -> Result<Self, Error> {
        if bytes.is_empty() || bytes.len() % WORD_BYTES != 0 {
            return Err(Error::InvalidLength { len: bytes.len() });
        }
        let native = BitOrder::native()?;
        Ok(Self {
            words: WordStore::new(bytes, order != native),
            order,
            growable,
        })
    }

    /// Creates a bit vector that never grows past `bytes`.
    ///
    /// Same as [`new`] with `growable` unset.
    ///
    /// [`new`]: BitVec::new
    pub fn fixed(bytes: &'buf mut [u8], order: BitOrder) -> Result<Self, Error> {
        Self::new(bytes, order, false)
    }

    /// Creates a bit vector that grows when setting bits past its end.
    ///
    /// Same as [`new`] with `growable` set.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0u8; 8];
    /// let mut bv = BitVec::growable(&mut buf, BitOrder::Little).unwrap();
    /// assert!(bv.set(1000));
    /// assert!(bv.is_detached());
    /// assert!(bv.get(1000));
    /// ```
    ///
    /// [`new`]: BitVec::new
    pub fn growable(bytes: &'buf mut [u8], order: BitOrder) -> Result<Self, Error> {
        Self::new(bytes, order, true)
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// Indices past the end are reported as unset.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0b0000_0010u8, 0, 0, 0, 0, 0, 0, 0];
    /// let bv = BitVec::fixed(&mut buf, BitOrder::Little).unwrap();
    /// assert!(bv.get(1));
    /// assert!(!bv.get(0));
    /// assert!(!bv.get(64));
    /// ```
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        let (word_idx, bit) = idxs(idx);
        if word_idx >= self.words.len() {
            return false;
        }
        self.words.value(word_idx) & 1 << bit != 0
    }

    /// Sets the bit at the given index.
    ///
    /// Returns `false` and leaves the vector unchanged if the index is past
    /// the end and the vector either is not growable or cannot allocate the
    /// required capacity.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0u8; 16];
    /// let mut bv = BitVec::fixed(&mut buf, BitOrder::Little).unwrap();
    /// assert!(bv.set(127));
    /// assert!(!bv.set(128));
    /// assert_eq!(bv.count(), 1);
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize) -> bool {
        let (word_idx, bit) = idxs(idx);
        if word_idx >= self.words.len() && !(self.growable && self.words.grow_to(word_idx + 1)) {
            return false;
        }
        self.words.update(word_idx, |word| word | 1 << bit);
        true
    }

    /// Unsets the bit at the given index.
    ///
    /// Returns `false` if the index is past the end. Unlike [`set`] this
    /// never grows the vector.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0xffu8; 8];
    /// let mut bv = BitVec::growable(&mut buf, BitOrder::Big).unwrap();
    /// assert!(bv.unset(3));
    /// assert!(!bv.get(3));
    /// assert!(!bv.unset(64));
    /// assert_eq!(bv.word_len(), 1);
    /// ```
    ///
    /// [`set`]: BitVec::set
    #[inline]
    pub fn unset(&mut self, idx: usize) -> bool {
        let (word_idx, bit) = idxs(idx);
        if word_idx >= self.words.len() {
            return false;
        }
        self.words.update(word_idx, |word| word & !(1 << bit));
        true
    }

    /// Toggles the bit at the given index.
    ///
    /// Returns the previous value of the bit, or `None` if the index is past
    /// the end. Never grows the vector.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0u8; 8];
    /// let mut bv = BitVec::fixed(&mut buf, BitOrder::Little).unwrap();
    /// assert_eq!(bv.toggle(4), Some(false)); // flipped from false to true
    /// assert_eq!(bv.toggle(4), Some(true));  // flipped from true to false
    /// assert_eq!(bv.toggle(64), None);
    /// ```
    pub fn toggle(&mut self, idx: usize) -> Option<bool> {
        let (word_idx, bit) = idxs(idx);
        if word_idx >= self.words.len() {
            return None;
        }
        let was_set = self.words.value(word_idx) & 1 << bit != 0;
        self.words.update(word_idx, |word| word ^ 1 << bit);
        Some(was_set)
    }

    /// Returns the index of the first set bit at or after `from`.
    ///
    /// Returns `None` if `from` is past the end or no later bit is set.
    /// Runs in O(w) where w is the number of words after `from`.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0u8; 24];
    /// let mut bv = BitVec::fixed(&mut buf, BitOrder::Big).unwrap();
    /// bv.set(3);
    /// bv.set(130);
    /// assert_eq!(bv.find_first_one(0), Some(3));
    /// assert_eq!(bv.find_first_one(4), Some(130));
    /// assert_eq!(bv.find_first_one(131), None);
    /// ```
    pub fn find_first_one(&self, from: usize) -> Option<usize> {
        let (word_idx, bit) = idxs(from);
        if word_idx >= self.words.len() {
            return None;
        }
        let head = self.words.value(word_idx) >> bit;
        if head != 0 {
            return Some(from + head.trailing_zeros() as usize);
        }
        (word_idx + 1..self.words.len())
            .find(|&i| self.words.raw(i) != 0)
            .map(|i| i * WORD_BITS + self.words.value(i).trailing_zeros() as usize)
    }

    /// Returns the index of the first unset bit at or after `from`.
    ///
    /// Returns `None` if `from` is past the end or every later bit is set.
    ///
    /// The vector has no length finer than whole words, so the padding bits
    /// of the last word count as ordinary unset bits. Callers tracking a
    /// shorter logical length must ignore results at or beyond it.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0xffu8; 16];
    /// let mut bv = BitVec::fixed(&mut buf, BitOrder::Little).unwrap();
    /// assert_eq!(bv.find_first_zero(0), None);
    /// bv.unset(70);
    /// assert_eq!(bv.find_first_zero(0), Some(70));
    /// assert_eq!(bv.find_first_zero(71), None);
    /// ```
    pub fn find_first_zero(&self, from: usize) -> Option<usize> {
        let (word_idx, bit) = idxs(from);
        if word_idx >= self.words.len() {
            return None;
        }
        // shifting fills with zeros, so only positions below the shifted
        // width are real
        let trail = (!(self.words.value(word_idx) >> bit)).trailing_zeros();
        if trail < WORD_BITS as u32 - bit {
            return Some(from + trail as usize);
        }
        (word_idx + 1..self.words.len())
            .find(|&i| self.words.raw(i) != u64::MAX)
            .map(|i| i * WORD_BITS + (!self.words.value(i)).trailing_zeros() as usize)
    }

    /// Returns the index of the last set bit, or `None` if no bit is set.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0u8; 16];
    /// let mut bv = BitVec::fixed(&mut buf, BitOrder::Big).unwrap();
    /// assert_eq!(bv.find_last_one(), None);
    /// bv.set(0);
    /// bv.set(8);
    /// assert_eq!(bv.find_last_one(), Some(8));
    /// ```
    pub fn find_last_one(&self) -> Option<usize> {
        (0..self.words.len())
            .rev()
            .find(|&i| self.words.raw(i) != 0)
            .map(|i| {
                let top = WORD_BITS - 1 - self.words.value(i).leading_zeros() as usize;
                i * WORD_BITS + top
            })
    }

    /// Returns the number of set bits.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0x0fu8, 0, 0, 0, 0, 0, 0, 0x80];
    /// let bv = BitVec::fixed(&mut buf, BitOrder::Big).unwrap();
    /// assert_eq!(bv.count(), 5);
    /// ```
    pub fn count(&self) -> usize {
        // byte swapping preserves the popcount, so raw words will do
        (0..self.words.len())
            .map(|i| self.words.raw(i).count_ones() as usize)
            .sum()
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// Iterating through the entire iterator runs in O(max(k, w)) where k is
    /// the number of set bits and w the number of words.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0u8; 16];
    /// let mut bv = BitVec::fixed(&mut buf, BitOrder::Big).unwrap();
    /// for idx in [1, 64, 100] {
    ///     bv.set(idx);
    /// }
    /// assert_eq!(bv.iter_ones().collect::<Vec<_>>(), [1, 64, 100]);
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_, 'buf> {
        IterOnes {
            words: &self.words,
            word_idx: 0,
            current: self.words.value_or(0, 0),
            base_bit_idx: 0,
        }
    }

    /// Returns an iterator over the indices of all unset bits, in ascending
    /// order.
    ///
    /// Like [`find_first_zero`] this includes the padding bits of the last
    /// word.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0xffu8; 8];
    /// let mut bv = BitVec::fixed(&mut buf, BitOrder::Little).unwrap();
    /// bv.unset(2);
    /// bv.unset(63);
    /// assert_eq!(bv.iter_zeros().collect::<Vec<_>>(), [2, 63]);
    /// ```
    ///
    /// [`find_first_zero`]: BitVec::find_first_zero
    #[inline]
    pub fn iter_zeros(&self) -> IterZeros<'_, 'buf> {
        IterZeros {
            words: &self.words,
            word_idx: 0,
            current: !self.words.value_or(0, u64::MAX),
            base_bit_idx: 0,
        }
    }

    /// Returns the bit order the vector was created with.
    #[inline]
    pub fn order(&self) -> BitOrder {
        self.order
    }

    /// Returns `true` if the requested order differs from the host's, so
    /// that every word is byte swapped on access.
    #[inline]
    pub fn needs_byte_swap(&self) -> bool {
        self.words.needs_swap()
    }

    /// Returns `true` if setting bits past the end grows the vector.
    #[inline]
    pub fn is_growable(&self) -> bool {
        self.growable
    }

    /// Returns `true` once growth has moved the bits out of the caller's
    /// buffer.
    ///
    /// A detached vector neither reads nor writes the original buffer
    /// anymore; use [`to_bytes`] to retrieve its contents.
    ///
    /// [`to_bytes`]: BitVec::to_bytes
    #[inline]
    pub fn is_detached(&self) -> bool {
        self.words.is_detached()
    }

    /// Returns the number of 64-bit words.
    #[inline]
    pub fn word_len(&self) -> usize {
        self.words.len()
    }

    /// Returns the number of words the vector can hold without
    /// reallocating.
    ///
    /// Equal to [`word_len`] until the vector is detached.
    ///
    /// [`word_len`]: BitVec::word_len
    #[inline]
    pub fn word_capacity(&self) -> usize {
        self.words.capacity()
    }

    /// Returns the number of addressable bits, always a multiple of 64.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Returns the current contents laid out exactly as they would be in
    /// the caller's buffer.
    ///
    /// # Examples
    /// ```
    /// use light_bitvec::{BitOrder, BitVec};
    ///
    /// let mut buf = [0u8; 8];
    /// let mut bv = BitVec::growable(&mut buf, BitOrder::Little).unwrap();
    /// bv.set(64);
    /// assert_eq!(bv.to_bytes(), [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0]);
    /// ```
    pub fn to_bytes(&self) -> Vec<u8> {
        self.words.to_bytes()
    }
}

impl Debug for BitVec<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB -> ")?;
        let bit_len = self.bit_len();
        for i in 0..bit_len {
            if i % 8 == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if self.get(i) { '1' } else { '0' })?;
            if i % 8 == 7 && i < bit_len - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}

/// Iterator over the indices of set bits in the vector.
///
/// Yields the positions of all bits that are set, in ascending order.
///
/// Returned by [`BitVec::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'bv, 'buf> {
    words: &'bv WordStore<'buf>,
    word_idx: usize,
    current: u64,
    base_bit_idx: usize,
}

impl Iterator for IterOnes<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.words.len() {
            if self.current != 0 {
                let tz = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1; // unset LSB
                return Some(self.base_bit_idx + tz);
            }

            self.word_idx += 1;
            self.base_bit_idx += WORD_BITS;
            self.current = self.words.value_or(self.word_idx, 0);
        }
        None
    }
}

impl FusedIterator for IterOnes<'_, '_> {}

/// Iterator over the indices of unset bits in the vector.
///
/// Yields the positions of all bits that are unset, in ascending order.
///
/// Returned by [`BitVec::iter_zeros()`].
#[derive(Clone, Copy)]
pub struct IterZeros<'bv, 'buf> {
    words: &'bv WordStore<'buf>,
    word_idx: usize,
    current: u64,
    base_bit_idx: usize,
}

impl Iterator for IterZeros<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.word_idx < self.words.len() {
            if self.current != 0 {
                let tz = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1; // unset LSB
                return Some(self.base_bit_idx + tz);
            }

            self.word_idx += 1;
            self.base_bit_idx += WORD_BITS;
            self.current = !self.words.value_or(self.word_idx, u64::MAX);
        }
        None
    }
}

impl FusedIterator for IterZeros<'_, '_> {}
