use alloc::vec::Vec;

/// Width of a storage word in bytes.
pub(crate) const WORD_BYTES: usize = 8;
/// Width of a storage word in bits.
pub(crate) const WORD_BITS: usize = 64;

/// Largest word count whose grown capacity is doubled; larger stores grow
/// by a quarter.
const DOUBLING_LIMIT: usize = 1024;

/// Splits a bit index into its word index and the bit position inside the
/// order-consistent word value.
#[inline]
pub(crate) const fn idxs(idx: usize) -> (usize, u32) {
    (idx >> 6, (idx & (WORD_BITS - 1)) as u32)
}

/// Capacity in words to allocate when growing to `len` words, or `None` if
/// it cannot be represented.
pub(crate) const fn grown_capacity(len: usize) -> Option<usize> {
    if len > DOUBLING_LIMIT {
        len.checked_add(len / 4)
    } else {
        len.checked_add(len)
    }
}

#[inline]
fn load(chunk: &[u8]) -> u64 {
    let mut word = [0u8; WORD_BYTES];
    word.copy_from_slice(chunk);
    u64::from_ne_bytes(word)
}

enum Backing<'buf> {
    /// The caller's buffer, read and written in place.
    Borrowed(&'buf mut [u8]),
    /// Private store that replaced the caller's buffer after growth.
    Owned(Vec<u64>),
}

/// Sequence of 64-bit words over either the caller's bytes or an owned
/// store.
///
/// Words are always loaded and stored in native layout. `value` and
/// `update` reconcile that layout with the requested bit order by byte
/// swapping when the two differ, so callers only ever see order-consistent
/// values. Loading goes through 8-byte copies of the word slot, which keeps
/// unaligned buffers usable without reinterpreting the slice.
pub(crate) struct WordStore<'buf> {
    backing: Backing<'buf>,
    swap: bool,
}

impl<'buf> WordStore<'buf> {
    /// `bytes.len()` must be a multiple of [`WORD_BYTES`].
    pub(crate) fn new(bytes: &'buf mut [u8], swap: bool) -> Self {
        debug_assert_eq!(bytes.len() % WORD_BYTES, 0);
        Self {
            backing: Backing::Borrowed(bytes),
            swap,
        }
    }

    #[inline]
    pub(crate) fn needs_swap(&self) -> bool {
        self.swap
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        match &self.backing {
            Backing::Borrowed(bytes) => bytes.len() / WORD_BYTES,
            Backing::Owned(words) => words.len(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        match &self.backing {
            Backing::Borrowed(bytes) => bytes.len() / WORD_BYTES,
            Backing::Owned(words) => words.capacity(),
        }
    }

    pub(crate) fn is_detached(&self) -> bool {
        matches!(self.backing, Backing::Owned(_))
    }

    /// Word `idx` exactly as stored, in native layout.
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub(crate) fn raw(&self, idx: usize) -> u64 {
        match &self.backing {
            Backing::Borrowed(bytes) => load(&bytes[idx * WORD_BYTES..(idx + 1) * WORD_BYTES]),
            Backing::Owned(words) => words[idx],
        }
    }

    #[inline]
    fn store_raw(&mut self, idx: usize, word: u64) {
        match &mut self.backing {
            Backing::Borrowed(bytes) => bytes[idx * WORD_BYTES..(idx + 1) * WORD_BYTES]
                .copy_from_slice(&word.to_ne_bytes()),
            Backing::Owned(words) => words[idx] = word,
        }
    }

    /// Order-consistent value of word `idx`.
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub(crate) fn value(&self, idx: usize) -> u64 {
        self.reconcile(self.raw(idx))
    }

    /// Order-consistent value of word `idx`, or `fallback` past the end.
    #[inline]
    pub(crate) fn value_or(&self, idx: usize, fallback: u64) -> u64 {
        if idx < self.len() {
            self.value(idx)
        } else {
            fallback
        }
    }

    /// Converts between native layout and order-consistent value. The
    /// conversion is its own inverse.
    #[inline]
    pub(crate) fn reconcile(&self, word: u64) -> u64 {
        if self.swap { word.swap_bytes() } else { word }
    }

    /// Rewrites word `idx` with `f` applied to its order-consistent value.
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub(crate) fn update(&mut self, idx: usize, f: impl FnOnce(u64) -> u64) {
        let word = self.reconcile(f(self.value(idx)));
        self.store_raw(idx, word);
    }

    /// Extends the store to at least `len` words, all new words zero.
    ///
    /// Stays inside the current capacity when possible. Otherwise moves
    /// every word into a fresh owned store with headroom from
    /// [`grown_capacity`], after which the caller's buffer is no longer
    /// read or written. Returns `false` and leaves the store untouched if
    /// the capacity cannot be represented or allocated.
    pub(crate) fn grow_to(&mut self, len: usize) -> bool {
        if len <= self.len() {
            return true;
        }
        match &mut self.backing {
            Backing::Owned(words) if len <= words.capacity() => {
                words.resize(len, 0);
            }
            Backing::Owned(words) => {
                let Some(capacity) = grown_capacity(len) else {
                    return false;
                };
                if words.try_reserve_exact(capacity - words.len()).is_err() {
                    return false;
                }
                words.resize(len, 0);
            }
            Backing::Borrowed(bytes) => {
                let Some(capacity) = grown_capacity(len) else {
                    return false;
                };
                let mut words = Vec::new();
                if words.try_reserve_exact(capacity).is_err() {
                    return false;
                }
                words.extend(bytes.chunks_exact(WORD_BYTES).map(load));
                words.resize(len, 0);
                self.backing = Backing::Owned(words);
            }
        }
        true
    }

    /// Current contents as bytes, laid out exactly as in the caller's
    /// buffer.
    pub(crate) fn to_bytes(&self) -> Vec<u8> {
        match &self.backing {
            Backing::Borrowed(bytes) => bytes.to_vec(),
            Backing::Owned(words) => words.iter().flat_map(|w| w.to_ne_bytes()).collect(),
        }
    }
}
