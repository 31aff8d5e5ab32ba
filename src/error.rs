use thiserror::Error;

/// Errors raised while constructing a [`BitVec`] or parsing a [`BitOrder`].
///
/// Once a vector exists none of its operations fail with an error;
/// out-of-range indices and refused growth are reported through `bool` or
/// `Option` results instead.
///
/// [`BitVec`]: crate::BitVec
/// [`BitOrder`]: crate::BitOrder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The buffer length is zero or not a multiple of the word width.
    #[error("buffer length {len} must be a positive multiple of 8 bytes")]
    InvalidLength {
        /// Length of the rejected buffer in bytes.
        len: usize,
    },

    /// The requested bit order names neither little nor big endian.
    #[error("unsupported bit order")]
    InvalidOrder,

    /// The host stores integers in neither little nor big endian layout.
    #[error("unsupported host byte order")]
    UnsupportedArchitecture,
}
