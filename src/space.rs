//! Capacity types for the inline buffer.
//!
//! A space type only contributes its size and alignment; no value of it is
//! ever created. Any type works as a space, including a custom one:
//!
//! ```
//! use polybox::Poly;
//!
//! type Wide = [u64; 24];
//!
//! let held: Poly<[u8; 100], Wide> = Poly::new([0; 100]);
//! assert!(!held.is_heap());
//! ```

/// One machine word of inline capacity.
pub type S1 = [usize; 1];

/// Two machine words of inline capacity.
pub type S2 = [usize; 2];

/// Four machine words of inline capacity.
pub type S4 = [usize; 4];

/// Eight machine words of inline capacity.
pub type S8 = [usize; 8];

/// Sixteen machine words of inline capacity.
pub type S16 = [usize; 16];

/// Thirty-two machine words of inline capacity.
pub type S32 = [usize; 32];

/// Sixty-four machine words of inline capacity.
pub type S64 = [usize; 64];

/// The default inline capacity: seven machine words.
pub type DefaultSpace = [usize; 7];
