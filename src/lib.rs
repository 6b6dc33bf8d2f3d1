#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use core::fmt;
use core::str::FromStr;

use static_assertions::{
    assert_eq_align,
    assert_eq_size,
};

mod features;
mod macros;


/// An [`Atom`] is a short string packed into a single `u64`, cheap to create,
/// copy, and compare.
///
/// Byte `i` of the string occupies byte `i` of the integer's little-endian
/// representation, and every byte past the end of the string is zero, the same
/// layout a null-terminated C string would have in an 8 byte buffer. Because
/// each source byte lands in its own fixed position, the packing is injective:
/// two atoms are equal if and only if their source strings are equal.
///
/// ## Using `Atom`
/// ```
/// use atom64::{atom, Atom};
/// # use std::collections::HashMap;
///
/// // atoms are ordinary values, use them like you would an integer
/// let mut sizes: HashMap<Atom, u32> = HashMap::new();
/// sizes.insert(Atom::new("mesh"), 1024);
/// sizes.insert(Atom::new("audio"), 4096);
///
/// // comparing two atoms is a single u64 compare
/// assert_eq!(sizes.get(&atom!("mesh")), Some(&1024));
///
/// // construction from a literal folds to a constant
/// const KIND_MESH: Atom = Atom::new("mesh");
/// assert_eq!(KIND_MESH, atom!("mesh"));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Atom(u64);

impl Atom {
    /// The maximum number of bytes of text an [`Atom`] can hold.
    ///
    /// This is one less than the size of the packed value, the last byte is
    /// reserved for the zero terminator.
    pub const MAX_LEN: usize = 7;

    /// The atom of the empty string. Its packed value is `0`.
    pub const EMPTY: Self = Atom(0);

    /// Packs `text` into a new [`Atom`].
    ///
    /// This is a `const fn`, so packing a literal costs nothing at runtime,
    /// the call site folds to a single integer constant.
    ///
    /// # Examples
    /// ```
    /// use atom64::Atom;
    ///
    /// const DEFAULT_KIND: Atom = Atom::new("none");
    ///
    /// assert_eq!(Atom::new("Atom 0").as_u64(), 52915833107521);
    /// assert_ne!(Atom::new("Atom 0"), Atom::new("Atom 1"));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than [`Atom::MAX_LEN`] bytes. In a const
    /// context the panic occurs while evaluating the constant, so an
    /// over-length literal fails to build instead of failing at runtime.
    ///
    /// ```compile_fail
    /// # use atom64::Atom;
    /// const LONG: Atom = Atom::new("much too long to pack");
    /// ```
    #[inline]
    pub const fn new(text: &str) -> Self {
        match Self::try_new(text) {
            Ok(atom) => atom,
            Err(_) => panic!("an Atom holds at most 7 bytes of text (8 including the terminator)"),
        }
    }

    /// Packs `text` into a new [`Atom`], returning an error if it's too long.
    ///
    /// Use this form when the string isn't known until runtime. The only
    /// failure mode is an over-length input; there is no truncation and no
    /// partially-packed value.
    ///
    /// # Examples
    /// ```
    /// use atom64::Atom;
    ///
    /// assert!(Atom::try_new("sprite").is_ok());
    ///
    /// let err = Atom::try_new("translation").unwrap_err();
    /// assert_eq!(err.length(), 11);
    /// ```
    #[inline]
    pub const fn try_new(text: &str) -> Result<Self, TooLongError> {
        let bytes = text.as_bytes();

        if bytes.len() > Self::MAX_LEN {
            return Err(TooLongError { length: bytes.len() });
        }

        let mut raw = 0u64;

        // Note: for loops aren't allowed in `const fn`, hence the while
        let mut i = 0;
        while i < bytes.len() {
            raw |= (bytes[i] as u64) << (i * 8);
            i += 1;
        }

        Ok(Atom(raw))
    }

    /// Creates an [`Atom`] directly from a packed `u64`.
    ///
    /// The layout contract is: byte `i` of the little-endian representation
    /// is byte `i` of the text, and all bytes past the text are zero. A raw
    /// value that doesn't follow the contract still compares bitwise, but
    /// [`len`](Atom::len) and the `Display` impl treat the first zero byte as
    /// the end of the text.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Atom(raw)
    }

    /// Returns the packed value.
    ///
    /// # Examples
    /// ```
    /// # use atom64::Atom;
    /// assert_eq!(Atom::new("").as_u64(), 0);
    /// assert_eq!(Atom::new("a").as_u64(), 0x61);
    /// ```
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Returns the packed value as its 8 byte little-endian representation.
    ///
    /// This is the contractual byte view: `to_le_bytes()[i]` equals byte `i`
    /// of the source text for `i < len()`, and `0` everywhere else,
    /// regardless of host endianness.
    ///
    /// # Examples
    /// ```
    /// # use atom64::Atom;
    /// let bytes = Atom::new("hi").to_le_bytes();
    /// assert_eq!(&bytes[..2], b"hi");
    /// assert_eq!(&bytes[2..], &[0; 6]);
    /// ```
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }

    /// Returns the length of the text in bytes, i.e. the number of bytes
    /// before the first zero byte of the packed value.
    ///
    /// # Examples
    /// ```
    /// # use atom64::Atom;
    /// assert_eq!(Atom::new("mesh").len(), 4);
    /// assert_eq!(Atom::EMPTY.len(), 0);
    /// ```
    #[inline]
    pub const fn len(self) -> usize {
        let bytes = self.0.to_le_bytes();

        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == 0 {
                return i;
            }
            i += 1;
        }
        bytes.len()
    }

    /// Returns `true` if the atom holds no text.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }
}

impl Default for Atom {
    #[inline]
    fn default() -> Self {
        Atom::EMPTY
    }
}

impl FromStr for Atom {
    type Err = TooLongError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Atom::try_new(s)
    }
}

impl TryFrom<&str> for Atom {
    type Error = TooLongError;

    #[inline]
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Atom::try_new(text)
    }
}

impl From<Atom> for u64 {
    #[inline]
    fn from(atom: Atom) -> Self {
        atom.as_u64()
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0.to_le_bytes();
        match core::str::from_utf8(&bytes[..self.len()]) {
            Ok(text) => f.debug_tuple("Atom").field(&text).finish(),
            // only reachable via `from_raw` with non UTF-8 bytes
            Err(_) => f.debug_tuple("Atom").field(&format_args!("{:#018x}", self.0)).finish(),
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.0.to_le_bytes();
        let mut rest = &bytes[..self.len()];

        // Atoms built from a `&str` are always valid UTF-8, so the common
        // case is a single write. `from_raw` can smuggle in arbitrary bytes,
        // those render as U+FFFD like `String::from_utf8_lossy`
        while !rest.is_empty() {
            match core::str::from_utf8(rest) {
                Ok(text) => return f.write_str(text),
                Err(err) => {
                    let valid = &rest[..err.valid_up_to()];
                    // SAFETY: we split at `valid_up_to`, so this prefix is valid UTF-8
                    f.write_str(unsafe { core::str::from_utf8_unchecked(valid) })?;
                    f.write_str("\u{FFFD}")?;

                    rest = match err.error_len() {
                        Some(len) => &rest[err.valid_up_to() + len..],
                        None => &[],
                    };
                }
            }
        }
        Ok(())
    }
}

/// The error returned when a string is too long to pack into an [`Atom`].
///
/// This is the only way packing can fail. It signals a programming error at
/// the call site, not a recoverable runtime condition, which is why
/// [`Atom::new`] turns it into a panic (a build failure in const contexts).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TooLongError {
    length: usize,
}

impl TooLongError {
    /// The length in bytes of the string that failed to pack.
    #[inline]
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for TooLongError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "string is {} bytes long, but an Atom holds at most {}",
            self.length,
            Atom::MAX_LEN,
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TooLongError {}

assert_eq_size!(Atom, u64);
assert_eq_align!(Atom, u64);
