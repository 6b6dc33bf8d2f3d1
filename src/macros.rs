/// Packs a string literal into an [`Atom`](crate::Atom) at compile time.
///
/// The expansion forces const evaluation, so a literal that is too long to
/// pack is a build failure, never a runtime panic.
///
/// # Examples
/// ```
/// use atom64::atom;
///
/// let kind = atom!("mesh");
/// assert_eq!(kind.as_u64(), 0x6873_656d);
/// ```
///
/// ```compile_fail
/// # use atom64::atom;
/// let nope = atom!("unpackable");
/// ```
#[macro_export]
macro_rules! atom {
    ($text:expr) => {{
        const __ATOM: $crate::Atom = $crate::Atom::new($text);
        __ATOM
    }};
}
