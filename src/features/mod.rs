//! A module that contains the implementations for optional features. For example `serde` support

#[cfg(feature = "proptest")]
mod proptest;
#[cfg(feature = "serde")]
mod serde;
