//! Implements the [`proptest::arbitrary::Arbitrary`] trait for [`Atom`]

use proptest::arbitrary::Arbitrary;
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;

use crate::Atom;

impl Arbitrary for Atom {
    type Parameters = ();
    type Strategy = BoxedStrategy<Atom>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        // printable ASCII, short enough to always pack
        "[ -~]{0,7}".prop_map(|text| Atom::new(&text)).boxed()
    }
}
