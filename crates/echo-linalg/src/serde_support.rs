// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Fixed-length tuple encoding shared by the `Vector` and `Matrix` serde impls.
//!
//! serde only ships array impls for lengths up to 32 without const generics,
//! so both types encode their storage as a tuple of exactly `N` elements.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub(crate) fn serialize_array<S, E, const N: usize>(
    items: &[E; N],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    E: Serialize,
{
    let mut tuple = serializer.serialize_tuple(N)?;
    for item in items {
        tuple.serialize_element(item)?;
    }
    tuple.end()
}

pub(crate) fn deserialize_array<'de, D, E, const N: usize>(
    deserializer: D,
    fill: E,
) -> Result<[E; N], D::Error>
where
    D: Deserializer<'de>,
    E: Deserialize<'de> + Copy,
{
    deserializer.deserialize_tuple(
        N,
        ArrayVisitor {
            fill,
            _marker: PhantomData,
        },
    )
}

struct ArrayVisitor<E, const N: usize> {
    fill: E,
    _marker: PhantomData<[E; N]>,
}

impl<'de, E, const N: usize> Visitor<'de> for ArrayVisitor<E, N>
where
    E: Deserialize<'de> + Copy,
{
    type Value = [E; N];

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a tuple of {N} elements")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<[E; N], A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut out = [self.fill; N];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(out)
    }
}
