// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Run-time type descriptors of set elements.
//!
//! A [`Kind`](struct.Kind.html) names the type of an element and two elements share a type when their kinds are equal. Any type usable as a set element implements [`Typed`](trait.Typed.html), which requires value equality and stable hashing: collections such as `HashSet` or `HashMap` do not implement it, so a set of sets cannot be built.

use std::borrow::Cow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Kind {
  name: Cow<'static, str>
}

impl Kind
{
  pub fn named<N>(name: N) -> Kind where
    N: Into<Cow<'static, str>>
  {
    Kind { name: name.into() }
  }

  pub fn of<T: Typed>(value: &T) -> Kind {
    value.kind()
  }

  pub fn name(&self) -> &str {
    &self.name
  }
}

impl Display for Kind
{
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(&self.name)
  }
}

/// Elements of a [`TypedSet`](../typed_set/struct.TypedSet.html).
pub trait Typed : Eq + Hash + Clone + Debug
{
  fn kind(&self) -> Kind;
}

macro_rules! primitive_typed_impl
{
  ( $( $t: ident ),* ) =>
  {$(
    impl Typed for $t
    {
      fn kind(&self) -> Kind {
        Kind::named(stringify!($t))
      }
    }
  )*}
}

primitive_typed_impl!(bool, char, i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, String);

impl Typed for &'static str
{
  fn kind(&self) -> Kind {
    Kind::named("&str")
  }
}
