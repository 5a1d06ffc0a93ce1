// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Dynamically typed set element.
//!
//! `Value` lets one set hold elements of several types as long as it is untyped, and is the default element type of [`TypedSet`](../typed_set/struct.TypedSet.html). Signed integers of every width are stored as `int` and unsigned integers as `uint`, so a set locked by `1i8` accepts `2i64` but refuses `3u8`: the kind tracks signedness, not width. The kind of a tuple is structural: `(1, "a")` and `(2, "b")` are both of kind `(int, string)`.
//!
//! # Examples
//!
//! ```rust
//! use typedset::{Typed, Value};
//!
//! assert_eq!(Value::from(1).kind().name(), "int");
//! assert_eq!(Value::from("1").kind().name(), "string");
//! assert_eq!(Value::from((1, "a")).kind().name(), "(int, string)");
//! ```

use crate::kind::{Kind, Typed};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
  Bool(bool),
  Int(i64),
  UInt(u64),
  Char(char),
  Str(String),
  Tuple(Vec<Value>)
}

impl Typed for Value
{
  fn kind(&self) -> Kind {
    match *self {
      Value::Bool(_) => Kind::named("bool"),
      Value::Int(_) => Kind::named("int"),
      Value::UInt(_) => Kind::named("uint"),
      Value::Char(_) => Kind::named("char"),
      Value::Str(_) => Kind::named("string"),
      Value::Tuple(ref items) => {
        let kinds: Vec<String> = items.iter()
          .map(|item| item.kind().to_string())
          .collect();
        Kind::named(format!("({})", kinds.join(", ")))
      }
    }
  }
}

impl Display for Value
{
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match *self {
      Value::Bool(b) => write!(f, "{}", b),
      Value::Int(i) => write!(f, "{}", i),
      Value::UInt(u) => write!(f, "{}", u),
      Value::Char(c) => write!(f, "{:?}", c),
      Value::Str(ref s) => write!(f, "{:?}", s),
      Value::Tuple(ref items) => {
        f.write_str("(")?;
        for (i, item) in items.iter().enumerate() {
          if i > 0 {
            f.write_str(", ")?;
          }
          write!(f, "{}", item)?;
        }
        f.write_str(")")
      }
    }
  }
}

macro_rules! value_from_integer_impl
{
  ( $variant: ident, $repr: ty; $( $t: ty ),* ) =>
  {$(
    impl From<$t> for Value
    {
      fn from(x: $t) -> Value {
        Value::$variant(x as $repr)
      }
    }
  )*}
}

value_from_integer_impl!(Int, i64; i8, i16, i32, i64, isize);
value_from_integer_impl!(UInt, u64; u8, u16, u32, u64, usize);

impl From<bool> for Value
{
  fn from(b: bool) -> Value {
    Value::Bool(b)
  }
}

impl From<char> for Value
{
  fn from(c: char) -> Value {
    Value::Char(c)
  }
}

impl<'a> From<&'a str> for Value
{
  fn from(s: &'a str) -> Value {
    Value::Str(s.to_string())
  }
}

impl From<String> for Value
{
  fn from(s: String) -> Value {
    Value::Str(s)
  }
}

impl<A, B> From<(A, B)> for Value where
  A: Into<Value>,
  B: Into<Value>
{
  fn from((a, b): (A, B)) -> Value {
    Value::Tuple(vec![a.into(), b.into()])
  }
}

impl<A, B, C> From<(A, B, C)> for Value where
  A: Into<Value>,
  B: Into<Value>,
  C: Into<Value>
{
  fn from((a, b, c): (A, B, C)) -> Value {
    Value::Tuple(vec![a.into(), b.into(), c.into()])
  }
}
