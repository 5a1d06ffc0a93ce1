// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library provides a set whose elements all share one type, checked at run time. A set starts untyped and accepts anything, until it is locked to the type of an element; from then on it refuses elements of any other type. Sets support the usual algebra (union, intersection, difference, subset, equality) through the generic operations of [gcollections](https://docs.rs/gcollections), re-exported as [ops](ops/index.html).
//!
//! Elements implement [`Typed`](kind/trait.Typed.html). [`Value`](value/enum.Value.html) is the default element type and holds booleans, integers, characters, strings and tuples, so a single set can mix them while it is untyped.
//!
//! # Examples
//!
//! ```rust
//! use typedset::ops::*;
//! use typedset::{TypedSet, Value};
//!
//! let mut a: TypedSet = TypedSet::new();
//! a.set_type(0).unwrap();
//! a.extend(vec![Value::from(1), Value::from(2), Value::from("3")]);
//! assert_eq!(a.len(), 2);
//!
//! let b: TypedSet = TypedSet::with(2);
//! assert_eq!(a.intersection(&b).unwrap(), b);
//! assert_eq!(a.difference(&b).unwrap(), TypedSet::with(1));
//! assert!(a.set_type("").is_err());
//! ```
//!
//! See the [typed_set module](typed_set/index.html) for the type rules of binary operations.

pub mod error;
pub mod kind;
pub mod typed_set;
pub mod value;

pub use gcollections::ops;
pub use crate::error::{Reason, TypeMismatch};
pub use crate::kind::{Kind, Typed};
pub use crate::typed_set::TypedSet;
pub use crate::value::Value;
