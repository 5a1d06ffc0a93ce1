// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error raised when two incompatible element types meet.

use crate::kind::Kind;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
  /// The type of the set was already locked.
  Relock,
  /// The untyped set already holds elements of another type.
  Incongruent,
  /// The operands of a binary operation do not share a type.
  Operands
}

impl Display for Reason
{
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let msg = match *self {
      Reason::Relock => "the set's type has already been set",
      Reason::Incongruent => "the set already holds elements of another type",
      Reason::Operands => "the sets' types do not match"
    };
    f.write_str(msg)
  }
}

/// Refused type-changing or type-incompatible operation. It is permanent for the given arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{attempted} is not a valid type for the set with type {} ({reason}).", current_name(.current))]
pub struct TypeMismatch {
  /// The type the set (or the left operand) already has, `None` if it is untyped.
  pub current: Option<Kind>,
  /// The type that caused the error.
  pub attempted: Kind,
  pub reason: Reason
}

impl TypeMismatch
{
  pub fn new(current: Option<Kind>, attempted: Kind, reason: Reason) -> TypeMismatch {
    TypeMismatch {
      current: current,
      attempted: attempted,
      reason: reason
    }
  }
}

fn current_name(current: &Option<Kind>) -> &str {
  match current {
    Some(kind) => kind.name(),
    None => "<untyped>"
  }
}
