// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Set of unique elements sharing one run-time type.
//!
//! A set is either untyped, in which case it accepts any element, or locked to a [`Kind`](../kind/struct.Kind.html). The lock happens once, when the set is created from an element or through `set_type`, and afterwards elements of any other kind are refused. `add` and `has` report a refused element with `false`, while binary operations on sets locked to different kinds fail with [`TypeMismatch`](../error/struct.TypeMismatch.html).
//!
//! Two sets are *compatible* if one of them is untyped or both are locked to the same kind. Union and symmetric difference additionally accept any empty operand.
//!
//! The set is not synchronized, concurrent mutation must be guarded externally.
//!
//! # Examples
//!
//! ```rust
//! use typedset::ops::*;
//! use typedset::TypedSet;
//!
//! let mut a: TypedSet = TypedSet::with(1);
//! assert!(a.add(2));
//! assert!(!a.add("2"));
//! assert_eq!(a.len(), 2);
//!
//! let mut b: TypedSet = TypedSet::with(2);
//! b.add(3);
//! let u = a.union(&b).unwrap();
//! assert_eq!(u.len(), 3);
//! assert!(b.is_subset(&u));
//!
//! let words: TypedSet = TypedSet::with("one");
//! assert!(a.union(&words).is_err());
//! ```

use crate::error::{Reason, TypeMismatch};
use crate::kind::{Kind, Typed};
use crate::value::Value;
use gcollections::kind::*;
use gcollections::ops::*;
use log::{debug, trace};
use std::collections::hash_set::{IntoIter, Iter};
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;

#[derive(Debug, Clone)]
pub struct TypedSet<T: Typed = Value> {
  elements: HashSet<T>,
  kind: Option<Kind>
}

impl<T: Typed> TypedSet<T>
{
  /// Untyped empty set.
  pub fn new() -> TypedSet<T> {
    TypedSet::derived(None, HashSet::new())
  }

  /// Set containing `elem` and locked to its kind.
  pub fn with<E: Into<T>>(elem: E) -> TypedSet<T> {
    let elem = elem.into();
    let mut elements = HashSet::new();
    let kind = elem.kind();
    elements.insert(elem);
    TypedSet::derived(Some(kind), elements)
  }

  fn derived(kind: Option<Kind>, elements: HashSet<T>) -> TypedSet<T> {
    TypedSet {
      elements: elements,
      kind: kind
    }
  }

  pub fn element_type(&self) -> Option<&Kind> {
    self.kind.as_ref()
  }

  /// Locks the set to the kind of `elem`. See `set_kind`.
  pub fn set_type<E: Into<T>>(&mut self, elem: E) -> Result<(), TypeMismatch> {
    self.set_kind(elem.into().kind())
  }

  /// Locks the set to `kind`. It fails if the set is already locked, or if it holds an element of another kind. The set is left unchanged on failure.
  pub fn set_kind(&mut self, kind: Kind) -> Result<(), TypeMismatch> {
    if let Some(ref current) = self.kind {
      debug!("cannot lock a set of type {} to {}", current, kind);
      return Err(TypeMismatch::new(Some(current.clone()), kind, Reason::Relock));
    }
    if let Some(found) = self.stray_kind(&kind) {
      debug!("cannot lock a set holding {} elements to {}", found, kind);
      return Err(TypeMismatch::new(Some(found), kind, Reason::Incongruent));
    }
    self.kind = Some(kind);
    Ok(())
  }

  // Kind of the first element not of kind `kind`.
  fn stray_kind(&self, kind: &Kind) -> Option<Kind> {
    self.elements.iter()
      .map(Typed::kind)
      .find(|k| k != kind)
  }

  fn accepts(&self, elem: &T) -> bool {
    match self.kind {
      Some(ref kind) => *kind == elem.kind(),
      None => true
    }
  }

  /// Returns `false` without modifying the set if `elem` has the wrong kind or is already present.
  pub fn add<E: Into<T>>(&mut self, elem: E) -> bool {
    let elem = elem.into();
    if !self.accepts(&elem) {
      trace!("{:?} rejected by a set of type {:?}", elem, self.kind);
      return false;
    }
    self.elements.insert(elem)
  }

  pub fn has<E: Into<T>>(&self, elem: E) -> bool {
    self.member(&elem.into())
  }

  pub fn contains(&self, elem: &T) -> bool {
    self.member(elem)
  }

  fn member(&self, elem: &T) -> bool {
    self.accepts(elem) && self.elements.contains(elem)
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Both sets are locked to the same kind, or both are untyped.
  pub fn same_type(&self, other: &TypedSet<T>) -> bool {
    self.kind == other.kind
  }

  /// Both sets hold the same elements, whatever their declared kind.
  pub fn equal(&self, other: &TypedSet<T>) -> bool {
    self.len() == other.len() && self.included_in(other)
  }

  fn included_in(&self, other: &TypedSet<T>) -> bool {
    self.elements.iter().all(|e| other.elements.contains(e))
  }

  pub fn iter(&self) -> Iter<T> {
    self.elements.iter()
  }

  // Kind of the result of an operation requiring compatible operands.
  fn common_kind(&self, other: &TypedSet<T>) -> Result<Option<Kind>, TypeMismatch> {
    match (&self.kind, &other.kind) {
      (&Some(ref a), &Some(ref b)) if a != b => {
        debug!("incompatible operands of types {} and {}", a, b);
        Err(TypeMismatch::new(Some(a.clone()), b.clone(), Reason::Operands))
      }
      (&Some(ref a), _) => Ok(Some(a.clone())),
      (&None, b) => Ok(b.clone())
    }
  }

  // Kind of the result of an operation gathering the elements of both operands. An untyped operand joined with a typed one must only hold elements of that type.
  fn joined_kind(&self, other: &TypedSet<T>) -> Result<Option<Kind>, TypeMismatch> {
    let kind = self.common_kind(other)?;
    if let Some(ref kind) = kind {
      for operand in &[self, other] {
        if operand.kind.is_some() {
          continue;
        }
        if let Some(found) = operand.stray_kind(kind) {
          debug!("untyped operand holds {} elements, expected {}", found, kind);
          return Err(TypeMismatch::new(Some(kind.clone()), found, Reason::Operands));
        }
      }
    }
    Ok(kind)
  }
}

impl<T: Typed> Default for TypedSet<T>
{
  fn default() -> TypedSet<T> {
    TypedSet::new()
  }
}

impl<T: Typed> Eq for TypedSet<T> {}

impl<T: Typed> PartialEq<TypedSet<T>> for TypedSet<T>
{
  fn eq(&self, other: &TypedSet<T>) -> bool {
    self.equal(other)
  }
}

impl<T: Typed> Collection for TypedSet<T>
{
  type Item = T;
}

impl<T: Typed> Empty for TypedSet<T>
{
  fn empty() -> TypedSet<T> {
    TypedSet::new()
  }
}

impl<T: Typed> Singleton for TypedSet<T>
{
  fn singleton(value: T) -> TypedSet<T> {
    TypedSet::with(value)
  }
}

impl<T: Typed> Cardinality for TypedSet<T>
{
  type Size = usize;

  fn size(&self) -> usize {
    self.elements.len()
  }
}

impl<T: Typed> Contains for TypedSet<T>
{
  fn contains(&self, value: &T) -> bool {
    self.member(value)
  }
}

impl<T: Typed> Subset for TypedSet<T>
{
  fn is_subset(&self, other: &TypedSet<T>) -> bool {
    self.len() <= other.len() && self.included_in(other)
  }
}

impl<T: Typed> ProperSubset for TypedSet<T>
{
  fn is_proper_subset(&self, other: &TypedSet<T>) -> bool {
    self.len() < other.len() && self.included_in(other)
  }
}

impl<T: Typed> Disjoint for TypedSet<T>
{
  fn is_disjoint(&self, other: &TypedSet<T>) -> bool {
    self.elements.is_disjoint(&other.elements)
  }
}

impl<T: Typed> Union for TypedSet<T>
{
  type Output = Result<TypedSet<T>, TypeMismatch>;

  fn union(&self, other: &TypedSet<T>) -> Result<TypedSet<T>, TypeMismatch> {
    if other.is_empty() {
      Ok(self.clone())
    }
    else if self.is_empty() {
      Ok(other.clone())
    }
    else {
      let kind = self.joined_kind(other)?;
      let elements = self.elements.union(&other.elements).cloned().collect();
      Ok(TypedSet::derived(kind, elements))
    }
  }
}

impl<T: Typed> Intersection for TypedSet<T>
{
  type Output = Result<TypedSet<T>, TypeMismatch>;

  fn intersection(&self, other: &TypedSet<T>) -> Result<TypedSet<T>, TypeMismatch> {
    let kind = self.common_kind(other)?;
    let elements = self.elements.intersection(&other.elements).cloned().collect();
    Ok(TypedSet::derived(kind, elements))
  }
}

impl<T: Typed> Difference for TypedSet<T>
{
  type Output = Result<TypedSet<T>, TypeMismatch>;

  fn difference(&self, other: &TypedSet<T>) -> Result<TypedSet<T>, TypeMismatch> {
    self.common_kind(other)?;
    let elements = self.elements.difference(&other.elements).cloned().collect();
    Ok(TypedSet::derived(self.kind.clone(), elements))
  }
}

impl<T: Typed> SymmetricDifference for TypedSet<T>
{
  type Output = Result<TypedSet<T>, TypeMismatch>;

  fn symmetric_difference(&self, other: &TypedSet<T>) -> Result<TypedSet<T>, TypeMismatch> {
    if other.is_empty() {
      Ok(self.clone())
    }
    else if self.is_empty() {
      Ok(other.clone())
    }
    else {
      let kind = self.joined_kind(other)?;
      let elements = self.elements.symmetric_difference(&other.elements).cloned().collect();
      Ok(TypedSet::derived(kind, elements))
    }
  }
}

impl<T: Typed> Extend<T> for TypedSet<T>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=T>
  {
    for elem in iterable {
      self.add(elem);
    }
  }
}

impl<T: Typed> FromIterator<T> for TypedSet<T>
{
  fn from_iter<I>(iterable: I) -> TypedSet<T> where
   I: IntoIterator<Item=T>
  {
    let mut set = TypedSet::new();
    set.extend(iterable);
    set
  }
}

impl<T: Typed> IntoIterator for TypedSet<T>
{
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> IntoIter<T> {
    self.elements.into_iter()
  }
}

impl<'a, T: Typed> IntoIterator for &'a TypedSet<T>
{
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  fn into_iter(self) -> Iter<'a, T> {
    self.elements.iter()
  }
}

impl<T: Typed + Display> Display for TypedSet<T>
{
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    let mut items: Vec<String> = self.elements.iter()
      .map(|e| e.to_string())
      .collect();
    items.sort();
    write!(f, "{{{}}}", items.join(", "))
  }
}
