//! Ancestry and mixin queries.

use super::descriptor::{Type, TypeId};
use crate::values::Value;
use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

/// Iterator over a type and its ancestors, nearest first.
///
/// Created by [`Type::ancestors`].
pub struct Ancestors<'a> {
    next: Option<&'a Type>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Type;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

impl Type {
    /// This type followed by its parent, grandparent, and so on up to the root.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }

    /// Whether `other` is this type or one of its ancestors.
    ///
    /// Mixins do not count; see [`has`](Self::has).
    pub fn is(&self, other: &Type) -> bool {
        self.ancestors().any(|ty| ty == other)
    }

    /// [`is`](Self::is) for a dynamically typed candidate; `false` for any
    /// value that is not a type.
    pub fn is_value(&self, candidate: &Value) -> bool {
        candidate.as_type().is_some_and(|other| self.is(other))
    }

    /// Whether this type acquired `other`'s functionality, through extension
    /// or inclusion.
    ///
    /// True if `other` is this type, if the parent has it, or if any mixin has
    /// it. Mixins of ancestors and mixins of mixins are covered. Each type is
    /// visited at most once.
    pub fn has(&self, other: &Type) -> bool {
        let mut seen = HashSet::new();
        let mut pending = vec![self.clone()];
        while let Some(ty) = pending.pop() {
            if ty == *other {
                return true;
            }
            if seen.insert(ty.id()) {
                pending.extend(ty.links());
            }
        }
        false
    }

    /// [`has`](Self::has) for a dynamically typed candidate; `false` for any
    /// value that is not a type.
    pub fn has_value(&self, candidate: &Value) -> bool {
        candidate.as_type().is_some_and(|other| self.has(other))
    }

    /// Every type this one [`has`](Self::has), each listed once, in the order
    /// `has` would visit them: the type itself, then its parent's
    /// capabilities, then each mixin's.
    pub fn capabilities(&self) -> Vec<Type> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        let mut pending = vec![self.clone()];
        while let Some(ty) = pending.pop() {
            if !seen.insert(ty.id()) {
                continue;
            }
            // Reversed so the parent is visited first.
            pending.extend(ty.links().into_iter().rev());
            out.push(ty);
        }
        out
    }

    /// The largest number of [`include`](Self::include) links on any path
    /// from this type through parents and mixins.
    pub fn mixin_nesting(&self) -> usize {
        let mut nesting: HashMap<TypeId, usize> = HashMap::new();
        let mut pending = vec![(self.clone(), false)];
        while let Some((ty, expanded)) = pending.pop() {
            if nesting.contains_key(&ty.id()) {
                continue;
            }
            if expanded {
                let through_parent = ty
                    .parent()
                    .and_then(|parent| nesting.get(&parent.id()).copied())
                    .unwrap_or(0);
                let through_mixins = ty
                    .0
                    .mixins
                    .borrow()
                    .iter()
                    .filter_map(|mixin| nesting.get(&mixin.id()))
                    .map(|n| n + 1)
                    .max()
                    .unwrap_or(0);
                nesting.insert(ty.id(), through_parent.max(through_mixins));
            } else {
                let links = ty.links();
                pending.push((ty, true));
                pending.extend(links.into_iter().map(|link| (link, false)));
            }
        }
        nesting.get(&self.id()).copied().unwrap_or(0)
    }

    /// The parent followed by the mixins in inclusion order.
    fn links(&self) -> SmallVec<[Type; 3]> {
        let mut links: SmallVec<[Type; 3]> = self.parent().cloned().into_iter().collect();
        links.extend(self.0.mixins.borrow().iter().cloned());
        links
    }
}
