// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered multi-object selection.
//!
//! ## Usage
//!
//! ```
//! use understory_node_editor::{NodeId, ObjectId, SelectOperation, Selection};
//!
//! let a: ObjectId = NodeId::new(1).into();
//! let b: ObjectId = NodeId::new(2).into();
//!
//! let mut selection = Selection::new();
//! assert!(selection.select(a, SelectOperation::Add));
//! assert!(selection.select(b, SelectOperation::Add));
//! assert!(selection.select(a, SelectOperation::Toggle));
//! assert_eq!(selection.objects(), &[b]);
//! assert!(!selection.select(a, SelectOperation::Remove));
//! ```
//!
//! The selection holds handles only. When the host sweeps objects out of existence it
//! should drop them here too, for example with [`Selection::retain`].

use alloc::vec::Vec;

use crate::id::{ObjectId, ObjectTypes, TypedId};

/// How a select call combines with the current selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectOperation {
    /// The selection becomes exactly the given objects.
    #[default]
    Replace,
    /// Add objects that are not selected yet.
    Add,
    /// Remove objects that are selected.
    Remove,
    /// Flip membership of each object.
    Toggle,
}

/// Selected objects in insertion order, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    objects: Vec<ObjectId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected objects in insertion order.
    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }

    /// Number of selected objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Whether `object` is selected.
    pub fn is_selected(&self, object: ObjectId) -> bool {
        self.objects.contains(&object)
    }

    /// Apply `operation` to a single object. Returns whether the selection changed.
    pub fn select(&mut self, object: ObjectId, operation: SelectOperation) -> bool {
        match operation {
            SelectOperation::Replace => self.replace(&[object]),
            SelectOperation::Add => self.add(object),
            SelectOperation::Remove => self.remove(object),
            SelectOperation::Toggle => {
                if self.is_selected(object) {
                    self.remove(object)
                } else {
                    self.add(object)
                }
            }
        }
    }

    /// Apply `operation` to a batch. Returns whether the selection changed.
    ///
    /// `Replace` keeps the first occurrence of each object. `Toggle` decides each
    /// object's fate from the selection as it was before the call, so duplicates in
    /// `objects` do not cancel out.
    pub fn select_many(&mut self, objects: &[ObjectId], operation: SelectOperation) -> bool {
        match operation {
            SelectOperation::Replace => self.replace(objects),
            SelectOperation::Add => objects.iter().fold(false, |changed, &o| self.add(o) | changed),
            SelectOperation::Remove => objects
                .iter()
                .fold(false, |changed, &o| self.remove(o) | changed),
            SelectOperation::Toggle => {
                let before = self.objects.clone();
                objects.iter().fold(false, |changed, &o| {
                    let flipped = if before.contains(&o) {
                        self.remove(o)
                    } else {
                        self.add(o)
                    };
                    flipped | changed
                })
            }
        }
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) {
        self.objects.clear();
    }

    /// Keep only the objects for which `keep` returns true, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(ObjectId) -> bool) {
        self.objects.retain(|&o| keep(o));
    }

    /// Selected objects of kind `T`, in selection order.
    pub fn iter_of<T: TypedId>(&self) -> impl Iterator<Item = T> + '_ {
        self.objects.iter().filter_map(|o| o.try_narrow())
    }

    /// Kinds present in the selection.
    pub fn selected_types(&self) -> ObjectTypes {
        self.objects
            .iter()
            .fold(ObjectTypes::empty(), |types, o| types | o.object_type().mask())
    }

    fn add(&mut self, object: ObjectId) -> bool {
        if self.is_selected(object) {
            return false;
        }
        self.objects.push(object);
        true
    }

    fn remove(&mut self, object: ObjectId) -> bool {
        match self.objects.iter().position(|&o| o == object) {
            Some(i) => {
                self.objects.remove(i);
                true
            }
            None => false,
        }
    }

    fn replace(&mut self, objects: &[ObjectId]) -> bool {
        let mut next = Vec::with_capacity(objects.len());
        for &o in objects {
            if !next.contains(&o) {
                next.push(o);
            }
        }
        if next == self.objects {
            return false;
        }
        log::debug!("selection replaced: {} -> {} objects", self.objects.len(), next.len());
        self.objects = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{LinkId, NodeId, PinId};
    use alloc::vec;

    fn node(raw: usize) -> ObjectId {
        NodeId::new(raw).into()
    }

    #[test]
    fn single_object_sequence() {
        let (a, b, c, d) = (node(1), node(2), node(3), node(4));
        let mut s = Selection::new();

        assert!(s.select(a, SelectOperation::Add));
        assert_eq!(s.objects(), &[a]);
        assert!(s.select(b, SelectOperation::Add));
        assert_eq!(s.objects(), &[a, b]);
        assert!(s.select(a, SelectOperation::Toggle));
        assert_eq!(s.objects(), &[b]);
        assert!(s.select(a, SelectOperation::Toggle));
        assert_eq!(s.objects(), &[b, a]);
        assert!(s.select_many(&[c, d], SelectOperation::Replace));
        assert_eq!(s.objects(), &[c, d]);
        s.deselect_all();
        assert!(s.is_empty());
    }

    #[test]
    fn no_change_returns_false() {
        let (a, b) = (node(1), node(2));
        let mut s = Selection::new();
        assert!(!s.select(a, SelectOperation::Remove));
        assert!(s.select(a, SelectOperation::Add));
        assert!(!s.select(a, SelectOperation::Add));
        assert!(!s.select(a, SelectOperation::Replace));
        assert!(s.select(b, SelectOperation::Add));
        // Replacing with an already selected member still shrinks the set.
        assert!(s.select(a, SelectOperation::Replace));
        assert_eq!(s.objects(), &[a]);
        assert!(!s.select_many(&[], SelectOperation::Add));
        assert!(!s.select_many(&[b], SelectOperation::Remove));
    }

    #[test]
    fn duplicate_adds_keep_first_position() {
        let (a, b) = (node(1), node(2));
        let mut s = Selection::new();
        s.select(a, SelectOperation::Add);
        s.select(b, SelectOperation::Add);
        s.select(a, SelectOperation::Add);
        s.select_many(&[b, a, b], SelectOperation::Add);
        assert_eq!(s.objects(), &[a, b]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn batch_replace_deduplicates_in_order() {
        let (a, b, c) = (node(1), node(2), node(3));
        let mut s = Selection::new();
        assert!(s.select_many(&[c, a, c, b, a], SelectOperation::Replace));
        assert_eq!(s.objects(), &[c, a, b]);
        assert!(!s.select_many(&[c, a, b], SelectOperation::Replace));
        assert!(s.select_many(&[], SelectOperation::Replace));
        assert!(s.is_empty());
    }

    #[test]
    fn batch_toggle_uses_the_state_before_the_call() {
        let (a, b, c) = (node(1), node(2), node(3));
        let mut s = Selection::new();
        s.select_many(&[a, b], SelectOperation::Add);

        // `c` twice must not add then remove; `a` twice must not remove then add.
        assert!(s.select_many(&[c, a, c, a], SelectOperation::Toggle));
        assert_eq!(s.objects(), &[b, c]);
    }

    #[test]
    fn batch_remove_reports_any_change() {
        let (a, b, c) = (node(1), node(2), node(3));
        let mut s = Selection::new();
        s.select_many(&[a, b], SelectOperation::Add);
        assert!(s.select_many(&[c, a], SelectOperation::Remove));
        assert_eq!(s.objects(), &[b]);
    }

    #[test]
    fn is_selected_matches_membership() {
        let ids = [
            node(1),
            node(2),
            ObjectId::from(PinId::new(1)),
            ObjectId::from(LinkId::new(1)),
        ];
        let ops = [
            SelectOperation::Add,
            SelectOperation::Toggle,
            SelectOperation::Remove,
            SelectOperation::Replace,
        ];
        let mut s = Selection::new();
        for (step, &op) in ops.iter().cycle().take(40).enumerate() {
            let id = ids[(step * 7 + step / 3) % ids.len()];
            s.select(id, op);
            for &probe in &ids {
                assert_eq!(s.is_selected(probe), s.objects().contains(&probe));
            }
            let mut unique = s.objects().to_vec();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), s.len());
        }
    }

    #[test]
    fn typed_views_and_retain() {
        let pin: ObjectId = PinId::new(9).into();
        let mut s = Selection::new();
        s.select_many(&[node(1), pin, node(2)], SelectOperation::Replace);

        let nodes: Vec<NodeId> = s.iter_of().collect();
        assert_eq!(nodes, vec![NodeId::new(1), NodeId::new(2)]);
        assert_eq!(s.selected_types(), ObjectTypes::NODES | ObjectTypes::PINS);

        s.retain(|o| o != node(1));
        assert_eq!(s.objects(), &[pin, node(2)]);
        assert_eq!(s.iter_of::<LinkId>().count(), 0);
    }
}
