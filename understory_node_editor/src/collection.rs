// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-kind object storage with reset-then-touch liveness.
//!
//! ## Frame lifecycle
//!
//! 1) [`ObjectCollection::reset`] marks every stored object not live. Storage is kept.
//! 2) The host calls [`ObjectCollection::get`] for every element still in its scene and
//!    [`touches`](crate::Object::touch) the result. The same handle always yields the same instance.
//! 3) Objects that were not touched are logically gone. [`ObjectCollection::sweep`] reclaims
//!    them whenever the host decides to.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::id::{ObjectId, ObjectType, ObjectTypes, TypedId};
use crate::object::{Canvas, Link, Node, Object, ObjectRef, Pin};

/// Storage for every object of one kind.
///
/// Objects are boxed, so their addresses stay put while the collection grows.
/// Iteration follows insertion order.
pub struct ObjectCollection<T: Object> {
    objects: Vec<Box<T>>,          // insertion order
    index: BTreeMap<T::Id, usize>, // id -> slot in `objects`
}

impl<T: Object> Default for ObjectCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Object> core::fmt::Debug for ObjectCollection<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let live = self.objects.iter().filter(|o| o.is_live()).count();
        f.debug_struct("ObjectCollection")
            .field("kind", &<T::Id as TypedId>::TYPE)
            .field("objects_total", &self.objects.len())
            .field("objects_live", &live)
            .finish_non_exhaustive()
    }
}

impl<T: Object> ObjectCollection<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Insert a new, not-live object for `id` and return it.
    ///
    /// `id` must not already be stored; creating it twice is a programming error and
    /// panics in debug builds.
    #[track_caller]
    pub fn create(&mut self, id: T::Id) -> &mut T {
        debug_assert!(
            !self.index.contains_key(&id),
            "{:?} is already stored in this collection",
            id
        );
        let slot = self.objects.len();
        self.objects.push(Box::new(T::new(id)));
        self.index.insert(id, slot);
        &mut *self.objects[slot]
    }

    /// The object stored for `id`, live or not.
    pub fn find(&self, id: T::Id) -> Option<&T> {
        let slot = *self.index.get(&id)?;
        Some(&*self.objects[slot])
    }

    /// The object stored for `id`, live or not, mutably.
    pub fn find_mut(&mut self, id: T::Id) -> Option<&mut T> {
        let slot = *self.index.get(&id)?;
        Some(&mut *self.objects[slot])
    }

    /// The object stored for `id`, created first if absent.
    pub fn get(&mut self, id: T::Id) -> &mut T {
        match self.index.get(&id).copied() {
            Some(slot) => &mut *self.objects[slot],
            None => self.create(id),
        }
    }

    /// Whether an object is stored for `id`.
    pub fn contains(&self, id: T::Id) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of stored objects, live and not.
    pub fn count(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Mark every stored object not live. Storage is untouched.
    pub fn reset(&mut self) {
        for object in &mut self.objects {
            object.reset();
        }
    }

    /// All stored objects in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.objects.iter().map(|o| &**o)
    }

    /// All stored objects in insertion order, mutably.
    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut T> + '_ {
        self.objects.iter_mut().map(|o| &mut **o)
    }

    /// Live objects in insertion order.
    pub fn live(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().filter(|o| o.is_live())
    }

    /// Drop every object that is not live and return their ids in insertion order.
    ///
    /// Surviving objects keep their addresses.
    pub fn sweep(&mut self) -> Vec<T::Id> {
        let mut removed = Vec::new();
        self.objects.retain(|o| {
            if !o.is_live() {
                removed.push(o.typed_id());
            }
            o.is_live()
        });
        if !removed.is_empty() {
            self.index.clear();
            for (slot, object) in self.objects.iter().enumerate() {
                self.index.insert(object.typed_id(), slot);
            }
            log::debug!(
                "swept {} stale {} objects, {} remain",
                removed.len(),
                <T::Id as TypedId>::TYPE,
                self.objects.len()
            );
        }
        removed
    }
}

impl<'a, T: Object> IntoIterator for &'a ObjectCollection<T> {
    type Item = &'a T;
    type IntoIter = core::iter::Map<core::slice::Iter<'a, Box<T>>, fn(&'a Box<T>) -> &'a T>;

    fn into_iter(self) -> Self::IntoIter {
        let unbox: fn(&'a Box<T>) -> &'a T = |o| &**o;
        self.objects.iter().map(unbox)
    }
}

/// The four per-kind collections of one editor.
#[derive(Debug, Default)]
pub struct Objects {
    /// Pins.
    pub pins: ObjectCollection<Pin>,
    /// Nodes.
    pub nodes: ObjectCollection<Node>,
    /// Links.
    pub links: ObjectCollection<Link>,
    /// Canvases.
    pub canvases: ObjectCollection<Canvas>,
}

impl Objects {
    /// Create empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every collection.
    pub fn reset(&mut self) {
        self.pins.reset();
        self.nodes.reset();
        self.links.reset();
        self.canvases.reset();
    }

    /// Sweep every collection and return the removed ids.
    pub fn sweep(&mut self) -> Vec<ObjectId> {
        let mut removed: Vec<ObjectId> = Vec::new();
        removed.extend(self.pins.sweep().into_iter().map(ObjectId::from));
        removed.extend(self.nodes.sweep().into_iter().map(ObjectId::from));
        removed.extend(self.links.sweep().into_iter().map(ObjectId::from));
        removed.extend(self.canvases.sweep().into_iter().map(ObjectId::from));
        removed
    }

    /// The object stored for `id` in the collection its tag names.
    pub fn find(&self, id: ObjectId) -> Option<ObjectRef<'_>> {
        match id.object_type() {
            ObjectType::Pin => self.pins.find(id.narrow()).map(ObjectRef::Pin),
            ObjectType::Node => self.nodes.find(id.narrow()).map(ObjectRef::Node),
            ObjectType::Link => self.links.find(id.narrow()).map(ObjectRef::Link),
            ObjectType::Canvas => self.canvases.find(id.narrow()).map(ObjectRef::Canvas),
        }
    }

    /// Whether an object is stored for `id`.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.find(id).is_some()
    }

    /// Whether an object is stored for `id` and live.
    pub fn is_live(&self, id: ObjectId) -> bool {
        self.find(id).is_some_and(ObjectRef::is_live)
    }

    /// Touch the object stored for `id`, returning whether one was found.
    pub fn touch(&mut self, id: ObjectId) -> bool {
        fn touch_in<T: Object>(objects: &mut ObjectCollection<T>, id: ObjectId) -> bool {
            objects.find_mut(id.narrow()).map(T::touch).is_some()
        }
        match id.object_type() {
            ObjectType::Pin => touch_in(&mut self.pins, id),
            ObjectType::Node => touch_in(&mut self.nodes, id),
            ObjectType::Link => touch_in(&mut self.links, id),
            ObjectType::Canvas => touch_in(&mut self.canvases, id),
        }
    }

    /// Number of stored objects of the given kinds.
    pub fn count(&self, types: ObjectTypes) -> usize {
        let mut total = 0;
        if types.has(ObjectType::Pin) {
            total += self.pins.count();
        }
        if types.has(ObjectType::Node) {
            total += self.nodes.count();
        }
        if types.has(ObjectType::Link) {
            total += self.links.count();
        }
        if types.has(ObjectType::Canvas) {
            total += self.canvases.count();
        }
        total
    }
}
