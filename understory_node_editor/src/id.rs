// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handles: the tagged [`ObjectId`], the per-kind typed ids, and the kind enumerations.
//!
//! ## Semantics
//!
//! - An [`ObjectId`] is a pointer-sized raw value plus an [`ObjectType`] tag fixed at construction.
//! - Typed ids ([`PinId`], [`NodeId`], [`LinkId`], [`CanvasId`]) carry the same raw value space
//!   with the tag implied by the type, so a `PinId` can never be compared with a `NodeId`.
//! - Widening (`From<PinId> for ObjectId`, ...) always succeeds.
//! - Narrowing with [`ObjectId::narrow`] asserts the tag in debug builds. Use
//!   [`ObjectId::try_narrow`] or `TryFrom` when the kind is not known up front.
//!
//! Raw value `0` conventionally denotes "no object"; nothing here treats it specially.

use bitflags::bitflags;

/// The kind of a graph element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ObjectType {
    /// A pin on a node.
    Pin = 0,
    /// A node.
    Node = 1,
    /// A link between two pins.
    Link = 2,
    /// The canvas itself.
    Canvas = 3,
}

impl ObjectType {
    /// Every kind, in tag order.
    pub const ALL: [Self; 4] = [Self::Pin, Self::Node, Self::Link, Self::Canvas];

    /// The single-bit mask for this kind.
    pub const fn mask(self) -> ObjectTypes {
        ObjectTypes::from_bits_retain(1 << self as u8)
    }

    /// Human-readable name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pin => "Pin",
            Self::Node => "Node",
            Self::Link => "Link",
            Self::Canvas => "Canvas",
        }
    }
}

bitflags! {
    /// A set of [`ObjectType`]s, used by queries that accept "any of these kinds".
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ObjectTypes: u8 {
        /// Pins.
        const PINS     = 1 << ObjectType::Pin as u8;
        /// Nodes.
        const NODES    = 1 << ObjectType::Node as u8;
        /// Links.
        const LINKS    = 1 << ObjectType::Link as u8;
        /// Canvases.
        const CANVASES = 1 << ObjectType::Canvas as u8;
        /// Every kind.
        const ALL = Self::PINS.bits() | Self::NODES.bits() | Self::LINKS.bits() | Self::CANVASES.bits();
    }
}

impl ObjectTypes {
    /// The kind this mask names if exactly one bit is set.
    pub fn single(self) -> Option<ObjectType> {
        ObjectType::ALL.into_iter().find(|ty| ty.mask() == self)
    }

    /// Whether `ty` is part of this set.
    pub const fn has(self, ty: ObjectType) -> bool {
        self.contains(ty.mask())
    }
}

impl From<ObjectType> for ObjectTypes {
    fn from(ty: ObjectType) -> Self {
        ty.mask()
    }
}

/// Returned by the `TryFrom<ObjectId>` conversions when the handle tag names another kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected a {expected} handle, found a {found} handle")]
pub struct KindMismatch {
    /// Kind the conversion targets.
    pub expected: ObjectType,
    /// Kind carried by the handle.
    pub found: ObjectType,
}

/// Generic, tagged handle of a graph element.
///
/// Equality and hashing cover both the raw value and the tag.
/// Ordering is by raw value first, then by tag, so handles can key ordered containers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId {
    raw: usize,
    ty: ObjectType,
}

impl ObjectId {
    /// Build a handle from a raw value and a kind tag.
    pub const fn new(raw: usize, ty: ObjectType) -> Self {
        Self { raw, ty }
    }

    /// The raw value.
    pub const fn raw(self) -> usize {
        self.raw
    }

    /// The kind tag.
    pub const fn object_type(self) -> ObjectType {
        self.ty
    }

    /// Narrow to the typed id `T`.
    ///
    /// The tag must match `T`; a mismatch is a programming error and panics in debug builds.
    #[track_caller]
    pub fn narrow<T: TypedId>(self) -> T {
        debug_assert!(
            self.ty == T::TYPE,
            "cannot narrow a {} handle to a {} id",
            self.ty.name(),
            T::TYPE.name()
        );
        T::from_raw(self.raw)
    }

    /// Narrow to the typed id `T` if the tag matches.
    pub fn try_narrow<T: TypedId>(self) -> Option<T> {
        (self.ty == T::TYPE).then(|| T::from_raw(self.raw))
    }

    /// Whether this handle names a pin.
    pub const fn is_pin_id(self) -> bool {
        matches!(self.ty, ObjectType::Pin)
    }

    /// Whether this handle names a node.
    pub const fn is_node_id(self) -> bool {
        matches!(self.ty, ObjectType::Node)
    }

    /// Whether this handle names a link.
    pub const fn is_link_id(self) -> bool {
        matches!(self.ty, ObjectType::Link)
    }

    /// Whether this handle names a canvas.
    pub const fn is_canvas_id(self) -> bool {
        matches!(self.ty, ObjectType::Canvas)
    }

    /// See [`narrow`](Self::narrow).
    #[track_caller]
    pub fn as_pin_id(self) -> PinId {
        self.narrow()
    }

    /// See [`narrow`](Self::narrow).
    #[track_caller]
    pub fn as_node_id(self) -> NodeId {
        self.narrow()
    }

    /// See [`narrow`](Self::narrow).
    #[track_caller]
    pub fn as_link_id(self) -> LinkId {
        self.narrow()
    }

    /// See [`narrow`](Self::narrow).
    #[track_caller]
    pub fn as_canvas_id(self) -> CanvasId {
        self.narrow()
    }
}

/// Common interface of the typed ids.
pub trait TypedId:
    Copy
    + Ord
    + core::hash::Hash
    + core::fmt::Debug
    + Into<ObjectId>
    + TryFrom<ObjectId, Error = KindMismatch>
{
    /// Kind implied by the type.
    const TYPE: ObjectType;

    /// Wrap a raw value.
    fn from_raw(raw: usize) -> Self;

    /// The raw value.
    fn raw(self) -> usize;
}

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Wrap a raw value.
            pub const fn new(raw: usize) -> Self {
                Self(raw)
            }

            /// The raw value.
            pub const fn raw(self) -> usize {
                self.0
            }
        }

        impl TypedId for $name {
            const TYPE: ObjectType = ObjectType::$kind;

            fn from_raw(raw: usize) -> Self {
                Self(raw)
            }

            fn raw(self) -> usize {
                self.0
            }
        }

        impl From<$name> for ObjectId {
            fn from(id: $name) -> Self {
                Self::new(id.0, ObjectType::$kind)
            }
        }

        impl TryFrom<ObjectId> for $name {
            type Error = KindMismatch;

            fn try_from(id: ObjectId) -> Result<Self, Self::Error> {
                id.try_narrow().ok_or(KindMismatch {
                    expected: ObjectType::$kind,
                    found: id.object_type(),
                })
            }
        }
    };
}

typed_id! {
    /// Handle of a pin.
    PinId => Pin
}

typed_id! {
    /// Handle of a node.
    NodeId => Node
}

typed_id! {
    /// Handle of a link.
    LinkId => Link
}

typed_id! {
    /// Handle of a canvas.
    CanvasId => Canvas
}
