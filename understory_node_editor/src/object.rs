// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Object base model: the shared header, the four concrete kinds, and borrowed views.

use kurbo::Rect;

use crate::id::{CanvasId, LinkId, NodeId, ObjectId, ObjectType, PinId, TypedId};

/// State shared by every object: its handle and its liveness flag.
///
/// The handle is fixed at construction. The kind of an object is always read from
/// the handle tag and never stored separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectHeader {
    id: ObjectId,
    is_live: bool,
}

impl ObjectHeader {
    /// Create a header for `id`. New objects start not live.
    pub const fn new(id: ObjectId) -> Self {
        Self { id, is_live: false }
    }

    /// Handle of the object.
    pub const fn id(&self) -> ObjectId {
        self.id
    }

    /// Whether the object was touched since the last reset.
    pub const fn is_live(&self) -> bool {
        self.is_live
    }
}

/// Behavior shared by [`Pin`], [`Node`], [`Link`], and [`Canvas`].
///
/// Each kind is its own struct embedding an [`ObjectHeader`]; heterogeneous access goes
/// through [`ObjectRef`].
pub trait Object: core::fmt::Debug {
    /// Typed id of this kind.
    type Id: TypedId;

    /// Construct a not-live object for `id`.
    fn new(id: Self::Id) -> Self;

    /// Shared state.
    fn header(&self) -> &ObjectHeader;

    /// Shared state, mutably.
    fn header_mut(&mut self) -> &mut ObjectHeader;

    /// Borrow as the heterogeneous view.
    fn as_object_ref(&self) -> ObjectRef<'_>;

    /// Generic handle.
    fn id(&self) -> ObjectId {
        self.header().id
    }

    /// Typed handle.
    fn typed_id(&self) -> Self::Id {
        self.id().narrow()
    }

    /// Kind, read from the handle tag.
    fn object_type(&self) -> ObjectType {
        self.id().object_type()
    }

    /// Whether the object was touched since the last reset.
    fn is_live(&self) -> bool {
        self.header().is_live
    }

    /// Mark the object live for the current frame.
    fn touch(&mut self) {
        self.header_mut().is_live = true;
    }

    /// Mark the object not live.
    fn reset(&mut self) {
        self.header_mut().is_live = false;
    }
}

/// A pin on a node.
#[derive(Clone, Debug, PartialEq)]
pub struct Pin {
    header: ObjectHeader,
}

/// A node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    header: ObjectHeader,
    /// Bounds of the node in canvas space.
    pub bounds: Rect,
}

/// A link between two pins.
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    header: ObjectHeader,
}

/// The canvas hosting the graph.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    header: ObjectHeader,
}

macro_rules! impl_object {
    ($ty:ident, $id:ident, |$header:ident| $init:expr) => {
        impl Object for $ty {
            type Id = $id;

            fn new(id: $id) -> Self {
                let $header = ObjectHeader::new(id.into());
                $init
            }

            fn header(&self) -> &ObjectHeader {
                &self.header
            }

            fn header_mut(&mut self) -> &mut ObjectHeader {
                &mut self.header
            }

            fn as_object_ref(&self) -> ObjectRef<'_> {
                ObjectRef::$ty(self)
            }
        }
    };
}

impl_object!(Pin, PinId, |header| Self { header });
impl_object!(Node, NodeId, |header| Self {
    header,
    bounds: Rect::ZERO,
});
impl_object!(Link, LinkId, |header| Self { header });
impl_object!(Canvas, CanvasId, |header| Self { header });

/// Borrowed view of an object of any kind.
///
/// The downcasts are plain matches on the variant, which always agrees with the handle tag.
#[derive(Copy, Clone, Debug)]
pub enum ObjectRef<'a> {
    /// A pin.
    Pin(&'a Pin),
    /// A node.
    Node(&'a Node),
    /// A link.
    Link(&'a Link),
    /// A canvas.
    Canvas(&'a Canvas),
}

impl<'a> ObjectRef<'a> {
    /// Shared state.
    pub fn header(self) -> &'a ObjectHeader {
        match self {
            Self::Pin(o) => &o.header,
            Self::Node(o) => &o.header,
            Self::Link(o) => &o.header,
            Self::Canvas(o) => &o.header,
        }
    }

    /// Generic handle.
    pub fn id(self) -> ObjectId {
        self.header().id()
    }

    /// Kind, read from the handle tag.
    pub fn object_type(self) -> ObjectType {
        self.id().object_type()
    }

    /// Whether the object was touched since the last reset.
    pub fn is_live(self) -> bool {
        self.header().is_live()
    }

    /// The pin, if this is one.
    pub fn as_pin(self) -> Option<&'a Pin> {
        match self {
            Self::Pin(o) => Some(o),
            _ => None,
        }
    }

    /// The node, if this is one.
    pub fn as_node(self) -> Option<&'a Node> {
        match self {
            Self::Node(o) => Some(o),
            _ => None,
        }
    }

    /// The link, if this is one.
    pub fn as_link(self) -> Option<&'a Link> {
        match self {
            Self::Link(o) => Some(o),
            _ => None,
        }
    }

    /// The canvas, if this is one.
    pub fn as_canvas(self) -> Option<&'a Canvas> {
        match self {
            Self::Canvas(o) => Some(o),
            _ => None,
        }
    }

    /// Whether both views borrow the same object instance.
    pub fn ptr_eq(self, other: Self) -> bool {
        match (self, other) {
            (Self::Pin(a), Self::Pin(b)) => core::ptr::eq(a, b),
            (Self::Node(a), Self::Node(b)) => core::ptr::eq(a, b),
            (Self::Link(a), Self::Link(b)) => core::ptr::eq(a, b),
            (Self::Canvas(a), Self::Canvas(b)) => core::ptr::eq(a, b),
            _ => false,
        }
    }
}
