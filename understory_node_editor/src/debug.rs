// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable text for diagnostics overlays and logs.
//!
//! Handles, kinds, modifiers, and objects implement [`Display`](core::fmt::Display);
//! the functions here cover the geometry types and wrap the rest for convenience.
//!
//! ```
//! use kurbo::Rect;
//! use understory_node_editor::{debug, KeyModifiers, NodeId, ObjectId};
//!
//! let id: ObjectId = NodeId::new(42).into();
//! assert_eq!(id.to_string(), "Node 0x2a");
//! assert_eq!(debug::modifiers(KeyModifiers::CTRL | KeyModifiers::SHIFT), "Ctrl | Shift");
//! assert_eq!(debug::rect(Rect::new(0.0, 0.0, 10.0, 20.0)), "(0, 0) - (10, 20) (10 x 20)");
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;

use kurbo::{Point, Rect};

use crate::id::{CanvasId, LinkId, NodeId, ObjectId, ObjectType, PinId};
use crate::input::KeyModifiers;
use crate::object::ObjectRef;
use crate::view::CanvasView;

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:#x}", self.object_type(), self.raw())
    }
}

macro_rules! display_via_object_id {
    ($($id:ty),*) => {
        $(
            impl fmt::Display for $id {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&ObjectId::from(*self), f)
                }
            }
        )*
    };
}

display_via_object_id!(PinId, NodeId, LinkId, CanvasId);

const MODIFIER_NAMES: [(KeyModifiers, &str); 4] = [
    (KeyModifiers::CTRL, "Ctrl"),
    (KeyModifiers::SHIFT, "Shift"),
    (KeyModifiers::ALT, "Alt"),
    (KeyModifiers::SUPER, "Super"),
];

impl fmt::Display for KeyModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        let mut first = true;
        for (flag, name) in MODIFIER_NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ObjectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_live() { "live" } else { "dead" };
        write!(f, "{} ({state})", self.id())?;
        if let Some(node) = self.as_node() {
            write!(f, " {}", rect(node.bounds))?;
        }
        Ok(())
    }
}

/// `(x, y)`.
pub fn point(p: Point) -> String {
    format!("({}, {})", p.x, p.y)
}

/// `(x0, y0) - (x1, y1) (w x h)`.
pub fn rect(r: Rect) -> String {
    format!(
        "{} - {} ({} x {})",
        point(Point::new(r.x0, r.y0)),
        point(Point::new(r.x1, r.y1)),
        r.width(),
        r.height()
    )
}

/// `origin: (x, y), scale: s`.
pub fn view(v: &CanvasView) -> String {
    format!("origin: {}, scale: {}", point(v.origin.to_point()), v.scale)
}

/// Modifier names joined with `|`, or `None`.
pub fn modifiers(m: KeyModifiers) -> String {
    m.to_string()
}

/// Handle plus liveness, and bounds for nodes.
pub fn object(o: ObjectRef<'_>) -> String {
    o.to_string()
}

/// Kind name.
pub fn object_type(ty: ObjectType) -> &'static str {
    ty.name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::KindMismatch;
    use crate::object::{Node, Object, Pin};
    use kurbo::Vec2;

    #[test]
    fn handles() {
        assert_eq!(PinId::new(1).to_string(), "Pin 0x1");
        assert_eq!(ObjectId::new(255, ObjectType::Link).to_string(), "Link 0xff");
        assert_eq!(CanvasId::new(0).to_string(), "Canvas 0x0");
        assert_eq!(object_type(ObjectType::Node), "Node");
    }

    #[test]
    fn kind_mismatch_message() {
        let err = KindMismatch {
            expected: ObjectType::Pin,
            found: ObjectType::Canvas,
        };
        assert_eq!(err.to_string(), "expected a Pin handle, found a Canvas handle");
    }

    #[test]
    fn modifier_sets() {
        assert_eq!(modifiers(KeyModifiers::empty()), "None");
        assert_eq!(modifiers(KeyModifiers::ALT), "Alt");
        assert_eq!(modifiers(KeyModifiers::all()), "Ctrl | Shift | Alt | Super");
    }

    #[test]
    fn geometry() {
        assert_eq!(point(Point::new(1.5, -2.0)), "(1.5, -2)");
        assert_eq!(
            view(&CanvasView::new(Vec2::new(4.0, 8.0), 0.5)),
            "origin: (4, 8), scale: 0.5"
        );
    }

    #[test]
    fn objects() {
        let mut node = Node::new(NodeId::new(16));
        node.bounds = Rect::new(0.0, 0.0, 4.0, 2.0);
        node.touch();
        assert_eq!(
            object(node.as_object_ref()),
            "Node 0x10 (live) (0, 0) - (4, 2) (4 x 2)"
        );
        let pin = Pin::new(PinId::new(3));
        assert_eq!(object(pin.as_object_ref()), "Pin 0x3 (dead)");
    }
}
