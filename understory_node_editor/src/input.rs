// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame input state: pointer position, key modifiers, and interaction slots.
//!
//! ## Invariant
//!
//! [`InputState`] keeps one generic record and four typed records. For every
//! [`Interaction`] slot, the typed record matching the generic occupant's kind holds the
//! same object and every other typed record holds nothing. The only writer is
//! [`InputState::set`], so the records cannot drift apart.
//!
//! ```
//! use understory_node_editor::{InputState, Interaction, NodeId, ObjectId};
//!
//! let mut input = InputState::new();
//! let node: ObjectId = NodeId::new(3).into();
//! input.set(Interaction::Hovered, Some(node));
//! assert_eq!(input.node().hovered, Some(NodeId::new(3)));
//! assert_eq!(input.pin().hovered, None);
//! ```

use bitflags::bitflags;
use kurbo::Point;

use crate::id::{CanvasId, LinkId, NodeId, ObjectId, PinId};

bitflags! {
    /// Keyboard modifiers held during the frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Control.
        const CTRL  = 1;
        /// Shift.
        const SHIFT = 2;
        /// Alt / Option.
        const ALT   = 4;
        /// Super / Command / Windows.
        const SUPER = 8;
    }
}

/// One of the four interaction slots an object may occupy during a frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// Under the pointer with no gesture in progress.
    Hovered,
    /// Captured by an ongoing pointer gesture, such as a drag.
    Active,
    /// Clicked this frame.
    Clicked,
    /// Double-clicked this frame.
    DoubleClicked,
}

impl Interaction {
    /// Every slot.
    pub const ALL: [Self; 4] = [
        Self::Hovered,
        Self::Active,
        Self::Clicked,
        Self::DoubleClicked,
    ];

    /// Whether the slot only holds for the frame in which the event happened.
    pub const fn is_edge_triggered(self) -> bool {
        matches!(self, Self::Clicked | Self::DoubleClicked)
    }
}

/// The four interaction slots for one kind of id.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InputItem<T> {
    /// See [`Interaction::Hovered`].
    pub hovered: Option<T>,
    /// See [`Interaction::Active`].
    pub active: Option<T>,
    /// See [`Interaction::Clicked`].
    pub clicked: Option<T>,
    /// See [`Interaction::DoubleClicked`].
    pub double_clicked: Option<T>,
}

impl<T> Default for InputItem<T> {
    fn default() -> Self {
        Self {
            hovered: None,
            active: None,
            clicked: None,
            double_clicked: None,
        }
    }
}

impl<T: Copy> InputItem<T> {
    /// Occupant of `slot`.
    pub fn get(&self, slot: Interaction) -> Option<T> {
        match slot {
            Interaction::Hovered => self.hovered,
            Interaction::Active => self.active,
            Interaction::Clicked => self.clicked,
            Interaction::DoubleClicked => self.double_clicked,
        }
    }

    fn slot_mut(&mut self, slot: Interaction) -> &mut Option<T> {
        match slot {
            Interaction::Hovered => &mut self.hovered,
            Interaction::Active => &mut self.active,
            Interaction::Clicked => &mut self.clicked,
            Interaction::DoubleClicked => &mut self.double_clicked,
        }
    }
}

/// Snapshot of pointer and keyboard interaction for one frame.
///
/// Produced by hit testing, then read by selection, gesture handling, and rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    /// Pointer position in screen space.
    pub mouse_position: Point,
    /// Modifiers held this frame.
    pub modifiers: KeyModifiers,
    object: InputItem<ObjectId>,
    pin: InputItem<PinId>,
    node: InputItem<NodeId>,
    link: InputItem<LinkId>,
    canvas: InputItem<CanvasId>,
}

impl InputState {
    /// Create an empty state with the pointer at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// The generic record.
    pub fn object(&self) -> &InputItem<ObjectId> {
        &self.object
    }

    /// The pin record.
    pub fn pin(&self) -> &InputItem<PinId> {
        &self.pin
    }

    /// The node record.
    pub fn node(&self) -> &InputItem<NodeId> {
        &self.node
    }

    /// The link record.
    pub fn link(&self) -> &InputItem<LinkId> {
        &self.link
    }

    /// The canvas record.
    pub fn canvas(&self) -> &InputItem<CanvasId> {
        &self.canvas
    }

    /// Generic occupant of `slot`.
    pub fn get(&self, slot: Interaction) -> Option<ObjectId> {
        self.object.get(slot)
    }

    /// Put `object` into `slot`, or empty the slot with `None`.
    ///
    /// Updates the generic record and all four typed records in one step.
    pub fn set(&mut self, slot: Interaction, object: Option<ObjectId>) {
        *self.object.slot_mut(slot) = object;
        *self.pin.slot_mut(slot) = object.and_then(ObjectId::try_narrow);
        *self.node.slot_mut(slot) = object.and_then(ObjectId::try_narrow);
        *self.link.slot_mut(slot) = object.and_then(ObjectId::try_narrow);
        *self.canvas.slot_mut(slot) = object.and_then(ObjectId::try_narrow);
    }

    /// Empty `slot` in every record.
    pub fn clear(&mut self, slot: Interaction) {
        self.set(slot, None);
    }

    /// Start a new frame: drop the edge-triggered slots, keep hover and capture.
    pub fn begin_frame(&mut self) {
        for slot in Interaction::ALL {
            if slot.is_edge_triggered() && self.get(slot).is_some() {
                log::trace!("clearing {slot:?} {:?}", self.get(slot));
                self.clear(slot);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ObjectType;

    fn occupants(input: &InputState, slot: Interaction) -> [Option<ObjectId>; 4] {
        [
            input.pin().get(slot).map(ObjectId::from),
            input.node().get(slot).map(ObjectId::from),
            input.link().get(slot).map(ObjectId::from),
            input.canvas().get(slot).map(ObjectId::from),
        ]
    }

    #[test]
    fn typed_records_follow_the_generic_record() {
        for slot in Interaction::ALL {
            for ty in ObjectType::ALL {
                let mut input = InputState::new();
                let id = ObjectId::new(11, ty);
                input.set(slot, Some(id));
                assert_eq!(input.get(slot), Some(id));

                let typed = occupants(&input, slot);
                for (other, occupant) in ObjectType::ALL.into_iter().zip(typed) {
                    let expected = (other == ty).then_some(id);
                    assert_eq!(occupant, expected, "{slot:?} for {ty:?} in {other:?} record");
                }

                // Other slots stay empty.
                for other in Interaction::ALL.into_iter().filter(|s| *s != slot) {
                    assert_eq!(input.get(other), None);
                    assert_eq!(occupants(&input, other), [None; 4]);
                }
            }
        }
    }

    #[test]
    fn replacing_an_occupant_clears_the_previous_kind() {
        let mut input = InputState::new();
        input.set(Interaction::Hovered, Some(NodeId::new(1).into()));
        input.set(Interaction::Hovered, Some(PinId::new(2).into()));
        assert_eq!(input.pin().hovered, Some(PinId::new(2)));
        assert_eq!(input.node().hovered, None);

        input.clear(Interaction::Hovered);
        assert_eq!(input.object().hovered, None);
        assert_eq!(occupants(&input, Interaction::Hovered), [None; 4]);
    }

    #[test]
    fn begin_frame_drops_only_edge_triggered_slots() {
        let mut input = InputState::new();
        let link: ObjectId = LinkId::new(4).into();
        let node: ObjectId = NodeId::new(5).into();
        input.set(Interaction::Hovered, Some(link));
        input.set(Interaction::Active, Some(node));
        input.set(Interaction::Clicked, Some(node));
        input.set(Interaction::DoubleClicked, Some(node));

        input.begin_frame();
        assert_eq!(input.get(Interaction::Hovered), Some(link));
        assert_eq!(input.node().active, Some(NodeId::new(5)));
        assert_eq!(input.get(Interaction::Clicked), None);
        assert_eq!(input.node().clicked, None);
        assert_eq!(input.node().double_clicked, None);
    }

    #[test]
    fn modifiers_combine() {
        let mut input = InputState::new();
        assert!(input.modifiers.is_empty());
        input.modifiers |= KeyModifiers::CTRL | KeyModifiers::SHIFT;
        assert!(input.modifiers.contains(KeyModifiers::CTRL));
        assert!(!input.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SUPER));
        assert_eq!(input.modifiers.bits(), 3);
    }
}
