// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_node_editor --heading-base-level=0

//! Understory Node Editor: identity, storage, input, and selection for immediate-mode node editors.
//!
//! This crate is the object-management core of a node-graph editing widget.
//! It gives every element (pin, node, link, canvas) a small, comparable handle, stores live
//! elements per kind, records what the pointer is interacting with, and keeps the selection.
//!
//! - [`ObjectId`] is a raw value plus an [`ObjectType`] tag. [`PinId`], [`NodeId`], [`LinkId`],
//!   and [`CanvasId`] carry the kind in their type and widen into an `ObjectId` for free.
//! - [`ObjectCollection`] stores one kind of [`Object`]; [`Objects`] bundles all four.
//! - [`InputState`] is the per-frame interaction snapshot.
//! - [`Selection`] is the ordered selection set.
//! - [`debug`] renders all of the above as text.
//!
//! It does not draw, hit test, or interpret the graph. Those are for the host.
//!
//! ## Frame model
//!
//! Everything runs on the thread that drives the editor, one frame at a time:
//!
//! 1) [`Objects::reset`] marks every stored object not live.
//! 2) The host walks its scene and calls `get(id).touch()` for each element.
//!    Untouched objects are logically gone; [`Objects::sweep`] reclaims them when the host wants.
//! 3) Hit testing fills an [`InputState`] through [`InputState::set`].
//! 4) Clicks update the [`Selection`].
//! 5) Rendering reads objects, input, and selection.
//!
//! ## Contract violations
//!
//! Narrowing a handle to the wrong kind and creating the same handle twice are programming
//! errors. They panic in debug builds and are unchecked in release builds.
//! Absence is never an error: lookups return `Option` and membership tests return `bool`.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_node_editor::{
//!     InputState, Interaction, NodeId, Object, ObjectId, Objects, PinId, SelectOperation,
//!     Selection,
//! };
//!
//! let mut objects = Objects::new();
//! let mut selection = Selection::new();
//!
//! // Frame 1: two nodes with one pin each.
//! objects.reset();
//! for raw in 1..=2 {
//!     let node = objects.nodes.get(NodeId::new(raw));
//!     node.bounds = Rect::new(0.0, 0.0, 100.0, 60.0);
//!     node.touch();
//!     objects.pins.get(PinId::new(raw * 10)).touch();
//! }
//!
//! // Hit testing reports a click on node 2.
//! let mut input = InputState::new();
//! let clicked: ObjectId = NodeId::new(2).into();
//! input.set(Interaction::Clicked, Some(clicked));
//! if let Some(node) = input.node().clicked {
//!     assert!(selection.select(node.into(), SelectOperation::Replace));
//! }
//!
//! // Frame 2: node 1 is gone from the scene.
//! objects.reset();
//! objects.nodes.get(NodeId::new(2)).touch();
//! assert_eq!(objects.nodes.count(), 2);
//! assert!(!objects.is_live(NodeId::new(1).into()));
//!
//! let swept = objects.sweep();
//! selection.retain(|id| !swept.contains(&id));
//! assert_eq!(selection.objects(), &[clicked]);
//! assert_eq!(objects.nodes.count(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collection;
mod config;
pub mod debug;
mod id;
mod input;
mod object;
mod selection;
mod view;

pub use collection::{ObjectCollection, Objects};
pub use config::{ButtonIndex, Config, Rgba8};
pub use id::{CanvasId, KindMismatch, LinkId, NodeId, ObjectId, ObjectType, ObjectTypes, PinId, TypedId};
pub use input::{InputItem, InputState, Interaction, KeyModifiers};
pub use object::{Canvas, Link, Node, Object, ObjectHeader, ObjectRef, Pin};
pub use selection::{SelectOperation, Selection};
pub use view::CanvasView;
