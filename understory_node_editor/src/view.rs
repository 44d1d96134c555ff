// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas view: the screen placement and zoom of the canvas.

use kurbo::{Affine, Point, Vec2};

/// Where the canvas sits on screen and how far it is zoomed.
///
/// A canvas point `p` appears on screen at `origin + p * scale`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasView {
    /// Screen position of the canvas origin.
    pub origin: Vec2,
    /// Zoom factor. Must be finite and positive.
    pub scale: f64,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl CanvasView {
    /// Create a view.
    #[track_caller]
    pub fn new(origin: Vec2, scale: f64) -> Self {
        debug_assert!(
            scale.is_finite() && scale > 0.0,
            "canvas scale must be finite and positive, got {scale}"
        );
        Self { origin, scale }
    }

    /// Reciprocal of [`scale`](Self::scale).
    pub fn inv_scale(&self) -> f64 {
        1.0 / self.scale
    }

    /// Transform from canvas space to screen space.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.origin) * Affine::scale(self.scale)
    }

    /// Map a canvas point to the screen.
    pub fn to_screen(&self, p: Point) -> Point {
        (p.to_vec2() * self.scale + self.origin).to_point()
    }

    /// Map a screen point to the canvas.
    pub fn to_canvas(&self, p: Point) -> Point {
        ((p.to_vec2() - self.origin) * self.inv_scale()).to_point()
    }
}
