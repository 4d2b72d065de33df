// Copyright 2025 the Scenepick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking from an offscreen buffer of id-encoded colors.
//!
//! The embedder renders every pickable shape a second time into an offscreen
//! target, painting shape `id` with the color from [`encode_pick_id`] and the
//! background with transparent black. Reading the pixel under the pointer and
//! decoding it gives the topmost shape, antialiasing disabled.

use kurbo::Point;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use super::{PickAdapter, PickStrategy};
use crate::query::PickQuery;
use crate::registry::RegistryAccess;

/// Largest id that fits in the 24-bit color encoding.
pub const MAX_PICK_ID: u32 = 0x00FF_FFFE;

/// Color for shape `id`: `id + 1` in little-endian RGB, opaque.
///
/// Returns `None` when `id` exceeds [`MAX_PICK_ID`].
pub fn encode_pick_id(id: u32) -> Option<[u8; 4]> {
    if id > MAX_PICK_ID {
        return None;
    }
    let [r, g, b, _] = (id + 1).to_le_bytes();
    Some([r, g, b, 0xFF])
}

/// Shape id encoded in `rgba`, or `None` for the background.
///
/// Alpha is ignored.
pub fn decode_pick_id(rgba: [u8; 4]) -> Option<u32> {
    let [r, g, b, _] = rgba;
    u32::from_le_bytes([r, g, b, 0]).checked_sub(1)
}

/// A readable RGBA8 pick buffer, row 0 at the top.
pub trait PickBuffer {
    /// Width in device pixels.
    fn width(&self) -> u32;

    /// Height in device pixels.
    fn height(&self) -> u32;

    /// The pixel at `(x, y)`, or `None` if out of range or unreadable.
    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]>;
}

/// A borrowed, tightly packed RGBA8 buffer.
#[derive(Clone, Copy, Debug)]
pub struct RgbaPixels<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> RgbaPixels<'a> {
    /// Wrap `data` as a `width` by `height` image.
    ///
    /// Returns `None` if the slice length does not match.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Option<Self> {
        let expected = usize::try_from(u64::from(width) * u64::from(height) * 4).ok()?;
        (data.len() == expected).then_some(Self {
            data,
            width,
            height,
        })
    }
}

impl PickBuffer for RgbaPixels<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (usize::try_from(y).ok()? * usize::try_from(self.width).ok()?
            + usize::try_from(x).ok()?)
            * 4;
        let px = self.data.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

impl<B: PickBuffer + ?Sized> PickBuffer for &B {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (**self).pixel(x, y)
    }
}

/// Picks by decoding the pick-buffer pixel under the pointer.
///
/// The probe point is the query's client position (or scene position when
/// absent) in CSS pixels, scaled by the device pixel ratio to buffer pixels.
/// Only the topmost shape is visible in the buffer, so `resolve_all` reports
/// at most one target.
#[derive(Clone, Debug)]
pub struct PixelBufferAdapter<P, Reg> {
    buffer: P,
    registry: Reg,
    device_pixel_ratio: f64,
}

impl<P, Reg> PixelBufferAdapter<P, Reg>
where
    P: PickBuffer,
    Reg: RegistryAccess<Id = u32>,
{
    /// Read from `buffer` at a device pixel ratio of 1.
    pub fn new(buffer: P, registry: Reg) -> Self {
        Self {
            buffer,
            registry,
            device_pixel_ratio: 1.0,
        }
    }

    /// Return a copy scaling probe points by `ratio`.
    ///
    /// Non-finite or non-positive ratios make every pick miss.
    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    /// The current device pixel ratio.
    pub fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }

    /// Replace the buffer, typically after re-rendering the pick pass.
    pub fn set_buffer(&mut self, buffer: P) {
        self.buffer = buffer;
    }

    /// Buffer pixel under a CSS-pixel point, if inside the buffer.
    fn device_pixel(&self, css: Point) -> Option<(u32, u32)> {
        let ratio = self.device_pixel_ratio;
        if !(ratio.is_finite() && ratio > 0.0) {
            return None;
        }
        let x = (css.x * ratio).floor();
        let y = (css.y * ratio).floor();
        let in_range = |v: f64, len: u32| v >= 0.0 && v < f64::from(len);
        if !(in_range(x, self.buffer.width()) && in_range(y, self.buffer.height())) {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "x and y are integral and checked against u32 extents"
        )]
        let px = (x as u32, y as u32);
        Some(px)
    }
}

impl<P, Reg> PickAdapter for PixelBufferAdapter<P, Reg>
where
    P: PickBuffer,
    Reg: RegistryAccess<Id = u32>,
{
    type Target = Reg::Target;

    fn strategy(&self) -> PickStrategy {
        PickStrategy::PixelBuffer
    }

    fn resolve(&self, query: &PickQuery) -> Option<Reg::Target> {
        let (x, y) = self.device_pixel(query.client_or_position())?;
        let id = decode_pick_id(self.buffer.pixel(x, y)?)?;
        self.registry.lookup(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::PickableRegistry;

    #[test]
    fn id_encoding_reserves_zero_for_background() {
        assert_eq!(encode_pick_id(0), Some([1, 0, 0, 255]));
        assert_eq!(encode_pick_id(0x1234), Some([0x35, 0x12, 0, 255]));
        assert_eq!(decode_pick_id([0, 0, 0, 0]), None);
        assert_eq!(decode_pick_id([0, 0, 0, 255]), None);
        assert_eq!(decode_pick_id([1, 0, 0, 0]), Some(0));
        assert_eq!(encode_pick_id(MAX_PICK_ID), Some([255, 255, 255, 255]));
        assert_eq!(encode_pick_id(MAX_PICK_ID + 1), None);
        for id in [0, 1, 255, 256, 65_535, 65_536, MAX_PICK_ID] {
            assert_eq!(encode_pick_id(id).and_then(decode_pick_id), Some(id));
        }
    }

    #[test]
    fn rgba_pixels_checks_length() {
        assert!(RgbaPixels::new(&[0; 16], 2, 2).is_some());
        assert!(RgbaPixels::new(&[0; 15], 2, 2).is_none());
        let px = RgbaPixels::new(&[0; 16], 2, 2).unwrap();
        assert_eq!(px.pixel(2, 0), None);
    }

    /// A 4x2 buffer: shape 7 in the left half, background on the right.
    fn buffer() -> Vec<u8> {
        let shape = encode_pick_id(7).unwrap();
        let mut data = vec![0; 4 * 2 * 4];
        for y in 0..2 {
            for x in 0..2 {
                let o = (y * 4 + x) * 4;
                data[o..o + 4].copy_from_slice(&shape);
            }
        }
        data
    }

    #[test]
    fn resolves_through_registry() {
        let data = buffer();
        let pixels = RgbaPixels::new(&data, 4, 2).unwrap();
        let mut registry = PickableRegistry::new();
        registry.register(7_u32, "seven");
        let adapter = PixelBufferAdapter::new(pixels, &registry);
        assert_eq!(adapter.strategy(), PickStrategy::PixelBuffer);
        assert_eq!(adapter.resolve(&PickQuery::at(1.5, 1.0)), Some("seven"));
        assert_eq!(adapter.resolve(&PickQuery::at(3.0, 0.0)), None);
        assert_eq!(adapter.resolve(&PickQuery::at(-0.5, 0.0)), None);
        assert_eq!(adapter.resolve(&PickQuery::at(4.0, 0.0)), None);
        assert_eq!(adapter.resolve_all(&PickQuery::at(0.0, 0.0)), ["seven"]);
    }

    #[test]
    fn device_pixel_ratio_scales_client_points() {
        let data = buffer();
        let pixels = RgbaPixels::new(&data, 4, 2).unwrap();
        let mut registry = PickableRegistry::new();
        registry.register(7_u32, 7_u32);
        let adapter = PixelBufferAdapter::new(pixels, &registry).with_device_pixel_ratio(2.0);
        // CSS x = 0.9 lands on device x = 1, still inside the shape.
        let q = PickQuery::at(100.0, 100.0).with_client(Point::new(0.9, 0.2));
        assert_eq!(adapter.resolve(&q), Some(7));
        // CSS x = 1.0 lands on device x = 2, the background.
        let q = PickQuery::at(100.0, 100.0).with_client(Point::new(1.0, 0.2));
        assert_eq!(adapter.resolve(&q), None);

        let broken = adapter.clone().with_device_pixel_ratio(f64::NAN);
        assert_eq!(broken.resolve(&PickQuery::at(0.0, 0.0)), None);
    }

    #[test]
    fn unregistered_ids_resolve_to_nothing() {
        let data = buffer();
        let pixels = RgbaPixels::new(&data, 4, 2).unwrap();
        let registry: PickableRegistry<u32, u32> = PickableRegistry::new();
        let adapter = PixelBufferAdapter::new(pixels, &registry);
        assert_eq!(adapter.resolve(&PickQuery::at(0.0, 0.0)), None);
    }
}
