//! Mapped display intensities and their readouts.

use glam::Vec2;
use image::{GrayImage, Luma};

/// Real-valued display intensities for one grid, row major.
///
/// Produced by [`Curve::map`]; every value lies in 0.0-1.0. The field keeps
/// the grid's dimensions and can be read per cell, as a raw slice, resampled
/// at arbitrary UV coordinates, or quantized to 8-bit grayscale.
///
/// [`Curve::map`]: crate::Curve::map
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityField {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl IntensityField {
    pub(crate) fn from_raw(width: usize, height: usize, values: Vec<f32>) -> Self {
        debug_assert_eq!(values.len(), width * height);
        Self {
            width,
            height,
            values,
        }
    }

    /// Field width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The intensities, row major.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Intensity at `(x, y)`.
    ///
    /// Panics when the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.width + x]
    }

    /// Bilinearly samples the field at normalized coordinates.
    ///
    /// `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right; cell
    /// centers sit at `((x + 0.5) / width, (y + 0.5) / height)`. The field
    /// tiles the plane, so coordinates outside 0.0-1.0 wrap around and the
    /// interpolation blends across the seams like everything else.
    pub fn sample(&self, uv: Vec2) -> f32 {
        let x = uv.x * self.width as f32 - 0.5;
        let y = uv.y * self.height as f32 - 0.5;

        let x0f = x.floor();
        let y0f = y.floor();
        let tx = x - x0f;
        let ty = y - y0f;

        let x0 = wrap_index(x0f as isize, self.width);
        let y0 = wrap_index(y0f as isize, self.height);
        let x1 = if x0 + 1 == self.width { 0 } else { x0 + 1 };
        let y1 = if y0 + 1 == self.height { 0 } else { y0 + 1 };

        let v00 = self.values[y0 * self.width + x0];
        let v10 = self.values[y0 * self.width + x1];
        let v01 = self.values[y1 * self.width + x0];
        let v11 = self.values[y1 * self.width + x1];

        let top = v00 + (v10 - v00) * tx;
        let bottom = v01 + (v11 - v01) * tx;
        top + (bottom - top) * ty
    }

    /// Quantizes to 8-bit grayscale, row major, rounding to nearest.
    pub fn to_luma8(&self) -> Vec<u8> {
        self.values
            .iter()
            .map(|&v| (v * 255.0).round() as u8)
            .collect()
    }

    /// Renders the field as an 8-bit grayscale image.
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            Luma([(self.get(x as usize, y as usize) * 255.0).round() as u8])
        })
    }
}

fn wrap_index(i: isize, len: usize) -> usize {
    i.rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x2 field holding 0.0, 0.1, .. 0.7 row major.
    fn ramp_field() -> IntensityField {
        let values = (0..8).map(|i| i as f32 * 0.1).collect();
        IntensityField::from_raw(4, 2, values)
    }

    #[test]
    fn test_get_and_slice_agree() {
        let field = ramp_field();
        assert_eq!(field.width(), 4);
        assert_eq!(field.height(), 2);
        for y in 0..2 {
            for x in 0..4 {
                assert_eq!(field.get(x, y), field.as_slice()[y * 4 + x]);
            }
        }
    }

    #[test]
    fn test_sample_at_cell_centers() {
        let field = ramp_field();
        // Cell centers reproduce stored values exactly
        assert_eq!(field.sample(Vec2::new(0.125, 0.25)), field.get(0, 0));
        assert_eq!(field.sample(Vec2::new(0.375, 0.25)), field.get(1, 0));
        assert_eq!(field.sample(Vec2::new(0.875, 0.75)), field.get(3, 1));
    }

    #[test]
    fn test_sample_interpolates_between_cells() {
        let field = ramp_field();

        // Halfway between (1,0) and (2,0)
        let horizontal = field.sample(Vec2::new(0.5, 0.25));
        assert!((horizontal - 0.15).abs() < 1e-6);

        // Halfway between (1,0) and (1,1)
        let vertical = field.sample(Vec2::new(0.375, 0.5));
        assert!((vertical - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_sample_wraps_and_tiles() {
        let field = ramp_field();

        // Negative coordinates mirror their wrapped positives
        assert_eq!(
            field.sample(Vec2::new(-0.125, 0.25)),
            field.sample(Vec2::new(0.875, 0.25))
        );
        // Shifting by a whole tile changes nothing
        assert_eq!(
            field.sample(Vec2::new(1.375, 1.25)),
            field.sample(Vec2::new(0.375, 0.25))
        );

        // Sampling on the vertical seam blends (3,0) and (0,0)
        let seam = field.sample(Vec2::new(0.0, 0.25));
        assert!((seam - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_luma8_quantization() {
        let field = IntensityField::from_raw(4, 1, vec![0.0, 0.5, 1.0, 0.25]);
        assert_eq!(field.to_luma8(), vec![0, 128, 255, 64]);
    }

    #[test]
    fn test_gray_image_matches_field() {
        let field = ramp_field();
        let img = field.to_gray_image();
        assert_eq!(img.dimensions(), (4, 2));
        assert_eq!(img.get_pixel(0, 0).0[0], 0);
        assert_eq!(img.get_pixel(3, 1).0[0], (0.7f32 * 255.0).round() as u8);
    }
}
