//! Color representation and gradient sampling for heatmap tiles.

use serde::{Deserialize, Serialize};

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque color from 8-bit RGB values.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Linear interpolation toward another color.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Convert to 8-bit RGB components.
    #[must_use]
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }
}

/// Multi-stop color gradient with linear interpolation between stops.
#[derive(Debug, Clone)]
pub struct Gradient {
    stops: Vec<Color>,
}

impl Gradient {
    /// Create a two-color gradient.
    #[must_use]
    pub fn two(start: Color, end: Color) -> Self {
        Self {
            stops: vec![start, end],
        }
    }

    /// Create a three-color gradient.
    #[must_use]
    pub fn three(start: Color, mid: Color, end: Color) -> Self {
        Self {
            stops: vec![start, mid, end],
        }
    }

    /// Sample the gradient at position t (0.0 - 1.0).
    #[must_use]
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);

        if self.stops.is_empty() {
            return Color::WHITE;
        }
        if self.stops.len() == 1 {
            return self.stops[0];
        }

        let segment_count = self.stops.len() - 1;
        let segment_size = 1.0 / segment_count as f32;
        let segment = ((t / segment_size) as usize).min(segment_count - 1);
        let local_t = (t - segment as f32 * segment_size) / segment_size;

        self.stops[segment].lerp(&self.stops[segment + 1], local_t)
    }
}

/// Background color for a heatmap tile from its percentage return.
///
/// Gains blend toward emerald, losses toward red; intensity saturates at a
/// +/-6% move, matching the `0.15 + 0.65 * min(|return|/6, 1)` blend the
/// dashboard uses everywhere.
#[must_use]
pub fn return_color(percent_return: f32) -> Color {
    let base = Color::rgb8(24, 24, 27); // zinc-900 panel background
    let target = if percent_return >= 0.0 {
        Color::rgb8(16, 185, 129) // emerald-500
    } else {
        Color::rgb8(239, 68, 68) // red-500
    };
    let intensity = (percent_return.abs() / 6.0).min(1.0);
    base.lerp(&target, 0.15 + intensity * 0.65)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new_clamps_values() {
        let c = Color::new(1.5, -0.5, 0.5, 2.0);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_color_lerp_midpoint() {
        let mid = Color::BLACK.lerp(&Color::WHITE, 0.5);
        assert!((mid.r - 0.5).abs() < 0.001);
        assert!((mid.g - 0.5).abs() < 0.001);
        assert!((mid.b - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_color_rgb8_roundtrip() {
        let c = Color::rgb8(16, 185, 129);
        assert_eq!(c.to_rgb8(), (16, 185, 129));
    }

    #[test]
    fn test_gradient_sample_endpoints() {
        let g = Gradient::two(Color::BLACK, Color::WHITE);
        assert_eq!(g.sample(0.0), Color::BLACK);
        assert_eq!(g.sample(1.0), Color::WHITE);
    }

    #[test]
    fn test_gradient_three_midpoint() {
        let mid = Color::rgb(0.0, 1.0, 0.0);
        let g = Gradient::three(Color::BLACK, mid, Color::WHITE);
        assert_eq!(g.sample(0.5), mid);
    }

    #[test]
    fn test_gradient_sample_clamps() {
        let g = Gradient::two(Color::BLACK, Color::WHITE);
        assert_eq!(g.sample(-1.0), Color::BLACK);
        assert_eq!(g.sample(2.0), Color::WHITE);
    }

    #[test]
    fn test_return_color_direction() {
        let gain = return_color(3.0);
        let loss = return_color(-3.0);
        assert!(gain.g > gain.r, "gains lean green");
        assert!(loss.r > loss.g, "losses lean red");
    }

    #[test]
    fn test_return_color_intensity_saturates() {
        // Beyond the 6% saturation point the blend stops changing.
        assert_eq!(return_color(6.0), return_color(12.0));
        assert_eq!(return_color(-6.0), return_color(-50.0));
    }

    #[test]
    fn test_return_color_flat_is_muted() {
        // A flat return still gets the 0.15 floor blend, not pure base.
        let flat = return_color(0.0);
        let base = Color::rgb8(24, 24, 27);
        assert!(flat.g > base.g);
    }
}
