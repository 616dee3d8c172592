//! Parallax backgrounds

/// Geometry of a parallax element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    /// Offset from the page top
    pub top: f64,
    /// Rendered height
    pub height: f64,
    /// Background speed factor
    pub speed: f64,
}

/// Speed assigned to the n-th parallax element
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn speed_for(index: usize) -> f64 {
    (3 + index) as f64 / 10.0
}

impl ParallaxLayer {
    /// Layer with the speed for its position in the document
    #[must_use]
    pub fn nth(index: usize, top: f64, height: f64) -> Self {
        Self {
            top,
            height,
            speed: speed_for(index),
        }
    }

    /// Background offset for a scroll position, `None` when off screen
    #[must_use]
    pub fn offset(&self, scroll_y: f64, viewport_height: f64) -> Option<f64> {
        let in_view = scroll_y > self.top - viewport_height && scroll_y < self.top + self.height;
        in_view.then(|| -(scroll_y - self.top) * self.speed)
    }

    /// CSS `background-position` value
    #[must_use]
    pub fn background_position(&self, scroll_y: f64, viewport_height: f64) -> Option<String> {
        self.offset(scroll_y, viewport_height)
            .map(|y| format!("center {y}px"))
    }
}

/// Parallax controller for the whole page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Parallax {
    layers: Vec<ParallaxLayer>,
    reduced_motion: bool,
}

impl Parallax {
    /// Build from element geometries `(top, height)` in document order
    #[must_use]
    pub fn new(geometry: &[(f64, f64)], reduced_motion: bool) -> Self {
        let layers = geometry
            .iter()
            .enumerate()
            .map(|(i, &(top, height))| ParallaxLayer::nth(i, top, height))
            .collect();
        Self {
            layers,
            reduced_motion,
        }
    }

    /// Layers
    #[inline]
    #[must_use]
    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    /// Offsets for a scroll position; empty under reduced motion
    #[must_use]
    pub fn on_scroll(&self, scroll_y: f64, viewport_height: f64) -> Vec<(usize, f64)> {
        if self.reduced_motion {
            return Vec::new();
        }
        self.layers
            .iter()
            .enumerate()
            .filter_map(|(i, layer)| layer.offset(scroll_y, viewport_height).map(|y| (i, y)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speeds_step_by_a_tenth() {
        assert!((speed_for(0) - 0.3).abs() < 1e-9);
        assert!((speed_for(2) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn offset_only_in_view() {
        let layer = ParallaxLayer {
            top: 1000.0,
            height: 500.0,
            speed: 0.5,
        };
        assert_eq!(layer.offset(100.0, 800.0), None);
        assert_eq!(layer.offset(1200.0, 800.0), Some(-100.0));
        assert_eq!(layer.offset(1500.0, 800.0), None);
        assert_eq!(
            layer.background_position(1200.0, 800.0).as_deref(),
            Some("center -100px")
        );
    }

    #[test]
    fn reduced_motion_disables() {
        let parallax = Parallax::new(&[(0.0, 800.0)], true);
        assert!(parallax.on_scroll(100.0, 800.0).is_empty());

        let parallax = Parallax::new(&[(0.0, 800.0)], false);
        assert_eq!(parallax.on_scroll(100.0, 800.0).len(), 1);
    }
}
