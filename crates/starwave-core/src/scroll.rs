/// Fraction of one viewport height scrolled, clamped to [0, 1].
#[inline]
pub fn cut_fraction(scroll_y: f64, viewport_height: f64) -> f64 {
    let height = if viewport_height.is_finite() {
        viewport_height.max(1.0)
    } else {
        1.0
    };
    let fraction = scroll_y / height;
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// CSS percentage for the `--cut` custom property.
pub fn cut_css_value(fraction: f64) -> String {
    format!("{}%", fraction * 100.0)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollCutoff {
    fraction: f64,
}

impl ScrollCutoff {
    /// Recompute from the current scroll offset. Returns true when the value changed.
    pub fn update(&mut self, scroll_y: f64, viewport_height: f64) -> bool {
        let next = cut_fraction(scroll_y, viewport_height);
        let changed = next != self.fraction;
        self.fraction = next;
        changed
    }

    #[inline]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn css_value(&self) -> String {
        cut_css_value(self.fraction)
    }
}
