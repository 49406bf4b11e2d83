use crate::constants::{POINTER_CENTER, POINTER_SMOOTHING};

#[inline]
pub fn lerp2(current: [f32; 2], target: [f32; 2], factor: f32) -> [f32; 2] {
    [
        current[0] + (target[0] - current[0]) * factor,
        current[1] + (target[1] - current[1]) * factor,
    ]
}

/// Map normalized device coordinates ([-1, 1], y up) to [0, 1] per axis.
#[inline]
pub fn ndc_to_unit(ndc: [f32; 2]) -> [f32; 2] {
    [
        ((ndc[0] + 1.0) * 0.5).clamp(0.0, 1.0),
        ((ndc[1] + 1.0) * 0.5).clamp(0.0, 1.0),
    ]
}

/// Raw pointer target plus the low-pass filtered value fed to the wave shader.
///
/// Until a pointer event arrives both points sit at the centre of the surface,
/// so a missing input source leaves the wave undisturbed rather than frozen at
/// an edge.
#[derive(Clone, Copy, Debug)]
pub struct PointerSmoother {
    target: [f32; 2],
    smoothed: [f32; 2],
    factor: f32,
}

impl Default for PointerSmoother {
    fn default() -> Self {
        Self::new(POINTER_SMOOTHING)
    }
}

impl PointerSmoother {
    pub fn new(factor: f32) -> Self {
        Self {
            target: POINTER_CENTER,
            smoothed: POINTER_CENTER,
            factor: factor.clamp(0.0, 1.0),
        }
    }

    /// Set the target from NDC. Non-finite input is dropped.
    pub fn set_target_ndc(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.target = ndc_to_unit([x, y]);
        }
    }

    pub fn set_target_unit(&mut self, u: f32, v: f32) {
        if u.is_finite() && v.is_finite() {
            self.target = [u.clamp(0.0, 1.0), v.clamp(0.0, 1.0)];
        }
    }

    /// One frame of exponential smoothing; returns the new smoothed value.
    pub fn step(&mut self) -> [f32; 2] {
        self.smoothed = lerp2(self.smoothed, self.target, self.factor);
        self.smoothed
    }

    #[inline]
    pub fn target(&self) -> [f32; 2] {
        self.target
    }

    #[inline]
    pub fn smoothed(&self) -> [f32; 2] {
        self.smoothed
    }
}

/// Convert a client-space pointer position to NDC relative to a canvas rect.
/// Returns `None` for a degenerate rect.
pub fn client_to_ndc(
    client: [f32; 2],
    rect_origin: [f32; 2],
    rect_size: [f32; 2],
) -> Option<[f32; 2]> {
    let [w, h] = rect_size;
    if !(w > 0.0 && h > 0.0) {
        return None;
    }
    let u = (client[0] - rect_origin[0]) / w;
    let v = (client[1] - rect_origin[1]) / h;
    Some([u * 2.0 - 1.0, -(v * 2.0) + 1.0])
}
