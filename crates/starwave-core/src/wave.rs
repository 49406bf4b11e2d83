//! Particle wave grid generation and its per-frame uniform state.
//!
//! The grid is a set of columns across the x axis, each holding a number of
//! rows along z. With [`Density::Varying`] the row count follows [`density`],
//! a function of the column index only, so the total point count is the same
//! for every RNG stream. The RNG only fills the per-point `random` attribute.

use crate::constants::*;
use rand::prelude::*;
use std::f32::consts::TAU;

/// One wave particle, laid out for a per-instance vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WaveParticle {
    pub position: [f32; 3],
    pub random: f32,
    /// 0 at the front row, 1 at the back row.
    pub depth_factor: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Density {
    /// Row count per column follows [`density`].
    Varying,
    /// Every column gets `max_rows` rows.
    Uniform,
}

#[derive(Clone, Debug)]
pub struct WaveGridConfig {
    pub width: f32,
    pub depth: f32,
    pub cols: usize,
    pub max_rows: usize,
    pub y_offset: f32,
    pub density: Density,
}

impl Default for WaveGridConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl WaveGridConfig {
    pub fn full() -> Self {
        Self {
            width: WAVE_WIDTH,
            depth: WAVE_DEPTH,
            cols: WAVE_COLS,
            max_rows: WAVE_MAX_ROWS,
            y_offset: WAVE_Y_OFFSET,
            density: Density::Varying,
        }
    }

    pub fn low() -> Self {
        Self {
            cols: WAVE_LOW_COLS,
            max_rows: WAVE_LOW_ROWS,
            density: Density::Uniform,
            ..Self::full()
        }
    }

    #[inline]
    fn row_cap(&self) -> usize {
        self.max_rows.max(WAVE_MIN_ROWS)
    }

    /// Normalized column position in [0, 1]. A single column sits in the middle.
    #[inline]
    pub fn column_nx(&self, col: usize) -> f32 {
        if self.cols < 2 {
            0.5
        } else {
            col as f32 / (self.cols - 1) as f32
        }
    }

    /// Row count for one column, always within `[WAVE_MIN_ROWS, max_rows]`.
    pub fn rows_for_column(&self, col: usize) -> usize {
        let cap = self.row_cap();
        match self.density {
            Density::Uniform => cap,
            Density::Varying => {
                let target = (self.max_rows as f32 * density(self.column_nx(col))).floor();
                let target = if target.is_finite() && target > 0.0 { target as usize } else { 0 };
                target.clamp(WAVE_MIN_ROWS, cap)
            }
        }
    }

    pub fn rows_per_column(&self) -> Vec<usize> {
        (0..self.cols).map(|c| self.rows_for_column(c)).collect()
    }
}

/// Wave-like column density: two sines plus a Gaussian peak at the horizontal midpoint.
pub fn density(nx: f32) -> f32 {
    let x = nx * TAU;
    let wave1 = (x * 1.2).sin() * 0.3;
    let wave2 = (x * 0.6 + 1.0).sin() * 0.2;
    let center_peak = (-((nx - 0.5) * 3.0).powi(2)).exp() * 0.4;
    0.4 + wave1 + wave2 + center_peak
}

#[derive(Clone, Debug, Default)]
pub struct WaveGrid {
    pub particles: Vec<WaveParticle>,
    pub rows_per_column: Vec<usize>,
}

impl WaveGrid {
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

pub fn generate_wave_grid<R: Rng + ?Sized>(config: &WaveGridConfig, rng: &mut R) -> WaveGrid {
    let rows_per_column = config.rows_per_column();
    let total: usize = rows_per_column.iter().sum();
    let mut particles = Vec::with_capacity(total);

    for (col, &rows) in rows_per_column.iter().enumerate() {
        let x = (config.column_nx(col) - 0.5) * config.width;
        let last_row = (rows - 1).max(1) as f32;
        for row in 0..rows {
            let z_norm = row as f32 / last_row;
            particles.push(WaveParticle {
                position: [x, config.y_offset, (z_norm - 0.5) * config.depth],
                random: rng.gen::<f32>(),
                depth_factor: z_norm,
            });
        }
    }
    log::debug!(
        "[wave] generated {} particles over {} columns",
        particles.len(),
        rows_per_column.len()
    );
    WaveGrid {
        particles,
        rows_per_column,
    }
}

/// Shader detail level. `Full` runs the layered composition; `Low` is two sines and a
/// two-colour gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveDetail {
    Low,
    Full,
}

impl WaveDetail {
    #[inline]
    pub fn as_uniform(self) -> f32 {
        match self {
            WaveDetail::Low => 0.0,
            WaveDetail::Full => 1.0,
        }
    }
}

/// Scalars mirrored into the wave uniform buffer each frame.
#[derive(Clone, Debug)]
pub struct WaveUniformState {
    pub time: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub speed: f32,
    pub pointer: [f32; 2],
    pub detail: WaveDetail,
}

impl WaveUniformState {
    pub fn new(detail: WaveDetail) -> Self {
        Self {
            time: 0.0,
            amplitude: WAVE_AMPLITUDE,
            frequency: WAVE_FREQUENCY,
            speed: WAVE_SPEED,
            pointer: POINTER_CENTER,
            detail,
        }
    }

    /// Per-frame update. Non-finite clock readings keep the previous time.
    pub fn advance(&mut self, elapsed_sec: f32, pointer: [f32; 2]) {
        if elapsed_sec.is_finite() {
            self.time = elapsed_sec;
        }
        self.pointer = pointer;
    }

    /// Like [`WaveUniformState::advance`], but a missing pointer sample holds the last one.
    pub fn advance_sampled(&mut self, elapsed_sec: f32, pointer: Option<[f32; 2]>) {
        let pointer = pointer.unwrap_or(self.pointer);
        self.advance(elapsed_sec, pointer);
    }
}

impl Default for WaveUniformState {
    fn default() -> Self {
        Self::new(WaveDetail::Full)
    }
}
