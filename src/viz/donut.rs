//! Rotating 3D donut (torus) rendered as ASCII art
//!
//! The torus is sampled on a fixed (phi, theta) grid, each sample is rotated
//! by the current angles, pushed away from the viewer and projected onto the
//! character grid. A per-cell inverse-depth test keeps the nearest sample and
//! a Lambert-style dot product with a fixed light picks its glyph.

use super::frame::{compose, FrameBuffer};
use super::{Rotation, VizState};
use crate::config::DonutConfig;
use crate::terminal::Terminal;
use log::{debug, info};
use std::f64::consts::TAU;
use std::io::{self, Write};
use std::time::{Duration, Instant};

// Torus geometry constants
pub const TUBE_RADIUS: f64 = 1.0;
pub const RING_RADIUS: f64 = 2.0;
pub const VIEWER_DISTANCE: f64 = 5.0;

// Projection onto the character grid. Cells are about twice as tall as they
// are wide, hence the 2:1 scale.
pub const SCREEN_WIDTH: usize = 80;
pub const SCREEN_HEIGHT: usize = 24;
const SCALE_X: f64 = 30.0;
const SCALE_Y: f64 = 15.0;

// Surface sampling steps (radians)
pub const THETA_STEP: f64 = 0.02;
pub const PHI_STEP: f64 = 0.07;

/// Glyphs from faintest to brightest
pub const LUMINANCE_RAMP: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// One projected surface point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub col: i32,
    pub row: i32,
    pub z_inv: f64,
    pub luminance: f64,
}

/// A fully resolved frame and the time it took to rasterize
pub struct RenderedFrame {
    pub buffer: FrameBuffer,
    pub elapsed: Duration,
}

impl RenderedFrame {
    pub fn to_text(&self) -> String {
        compose(&self.buffer, self.elapsed)
    }
}

/// Angles `0, step, 2*step, ...` below a full turn, accumulated by addition
pub fn sweep(step: f64) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(0.0), move |angle| Some(angle + step))
        .take_while(|angle| *angle < TAU)
}

/// Every surface sample for one orientation, phi outer and theta inner.
///
/// `width`/`height` only place the projection centre; samples may land
/// outside the grid and are left for the caller to discard.
pub fn samples(rotation: Rotation, width: usize, height: usize) -> impl Iterator<Item = Sample> {
    let (sin_a, cos_a) = rotation.a.sin_cos();
    let (sin_b, cos_b) = rotation.b.sin_cos();
    let half_w = (width / 2) as f64;
    let half_h = (height / 2) as f64;

    sweep(PHI_STEP).flat_map(move |phi| {
        let (sin_phi, cos_phi) = phi.sin_cos();

        sweep(THETA_STEP).map(move |theta| {
            let (sin_theta, cos_theta) = theta.sin_cos();

            // point on the tube cross-section
            let circle_x = RING_RADIUS + TUBE_RADIUS * cos_theta;
            let circle_y = TUBE_RADIUS * sin_theta;

            let x = circle_x * (cos_b * cos_phi + sin_a * sin_b * sin_phi) - circle_y * cos_a * sin_b;
            let y = circle_x * (sin_b * cos_phi - sin_a * cos_b * sin_phi) + circle_y * cos_a * cos_b;
            let z = cos_a * circle_x * sin_phi + circle_y * sin_a + VIEWER_DISTANCE;
            let z_inv = 1.0 / z;

            let luminance = cos_phi * cos_theta * sin_b - cos_a * sin_phi * cos_theta - sin_a * sin_theta
                + cos_b * (cos_a * sin_theta - sin_phi * cos_theta * sin_a);

            Sample {
                col: (half_w + SCALE_X * x * z_inv) as i32,
                row: (half_h - SCALE_Y * y * z_inv) as i32,
                z_inv,
                luminance,
            }
        })
    })
}

/// Ramp glyph for a luminance value, index clamped to the ramp
pub fn luminance_glyph(luminance: f64) -> char {
    let last = LUMINANCE_RAMP.len() as i64 - 1;
    let idx = ((luminance * 8.0) as i64).clamp(0, last);
    LUMINANCE_RAMP[idx as usize]
}

/// Clear `buffer` and draw the lit, visible surface for `rotation` into it
pub fn rasterize(buffer: &mut FrameBuffer, rotation: Rotation) {
    buffer.clear();
    for s in samples(rotation, buffer.width(), buffer.height()) {
        if s.luminance > 0.0 {
            buffer.plot(s.col, s.row, s.z_inv, luminance_glyph(s.luminance));
        }
    }
}

/// Render one frame on a fresh 80x24 grid
pub fn render_frame(rotation: Rotation) -> RenderedFrame {
    let started = Instant::now();
    let mut buffer = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    rasterize(&mut buffer, rotation);
    RenderedFrame {
        buffer,
        elapsed: started.elapsed(),
    }
}

/// Run the rotating donut animation until killed or the frame limit is hit
pub fn run<W: Write>(term: &mut Terminal<W>, config: &DonutConfig) -> io::Result<()> {
    let mut state = VizState::new(config.start);

    info!(
        "animating: delay={:?} frames={}",
        config.delay,
        config.frames.map_or_else(|| "unbounded".to_string(), |n| n.to_string())
    );

    while !state.limit_reached(config.frames) {
        let frame = render_frame(state.rotation);
        debug!(
            "frame {}: a={:.2} b={:.2} lit={} elapsed={:?}",
            state.frames_drawn,
            state.rotation.a,
            state.rotation.b,
            frame.buffer.lit_cells(),
            frame.elapsed
        );

        if let Err(e) = term.present(&frame.to_text()) {
            if e.kind() == io::ErrorKind::BrokenPipe {
                info!("output closed after {} frames", state.frames_drawn);
                return Ok(());
            }
            return Err(e);
        }

        state.advance();
        if !state.limit_reached(config.frames) {
            term.sleep(config.delay);
        }
    }

    info!("stopped after {} frames", state.frames_drawn);
    Ok(())
}

/// Print a single frame at the starting rotation (no cursor homing)
pub fn print<W: Write>(term: &mut Terminal<W>, config: &DonutConfig) -> io::Result<()> {
    let frame = render_frame(config.start);
    match term.print(&frame.to_text()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
