//! Visualization modules
//!
//! `donut` renders the torus into a `frame::FrameBuffer`; the loop state
//! that carries over between frames lives here.

pub mod donut;
pub mod frame;

/// Per-frame increment of rotation angle A (radians)
pub const A_STEP: f64 = 0.07;
/// Per-frame increment of rotation angle B (radians)
pub const B_STEP: f64 = 0.02;

/// The two accumulating rotation angles that orient the torus.
///
/// They are only ever incremented; the trig functions take care of wrapping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub a: f64,
    pub b: f64,
}

impl Rotation {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Step both angles by one frame
    pub fn advance(&mut self) {
        self.a += A_STEP;
        self.b += B_STEP;
    }
}

/// Runtime state owned by the animation loop
pub struct VizState {
    pub rotation: Rotation,
    pub frames_drawn: u64,
}

impl VizState {
    pub fn new(start: Rotation) -> Self {
        Self {
            rotation: start,
            frames_drawn: 0,
        }
    }

    /// Record an emitted frame and move on to the next orientation
    pub fn advance(&mut self) {
        self.frames_drawn += 1;
        self.rotation.advance();
    }

    /// True once a frame limit is set and has been met
    pub fn limit_reached(&self, limit: Option<u64>) -> bool {
        limit.is_some_and(|n| self.frames_drawn >= n)
    }
}
