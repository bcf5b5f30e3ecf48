//! Per-frame depth and glyph buffers, plus text serialisation

use crate::colors;
use std::time::Duration;

/// Glyph stored in cells that no surface sample reached
pub const BLANK: char = ' ';

/// Flat `row * width + col` buffers for one frame.
///
/// `depth` holds the largest inverse depth written to a cell this frame
/// (0.0 when untouched); `glyphs` holds the glyph of that nearest sample.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    depth: Vec<f64>,
    glyphs: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            depth: vec![0.0; width * height],
            glyphs: vec![BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every cell to zero depth and a blank glyph
    pub fn clear(&mut self) {
        self.depth.fill(0.0);
        self.glyphs.fill(BLANK);
    }

    /// Flat index of a cell, or `None` when either coordinate is off-grid.
    ///
    /// Columns are checked on their own so an overflowing column never
    /// wraps into the neighbouring row.
    pub fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Depth-tested write. Returns true when the sample became the nearest
    /// surface for its cell.
    ///
    /// Only a strictly larger `z_inv` replaces the stored one, so on exact
    /// ties the sample visited first keeps the cell.
    pub fn plot(&mut self, col: i32, row: i32, z_inv: f64, glyph: char) -> bool {
        let Some(idx) = self.index(col, row) else {
            return false;
        };
        if z_inv <= self.depth[idx] {
            return false;
        }
        self.depth[idx] = z_inv;
        self.glyphs[idx] = glyph;
        true
    }

    pub fn depth(&self, col: i32, row: i32) -> Option<f64> {
        self.index(col, row).map(|idx| self.depth[idx])
    }

    pub fn glyph(&self, col: i32, row: i32) -> Option<char> {
        self.index(col, row).map(|idx| self.glyphs[idx])
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn depths(&self) -> &[f64] {
        &self.depth
    }

    /// Number of cells holding a surface glyph
    pub fn lit_cells(&self) -> usize {
        self.glyphs.iter().filter(|&&ch| ch != BLANK).count()
    }
}

/// Frame rate from the time one frame took, on a whole-millisecond basis.
///
/// Sub-millisecond frames count as 1 ms so the result stays finite.
pub fn frames_per_second(elapsed: Duration) -> f64 {
    let millis = elapsed.as_millis().max(1);
    1000.0 / millis as f64
}

/// Serialise a frame: the glyph block wrapped in the frame colour, a line
/// break before every row, then the `FPS:` line.
pub fn compose(buffer: &FrameBuffer, elapsed: Duration) -> String {
    // escapes + one newline per row + the FPS line
    let mut out = String::with_capacity(buffer.glyphs.len() + buffer.height + 64);

    colors::set_frame_color(&mut out);
    for (i, &ch) in buffer.glyphs.iter().enumerate() {
        if i % buffer.width == 0 {
            out.push('\n');
        }
        out.push(ch);
    }
    colors::reset(&mut out);

    out.push('\n');
    colors::set_frame_color(&mut out);
    out.push_str(&format!("FPS: {:.2}", frames_per_second(elapsed)));
    colors::reset(&mut out);
    out
}
