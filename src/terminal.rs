use crate::colors;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, stdout, Stdout, Write};
use std::time::Duration;

/// Cursor home, sent before every animated frame so it redraws in place
pub const CURSOR_HOME: &str = "\x1b[H";

/// Output sink for rendered frames
pub struct Terminal<W: Write = Stdout> {
    out: W,
    animate: bool,
}

impl Terminal<Stdout> {
    /// Open stdout for drawing. In animate mode the screen is cleared once
    pub fn new(animate: bool) -> io::Result<Self> {
        Self::with_writer(stdout(), animate)
    }
}

impl<W: Write> Terminal<W> {
    pub fn with_writer(mut out: W, animate: bool) -> io::Result<Self> {
        if animate {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            out.flush()?;
        }
        Ok(Self { out, animate })
    }

    /// Redraw in place: home the cursor, then write the frame
    pub fn present(&mut self, frame: &str) -> io::Result<()> {
        self.out.write_all(CURSOR_HOME.as_bytes())?;
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }

    /// Write a frame followed by a newline (print mode)
    pub fn print(&mut self, frame: &str) -> io::Result<()> {
        self.out.write_all(frame.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    /// Block for the inter-frame pause
    pub fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

impl<W: Write> Drop for Terminal<W> {
    fn drop(&mut self) {
        if self.animate {
            // leave the prompt below the last FPS line
            let _ = self.out.write_all(colors::RESET.as_bytes());
            let _ = self.out.write_all(b"\n");
            let _ = self.out.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(animate: bool, f: impl FnOnce(&mut Terminal<&mut Vec<u8>>)) -> String {
        let mut buf = Vec::new();
        {
            let mut term = Terminal::with_writer(&mut buf, animate).unwrap();
            f(&mut term);
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn animate_mode_clears_screen_once() {
        let out = captured(true, |_| {});
        assert!(out.starts_with("\x1b[2J\x1b[1;1H"));
    }

    #[test]
    fn print_mode_writes_nothing_on_its_own() {
        assert!(captured(false, |_| {}).is_empty());
    }

    #[test]
    fn present_homes_cursor_before_frame() {
        let out = captured(false, |term| {
            term.present("ab").unwrap();
            term.present("cd").unwrap();
        });
        assert_eq!(out, "\x1b[Hab\x1b[Hcd");
    }

    #[test]
    fn print_appends_newline() {
        let out = captured(false, |term| term.print("frame").unwrap());
        assert_eq!(out, "frame\n");
    }

    #[test]
    fn drop_resets_after_animation() {
        let out = captured(true, |term| term.present("x").unwrap());
        assert_eq!(out, "\x1b[2J\x1b[1;1H\x1b[Hx\x1b[0m\n");
    }

    #[test]
    fn zero_sleep_returns_immediately() {
        let term = Terminal::with_writer(Vec::new(), false).unwrap();
        let started = std::time::Instant::now();
        term.sleep(Duration::ZERO);
        assert!(started.elapsed() < Duration::from_millis(50));
    }
}
