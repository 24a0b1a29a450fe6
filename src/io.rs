use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::execute;
use crossterm::style;
use crossterm::terminal;

/// Where frames go.
pub trait Display {
    /// Show a rendered frame
    fn show(&mut self, frame: &str) -> io::Result<()>;

    /// Wipe whatever was shown so far
    fn clear(&mut self) -> io::Result<()>;
}

/// A [`Display`] driving a terminal through crossterm commands
pub struct Terminal<W: Write> {
    out: W,
}

impl Terminal<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Display for Terminal<W> {
    fn show(&mut self, frame: &str) -> io::Result<()> {
        execute!(self.out, style::Print(frame))
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )
    }
}
