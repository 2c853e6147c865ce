use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use scrollsel::Rgb;

use crate::buffer::{Buffer, Cell};
use crate::text::char_width;

/// Raw-mode, alternate-screen terminal with mouse capture.
///
/// Frames are drawn into an off-screen [`Buffer`] and only changed cells are
/// written out. Dropping the terminal restores the user's screen.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    full_redraw: bool,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        log::debug!("[terminal] entered alternate screen at {}x{}", width, height);

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            full_redraw: true,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait up to `timeout` for input, then drain whatever else is queued.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw one frame. `paint` receives a cleared buffer the size of the screen.
    pub fn render(&mut self, paint: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("[terminal] resized to {}x{}", width, height);
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            self.full_redraw = true;
        }

        self.current_buffer.clear();
        paint(&mut self.current_buffer);

        self.flush()?;
        self.full_redraw = false;

        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut writer = CellWriter::new(&mut self.stdout);
        queue!(writer.out, SetAttribute(Attribute::Reset))?;

        if self.full_redraw {
            queue!(writer.out, terminal::Clear(terminal::ClearType::All))?;
            for (x, y, cell) in self.current_buffer.cells() {
                writer.write(x, y, cell)?;
            }
        } else {
            for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
                writer.write(x, y, cell)?;
            }
        }

        queue!(writer.out, SetAttribute(Attribute::Reset))?;
        writer.out.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("[terminal] restored");
    }
}

/// Tracks cursor and colors so runs of adjacent cells skip redundant escapes.
struct CellWriter<'a> {
    out: &'a mut io::Stdout,
    last_x: u16,
    last_y: u16,
    last_width: u16,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl<'a> CellWriter<'a> {
    fn new(out: &'a mut io::Stdout) -> Self {
        Self {
            out,
            last_x: u16::MAX,
            last_y: u16::MAX,
            last_width: 1,
            fg: None,
            bg: None,
        }
    }

    fn write(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        // The wide glyph to the left already covers this column
        if cell.wide_continuation {
            return Ok(());
        }

        if y != self.last_y || x != self.last_x.wrapping_add(self.last_width) {
            queue!(self.out, cursor::MoveTo(x, y))?;
        }

        if self.fg != Some(cell.fg) {
            queue!(self.out, SetForegroundColor(to_crossterm(cell.fg)))?;
            self.fg = Some(cell.fg);
        }
        if self.bg != Some(cell.bg) {
            queue!(self.out, SetBackgroundColor(to_crossterm(cell.bg)))?;
            self.bg = Some(cell.bg);
        }

        write!(self.out, "{}", cell.char)?;

        self.last_x = x;
        self.last_y = y;
        self.last_width = char_width(cell.char).max(1) as u16;
        Ok(())
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
