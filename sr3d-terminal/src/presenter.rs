/// Terminal presentation sink for rendered frames
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Write};
use sr3d_core::{FrameBuffer, PresentationSink};

/// Character luminosity ramp (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Prints a pixel buffer onto a grid of terminal cells.
///
/// Each cell shows one sampled pixel: a ramp character chosen by luminance,
/// drawn in the pixel's own color.
pub struct TerminalPresenter<W: Write> {
    out: W,
    columns: usize,
    rows: usize,
    status: Option<String>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, columns: usize, rows: usize) -> Self {
        Self {
            out,
            columns,
            rows,
            status: None,
        }
    }

    pub fn resize(&mut self, columns: usize, rows: usize) {
        self.columns = columns;
        self.rows = rows;
    }

    /// Text drawn over the first row of the next frames
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationSink for TerminalPresenter<W> {
    type Error = io::Error;

    fn present(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        let cells = sample_cells(frame, self.columns, self.rows);
        let mut current: Option<Color> = None;

        for (row, line) in cells.chunks(self.columns.max(1)).enumerate() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            for &pixel in line {
                let (glyph, color) = cell_glyph(pixel);
                if current != Some(color) {
                    self.out.queue(SetForegroundColor(color))?;
                    current = Some(color);
                }
                self.out.queue(Print(glyph))?;
            }
        }

        if let Some(status) = &self.status {
            self.out.queue(cursor::MoveTo(0, 0))?;
            self.out.queue(SetForegroundColor(Color::Yellow))?;
            self.out.queue(Print(status))?;
        }

        self.out.queue(ResetColor)?;
        self.out.flush()
    }
}

/// Nearest-pixel sample for every cell, row-major
pub fn sample_cells(frame: &FrameBuffer, columns: usize, rows: usize) -> Vec<u32> {
    let (width, height) = (frame.width(), frame.height());
    if width == 0 || height == 0 {
        return vec![0; columns * rows];
    }

    let mut cells = Vec::with_capacity(columns * rows);
    for row in 0..rows {
        let y = row * height / rows;
        for column in 0..columns {
            let x = column * width / columns;
            cells.push(frame.pixel(x, y).unwrap_or(0));
        }
    }
    cells
}

/// Perceived brightness of a packed `0xAARRGGBB` color
pub fn luminance(color: u32) -> u8 {
    let (r, g, b) = channels(color);
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
}

/// Ramp character and terminal color for one pixel
pub fn cell_glyph(color: u32) -> (char, Color) {
    let index = luminance(color) as usize * (LUMINOSITY_RAMP.len() - 1) / 255;
    let (r, g, b) = channels(color);
    (LUMINOSITY_RAMP[index], Color::Rgb { r, g, b })
}

fn channels(color: u32) -> (u8, u8, u8) {
    ((color >> 16) as u8, (color >> 8) as u8, color as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance() {
        assert_eq!(luminance(0xFF00_0000), 0);
        assert_eq!(luminance(0xFFFF_FFFF), 255);
        assert_eq!(luminance(0xFF80_8080), 128);
        // alpha does not contribute
        assert_eq!(luminance(0x00FF_FFFF), 255);
    }

    #[test]
    fn test_cell_glyph() {
        assert_eq!(cell_glyph(0xFF00_0000).0, ' ');
        assert_eq!(cell_glyph(0xFFFF_FFFF).0, '@');
        assert_eq!(
            cell_glyph(0xFF12_3456).1,
            Color::Rgb {
                r: 0x12,
                g: 0x34,
                b: 0x56
            }
        );
    }

    #[test]
    fn test_sample_cells_downscales() {
        let mut frame = FrameBuffer::new(4, 4);
        frame.set_pixel(0, 0, 1);
        frame.set_pixel(2, 0, 2);
        frame.set_pixel(0, 2, 3);
        frame.set_pixel(2, 2, 4);
        frame.set_pixel(1, 1, 9);

        assert_eq!(sample_cells(&frame, 2, 2), vec![1, 2, 3, 4]);
        assert_eq!(sample_cells(&frame, 4, 4).len(), 16);
        assert_eq!(sample_cells(&FrameBuffer::new(0, 0), 3, 2), vec![0; 6]);
    }

    #[test]
    fn test_present_writes_every_cell() {
        let mut frame = FrameBuffer::new(8, 4);
        frame.clear(0xFFFF_FFFF);

        let mut presenter = TerminalPresenter::new(Vec::new(), 4, 2);
        presenter.present(&frame).unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(text.matches('@').count(), 8);
    }

    #[test]
    fn test_status_overlay() {
        let frame = FrameBuffer::new(8, 4);
        let mut presenter = TerminalPresenter::new(Vec::new(), 4, 2);
        presenter.set_status("FPS: 30.0");
        presenter.present(&frame).unwrap();
        let text = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(text.contains("FPS: 30.0"));
    }
}
