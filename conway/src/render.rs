// render.rs - Text dump and scaled pixel buffer for a grid

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::grid::Grid;

/// One `" o"` / `" x"` / `" ."` pair per cell, a newline after every row.
pub fn render_text(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() * 2 + 1));
    for row in 0..grid.rows() {
        for &cell in grid.row(row) {
            out.push(' ');
            out.push(cell.symbol());
        }
        out.push('\n');
    }
    out
}

/// RGBA colours per cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dead: [u8; 4],
    pub faction_a: [u8; 4],
    pub faction_b: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dead: [40, 40, 40, 255],
            faction_a: [0, 200, 0, 255],
            faction_b: [220, 60, 60, 255],
        }
    }
}

impl Palette {
    #[inline]
    pub fn color(&self, cell: Cell) -> [u8; 4] {
        match cell {
            Cell::Dead => self.dead,
            Cell::FactionA => self.faction_a,
            Cell::FactionB => self.faction_b,
        }
    }
}

/// Row-major RGBA image, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl PixelBuffer {
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]])
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }
}

/// Draws every cell as a `scale x scale` block.
pub fn render_pixels(grid: &Grid, scale: usize, palette: &Palette) -> Result<PixelBuffer> {
    if scale == 0 {
        return Err(Error::InvalidScale(scale));
    }
    let width = grid.cols() * scale;
    let height = grid.rows() * scale;
    let mut rgba = Vec::with_capacity(width * height * 4);

    for row in 0..grid.rows() {
        // Build one scanline per grid row, then repeat it `scale` times
        let mut line = Vec::with_capacity(width * 4);
        for &cell in grid.row(row) {
            let color = palette.color(cell);
            for _ in 0..scale {
                line.extend_from_slice(&color);
            }
        }
        for _ in 0..scale {
            rgba.extend_from_slice(&line);
        }
    }

    Ok(PixelBuffer { width, height, rgba })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_dump_format() {
        let grid = Grid::from_numeric(&[&[0, 1], &[2, 0]]).unwrap();
        assert_eq!(render_text(&grid), " . o\n x .\n");
        assert_eq!(grid.to_string(), render_text(&grid));
    }

    #[test]
    fn pixels_are_scaled_blocks() {
        let grid = Grid::from_numeric(&[&[1, 0, 2]]).unwrap();
        let palette = Palette::default();
        let img = render_pixels(&grid, 3, &palette).unwrap();

        assert_eq!(img.size(), [9, 3]);
        assert_eq!(img.rgba.len(), 9 * 3 * 4);
        assert_eq!(img.pixel(0, 0), Some(palette.faction_a));
        assert_eq!(img.pixel(2, 2), Some(palette.faction_a));
        assert_eq!(img.pixel(3, 1), Some(palette.dead));
        assert_eq!(img.pixel(8, 2), Some(palette.faction_b));
        assert_eq!(img.pixel(9, 0), None);
    }

    #[test]
    fn zero_scale_is_rejected() {
        let grid = Grid::dead(2, 2).unwrap();
        assert_eq!(render_pixels(&grid, 0, &Palette::default()), Err(Error::InvalidScale(0)));
    }
}
