use image::Rgba;

/// Source colors captured per cell, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<Rgba<u8>>,
}

impl ColorGrid {
    pub fn new(width: u32, height: u32, cells: Vec<Rgba<u8>>) -> Self {
        assert_eq!(width as usize * height as usize, cells.len());
        Self { width, height, cells }
    }

    pub fn with_capacity(width: u32, height: u32) -> Self {
        Self { width, height, cells: Vec::with_capacity(width as usize * height as usize) }
    }

    pub(crate) fn push(&mut self, color: Rgba<u8>) {
        debug_assert!(self.cells.len() < self.width as usize * self.height as usize);
        self.cells.push(color);
    }

    /// Color at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Rgba<u8>> {
        if col >= self.width as usize {
            return None;
        }
        self.cells.get(row * self.width as usize + col).copied()
    }

    /// `(rows, columns)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height as usize, self.width as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(value: u8) -> Rgba<u8> {
        Rgba([value, value, value, 255])
    }

    #[test]
    fn test_get_is_row_major() {
        let grid = ColorGrid::new(3, 2, (0..6).map(gray).collect());
        assert_eq!(grid.get(0, 2), Some(gray(2)));
        assert_eq!(grid.get(1, 0), Some(gray(3)));
        assert_eq!(grid.dimensions(), (2, 3));
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = ColorGrid::new(2, 2, vec![gray(0); 4]);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.get(2, 0), None);
    }
}
