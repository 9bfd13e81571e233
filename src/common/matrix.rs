// Bit matrix
//------------------------------------------------------------------------------

/// Square grid of modules, `true` being dark. `x` is the column, `y` the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    grid: Vec<bool>,
    w: usize,
}

impl BitMatrix {
    pub fn new(w: usize) -> Self {
        Self { grid: vec![false; w * w], w }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    fn coord_to_index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.w, "Column out of bounds: Width {}, X {x}", self.w);
        assert!(y < self.w, "Row out of bounds: Width {}, Y {y}", self.w);

        y * self.w + x
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.grid[self.coord_to_index(x, y)]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize) {
        let index = self.coord_to_index(x, y);
        self.grid[index] = true;
    }

    pub fn count_dark(&self) -> usize {
        self.grid.iter().filter(|&&m| m).count()
    }

    /// Rows of the matrix, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.grid.chunks_exact(self.w)
    }

    #[cfg(test)]
    pub(crate) fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for row in self.rows() {
            row.iter().for_each(|&m| res.push(if m { '#' } else { '.' }));
            res.push('\n');
        }
        res
    }
}
