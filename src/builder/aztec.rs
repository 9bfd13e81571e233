use crate::common::{matrix::BitMatrix, metadata::Symbol, BitStream};

// Aztec code
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AztecCode {
    matrix: BitMatrix,
    symbol: Symbol,
    message_words: usize,
}

impl AztecCode {
    pub(crate) fn new(symbol: Symbol, message_words: usize) -> Self {
        debug_assert!(symbol.is_valid(), "Invalid symbol: {symbol:?}");

        Self { matrix: BitMatrix::new(symbol.width()), symbol, message_words }
    }

    pub fn matrix(&self) -> &BitMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> BitMatrix {
        self.matrix
    }

    pub fn width(&self) -> usize {
        self.matrix.width()
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn layers(&self) -> usize {
        self.symbol.layers()
    }

    pub fn is_compact(&self) -> bool {
        self.symbol.is_compact()
    }

    pub fn word_size(&self) -> usize {
        self.symbol.word_size()
    }

    pub fn message_words(&self) -> usize {
        self.message_words
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Symbol: {}, Layers: {}, Width: {}, Word size: {}, Message words: {} }}",
            if self.is_compact() { "Compact" } else { "Full" },
            self.layers(),
            self.width(),
            self.word_size(),
            self.message_words
        )
    }
}

// Drawing
//------------------------------------------------------------------------------

impl AztecCode {
    /// Lays `bits` out in 2 module wide rows spiralling counterclockwise
    /// from the outermost layer inwards.
    pub(crate) fn draw_data(&mut self, bits: &BitStream) {
        debug_assert!(
            bits.len() == self.symbol.total_bits(),
            "Payload doesn't fill the symbol: Bits {}, Capacity {}",
            bits.len(),
            self.symbol.total_bits()
        );

        let bits = bits.iter().collect::<Vec<_>>();
        let map = self.symbol.alignment_map();
        let base = self.symbol.base_width();

        let mut row_off = 0;
        for i in 0..self.symbol.layers() {
            let row_size = self.symbol.row_size(i);
            for j in 0..row_size {
                let col_off = j * 2;
                for k in 0..2 {
                    let (near, far) = (2 * i, base - 1 - 2 * i);
                    if bits[row_off + col_off + k] {
                        self.matrix.set(map[near + k], map[near + j]);
                    }
                    if bits[row_off + row_size * 2 + col_off + k] {
                        self.matrix.set(map[near + j], map[far - k]);
                    }
                    if bits[row_off + row_size * 4 + col_off + k] {
                        self.matrix.set(map[far - k], map[far - j]);
                    }
                    if bits[row_off + row_size * 6 + col_off + k] {
                        self.matrix.set(map[far - j], map[near + k]);
                    }
                }
            }
            row_off += row_size * 8;
        }
    }

    /// Writes the mode message on the ring just outside the bullseye
    pub(crate) fn draw_mode_message(&mut self, mm: &BitStream) {
        debug_assert!(
            mm.len() == self.symbol.mode_message_bits(),
            "Invalid mode message length: {}",
            mm.len()
        );

        let mm = mm.iter().collect::<Vec<_>>();
        let c = self.width() / 2;
        if self.is_compact() {
            for i in 0..7 {
                let off = c - 3 + i;
                if mm[i] {
                    self.matrix.set(off, c - 5);
                }
                if mm[i + 7] {
                    self.matrix.set(c + 5, off);
                }
                if mm[20 - i] {
                    self.matrix.set(off, c + 5);
                }
                if mm[27 - i] {
                    self.matrix.set(c - 5, off);
                }
            }
        } else {
            for i in 0..10 {
                // Skip the center reference line
                let off = c - 5 + i + i / 5;
                if mm[i] {
                    self.matrix.set(off, c - 7);
                }
                if mm[i + 10] {
                    self.matrix.set(c + 7, off);
                }
                if mm[29 - i] {
                    self.matrix.set(off, c + 7);
                }
                if mm[39 - i] {
                    self.matrix.set(c - 7, off);
                }
            }
        }
    }

    pub(crate) fn draw_bullseye(&mut self) {
        let c = self.width() / 2;
        let size = self.symbol.bullseye_size();
        for i in (0..size).step_by(2) {
            for j in c - i..=c + i {
                self.matrix.set(j, c - i);
                self.matrix.set(j, c + i);
                self.matrix.set(c - i, j);
                self.matrix.set(c + i, j);
            }
        }

        // Orientation marks
        self.matrix.set(c - size, c - size);
        self.matrix.set(c - size + 1, c - size);
        self.matrix.set(c - size, c - size + 1);
        self.matrix.set(c + size, c - size);
        self.matrix.set(c + size, c - size + 1);
        self.matrix.set(c + size, c + size - 1);
    }

    /// Alternating dark modules on every 16th row and column from the center,
    /// full range symbols only.
    pub(crate) fn draw_reference_grid(&mut self) {
        if self.is_compact() {
            return;
        }

        let w = self.width();
        let c = w / 2;
        // One line per 15 modules of the base grid from the center
        let lines = (self.symbol.base_width() / 2 - 1).div_ceil(15);
        for j in (0..lines).map(|n| n * 16) {
            for k in ((c & 1)..w).step_by(2) {
                self.matrix.set(c - j, k);
                self.matrix.set(c + j, k);
                self.matrix.set(k, c - j);
                self.matrix.set(k, c + j);
            }
        }
    }
}

#[cfg(test)]
mod aztec_tests {
    use test_case::test_case;

    use super::AztecCode;
    use crate::common::{metadata::Symbol, BitStream};

    #[test]
    fn test_compact_bullseye() {
        let mut code = AztecCode::new(Symbol::Compact(1), 1);
        code.draw_bullseye();
        code.draw_reference_grid();
        let exp = "
...............
...............
..##........#..
..###########..
...#.......#...
...#.#####.#...
...#.#...#.#...
...#.#.#.#.#...
...#.#...#.#...
...#.#####.#...
...#.......#...
...##########..
...............
...............
...............
";
        assert_eq!(code.matrix().to_debug_str(), exp);
    }

    #[test]
    fn test_full_bullseye_rings() {
        let mut code = AztecCode::new(Symbol::Full(1), 1);
        code.draw_bullseye();
        let c = code.width() / 2;
        let m = code.matrix();
        // Rings alternate dark and light from the center out to distance 6
        for d in 0..=6usize {
            assert_eq!(m.get(c + d, c), d % 2 == 0, "Ring {d}");
            assert_eq!(m.get(c, c - d), d % 2 == 0, "Ring {d}");
        }
        assert!(m.get(c - 7, c - 7) && m.get(c - 6, c - 7) && m.get(c - 7, c - 6));
        assert!(m.get(c + 7, c - 7) && m.get(c + 7, c - 6) && m.get(c + 7, c + 6));
        assert!(!m.get(c - 7, c + 7) && !m.get(c + 7, c + 7));
    }

    #[test_case(Symbol::Full(4))]
    #[test_case(Symbol::Full(12))]
    #[test_case(Symbol::Full(32))]
    fn test_reference_grid(symbol: Symbol) {
        let mut code = AztecCode::new(symbol, 1);
        code.draw_reference_grid();
        let w = code.width();
        let c = w / 2;
        let m = code.matrix();
        let lines = (symbol.base_width() / 2 - 1).div_ceil(15);
        for line in (0..lines).map(|n| n * 16) {
            for k in 0..w {
                let dark = k % 2 == c % 2;
                assert_eq!(m.get(c - line, k), dark);
                assert_eq!(m.get(k, c + line), dark);
            }
        }
        // Nothing off the grid lines
        assert!(!m.get(c + 1, c + 1));
    }

    #[test]
    fn test_compact_has_no_reference_grid() {
        let mut code = AztecCode::new(Symbol::Compact(4), 1);
        code.draw_reference_grid();
        assert_eq!(code.matrix().count_dark(), 0);
    }

    fn mode_message_positions(symbol: Symbol) -> Vec<(usize, usize)> {
        let mut code = AztecCode::new(symbol, 1);
        let n = symbol.mode_message_bits();
        (0..n)
            .map(|bit| {
                let mut mm = BitStream::new();
                (0..n).for_each(|i| mm.push(i == bit));
                code.matrix = crate::common::matrix::BitMatrix::new(code.width());
                code.draw_mode_message(&mm);
                let m = code.matrix();
                let pos = (0..code.width())
                    .flat_map(|y| (0..code.width()).map(move |x| (x, y)))
                    .filter(|&(x, y)| m.get(x, y))
                    .collect::<Vec<_>>();
                assert_eq!(pos.len(), 1, "Bit {bit} set {} modules", pos.len());
                pos[0]
            })
            .collect()
    }

    #[test]
    fn test_compact_mode_message_positions() {
        let pos = mode_message_positions(Symbol::Compact(1));
        // Top side left to right, then right side top to bottom
        assert_eq!(pos[0], (4, 2));
        assert_eq!(pos[6], (10, 2));
        assert_eq!(pos[7], (12, 4));
        assert_eq!(pos[13], (12, 10));
        assert_eq!(pos[14], (10, 12));
        assert_eq!(pos[21], (2, 10));
        assert_eq!(pos[27], (2, 4));
    }

    #[test]
    fn test_full_mode_message_skips_center() {
        let symbol = Symbol::Full(1);
        let c = symbol.width() / 2;
        let pos = mode_message_positions(symbol);
        assert_eq!(pos.len(), 40);
        assert!(pos.iter().all(|&(x, y)| x != c && y != c));
        assert_eq!(pos[0], (c - 5, c - 7));
        assert_eq!(pos[5], (c + 1, c - 7));
        assert_eq!(pos[39], (c - 7, c - 5));
    }

    #[test_case(Symbol::Compact(1))]
    #[test_case(Symbol::Compact(4))]
    #[test_case(Symbol::Full(1))]
    #[test_case(Symbol::Full(15))]
    fn test_data_modules_are_disjoint(symbol: Symbol) {
        // Every data bit lands on its own module outside the mode message ring
        let mut all = BitStream::new();
        (0..symbol.total_bits()).for_each(|_| all.push(true));
        let mut code = AztecCode::new(symbol, 1);
        code.draw_data(&all);
        assert_eq!(code.matrix().count_dark(), symbol.total_bits());

        let c = code.width() / 2;
        let s = symbol.bullseye_size();
        assert!(!code.matrix().get(c, c));
        assert!(!code.matrix().get(c - s, c - s));
        assert!(!code.matrix().get(c + s, c + s));
    }

    #[test]
    fn test_first_data_bits() {
        // The first two bits fill the top left corner pair of the outermost layer
        let symbol = Symbol::Compact(1);
        let mut bits = BitStream::new();
        (0..symbol.total_bits()).for_each(|i| bits.push(i < 2));
        let mut code = AztecCode::new(symbol, 1);
        code.draw_data(&bits);
        assert!(code.matrix().get(0, 0));
        assert!(code.matrix().get(1, 0));
        assert_eq!(code.matrix().count_dark(), 2);
    }

    #[test]
    fn test_metadata() {
        let code = AztecCode::new(Symbol::Compact(2), 11);
        assert_eq!(
            code.metadata(),
            "{ Symbol: Compact, Layers: 2, Width: 19, Word size: 6, Message words: 11 }"
        );
    }
}
