use std::ops::Deref;

// Symbol
//------------------------------------------------------------------------------

/// Aztec symbol shape and number of data layers
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Symbol {
    Compact(usize),
    Full(usize),
}

impl Deref for Symbol {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Compact(l) | Self::Full(l) => l,
        }
    }
}

impl Symbol {
    pub const MAX_COMPACT_LAYERS: usize = 4;
    pub const MAX_FULL_LAYERS: usize = 32;

    /// Every symbol from smallest to largest capacity
    pub fn candidates() -> impl Iterator<Item = Symbol> {
        (1..=Self::MAX_COMPACT_LAYERS)
            .map(Self::Compact)
            .chain((1..=Self::MAX_FULL_LAYERS).map(Self::Full))
    }

    pub const fn layers(&self) -> usize {
        match *self {
            Self::Compact(l) | Self::Full(l) => l,
        }
    }

    pub const fn is_compact(&self) -> bool {
        matches!(self, Self::Compact(_))
    }

    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Compact(l) => (1..=Self::MAX_COMPACT_LAYERS).contains(&l),
            Self::Full(l) => (1..=Self::MAX_FULL_LAYERS).contains(&l),
        }
    }

    pub const fn word_size(&self) -> usize {
        WORD_SIZE[self.layers()]
    }

    /// Bits available for data and check words
    pub const fn total_bits(&self) -> usize {
        let l = self.layers();
        match self {
            Self::Compact(_) => (88 + 16 * l) * l,
            Self::Full(_) => (112 + 16 * l) * l,
        }
    }

    /// Most message words the mode message can describe
    pub const fn max_message_words(&self) -> usize {
        match self {
            Self::Compact(_) => 64,
            Self::Full(_) => 2048,
        }
    }

    /// Width before reference grid lines are inserted
    pub const fn base_width(&self) -> usize {
        let l = self.layers();
        match self {
            Self::Compact(_) => 11 + 4 * l,
            Self::Full(_) => 14 + 4 * l,
        }
    }

    pub const fn width(&self) -> usize {
        let base = self.base_width();
        match self {
            Self::Compact(_) => base,
            Self::Full(_) => base + 1 + 2 * ((base / 2 - 1) / 15),
        }
    }

    /// Maps a coordinate of the base grid to the final grid, skipping reference lines
    pub fn alignment_map(&self) -> Vec<usize> {
        let base = self.base_width();
        if self.is_compact() {
            return (0..base).collect();
        }

        let mut map = vec![0; base];
        let center = self.width() / 2;
        let orig_center = base / 2;
        for i in 0..orig_center {
            let offset = i + i / 15;
            map[orig_center - i - 1] = center - offset - 1;
            map[orig_center + i] = center + offset + 1;
        }
        map
    }

    /// Modules along one side of data layer `i`, counting from the outside
    pub const fn row_size(&self, i: usize) -> usize {
        let extra = if self.is_compact() { 9 } else { 12 };
        (self.layers() - i) * 4 + extra
    }

    pub const fn mode_message_bits(&self) -> usize {
        if self.is_compact() {
            28
        } else {
            40
        }
    }

    pub const fn bullseye_size(&self) -> usize {
        if self.is_compact() {
            5
        } else {
            7
        }
    }
}

// Word size of each layer count, index 0 unused
const WORD_SIZE: [usize; 33] = [
    4, 6, 6, 8, 8, 8, 8, 8, 8, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 10, 12, 12, 12,
    12, 12, 12, 12, 12, 12, 12,
];

#[cfg(test)]
mod symbol_tests {
    use test_case::test_case;

    use super::Symbol;

    #[test_case(Symbol::Compact(1), 15, 104, 6)]
    #[test_case(Symbol::Compact(2), 19, 240, 6)]
    #[test_case(Symbol::Compact(3), 23, 408, 8)]
    #[test_case(Symbol::Compact(4), 27, 608, 8)]
    #[test_case(Symbol::Full(1), 19, 128, 6)]
    #[test_case(Symbol::Full(4), 31, 704, 8)]
    #[test_case(Symbol::Full(8), 49, 1920, 8)]
    #[test_case(Symbol::Full(9), 53, 2304, 10)]
    #[test_case(Symbol::Full(22), 109, 10208, 10)]
    #[test_case(Symbol::Full(23), 113, 11040, 12)]
    #[test_case(Symbol::Full(32), 151, 19968, 12)]
    fn test_symbol_dims(symbol: Symbol, width: usize, total_bits: usize, word_size: usize) {
        assert_eq!(symbol.width(), width);
        assert_eq!(symbol.total_bits(), total_bits);
        assert_eq!(symbol.word_size(), word_size);
    }

    #[test]
    fn test_candidates_order() {
        let all = Symbol::candidates().collect::<Vec<_>>();
        assert_eq!(all.len(), 36);
        assert_eq!(all[0], Symbol::Compact(1));
        assert_eq!(all[4], Symbol::Full(1));
        assert_eq!(all[35], Symbol::Full(32));
        assert!(all.iter().all(|s| s.is_valid()));
        assert!(!Symbol::Compact(5).is_valid());
        assert!(!Symbol::Full(0).is_valid());
    }

    #[test]
    fn test_deref_layers() {
        assert_eq!(*Symbol::Full(17), 17);
        assert_eq!(*Symbol::Compact(3), Symbol::Compact(3).layers());
    }

    #[test]
    fn test_compact_alignment_map_is_identity() {
        let s = Symbol::Compact(3);
        assert_eq!(s.alignment_map(), (0..23).collect::<Vec<_>>());
    }

    #[test_case(Symbol::Full(1))]
    #[test_case(Symbol::Full(4))]
    #[test_case(Symbol::Full(15))]
    #[test_case(Symbol::Full(32))]
    fn test_full_alignment_map_skips_grid_lines(symbol: Symbol) {
        let map = symbol.alignment_map();
        let width = symbol.width();
        let center = width / 2;
        assert_eq!(map.len(), symbol.base_width());
        assert!(map.windows(2).all(|w| w[0] < w[1]));
        assert!(*map.last().unwrap() < width);
        // Reference grid lines sit on the center and every 16 modules from it
        for &m in &map {
            assert_ne!(m.abs_diff(center) % 16, 0, "Module {m} is on a grid line");
        }
    }

    #[test]
    fn test_full_alignment_map_small() {
        // 4 layers: base 30, width 31, only the center line is skipped
        let map = Symbol::Full(4).alignment_map();
        let exp = (0..15).chain(16..31).collect::<Vec<_>>();
        assert_eq!(map, exp);
    }

    #[test]
    fn test_row_size() {
        assert_eq!(Symbol::Compact(1).row_size(0), 13);
        assert_eq!(Symbol::Compact(4).row_size(3), 13);
        assert_eq!(Symbol::Full(1).row_size(0), 16);
        assert_eq!(Symbol::Full(32).row_size(0), 140);
    }

    #[test]
    fn test_data_layers_fill_capacity() {
        // Each layer holds 8 * row_size bits, together exactly the total capacity
        for s in Symbol::candidates() {
            let bits = (0..s.layers()).map(|i| 8 * s.row_size(i)).sum::<usize>();
            assert_eq!(bits, s.total_bits(), "{s:?}");
        }
    }
}
