use log::trace;

use super::{
    token::{Token, TokenArena},
    types::{Mode, MODES},
};
use crate::common::BitStream;

// Longest run a single binary shift can carry
pub const MAX_BINARY_SHIFT: usize = 2047 + 31;

// Encoder state
//------------------------------------------------------------------------------

/// One candidate encoding of the prefix seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    mode: Mode,
    // Last token of this candidate in the arena
    token: Option<usize>,
    // Bytes in the open binary shift run, 0 if none
    bs_bytes: usize,
    // Bits spent so far, including the open run
    bit_count: usize,
}

impl State {
    const INITIAL: Self = Self { mode: Mode::Upper, token: None, bs_bytes: 0, bit_count: 0 };

    /// True if `self` can reach `other`'s mode for no more bits than `other` already spent
    fn is_better_than_or_equal(&self, other: &State) -> bool {
        let mut size = self.bit_count + self.mode.latch_bits(other.mode);
        if other.bs_bytes > 0 && (self.bs_bytes == 0 || self.bs_bytes > other.bs_bytes) {
            // Penalty for the extra binary shift header
            size += 10;
        }
        size <= other.bit_count
    }
}

// Dynamic encoder
//------------------------------------------------------------------------------

/// Finds the shortest bit sequence for `data` over the five text modes and
/// binary shift, by keeping a frontier of non-dominated candidates per byte.
pub struct DynamicEncoder<'a> {
    data: &'a [u8],
    arena: TokenArena,
}

impl<'a> DynamicEncoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, arena: TokenArena::new() }
    }

    pub fn encode(mut self) -> BitStream {
        let states = self.run();
        let best = states.iter().min_by_key(|s| s.bit_count).copied().unwrap_or(State::INITIAL);
        let best = self.end_binary_shift(&best, self.data.len());

        trace!(
            "Dynamic encoding done: Bytes {}, Bits {}, Tokens {}",
            self.data.len(),
            best.bit_count,
            self.arena.len()
        );

        self.arena.replay(best.token, self.data)
    }

    // Frontier after consuming the whole input
    fn run(&mut self) -> Vec<State> {
        let mut states = vec![State::INITIAL];
        let mut index = 0;
        while index < self.data.len() {
            let next = self.data.get(index + 1).copied().unwrap_or(0);
            let pair_code = match (self.data[index], next) {
                (b'\r', b'\n') => 2,
                (b'.', b' ') => 3,
                (b',', b' ') => 4,
                (b':', b' ') => 5,
                _ => 0,
            };

            states = if pair_code > 0 {
                let states = self.update_for_pair(&states, index, pair_code);
                index += 1;
                states
            } else {
                self.update_for_char(&states, index)
            };
            index += 1;

            trace!("Frontier at byte {index}: {} states", states.len());
        }
        states
    }

    fn update_for_char(&mut self, states: &[State], index: usize) -> Vec<State> {
        let mut res = Vec::with_capacity(states.len() * 4);
        for state in states {
            self.char_successors(state, index, &mut res);
        }
        Self::simplify(res)
    }

    fn update_for_pair(&mut self, states: &[State], index: usize, pair_code: u8) -> Vec<State> {
        let mut res = Vec::with_capacity(states.len() * 4);
        for state in states {
            self.pair_successors(state, index, pair_code, &mut res);
        }
        Self::simplify(res)
    }

    fn char_successors(&mut self, state: &State, index: usize, res: &mut Vec<State>) {
        let ch = self.data[index];
        let in_current = state.mode.contains(ch);

        let mut no_binary = None;
        for mode in MODES {
            let Some(code) = mode.code(ch) else {
                continue;
            };
            let base = match no_binary {
                Some(s) => s,
                None => {
                    let s = self.end_binary_shift(state, index);
                    no_binary = Some(s);
                    s
                }
            };

            // Digit is latched to even from a mode holding the char, it's cheaper per symbol
            if !in_current || mode == state.mode || mode == Mode::Digit {
                res.push(self.latch_and_append(&base, mode, code));
            }
            if !in_current {
                if let Some(shift) = state.mode.shift(mode) {
                    res.push(self.shift_and_append(&base, shift, code));
                }
            }
        }

        if state.bs_bytes > 0 || !in_current {
            res.push(self.add_binary_shift_char(state, index));
        }
    }

    fn pair_successors(&mut self, state: &State, index: usize, code: u8, res: &mut Vec<State>) {
        let base = self.end_binary_shift(state, index);

        res.push(self.latch_and_append(&base, Mode::Punct, code));
        if let Some(shift) = state.mode.shift(Mode::Punct) {
            res.push(self.shift_and_append(&base, shift, code));
        }

        // ". " and ", " also fit in digit mode
        if code == 3 || code == 4 {
            let digit = self.latch_and_append(&base, Mode::Digit, 16 - code);
            res.push(self.latch_and_append(&digit, Mode::Digit, 1));
        }

        if state.bs_bytes > 0 {
            let first = self.add_binary_shift_char(state, index);
            res.push(self.add_binary_shift_char(&first, index + 1));
        }
    }

    fn push_literal(&mut self, prev: Option<usize>, value: u16, bits: usize) -> Option<usize> {
        Some(self.arena.push(prev, Token::Literal { value, bits }))
    }

    fn latch_and_append(&mut self, state: &State, mode: Mode, value: u8) -> State {
        let mut token = state.token;
        let mut bit_count = state.bit_count;
        if mode != state.mode {
            let (latch, bits) = state.mode.latch(mode);
            token = self.push_literal(token, latch, bits);
            bit_count += bits;
        }
        let bits = mode.bits();
        token = self.push_literal(token, value as u16, bits);
        State { mode, token, bs_bytes: 0, bit_count: bit_count + bits }
    }

    fn shift_and_append(&mut self, state: &State, shift: u8, value: u8) -> State {
        let shift_bits = state.mode.bits();
        let token = self.push_literal(state.token, shift as u16, shift_bits);
        let token = self.push_literal(token, value as u16, 5);
        State { mode: state.mode, token, bs_bytes: 0, bit_count: state.bit_count + shift_bits + 5 }
    }

    fn add_binary_shift_char(&mut self, state: &State, index: usize) -> State {
        let mut state = *state;
        if matches!(state.mode, Mode::Punct | Mode::Digit) {
            let (latch, bits) = state.mode.latch(Mode::Upper);
            state.token = self.push_literal(state.token, latch, bits);
            state.bit_count += bits;
            state.mode = Mode::Upper;
        }

        let delta = match state.bs_bytes {
            0 | 31 => 18,
            62 => 9,
            _ => 8,
        };
        let next =
            State { bs_bytes: state.bs_bytes + 1, bit_count: state.bit_count + delta, ..state };
        if next.bs_bytes == MAX_BINARY_SHIFT {
            self.end_binary_shift(&next, index + 1)
        } else {
            next
        }
    }

    /// Closes the open binary shift run, which ends right before `index`
    fn end_binary_shift(&mut self, state: &State, index: usize) -> State {
        if state.bs_bytes == 0 {
            return *state;
        }
        let shift = Token::BinaryShift { start: index - state.bs_bytes, count: state.bs_bytes };
        let token = Some(self.arena.push(state.token, shift));
        State { token, bs_bytes: 0, ..*state }
    }

    /// Drops every state another state is better than or equal to
    fn simplify(states: Vec<State>) -> Vec<State> {
        let mut res: Vec<State> = Vec::with_capacity(states.len());
        for new in states {
            let mut add = true;
            let mut i = 0;
            while i < res.len() {
                if res[i].is_better_than_or_equal(&new) {
                    add = false;
                    break;
                }
                if new.is_better_than_or_equal(&res[i]) {
                    res.remove(i);
                } else {
                    i += 1;
                }
            }
            if add {
                res.push(new);
            }
        }
        res
    }
}
