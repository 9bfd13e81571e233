use crate::common::BitStream;

// Token
//------------------------------------------------------------------------------

/// Bits appended by one step of a candidate encoding
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Token {
    Literal { value: u16, bits: usize },
    // Raw bytes data[start..start + count] behind a binary shift header
    BinaryShift { start: usize, count: usize },
}

impl Token {
    pub fn append_to(&self, bs: &mut BitStream, data: &[u8]) {
        match *self {
            Self::Literal { value, bits } => bs.push_bits(value, bits),
            Self::BinaryShift { start, count } => {
                for (i, &b) in data[start..start + count].iter().enumerate() {
                    // Runs of 32..=62 bytes are cheaper as two short runs
                    if i == 0 || (i == 31 && count <= 62) {
                        bs.push_bits(BINARY_SHIFT, 5);
                        if count > 62 {
                            bs.push_bits((count - 31) as u16, 16);
                        } else if i == 0 {
                            bs.push_bits(count.min(31) as u8, 5);
                        } else {
                            bs.push_bits((count - 31) as u8, 5);
                        }
                    }
                    bs.push_bits(b, 8);
                }
            }
        }
    }
}

// Token arena
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct Node {
    prev: Option<usize>,
    token: Token,
}

/// Tokens of every candidate encoding. Each node points back to its parent,
/// and nodes are never modified once pushed, so states can share prefixes.
#[derive(Debug, Default)]
pub struct TokenArena {
    nodes: Vec<Node>,
}

impl TokenArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn push(&mut self, prev: Option<usize>, token: Token) -> usize {
        self.nodes.push(Node { prev, token });
        self.nodes.len() - 1
    }

    /// Tokens from the root up to and including `last`
    pub fn chain(&self, last: Option<usize>) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut cur = last;
        while let Some(i) = cur {
            let node = &self.nodes[i];
            tokens.push(node.token);
            cur = node.prev;
        }
        tokens.reverse();
        tokens
    }

    /// Replays the chain ending at `last` into a fresh bit stream
    pub fn replay(&self, last: Option<usize>, data: &[u8]) -> BitStream {
        let mut bs = BitStream::new();
        for token in self.chain(last) {
            token.append_to(&mut bs, data);
        }
        bs
    }
}

pub const BINARY_SHIFT: u8 = 31;
