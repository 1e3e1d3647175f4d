//! Associative index from adjacent symbol pairs to the words containing them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::spelling::alphabet::{ALPHABET_SIZE, Symbol, symbol_pairs};

const CELL_COUNT: usize = ALPHABET_SIZE * ALPHABET_SIZE;

/// Flattened position of the `(first, second)` cell.
fn cell_position(first: Symbol, second: Symbol) -> usize {
    first.index() * ALPHABET_SIZE + second.index()
}

/// Size of one non-empty cell, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCellSize {
    pub first: char,
    pub second: char,
    pub size: usize,
}

/// A 28x28 table; each cell lists the distinct words containing that pair.
#[derive(Debug, Clone)]
pub struct PairIndex {
    cells: Vec<Vec<Arc<str>>>,
}

impl PairIndex {
    /// Create an index with every cell empty.
    pub fn new() -> Self {
        PairIndex {
            cells: vec![Vec::new(); CELL_COUNT],
        }
    }

    /// Register `word` under every pair it contains.
    ///
    /// A pair that recurs inside the word still lists the word once.
    pub(crate) fn insert(&mut self, word: &Arc<str>) {
        let mut seen = [false; CELL_COUNT];
        for (first, second) in symbol_pairs(word) {
            let position = cell_position(first, second);
            if !seen[position] {
                seen[position] = true;
                self.cells[position].push(Arc::clone(word));
            }
        }
    }

    /// Words containing the `(first, second)` pair. Empty when none do.
    pub fn cell(&self, first: Symbol, second: Symbol) -> &[Arc<str>] {
        &self.cells[cell_position(first, second)]
    }

    /// Words containing the pair formed by two raw characters.
    pub fn cell_for(&self, ch1: char, ch2: char) -> &[Arc<str>] {
        self.cell(Symbol::of(ch1), Symbol::of(ch2))
    }

    /// Size of the largest cell.
    pub fn max_cell_size(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of cells holding at least one word.
    pub fn populated_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Every non-empty cell in row-major symbol order.
    pub fn cell_sizes(&self) -> Vec<PairCellSize> {
        let mut sizes = Vec::new();
        for first in Symbol::all() {
            for second in Symbol::all() {
                let size = self.cell(first, second).len();
                if size != 0 {
                    sizes.push(PairCellSize {
                        first: first.to_char(),
                        second: second.to_char(),
                        size,
                    });
                }
            }
        }
        sizes
    }

    /// True when no cell holds a word.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Vec::is_empty)
    }
}

impl Default for PairIndex {
    fn default() -> Self {
        Self::new()
    }
}
