use std::collections::VecDeque;

use rand::Rng;

use crate::cell::Cell;
use crate::error::Error;
use crate::rule::{Rule, GAME_OF_LIFE};

/// Number of prior generations kept for recurrence detection. Cycles with a
/// period above this bound are never detected; the window is a fixed design
/// constant, not a tunable.
pub const HISTORY_DEPTH: usize = 10;

/// Dimensions drawn when none are given.
const RANDOM_DIM_RANGE: std::ops::Range<usize> = 10..100;

/// A toroidal Game of Life board.
///
/// Cells live in a flat, row-major arena (`x + y * width`). The left edge is
/// adjacent to the right edge and the top to the bottom, so coordinate
/// arithmetic wraps and every cell has exactly 8 neighbor relations. The
/// board is mutated in place by repeated [`process`](GameField::process)
/// calls.
pub struct GameField {
  width: usize,
  height: usize,
  cells: Vec<Cell>,
  /// Scratch buffer for the next generation, fully recomputed every tick.
  /// Never observable from outside.
  next: Vec<bool>,
  /// Snapshots of up to the last `HISTORY_DEPTH` generations, oldest first.
  history: VecDeque<Vec<bool>>,
  rule: Rule,
}

impl GameField {
  /// Creates a `width x height` board with every cell seeded by an
  /// independent fair coin flip from `rng`.
  pub fn new<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
  ) -> Result<Self, Error> {
    if width == 0 || height == 0 {
      return Err(Error::InvalidDimensions { width, height });
    }
    Ok(Self::with_dims(width, height, rng))
  }

  /// Creates a board with both dimensions drawn independently and uniformly
  /// from `[10, 100)`, then seeded like [`new`](GameField::new).
  pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
    let width = rng.gen_range(RANDOM_DIM_RANGE);
    let height = rng.gen_range(RANDOM_DIM_RANGE);
    Self::with_dims(width, height, rng)
  }

  fn with_dims<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
    let cell_count = width * height;
    let mut cells = Vec::with_capacity(cell_count);
    for i in 0..cell_count {
      let alive = rng.gen_bool(0.5);
      cells.push(Cell::new(alive, neighbor_indices(i, width, height)));
    }

    Self {
      width,
      height,
      cells,
      next: vec![false; cell_count],
      history: VecDeque::with_capacity(HISTORY_DEPTH),
      rule: GAME_OF_LIFE,
    }
  }

  pub fn width(&self) -> usize {
    self.width
  }

  pub fn height(&self) -> usize {
    self.height
  }

  pub fn rule(&self) -> Rule {
    self.rule
  }

  pub fn get(&self, x: usize, y: usize) -> bool {
    self.cells[self.index(x, y)].is_alive()
  }

  pub fn set(&mut self, x: usize, y: usize, alive: bool) {
    let i = self.index(x, y);
    self.cells[i].set_alive(alive);
  }

  /// Number of living cells.
  pub fn population(&self) -> usize {
    self.cells.iter().filter(|cell| cell.is_alive()).count()
  }

  /// Advances the board one generation.
  ///
  /// Every neighbor count reads the pre-transition arena; no transition
  /// observes another cell's updated value, so the result is independent of
  /// visit order. The pre-transition state is pushed into the history
  /// before the commit, which is what lets a still life match on the very
  /// next generation.
  pub fn process(&mut self) {
    let rule = self.rule;
    let cells = &self.cells;
    for (i, next) in self.next.iter_mut().enumerate() {
      let cell = &cells[i];
      *next = rule.next_state(cell.is_alive(), cell.live_neighbors(cells));
    }

    self.snapshot();

    for (cell, &alive) in self.cells.iter_mut().zip(&self.next) {
      cell.set_alive(alive);
    }
  }

  /// True iff every cell is dead.
  pub fn is_dead(&self) -> bool {
    self.cells.iter().all(|cell| !cell.is_alive())
  }

  /// True iff the current state is element-wise equal to one of the stored
  /// snapshots, scanning newest first. Detects any cycle of period up to
  /// `HISTORY_DEPTH`, including period-1 still lifes.
  pub fn has_recurred(&self) -> bool {
    self.history.iter().rev().any(|snapshot| {
      snapshot
        .iter()
        .zip(&self.cells)
        .all(|(&alive, cell)| alive == cell.is_alive())
    })
  }

  fn snapshot(&mut self) {
    if self.history.len() == HISTORY_DEPTH {
      self.history.pop_front();
    }
    self.history.push_back(self.cells.iter().map(Cell::is_alive).collect());
  }

  fn index(&self, x: usize, y: usize) -> usize {
    assert!(
      x < self.width && y < self.height,
      "cell ({}, {}) outside {}x{} board",
      x, y, self.width, self.height
    );
    x + y * self.width
  }

  pub(crate) fn cells(&self) -> &[Cell] {
    &self.cells
  }
}

/// Arena indices of the 8 toroidal neighbors of cell `i`, in NW, N, NE, W,
/// E, SW, S, SE order. Wrapped coordinates may collide on boards narrower
/// than 3 in either dimension; the arithmetic is applied uniformly anyway.
fn neighbor_indices(i: usize, width: usize, height: usize) -> [usize; 8] {
  let x = i % width;
  let y = i / width;
  let left = if x == 0 { width - 1 } else { x - 1 };
  let right = if x == width - 1 { 0 } else { x + 1 };
  let up = if y == 0 { height - 1 } else { y - 1 };
  let down = if y == height - 1 { 0 } else { y + 1 };

  [
    left + up * width,
    x + up * width,
    right + up * width,
    left + y * width,
    right + y * width,
    left + down * width,
    x + down * width,
    right + down * width,
  ]
}
