use std::io::{self, Write};

use tracing::{info, trace};

use crate::field::GameField;
use crate::render::render;

/// Terminal condition observed by the driver loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  /// Every cell died.
  Extinct,
  /// The board state recurred within the history window.
  Cycled,
}

/// Drives one board until the population dies out or the state recurs,
/// rendering every generation to `out`.
pub struct Game<W> {
  field: GameField,
  out: W,
  generation: u64,
}

impl<W: Write> Game<W> {
  pub fn new(field: GameField, out: W) -> Self {
    Self {
      field,
      out,
      generation: 0,
    }
  }

  /// Runs the simulation loop: render the initial state, then step and
  /// render until terminal. The termination predicate is evaluated once per
  /// tick, before stepping; the loop is unconditional otherwise.
  pub fn play(&mut self) -> io::Result<Outcome> {
    info!(
      "starting {}x{} board, rule {}",
      self.field.width(),
      self.field.height(),
      self.field.rule()
    );
    writeln!(self.out, "Start game...")?;
    write!(self.out, "{}", render(&self.field))?;

    let outcome = loop {
      if self.field.is_dead() {
        break Outcome::Extinct;
      }
      if self.field.has_recurred() {
        break Outcome::Cycled;
      }

      self.field.process();
      self.generation += 1;
      trace!(
        "generation {}: population {}",
        self.generation,
        self.field.population()
      );
      write!(self.out, "{}", render(&self.field))?;
    };

    writeln!(self.out, "Game over...")?;
    info!(
      "finished after {} generations: {:?}",
      self.generation, outcome
    );
    Ok(outcome)
  }

  /// Generations advanced so far.
  pub fn generation(&self) -> u64 {
    self.generation
  }

  pub fn field(&self) -> &GameField {
    &self.field
  }
}
