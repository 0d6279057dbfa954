use std::fmt::{self, Display};

use itertools::Itertools;

use crate::field::GameField;

const ALIVE_GLYPH: &str = "(*)";
const DEAD_GLYPH: &str = "( )";

/// Renders the board as text, each cell a 3-character glyph and a line
/// break after the last column of every row. Pure function of the current
/// state.
pub fn render(field: &GameField) -> String {
  let width = field.width();
  let mut out = String::with_capacity((width * 3 + 1) * field.height());
  let rows = field.cells().iter().chunks(width);
  for row in &rows {
    for cell in row {
      out.push_str(if cell.is_alive() { ALIVE_GLYPH } else { DEAD_GLYPH });
    }
    out.push('\n');
  }
  out
}

impl Display for GameField {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&render(self))
  }
}
