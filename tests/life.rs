use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use toruslife::render::render;
use toruslife::{Game, GameField, Outcome};

fn empty_field(width: usize, height: usize) -> GameField {
  let mut rng = StdRng::seed_from_u64(0);
  let mut field = GameField::new(width, height, &mut rng).expect("valid dimensions");
  for y in 0..height {
    for x in 0..width {
      field.set(x, y, false);
    }
  }
  field
}

fn set_cells(field: &mut GameField, cells: &[(usize, usize)]) {
  for &(x, y) in cells {
    field.set(x, y, true);
  }
}

fn collect_live(field: &GameField) -> HashSet<(usize, usize)> {
  let mut out = HashSet::new();
  for y in 0..field.height() {
    for x in 0..field.width() {
      if field.get(x, y) {
        out.insert((x, y));
      }
    }
  }
  out
}

/// Reference stepper: next states computed from a read-only copy of the
/// board with explicit toroidal arithmetic.
fn step_naive(
  live: &HashSet<(usize, usize)>,
  width: usize,
  height: usize,
) -> HashSet<(usize, usize)> {
  let mut next = HashSet::new();
  for y in 0..height {
    for x in 0..width {
      let mut neighbors = 0;
      for &dy in &[height - 1, 0, 1] {
        for &dx in &[width - 1, 0, 1] {
          if dx == 0 && dy == 0 {
            continue;
          }
          if live.contains(&((x + dx) % width, (y + dy) % height)) {
            neighbors += 1;
          }
        }
      }
      if neighbors == 3 || (neighbors == 2 && live.contains(&(x, y))) {
        next.insert((x, y));
      }
    }
  }
  next
}

#[test]
fn process_matches_naive_stepper_on_random_board() {
  let mut rng = StdRng::seed_from_u64(0x5EED_CAFE);
  let mut field = GameField::new(12, 9, &mut rng).unwrap();
  let mut naive = collect_live(&field);

  for generation in 0..15 {
    field.process();
    naive = step_naive(&naive, 12, 9);
    assert_eq!(
      collect_live(&field),
      naive,
      "diverged from the reference stepper at generation {}",
      generation + 1
    );
  }
}

#[test]
fn glider_wraps_around_the_torus() {
  let mut field = empty_field(8, 8);
  let glider = [(6, 5), (7, 6), (5, 7), (6, 7), (7, 7)];
  set_cells(&mut field, &glider);

  for _ in 0..4 {
    field.process();
  }

  let shifted: HashSet<_> = glider
    .iter()
    .map(|&(x, y)| ((x + 1) % 8, (y + 1) % 8))
    .collect();
  assert_eq!(collect_live(&field), shifted);
}

#[test]
fn cycle_longer_than_the_window_goes_undetected() {
  // On an 8x8 torus a glider returns to its starting state after 32
  // generations, far beyond the 10-deep history window.
  let mut field = empty_field(8, 8);
  let glider = [(6, 5), (7, 6), (5, 7), (6, 7), (7, 7)];
  set_cells(&mut field, &glider);
  let initial = collect_live(&field);

  for _ in 0..32 {
    assert!(!field.has_recurred());
    field.process();
  }

  assert_eq!(collect_live(&field), initial);
  assert!(!field.has_recurred());
}

#[test]
fn same_seed_reproduces_the_same_board() {
  let mut rng_a = StdRng::seed_from_u64(99);
  let mut rng_b = StdRng::seed_from_u64(99);
  let field_a = GameField::new(20, 15, &mut rng_a).unwrap();
  let field_b = GameField::new(20, 15, &mut rng_b).unwrap();

  assert_eq!(render(&field_a), render(&field_b));
}

#[test]
fn blinker_game_ends_cycled_on_the_second_generation() {
  let mut field = empty_field(5, 5);
  set_cells(&mut field, &[(1, 2), (2, 2), (3, 2)]);

  let mut game = Game::new(field, Vec::new());
  let outcome = game.play().unwrap();

  assert_eq!(outcome, Outcome::Cycled);
  assert_eq!(game.generation(), 2);
}

#[test]
fn lone_cell_game_ends_extinct() {
  let mut field = empty_field(6, 6);
  set_cells(&mut field, &[(3, 3)]);

  let mut game = Game::new(field, Vec::new());
  let outcome = game.play().unwrap();

  assert_eq!(outcome, Outcome::Extinct);
  assert_eq!(game.generation(), 1);
  assert!(game.field().is_dead());
}

#[test]
fn banners_frame_the_rendered_generations() {
  let mut field = empty_field(4, 3);
  set_cells(&mut field, &[(1, 1), (2, 1), (1, 2), (2, 2)]);

  let mut buffer = Vec::new();
  {
    let mut game = Game::new(field, &mut buffer);
    assert_eq!(game.play().unwrap(), Outcome::Cycled);
  }

  let output = String::from_utf8(buffer).unwrap();
  assert!(output.starts_with("Start game...\n"));
  assert!(output.ends_with("Game over...\n"));
  // Initial state plus the one no-op generation, 3 rows each.
  assert_eq!(output.matches('\n').count(), 2 + 2 * 3);
}
