use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;

use toruslife::{Game, GameField};

struct MainArgs {
  width: Option<usize>,
  height: Option<usize>,
  seed: Option<u64>,
}

fn parse_args() -> MainArgs {
  let args: Vec<String> = std::env::args().collect();
  let mut parsed = MainArgs {
    width: None,
    height: None,
    seed: None,
  };
  let next_arg = |i: usize, flag: &str| -> &str {
    args
      .get(i)
      .map(String::as_str)
      .unwrap_or_else(|| panic!("{} requires a value", flag))
  };
  let mut i = 1;
  while i < args.len() {
    match args[i].as_str() {
      "--width" => {
        i += 1;
        let n: usize = next_arg(i, "--width")
          .parse()
          .expect("--width requires a positive integer");
        parsed.width = Some(n);
      }
      "--height" => {
        i += 1;
        let n: usize = next_arg(i, "--height")
          .parse()
          .expect("--height requires a positive integer");
        parsed.height = Some(n);
      }
      "--seed" => {
        i += 1;
        let n: u64 = next_arg(i, "--seed")
          .parse()
          .expect("--seed requires an integer");
        parsed.seed = Some(n);
      }
      other => panic!(
        "unknown argument: {}\nusage: toruslife [--width N --height N] [--seed N]",
        other
      ),
    }
    i += 1;
  }

  if parsed.width.is_some() != parsed.height.is_some() {
    panic!("--width and --height must be given together");
  }
  parsed
}

fn main() {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .init();

  let args = parse_args();
  let mut rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let field = match (args.width, args.height) {
    (Some(width), Some(height)) => {
      GameField::new(width, height, &mut rng).unwrap_or_else(|err| panic!("{}", err))
    }
    _ => GameField::random(&mut rng),
  };

  let stdout = std::io::stdout();
  let mut game = Game::new(field, stdout.lock());
  game.play().expect("writing to stdout failed");
}
