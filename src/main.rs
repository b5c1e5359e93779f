use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use primaze::{Coord, generate_maze, punch_holes, render};

const USAGE: &str = "Usage: primaze WIDTH HEIGHT [SEED] [X,Y ...]";

/// Log to a file so the rendered maze on stdout stays clean.
/// The level comes from `PRIMAZE_LOG` and defaults to `info`.
fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let level = std::env::var("PRIMAZE_LOG")
        .ok()
        .and_then(|s| s.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::INFO);
    let file_appender = tracing_appender::rolling::never(".", "primaze.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

fn parse_coord(arg: &str) -> Option<Coord> {
    let (x, y) = arg.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

struct Args {
    width: u16,
    height: u16,
    seed: Option<u64>,
    holes: Vec<Coord>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut dimension = |name: &str| -> Result<u16, String> {
        args.next()
            .ok_or_else(|| format!("missing {name}"))?
            .parse::<u16>()
            .map_err(|e| format!("invalid {name}: {e}"))
    };
    let width = dimension("width")?;
    let height = dimension("height")?;

    let mut rest = args.peekable();
    // The seed is optional, so anything that looks like a coordinate starts the hole list
    let seed = match rest.next_if(|arg| !arg.contains(',')) {
        Some(arg) => Some(
            arg.parse::<u64>()
                .map_err(|e| format!("invalid seed {arg:?}: {e}"))?,
        ),
        None => None,
    };
    let holes = rest
        .map(|arg| parse_coord(&arg).ok_or_else(|| format!("invalid hole coordinate {arg:?}")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Args {
        width,
        height,
        seed,
        holes,
    })
}

fn main() -> ExitCode {
    let _guard = init_logging();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        "Generating {}x{} maze (seed {:?}, {} holes)",
        args.width,
        args.height,
        args.seed,
        args.holes.len()
    );

    let result = generate_maze(args.width, args.height, args.seed).and_then(|mut maze| {
        punch_holes(&mut maze, args.holes.iter().copied())?;
        Ok(maze)
    });
    let maze = match result {
        Ok(maze) => maze,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    let written = if stdout.is_terminal() {
        render::write_styled(&maze, &mut stdout)
    } else {
        writeln!(stdout, "{}", render::to_ascii(&maze))
    };
    if let Err(e) = written.and_then(|_| stdout.flush()) {
        tracing::error!("Failed to write maze: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> impl Iterator<Item = String> {
        line.split_whitespace()
            .map(str::to_string)
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_parse_dimensions_only() {
        let parsed = parse_args(args("10 4")).unwrap();
        assert_eq!((parsed.width, parsed.height), (10, 4));
        assert_eq!(parsed.seed, None);
        assert!(parsed.holes.is_empty());
    }

    #[test]
    fn test_parse_seed_and_holes() {
        let parsed = parse_args(args("10 4 99 1,2 3,0")).unwrap();
        assert_eq!(parsed.seed, Some(99));
        assert_eq!(parsed.holes, vec![(1, 2), (3, 0)]);

        let unseeded = parse_args(args("10 4 1,2")).unwrap();
        assert_eq!(unseeded.seed, None);
        assert_eq!(unseeded.holes, vec![(1, 2)]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args("")).is_err());
        assert!(parse_args(args("10")).is_err());
        assert!(parse_args(args("-3 4")).is_err());
        assert!(parse_args(args("3 4 seed")).is_err());
        assert!(parse_args(args("3 4 1 2;2")).is_err());
    }
}
