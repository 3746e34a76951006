// config.rs - Command-line options and the validated run configuration

use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use conway::{BoundaryPolicy, CellDistribution, CellDomain, Engine, Grid, Rule, patterns, random_grid};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

pub const DEFAULT_SIZE: usize = 50;
pub const DEFAULT_TEXT_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_WINDOW_INTERVAL_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Print a text dump every generation
    Text,
    /// Open a window and draw the grid as scaled pixels
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    Conway,
    B1s12,
    Immigration,
    ImmigrationTakeover,
    Identity,
}

impl From<RuleArg> for Rule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Conway => Rule::CONWAY,
            RuleArg::B1s12 => Rule::B1_S12,
            RuleArg::Immigration => Rule::Immigration,
            RuleArg::ImmigrationTakeover => Rule::ImmigrationTakeover,
            RuleArg::Identity => Rule::Identity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundaryArg {
    Toroidal,
    Clipped,
}

impl From<BoundaryArg> for BoundaryPolicy {
    fn from(arg: BoundaryArg) -> Self {
        match arg {
            BoundaryArg::Toroidal => BoundaryPolicy::Toroidal,
            BoundaryArg::Clipped => BoundaryPolicy::Clipped,
        }
    }
}

/// Cellular automaton on a wrap-around grid, stepped by row coroutines.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    #[arg(long, value_enum, default_value_t = Mode::Text)]
    pub mode: Mode,
    #[arg(long, value_enum, default_value_t = RuleArg::Conway)]
    pub rule: RuleArg,
    #[arg(long, value_enum, default_value_t = BoundaryArg::Toroidal)]
    pub boundary: BoundaryArg,
    /// `random`, `single-cell`, `line-oscillator`, `basic-glider`, or a catalog
    /// name such as `glider`, `pulsar`, `gosper-glider-gun`
    #[arg(long, default_value = "random")]
    pub pattern: String,
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = parse_dimension)]
    pub rows: usize,
    #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = parse_dimension)]
    pub cols: usize,
    /// Seed for random boards; omitted means a fresh seed every run.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Probability of an alive / faction A cell in random boards.
    #[arg(long, value_name = "PROBABILITY")]
    pub alive: Option<f64>,
    /// Probability of a faction B cell in random boards (immigration rules).
    #[arg(long, value_name = "PROBABILITY")]
    pub faction_b: Option<f64>,
    /// Delay between generations.
    #[arg(long = "interval-ms", value_name = "MILLISECONDS")]
    pub interval_ms: Option<u64>,
    /// Stop after this many generations (0 runs until quit).
    #[arg(long, default_value_t = 0)]
    pub generations: u64,
    /// Stop once a generation repeats a recent one.
    #[arg(long)]
    pub stop_on_cycle: bool,
    /// Pixels per cell in window mode.
    #[arg(long, default_value_t = 12, value_parser = clap::value_parser!(u16).range(1..=64))]
    pub scale: u16,
}

fn parse_dimension(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialBoard {
    Random,
    SingleCell,
    LineOscillator,
    BasicGlider,
    Catalog(&'static str),
}

impl InitialBoard {
    pub fn parse(name: &str) -> anyhow::Result<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Ok(match normalized.as_str() {
            "random" => InitialBoard::Random,
            "single cell" => InitialBoard::SingleCell,
            "line oscillator" => InitialBoard::LineOscillator,
            "basic glider" => InitialBoard::BasicGlider,
            other => match patterns::find(name.trim()).or_else(|| patterns::find(other)) {
                Some(pattern) => InitialBoard::Catalog(pattern.name),
                None => bail!("unknown pattern `{name}`"),
            },
        })
    }
}

/// Validated settings shared by the text and window drivers.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub mode: Mode,
    pub engine: Engine,
    pub board: InitialBoard,
    pub rows: usize,
    pub cols: usize,
    pub seed: Option<u64>,
    pub distribution: CellDistribution,
    pub interval: Duration,
    pub generation_limit: Option<u64>,
    pub stop_on_cycle: bool,
    pub scale: usize,
}

impl Args {
    pub fn into_config(self) -> anyhow::Result<SimConfig> {
        let rule = Rule::from(self.rule);
        let distribution = distribution_for(rule.domain(), self.alive, self.faction_b)?;
        let interval_ms = self.interval_ms.unwrap_or(match self.mode {
            Mode::Text => DEFAULT_TEXT_INTERVAL_MS,
            Mode::Window => DEFAULT_WINDOW_INTERVAL_MS,
        });

        Ok(SimConfig {
            mode: self.mode,
            engine: Engine::new(rule, self.boundary.into()),
            board: InitialBoard::parse(&self.pattern)?,
            rows: self.rows,
            cols: self.cols,
            seed: self.seed,
            distribution,
            interval: Duration::from_millis(interval_ms),
            generation_limit: (self.generations > 0).then_some(self.generations),
            stop_on_cycle: self.stop_on_cycle,
            scale: usize::from(self.scale),
        })
    }
}

fn distribution_for(
    domain: CellDomain,
    alive: Option<f64>,
    faction_b: Option<f64>,
) -> anyhow::Result<CellDistribution> {
    let distribution = match (domain, alive, faction_b) {
        (CellDomain::Binary, _, Some(_)) => bail!("--faction-b only applies to immigration rules"),
        (CellDomain::Binary, Some(p), None) => CellDistribution::binary(p),
        (CellDomain::Ternary, Some(a), b) => CellDistribution::immigration(a, b.unwrap_or(a)),
        (CellDomain::Ternary, None, Some(b)) => CellDistribution::immigration(b, b),
        (domain, None, None) => CellDistribution::for_domain(domain),
    };
    distribution.context("invalid random board distribution")
}

impl SimConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Builds the first generation and checks it fits the rule's domain.
    pub fn initial_grid(&self, rng: &mut StdRng) -> anyhow::Result<Grid> {
        let grid = match &self.board {
            InitialBoard::Random => random_grid(self.rows, self.cols, &self.distribution, rng)?,
            InitialBoard::SingleCell => patterns::single_cell(self.rows, self.cols)?,
            InitialBoard::LineOscillator => patterns::line_oscillator(),
            InitialBoard::BasicGlider => patterns::basic_glider(),
            InitialBoard::Catalog(name) => patterns::find(name)
                .with_context(|| format!("pattern `{name}` left the catalog"))?
                .centered(self.rows, self.cols)?,
        };

        let domain = self.engine.rule().domain();
        domain
            .validate(grid.cells())
            .with_context(|| format!("initial board does not fit rule {}", self.engine.rule()))?;

        let (rows, cols) = grid.dimensions();
        info!(
            board = ?self.board,
            rows,
            cols,
            population = grid.population(),
            "built initial board"
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway::Cell;

    fn parse(args: &[&str]) -> SimConfig {
        let argv = std::iter::once("conway_coro").chain(args.iter().copied());
        Args::try_parse_from(argv).unwrap().into_config().unwrap()
    }

    #[test]
    fn defaults_match_text_mode() {
        let config = parse(&[]);
        assert_eq!(config.mode, Mode::Text);
        assert_eq!(config.engine, Engine::new(Rule::CONWAY, BoundaryPolicy::Toroidal));
        assert_eq!((config.rows, config.cols), (DEFAULT_SIZE, DEFAULT_SIZE));
        assert_eq!(config.interval, Duration::from_millis(DEFAULT_TEXT_INTERVAL_MS));
        assert_eq!(config.generation_limit, None);
        assert_eq!(config.board, InitialBoard::Random);
    }

    #[test]
    fn window_mode_and_rule_selection() {
        let config = parse(&[
            "--mode", "window", "--rule", "immigration-takeover", "--boundary", "clipped",
            "--generations", "5", "--scale", "4",
        ]);
        assert_eq!(config.interval, Duration::from_millis(DEFAULT_WINDOW_INTERVAL_MS));
        assert_eq!(config.engine.rule(), Rule::ImmigrationTakeover);
        assert_eq!(config.engine.policy(), BoundaryPolicy::Clipped);
        assert_eq!(config.generation_limit, Some(5));
        assert_eq!(config.scale, 4);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Args::try_parse_from(["conway_coro", "--rows", "0"]).is_err());
        assert!(Args::try_parse_from(["conway_coro", "--scale", "0"]).is_err());
        let bad_pattern = Args::try_parse_from(["conway_coro", "--pattern", "spaceship"]).unwrap();
        assert!(bad_pattern.into_config().is_err());
        let binary_b = Args::try_parse_from(["conway_coro", "--faction-b", "0.1"]).unwrap();
        assert!(binary_b.into_config().is_err());
    }

    #[test]
    fn pattern_names_are_normalized() {
        assert_eq!(InitialBoard::parse("Gosper-Glider-Gun").unwrap(), InitialBoard::Catalog("Gosper Glider Gun"));
        assert_eq!(InitialBoard::parse("line_oscillator").unwrap(), InitialBoard::LineOscillator);
        assert_eq!(InitialBoard::parse("R-pentomino").unwrap(), InitialBoard::Catalog("R-pentomino"));
    }

    #[test]
    fn seeded_random_board_uses_rule_domain() {
        let config = parse(&["--rule", "immigration", "--seed", "42", "--rows", "12", "--cols", "9"]);
        let a = config.initial_grid(&mut config.rng()).unwrap();
        let b = config.initial_grid(&mut config.rng()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dimensions(), (12, 9));
        assert!(a.cells().iter().all(|c| CellDomain::Ternary.contains(*c)));

        let config = parse(&["--pattern", "glider", "--rows", "10", "--cols", "10"]);
        let grid = config.initial_grid(&mut config.rng()).unwrap();
        assert_eq!(grid.count(Cell::ALIVE), 5);
    }
}
