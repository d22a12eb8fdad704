use std::{error, fmt::Display};

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug)]
pub enum Error {
    InvalidGameHeader(String),
    InvalidCubeText(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGameHeader(s) => {
                write!(f, "Invalid game header in given text({}).", s)
            }
            Error::InvalidCubeText(s) => write!(f, "Invalid text({}) for cube count.", s),
        }
    }
}

impl error::Error for Error {}

/// Cubes of each color shown in one draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Draw {
    red: u32,
    green: u32,
    blue: u32,
}

impl Draw {
    pub fn new(red: u32, green: u32, blue: u32) -> Self {
        Self { red, green, blue }
    }

    pub fn red(&self) -> u32 {
        self.red
    }

    pub fn green(&self) -> u32 {
        self.green
    }

    pub fn blue(&self) -> u32 {
        self.blue
    }

    pub fn fits(&self, limits: &CubeLimits) -> bool {
        self.red <= limits.red && self.green <= limits.green && self.blue <= limits.blue
    }

    /// Product of the three counts, never overflows since each count is a `u32`.
    pub fn power(&self) -> u128 {
        u128::from(self.red) * u128::from(self.green) * u128::from(self.blue)
    }

    fn add_cubes(&mut self, text: &str) -> Result<(), Error> {
        static CUBE_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^(\d+)\s+([[:alpha:]]+)$").unwrap());

        let caps = CUBE_PATTERN
            .captures(text)
            .ok_or_else(|| Error::InvalidCubeText(text.to_string()))?;
        let count = caps[1]
            .parse::<u32>()
            .map_err(|_| Error::InvalidCubeText(text.to_string()))?;
        let channel = match &caps[2] {
            "red" => &mut self.red,
            "green" => &mut self.green,
            "blue" => &mut self.blue,
            color => {
                debug!("Skip cubes of unknown color({}).", color);
                return Ok(());
            }
        };
        *channel = channel.saturating_add(count);

        Ok(())
    }
}

impl TryFrom<&str> for Draw {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut draw = Draw::default();
        for text in value.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            draw.add_cubes(text)?;
        }

        Ok(draw)
    }
}

/// Largest number of cubes of each color a game may show in a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeLimits {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeLimits {
    pub const PUZZLE: CubeLimits = CubeLimits {
        red: 12,
        green: 13,
        blue: 14,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: u32,
    draws: Vec<Draw>,
}

impl TryFrom<&str> for Game {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        static GAME_HEADER_PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"^\s*Game\s+(\d+)\s*:(.*)$").unwrap());

        let caps = GAME_HEADER_PATTERN
            .captures(value)
            .ok_or_else(|| Error::InvalidGameHeader(value.to_string()))?;
        let id = caps[1]
            .parse::<u32>()
            .map_err(|_| Error::InvalidGameHeader(value.to_string()))?;

        let rest = caps[2].trim();
        let draws = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split(';')
                .map(Draw::try_from)
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self { id, draws })
    }
}

impl Game {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    /// A game without any draw is possible under any limits.
    pub fn is_possible(&self, limits: &CubeLimits) -> bool {
        self.draws.iter().all(|d| d.fits(limits))
    }

    /// Fewest cubes of each color the bag must hold for every draw of this game.
    pub fn min_cubes(&self) -> Draw {
        self.draws.iter().fold(Draw::default(), |min, d| {
            Draw::new(
                min.red.max(d.red),
                min.green.max(d.green),
                min.blue.max(d.blue),
            )
        })
    }
}

fn parse_game(line: &str) -> Option<Game> {
    if line.is_empty() {
        return None;
    }

    Game::try_from(line)
        .inspect_err(|e| debug!("Skip line: {}", e))
        .ok()
}

/// Id of the game recorded in `line` if it is possible under `limits`, otherwise 0.
pub fn possible_game_id(line: &str, limits: &CubeLimits) -> u32 {
    let id = parse_game(line)
        .filter(|g| g.is_possible(limits))
        .map_or(0, |g| g.id());
    debug!("Line({}) contributes game id {}.", line, id);

    id
}

/// Power of the minimal cube set of the game recorded in `line`, 0 if it isn't a game.
pub fn min_cubes_power(line: &str) -> u128 {
    let power = parse_game(line).map_or(0, |g| g.min_cubes().power());
    debug!("Line({}) contributes power {}.", line, power);

    power
}
