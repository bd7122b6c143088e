//! Simulated processing latency.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use rand::Rng;
use rand::seq::IndexedRandom;

/// How long the payment service pretends to work before answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelayStrategy {
    /// No delay.
    None,
    /// Uniformly distributed in `[0, max]`, millisecond resolution.
    Uniform { max: Duration },
    /// One of the listed durations, each equally likely.
    Discrete(Vec<Duration>),
}

impl Default for DelayStrategy {
    fn default() -> Self {
        Self::Uniform {
            max: Duration::from_millis(2000),
        }
    }
}

impl DelayStrategy {
    /// Draws one delay.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Uniform { max } => {
                let max_ms = u64::try_from(max.as_millis()).unwrap_or(u64::MAX);
                Duration::from_millis(rng.random_range(0..=max_ms))
            }
            Self::Discrete(choices) => choices.choose(rng).copied().unwrap_or(Duration::ZERO),
        }
    }
}

/// Error parsing a textual delay strategy.
#[derive(Debug, thiserror::Error)]
pub enum DelayParseError {
    #[error("unknown delay strategy '{0}', expected none, uniform:<max_ms> or discrete:<ms>,<ms>,...")]
    UnknownStrategy(String),

    #[error("invalid milliseconds '{0}'")]
    InvalidMillis(String),

    #[error("discrete delay needs at least one value")]
    EmptyDiscrete,
}

fn parse_millis(s: &str) -> Result<Duration, DelayParseError> {
    s.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| DelayParseError::InvalidMillis(s.trim().to_string()))
}

impl FromStr for DelayStrategy {
    type Err = DelayParseError;

    /// Parses `none`, `uniform:<max_ms>` or `discrete:<ms>,<ms>,...`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (kind, args) = s.split_once(':').unwrap_or((s, ""));

        match kind.to_ascii_lowercase().as_str() {
            "none" if args.is_empty() => Ok(Self::None),
            "uniform" => Ok(Self::Uniform {
                max: parse_millis(args)?,
            }),
            "discrete" => {
                let choices = args
                    .split(',')
                    .filter(|part| !part.trim().is_empty())
                    .map(parse_millis)
                    .collect::<Result<Vec<_>, _>>()?;
                if choices.is_empty() {
                    return Err(DelayParseError::EmptyDiscrete);
                }
                Ok(Self::Discrete(choices))
            }
            _ => Err(DelayParseError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for DelayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Uniform { max } => write!(f, "uniform:{}", max.as_millis()),
            Self::Discrete(choices) => {
                let parts: Vec<String> = choices
                    .iter()
                    .map(|d| d.as_millis().to_string())
                    .collect();
                write!(f, "discrete:{}", parts.join(","))
            }
        }
    }
}
