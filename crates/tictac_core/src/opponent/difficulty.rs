//! Opponent difficulty levels.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Which move policy the opponent uses.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random among empty cells.
    Easy,
    /// Win, block, center, corner, side.
    #[default]
    Hard,
}

impl Difficulty {
    /// Parses a difficulty, falling back to [`Difficulty::Easy`] for
    /// unrecognized input.
    ///
    /// The fallback is reported with a warning. Prefer [`str::parse`] when the
    /// caller can reject bad input instead.
    #[instrument]
    pub fn parse_or_easy(s: &str) -> Self {
        s.parse().unwrap_or_else(|e: UnknownDifficulty| {
            warn!(error = %e, "Falling back to easy difficulty");
            Difficulty::Easy
        })
    }
}

/// Error for a difficulty name that is neither `easy` nor `hard`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown difficulty {:?} (expected \"easy\" or \"hard\")", name)]
pub struct UnknownDifficulty {
    /// The rejected name.
    pub name: String,
}

impl std::str::FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_parse_known() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
    }

    #[test]
    fn test_parse_unknown_is_rejected() {
        let err = "impossible".parse::<Difficulty>().unwrap_err();
        assert_eq!(err.name, "impossible");
        assert!(err.to_string().contains("impossible"));
    }

    #[test]
    fn test_lenient_parse_falls_back_to_easy() {
        assert_eq!(Difficulty::parse_or_easy("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::parse_or_easy("medium"), Difficulty::Easy);
        assert_eq!(Difficulty::parse_or_easy(""), Difficulty::Easy);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn with_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
        let logs = Captured::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        (value, logs.text())
    }

    #[test]
    fn test_lenient_parse_warns_on_fallback() {
        let (difficulty, logs) = with_warnings(|| Difficulty::parse_or_easy("nightmare"));
        assert_eq!(difficulty, Difficulty::Easy);
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Falling back to easy difficulty"));
        assert!(logs.contains("nightmare"));
    }

    #[test]
    fn test_lenient_parse_is_quiet_for_known_names() {
        let (difficulty, logs) = with_warnings(|| Difficulty::parse_or_easy("easy"));
        assert_eq!(difficulty, Difficulty::Easy);
        assert!(logs.is_empty());
    }

    #[test]
    fn test_display_round_trips() {
        for difficulty in <Difficulty as strum::IntoEnumIterator>::iter() {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }
}
