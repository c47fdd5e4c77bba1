use std::{fmt, str::FromStr};

use rand::Rng;

use super::{CommandError, random};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}
impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn emoji(self) -> &'static str {
        match self {
            Move::Rock => "\u{1F5FF}",
            Move::Paper => "\u{1F4C4}",
            Move::Scissors => "\u{2702}",
        }
    }

    /// The bot's move.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Move {
        random::select(rng, &Self::ALL)
            .copied()
            .unwrap_or(Move::Rock)
    }
}
impl FromStr for Move {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            _ => Err(CommandError::InvalidMove(s.to_string())),
        }
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

/// Outcome from the player's point of view.
pub fn resolve(player: Move, house: Move) -> Outcome {
    use Move::*;

    let player_wins = match (player, house) {
        (Rock, Paper) => false,
        (Rock, Scissors) => true,
        (Paper, Rock) => true,
        (Paper, Scissors) => false,
        (Scissors, Rock) => false,
        (Scissors, Paper) => true,
        (Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => return Outcome::Tie,
    };
    if player_wins { Outcome::Win } else { Outcome::Lose }
}

pub fn announce(house: Move, outcome: Outcome, mention: &str) -> String {
    let house = house.emoji();
    match outcome {
        Outcome::Win => format!("{house} You win {mention}!"),
        Outcome::Lose => format!("{house} You lose {mention}!"),
        Outcome::Tie => format!("{house} We're square {mention}!"),
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_tie_on_equal_moves() {
        for m in Move::ALL {
            assert_eq!(resolve(m, m), Outcome::Tie);
        }
    }

    #[test]
    fn test_antisymmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                if a == b {
                    continue;
                }
                let expected = match resolve(a, b) {
                    Outcome::Win => Outcome::Lose,
                    Outcome::Lose => Outcome::Win,
                    Outcome::Tie => panic!("{a} vs {b} should not tie"),
                };
                assert_eq!(resolve(b, a), expected);
            }
        }
    }

    #[test]
    fn test_cycle() {
        assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::Win);
        assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::Lose);
        assert_eq!(resolve(Move::Scissors, Move::Paper), Outcome::Win);
        assert_eq!(resolve(Move::Paper, Move::Rock), Outcome::Win);
    }

    #[test]
    fn test_parse_move() {
        assert_eq!("rock".parse(), Ok(Move::Rock));
        assert_eq!("PaPeR".parse(), Ok(Move::Paper));
        assert_eq!("SCISSORS".parse(), Ok(Move::Scissors));
        assert_eq!(
            "rocks".parse::<Move>(),
            Err(CommandError::InvalidMove("rocks".to_string()))
        );
        assert_eq!(
            " rock".parse::<Move>(),
            Err(CommandError::InvalidMove(" rock".to_string()))
        );
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn test_draw_covers_all_moves() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(Move::draw(&mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_announce() {
        assert_eq!(
            announce(Move::Scissors, Outcome::Win, "@pax"),
            "\u{2702} You win @pax!"
        );
        assert_eq!(
            announce(Move::Rock, Outcome::Tie, "@pax"),
            "\u{1F5FF} We're square @pax!"
        );
    }
}
