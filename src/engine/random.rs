use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use super::CommandError;

pub const EIGHT_BALL_ANSWERS: [&str; 20] = [
    "As I see it, yes",
    "It is certain",
    "It is decidedly so",
    "Most likely",
    "Outlook good",
    "Signs point to yes",
    "Without a doubt",
    "Yes",
    "Yes – definitely",
    "You may rely on it",
    "Reply hazy, try again",
    "Ask again later",
    "Better not tell you now",
    "Cannot predict now",
    "Concentrate and ask again",
    "Don't count on it",
    "My reply is no",
    "My sources say no",
    "Outlook not so good",
    "Very doubtful",
];

pub const COIN_FACES: [&str; 2] = ["HEADS!*", "TAILS!*"];

pub const DEFAULT_ROLL_MAX: i64 = 100;

/// Splits on whitespace, keeping double-quoted runs together: `a "b c" d` is three choices.
/// An unclosed quote runs to the end of the input.
pub fn split_choices(raw: &str) -> Vec<String> {
    let mut choices = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_choice = false;

    for c in raw.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_choice = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_choice {
                    choices.push(std::mem::take(&mut current));
                    in_choice = false;
                }
            }
            c => {
                current.push(c);
                in_choice = true;
            }
        }
    }
    if in_choice {
        choices.push(current);
    }

    choices
}

/// Picks one element uniformly. `None` only for an empty slice.
pub fn select<'a, T, R: Rng + ?Sized>(rng: &mut R, choices: &'a [T]) -> Option<&'a T> {
    choices.choose(rng)
}

/// Caller-facing pick: refuses to "choose" when there is nothing to choose between.
pub fn choose<'a, R: Rng + ?Sized>(
    rng: &mut R,
    choices: &'a [String],
) -> Result<&'a str, CommandError> {
    let distinct: HashSet<&str> = choices.iter().map(String::as_str).collect();
    if distinct.len() < 2 {
        return Err(CommandError::InsufficientChoices);
    }
    select(rng, choices)
        .map(String::as_str)
        .ok_or(CommandError::InsufficientChoices)
}

pub fn eight_ball<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    select(rng, &EIGHT_BALL_ANSWERS).copied().unwrap_or(EIGHT_BALL_ANSWERS[0])
}

pub fn coin_face<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    select(rng, &COIN_FACES).copied().unwrap_or(COIN_FACES[0])
}

/// Uniform roll in `1..=max`, or `None` when there is nothing to roll.
pub fn roll<R: Rng + ?Sized>(rng: &mut R, max: i64) -> Option<i64> {
    (max > 1).then(|| rng.gen_range(1..=max))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_choices() {
        assert_eq!(split_choices("a b  c"), strings(&["a", "b", "c"]));
        assert_eq!(
            split_choices(r#"pizza "fried rice" tacos"#),
            strings(&["pizza", "fried rice", "tacos"])
        );
        assert_eq!(split_choices(r#""" x"#), strings(&["", "x"]));
        assert_eq!(
            split_choices(r#"one "two three"#),
            strings(&["one", "two three"])
        );
        assert!(split_choices("   ").is_empty());
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = StdRng::seed_from_u64(7);
        let choices = strings(&["tea", "coffee", "water"]);
        for _ in 0..100 {
            let picked = choose(&mut rng, &choices).unwrap();
            assert!(choices.iter().any(|c| c == picked));
        }
    }

    #[test]
    fn test_choose_needs_two_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            choose(&mut rng, &[]),
            Err(CommandError::InsufficientChoices)
        );
        assert_eq!(
            choose(&mut rng, &strings(&["only"])),
            Err(CommandError::InsufficientChoices)
        );
        assert_eq!(
            choose(&mut rng, &strings(&["same", "same"])),
            Err(CommandError::InsufficientChoices)
        );
    }

    #[test]
    fn test_choose_eventually_picks_every_entry() {
        let mut rng = StdRng::seed_from_u64(1);
        let choices = strings(&["a", "b"]);
        let seen: HashSet<&str> = (0..200)
            .map(|_| choose(&mut rng, &choices).unwrap())
            .collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_select_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: [u8; 0] = [];
        assert_eq!(select(&mut rng, &empty), None);
    }

    #[test]
    fn test_fixed_sets() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert!(EIGHT_BALL_ANSWERS.contains(&eight_ball(&mut rng)));
            assert!(COIN_FACES.contains(&coin_face(&mut rng)));
        }
    }

    #[test]
    fn test_roll_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let n = roll(&mut rng, 6).unwrap();
            assert!((1..=6).contains(&n));
        }
        assert_eq!(roll(&mut rng, 2).map(|n| (1..=2).contains(&n)), Some(true));
        assert_eq!(roll(&mut rng, 1), None);
        assert_eq!(roll(&mut rng, -5), None);
    }
}
