//! The command engine: every command's behavior, with no knowledge of Discord.
//!
//! Each operation takes already-parsed arguments and returns a [`Reply`] for
//! the host to deliver, or a [`CommandError`] whose text the host shows to
//! the user instead.

use std::{sync::Arc, time::Instant};

use rand::Rng;

pub mod error;
pub mod format;
pub mod paginate;
pub mod random;
pub mod rps;
pub mod search;
pub mod stopwatch;
pub mod urban;

pub use error::CommandError;
pub use paginate::Paginator;
pub use rps::Move;
pub use search::SearchQuery;
pub use stopwatch::{Stopwatches, Toggle};
pub use urban::{DefinitionSource, UrbanClient};

pub type CommandResult = Result<Reply, CommandError>;

/// What a command sends back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Paged(Paginator),
}
impl Reply {
    /// The messages to send, in order. Discord rejects blank messages, so
    /// pages holding nothing but whitespace are skipped.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        let (single, paged) = match self {
            Reply::Text(text) => (Some(text.as_str()), None),
            Reply::Paged(paginator) => (None, Some(paginator.pages())),
        };
        single
            .into_iter()
            .chain(paged.into_iter().flatten())
            .filter(|page| !page.trim().is_empty())
    }
}

/// Who a `flip` is aimed at.
#[derive(Debug, Clone, Copy)]
pub struct FlipTarget<'a> {
    pub display_name: &'a str,
    /// The target is the bot itself.
    pub is_bot: bool,
    /// Display name of whoever ran the command.
    pub author_name: &'a str,
}

pub struct Engine {
    stopwatches: Stopwatches,
    definitions: Arc<dyn DefinitionSource>,
    page_length: usize,
}

impl Engine {
    pub fn new(definitions: Arc<dyn DefinitionSource>, page_length: usize) -> Self {
        Self {
            stopwatches: Stopwatches::new(),
            definitions,
            page_length,
        }
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R, raw: &str) -> CommandResult {
        let choices: Vec<String> = random::split_choices(raw)
            .iter()
            .map(|c| format::escape_mass_mentions(c))
            .collect();
        let picked = random::choose(rng, &choices)?;
        Ok(Reply::Text(picked.to_string()))
    }

    pub fn roll<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        mention: &str,
        max: Option<i64>,
    ) -> CommandResult {
        let n = random::roll(rng, max.unwrap_or(random::DEFAULT_ROLL_MAX))
            .ok_or_else(|| CommandError::RollTooLow(mention.to_string()))?;
        Ok(Reply::Text(format!("{mention} :game_die: {n} :game_die:")))
    }

    pub fn flip<R: Rng + ?Sized>(&self, rng: &mut R, target: Option<FlipTarget<'_>>) -> Reply {
        let Some(target) = target else {
            return Reply::Text(format!("*flips a coin and... {}", random::coin_face(rng)));
        };

        let (prefix, name) = if target.is_bot {
            (
                "Nice try. You think this is funny?\n How about *this* instead:\n\n",
                target.author_name,
            )
        } else {
            ("", target.display_name)
        };
        Reply::Text(format!(
            "{prefix}(╯°□°）╯︵ {}",
            format::upside_down(name)
        ))
    }

    pub fn rps<R: Rng + ?Sized>(&self, rng: &mut R, mention: &str, raw: &str) -> CommandResult {
        let player: Move = raw.parse()?;
        Ok(self.rps_against(player, Move::draw(rng), mention))
    }

    /// A round where the bot's move is already known.
    pub fn rps_against(&self, player: Move, house: Move, mention: &str) -> Reply {
        let outcome = rps::resolve(player, house);
        tracing::debug!(%player, %house, ?outcome, "rps round");
        Reply::Text(rps::announce(house, outcome, mention))
    }

    pub fn eightball<R: Rng + ?Sized>(&self, rng: &mut R, question: &str) -> CommandResult {
        if !question.ends_with('?') || question == "?" {
            return Err(CommandError::NotAQuestion);
        }
        Ok(Reply::Text(format!("`{}`", random::eight_ball(rng))))
    }

    pub fn stopwatch(&self, user_id: u64, mention: &str) -> Reply {
        self.stopwatch_at(user_id, mention, Instant::now())
    }

    pub fn stopwatch_at(&self, user_id: u64, mention: &str, now: Instant) -> Reply {
        Reply::Text(match self.stopwatches.toggle_at(user_id, now) {
            Toggle::Started => format!("{mention} Stopwatch started!"),
            Toggle::Stopped(elapsed) => format!(
                "{mention} Stopwatch stopped! Time: **{}**",
                format::elapsed(elapsed)
            ),
        })
    }

    pub fn lmgtfy(&self, terms: &str) -> Reply {
        let terms = format::escape_mass_mentions(&terms.replace(' ', "+"));
        Reply::Text(format!("https://lmgtfy.com/?q={terms}"))
    }

    pub fn hug(&self, display_name: &str, intensity: Option<i64>) -> Reply {
        let name = format::italics(display_name);
        Reply::Text(match intensity.unwrap_or(1) {
            ..=0 => format!("(っ˘̩╭╮˘̩)っ{name}"),
            1..=3 => format!("(っ´▽｀)っ{name}"),
            4..=6 => format!("╰(*´︶`*)╯{name}"),
            7..=9 => format!("(つ≧▽≦)つ{name}"),
            10.. => format!("(づ￣ ³￣)づ{name} ⊂(´・ω・｀⊂)"),
        })
    }

    pub async fn urban(&self, raw: &str) -> CommandResult {
        let query = SearchQuery::parse(raw);
        let definitions = self.definitions.define(&query).await.map_err(|err| {
            tracing::warn!(term = %query.term(), "definition lookup failed: {err:#}");
            CommandError::LookupFailed
        })?;

        tracing::debug!(
            term = %query.term(),
            number = query.number(),
            found = definitions.len(),
            "definitions fetched"
        );
        let (definition, total) = urban::select(&definitions, query.position)?;
        Ok(Reply::Paged(Paginator::lines(
            urban::render(definition, query.position, total),
            self.page_length,
        )))
    }
}
