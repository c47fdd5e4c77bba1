/// Errors a command can end in. The `Display` text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Not enough choices to pick from.")]
    InsufficientChoices,
    #[error("`{0}` is not a valid move. Pick rock, paper or scissors.")]
    InvalidMove(String),
    /// Carries the mention of whoever rolled.
    #[error("{0} Maybe higher than 1? ;P")]
    RollTooLow(String),
    #[error("That doesn't look like a question.")]
    NotAQuestion,
    #[error("Your search terms gave no results.")]
    NoResults,
    #[error("There is no definition #{0}")]
    DefinitionIndexOutOfRange(usize),
    /// Anything else that went wrong during a lookup. The cause is logged, not shown.
    #[error("Error.")]
    LookupFailed,
}
