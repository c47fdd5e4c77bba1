/// The upstream only serves the top results. Anything past the eleventh slot
/// falls back to the first.
pub const MAX_POSITION: usize = 10;

/// A definition lookup: what to search for, and which of the results to show.
///
/// Parsed from free text so users don't have to quote multi-word phrases:
/// `hello world 3` searches for `hello world` and shows the third result.
/// The flip side is that a phrase which really ends in a number (`top 10`)
/// loses that number to the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    tokens: Vec<String>,
    /// 0-based
    pub position: usize,
}

impl SearchQuery {
    pub fn parse(raw: &str) -> Self {
        let mut tokens: Vec<String> = raw.split(' ').map(str::to_string).collect();

        let mut position = 0;
        if tokens.len() > 1
            && let Some(index) = tokens.pop_if(|t| is_integer(t))
        {
            // Integers too big for i64 are still an index, just an out of range one.
            position = index
                .parse::<i64>()
                .ok()
                .and_then(|i| i.checked_sub(1))
                .and_then(|p| usize::try_from(p).ok())
                .filter(|p| *p <= MAX_POSITION)
                .unwrap_or(0);
        }

        Self { tokens, position }
    }

    /// The search term with words joined by `+`.
    pub fn term(&self) -> String {
        self.tokens.join("+")
    }

    /// The search term as typed, for handing to a query-string encoder.
    pub fn phrase(&self) -> String {
        self.tokens.join(" ")
    }

    /// 1-based, as the user counts.
    pub fn number(&self) -> usize {
        self.position + 1
    }
}

/// An optional sign followed by one or more ASCII digits, of any length.
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
