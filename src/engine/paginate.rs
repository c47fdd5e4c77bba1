/// Long text that has to go out as several messages.
///
/// Pages are produced lazily by [`Paginator::pages`], which can be called any
/// number of times. Pages are cut right before the last delimiter that fits,
/// so the delimiter opens the next page and concatenating the pages gives back
/// the original text. A stretch with no delimiter in reach is hard-split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    text: String,
    delimiter: char,
    page_length: usize,
}

impl Paginator {
    /// Discord's 2000 character limit, minus some headroom.
    pub const DEFAULT_PAGE_LENGTH: usize = 1992;
    /// Enough to hold any single UTF-8 character, so every page makes progress.
    const MIN_PAGE_LENGTH: usize = 4;

    pub fn new(text: impl Into<String>, delimiter: char, page_length: usize) -> Self {
        Self {
            text: text.into(),
            delimiter,
            page_length: page_length.max(Self::MIN_PAGE_LENGTH),
        }
    }

    pub fn lines(text: impl Into<String>, page_length: usize) -> Self {
        Self::new(text, '\n', page_length)
    }

    pub fn pages(&self) -> Pages<'_> {
        Pages {
            remaining: &self.text,
            delimiter: self.delimiter,
            page_length: self.page_length,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pages<'a> {
    remaining: &'a str,
    delimiter: char,
    page_length: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        if self.remaining.len() <= self.page_length {
            return Some(std::mem::take(&mut self.remaining));
        }

        let limit = floor_char_boundary(self.remaining, self.page_length);
        let split = self.remaining[..limit]
            .rfind(self.delimiter)
            .filter(|&i| i > 0)
            .unwrap_or(limit);

        let (page, rest) = self.remaining.split_at(split);
        self.remaining = rest;
        Some(page)
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(paginator: &Paginator) -> Vec<&str> {
        paginator.pages().collect()
    }

    #[test]
    fn test_short_text_is_one_page() {
        let paginator = Paginator::lines("hello\nworld", 100);
        assert_eq!(pages(&paginator), vec!["hello\nworld"]);
    }

    #[test]
    fn test_empty_text_has_no_pages() {
        assert_eq!(Paginator::lines("", 100).pages().count(), 0);
    }

    #[test]
    fn test_many_lines() {
        let text = (0..500)
            .map(|i| format!("line {i} {}", "x".repeat(i % 37)))
            .collect::<Vec<_>>()
            .join("\n");
        let paginator = Paginator::lines(text.clone(), 200);
        let pages = pages(&paginator);

        assert!(pages.len() > 1);
        assert_eq!(pages.concat(), text);
        for page in &pages {
            assert!(page.len() <= 200, "page too long: {}", page.len());
        }
        for page in &pages[1..] {
            assert!(page.starts_with('\n'), "page split mid-line: {page:?}");
        }
    }

    #[test]
    fn test_oversized_line_is_hard_split() {
        let text = format!("short\n{}\ntail", "x".repeat(250));
        let paginator = Paginator::lines(text.clone(), 100);
        let pages = pages(&paginator);

        assert_eq!(pages.concat(), text);
        assert_eq!(pages[0], "short");
        assert!(pages.iter().all(|p| p.len() <= 100));
        assert!(pages.iter().any(|p| p.len() == 100 && !p.contains('\n')));
    }

    #[test]
    fn test_leading_delimiter_is_not_a_split_point() {
        let text = format!("\n{}", "y".repeat(20));
        let paginator = Paginator::lines(text.clone(), 10);
        let pages = pages(&paginator);
        assert_eq!(pages[0], format!("\n{}", "y".repeat(9)));
        assert_eq!(pages.concat(), text);
    }

    #[test]
    fn test_splits_on_char_boundaries() {
        let text = "é".repeat(10);
        let paginator = Paginator::lines(text.clone(), 5);
        let pages = pages(&paginator);
        assert!(pages.iter().all(|p| p.len() <= 5));
        assert_eq!(pages[0], "éé");
        assert_eq!(pages.concat(), text);
    }

    #[test]
    fn test_pages_restart() {
        let paginator = Paginator::lines("a\nb\nc\nd\ne\nf", 4);
        let first: Vec<_> = paginator.pages().collect();
        let second: Vec<_> = paginator.pages().collect();
        assert_eq!(first, second);

        let mut iter = paginator.pages();
        iter.next();
        let resumed = iter.clone();
        assert_eq!(iter.collect::<Vec<_>>(), resumed.collect::<Vec<_>>());
    }

    #[test]
    fn test_page_length_has_a_floor() {
        let paginator = Paginator::lines("abcdefgh", 0);
        assert_eq!(pages(&paginator), vec!["abcd", "efgh"]);
    }
}
