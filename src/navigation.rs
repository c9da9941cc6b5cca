//! Page navigation state.
//!
//! Every move goes through [`Navigator::clamp_and_go`], so the current page is always a valid
//! page of the document no matter what the caller asked for.

use crate::document::PageNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    current: PageNumber,
    page_count: u32,
}

impl Navigator {
    /// Start on the first page of a document with `page_count` pages
    pub fn new(page_count: u32) -> Self {
        Self {
            current: PageNumber::FIRST,
            page_count: page_count.max(1),
        }
    }

    pub fn current(&self) -> PageNumber {
        self.current
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Clamp `page` into `[1, page_count]`, make it current and return it
    pub fn clamp_and_go(&mut self, page: i64) -> PageNumber {
        let clamped = page.clamp(1, i64::from(self.page_count)) as u32;
        self.current = PageNumber::new(clamped).unwrap_or(PageNumber::FIRST);
        self.current
    }

    pub fn next(&mut self) -> PageNumber {
        self.clamp_and_go(i64::from(self.current.get()) + 1)
    }

    pub fn previous(&mut self) -> PageNumber {
        self.clamp_and_go(i64::from(self.current.get()) - 1)
    }

    pub fn first(&mut self) -> PageNumber {
        self.clamp_and_go(1)
    }

    pub fn last(&mut self) -> PageNumber {
        self.clamp_and_go(i64::from(self.page_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_document_range() {
        let mut nav = Navigator::new(12);
        assert_eq!(nav.clamp_and_go(0).get(), 1);
        assert_eq!(nav.clamp_and_go(-3).get(), 1);
        assert_eq!(nav.clamp_and_go(7).get(), 7);
        assert_eq!(nav.clamp_and_go(400).get(), 12);
        assert_eq!(nav.current().get(), 12);
    }

    #[test]
    fn previous_and_next_stop_at_edges() {
        let mut nav = Navigator::new(2);
        assert_eq!(nav.previous().get(), 1);
        assert_eq!(nav.next().get(), 2);
        assert_eq!(nav.next().get(), 2);
    }

    #[test]
    fn first_and_last_jump() {
        let mut nav = Navigator::new(9);
        assert_eq!(nav.last().get(), 9);
        assert_eq!(nav.first().get(), 1);
    }

    #[test]
    fn empty_document_still_has_one_page() {
        let mut nav = Navigator::new(0);
        assert_eq!(nav.page_count(), 1);
        assert_eq!(nav.next().get(), 1);
    }
}
