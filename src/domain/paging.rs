//! "Load More" paging for the ranking board

/// Shows a fixed number of rows until the user asks for the whole list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    expanded: bool,
}

impl Pagination {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// Creates a collapsed pager
    ///
    /// # Arguments
    /// * `page_size` - Rows shown before "Load More" is used
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            expanded: false,
        }
    }

    /// Returns the number of rows in the collapsed view
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns true once "Load More" has been used
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Reveals the full list
    pub fn expand(&mut self) {
        self.expanded = true;
    }

    /// Returns the visible prefix of `items`
    ///
    /// # Returns
    /// The first `page_size` items, or all of them once expanded.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.expanded {
            items
        } else {
            &items[..items.len().min(self.page_size)]
        }
    }

    /// Returns true if the "Load More" control should be offered
    pub fn shows_load_more(&self, total: usize) -> bool {
        !self.expanded && total > self.page_size
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_list_shows_first_page() {
        let rows: Vec<u32> = (1..=20).collect();
        let paging = Pagination::new(10);

        assert_eq!(paging.visible(&rows), &rows[..10]);
        assert!(paging.shows_load_more(rows.len()));
    }

    #[test]
    fn short_list_is_shown_whole_without_load_more() {
        let rows = [1, 2, 3];
        let paging = Pagination::default();

        assert_eq!(paging.visible(&rows), &rows);
        assert!(!paging.shows_load_more(rows.len()));
        assert!(!paging.shows_load_more(10));
    }

    #[test]
    fn expanding_reveals_everything() {
        let rows: Vec<u32> = (1..=20).collect();
        let mut paging = Pagination::new(10);
        paging.expand();

        assert!(paging.is_expanded());
        assert_eq!(paging.visible(&rows).len(), 20);
        assert!(!paging.shows_load_more(rows.len()));
    }
}
