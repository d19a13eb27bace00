use crate::foundation::{
    core::{page_count, wrap_index},
    error::{FolioError, FolioResult},
};

/// Paging state of one carousel.
///
/// `current_page < total_pages()` whenever there is at least one item; an empty carousel
/// stays on page 0 and ignores navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CarouselState {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl CarouselState {
    pub fn new(total_items: usize, items_per_page: usize) -> FolioResult<Self> {
        if items_per_page == 0 {
            return Err(FolioError::validation("carousel items_per_page must be > 0"));
        }
        Ok(Self {
            current_page: 0,
            items_per_page,
            total_items,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        page_count(self.total_items, self.items_per_page)
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    pub fn is_first(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_page + 1 >= self.total_pages()
    }

    /// Jump to `page`, wrapping out-of-range values in both directions.
    pub fn go_to(&mut self, page: i64) -> usize {
        if let Some(p) = wrap_index(page, self.total_pages()) {
            self.current_page = p;
        }
        self.current_page
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.current_page as i64 + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.current_page as i64 - 1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/state.rs"]
mod tests;
