pub const PER_PAGE: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    per_page: usize,
}

impl PageCursor {
    pub fn first() -> Self {
        Self {
            page: 1,
            per_page: PER_PAGE,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn advance(&mut self) {
        self.page += 1;
    }

    pub fn query(&self) -> [(&'static str, usize); 2] {
        [("page", self.page), ("per_page", self.per_page)]
    }

    /// A short page (including an empty one) ends the collection.
    pub fn is_last_page(&self, count: usize) -> bool {
        count < self.per_page
    }
}
