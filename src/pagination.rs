use serde::Serialize;

/// One page of results plus the metadata derived from a count query.
///
/// `page` is 0-indexed to match the HTTP surface.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: usize, page_size: usize, total_items: usize) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };

        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
        }
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 0 && self.total_pages > 0
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_total_pages_and_neighbours() {
        let page = Page::new(vec![1, 2, 3], 0, 3, 7);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next());
        assert!(!page.has_previous());

        let page = Page::new(vec![7], 2, 3, 7);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn empty_result_set_has_no_pages() {
        let page: Page<i32> = Page::new(vec![], 0, 10, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }
}
