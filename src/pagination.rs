//! Pagination State
//!
//! Page cursor shared by every paginated list view.

/// Current page and the last page reported by the server (both 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub last_page: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: 1, last_page: 1 }
    }
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_go_first(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.last_page
    }

    pub fn can_go_last(&self) -> bool {
        self.page < self.last_page
    }

    pub fn go_first(&mut self) {
        self.page = 1;
    }

    pub fn go_prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn go_next(&mut self) {
        self.page = (self.page + 1).min(self.last_page.max(1));
    }

    pub fn go_last(&mut self) {
        self.page = self.last_page.max(1);
    }

    /// Jump to a numbered page, clamped into range
    pub fn go_to(&mut self, page: u32) {
        self.page = page.clamp(1, self.last_page.max(1));
    }

    /// Back to page 1; call on every search or filter change
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Record the server's last page, pulling the cursor back if it overshoots
    pub fn set_last_page(&mut self, last_page: u32) {
        self.last_page = last_page.max(1);
        if self.page > self.last_page {
            self.page = self.last_page;
        }
    }

    /// Numbered buttons: `page ± delta` clipped to `1..=last_page`
    pub fn window(&self, delta: u32) -> Vec<u32> {
        let start = self.page.saturating_sub(delta).max(1);
        let end = (self.page + delta).min(self.last_page);
        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(page: u32, last_page: u32) -> Pager {
        Pager { page, last_page }
    }

    #[test]
    fn test_first_page_disables_backwards() {
        let p = pager(1, 5);
        assert!(!p.can_go_first());
        assert!(!p.can_go_prev());
        assert!(p.can_go_next());
        assert!(p.can_go_last());
    }

    #[test]
    fn test_last_page_disables_forwards() {
        let p = pager(5, 5);
        assert!(p.can_go_prev());
        assert!(!p.can_go_next());
        assert!(!p.can_go_last());
    }

    #[test]
    fn test_single_page() {
        let p = pager(1, 1);
        assert!(!p.can_go_prev() && !p.can_go_next());
        assert_eq!(p.window(3), vec![1]);
    }

    #[test]
    fn test_moves_clamp() {
        let mut p = pager(1, 3);
        p.go_prev();
        assert_eq!(p.page, 1);
        p.go_last();
        assert_eq!(p.page, 3);
        p.go_next();
        assert_eq!(p.page, 3);
        p.go_to(0);
        assert_eq!(p.page, 1);
        p.go_to(9);
        assert_eq!(p.page, 3);
    }

    #[test]
    fn test_window() {
        assert_eq!(pager(1, 10).window(3), vec![1, 2, 3, 4]);
        assert_eq!(pager(6, 10).window(3), vec![3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(pager(10, 10).window(4), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_filter_change_resets() {
        let mut p = pager(4, 8);
        p.reset();
        assert_eq!(p.page, 1);
        assert!(!p.can_go_prev());
    }

    #[test]
    fn test_set_last_page_pulls_back() {
        let mut p = pager(7, 9);
        p.set_last_page(2);
        assert_eq!(p, pager(2, 2));
        p.set_last_page(0);
        assert_eq!(p, pager(1, 1));
    }
}
