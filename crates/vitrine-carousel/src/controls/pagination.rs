//! Page indicators

use crate::events::MoveEvent;

/// Page layout for the pagination indicators
///
/// Built once at construction from the configured scroll step; pages do not
/// change when the breakpoint flips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// Genuine slides covered by the pages
    source_len: usize,
    /// Slides per page
    step: usize,
    /// Clones in front of the first genuine slide
    padding: usize,
}

impl Pagination {
    /// Create the page layout
    pub fn new(source_len: usize, step: usize, padding: usize) -> Self {
        Self {
            source_len,
            step: step.max(1),
            padding,
        }
    }

    /// Number of indicators
    pub fn page_count(&self) -> usize {
        self.source_len.div_ceil(self.step)
    }

    /// Padded index an indicator jumps to
    pub fn target(&self, page: usize) -> usize {
        page * self.step + self.padding
    }

    /// Indicator to highlight for a move, if any
    pub fn active_page(&self, event: &MoveEvent) -> Option<usize> {
        if self.source_len == 0 {
            return None;
        }
        let shifted = event.index as isize - self.padding as isize;
        let position = shifted.rem_euclid(self.source_len as isize) as usize;
        let page = position / self.step;
        (page < self.page_count()).then_some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(index: usize, len: usize, padding: usize) -> MoveEvent {
        MoveEvent {
            index,
            len,
            slides_visible: 1,
            padding,
            looping: false,
        }
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(Pagination::new(6, 2, 0).page_count(), 3);
        assert_eq!(Pagination::new(7, 2, 0).page_count(), 4);
        assert_eq!(Pagination::new(3, 1, 0).page_count(), 3);
    }

    #[test]
    fn test_targets_skip_padding() {
        let pages = Pagination::new(6, 2, 3);
        assert_eq!(pages.target(0), 3);
        assert_eq!(pages.target(1), 5);
        assert_eq!(pages.target(2), 7);
    }

    #[test]
    fn test_active_page_plain() {
        let pages = Pagination::new(6, 2, 0);
        assert_eq!(pages.active_page(&event(0, 6, 0)), Some(0));
        assert_eq!(pages.active_page(&event(3, 6, 0)), Some(1));
        assert_eq!(pages.active_page(&event(5, 6, 0)), Some(2));
    }

    #[test]
    fn test_active_page_in_clone_region() {
        // 4 genuine slides, 2 clones per side: [c2 c3 s0 s1 s2 s3 c0 c1]
        let pages = Pagination::new(4, 1, 2);
        assert_eq!(pages.active_page(&event(1, 8, 2)), Some(3));
        assert_eq!(pages.active_page(&event(2, 8, 2)), Some(0));
        assert_eq!(pages.active_page(&event(6, 8, 2)), Some(0));
        assert_eq!(pages.active_page(&event(7, 8, 2)), Some(1));
    }
}
