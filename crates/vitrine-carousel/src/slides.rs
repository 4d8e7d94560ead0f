//! Slide collection with optional infinite-mode padding
//!
//! The collection is built once from an immutable source sequence. In
//! infinite mode a suffix of the source is cloned onto the front and a prefix
//! onto the back, so the track can run past either end and be re-centered
//! without a visible jump.

/// Ordered slides, possibly padded with clones on both ends
#[derive(Clone, Debug)]
pub struct SlideCollection<T> {
    /// Padded slides, in track order
    items: Vec<T>,
    /// Number of genuine (non-clone) slides
    source_len: usize,
    /// Clones applied on each end
    padding: usize,
    /// Clones requested on each end
    requested: usize,
}

impl<T> SlideCollection<T> {
    /// Collection without padding
    pub fn plain(source: Vec<T>) -> Self {
        let source_len = source.len();
        Self {
            items: source,
            source_len,
            padding: 0,
            requested: 0,
        }
    }

    /// Collection padded with `offset` clones on each end
    ///
    /// When the source is shorter than `offset`, every source item is cloned
    /// on each side instead; [`SlideCollection::shortfall`] reports the gap.
    pub fn padded<F>(source: Vec<T>, offset: usize, mut clone_slide: F) -> Self
    where
        F: FnMut(&T) -> T,
    {
        let source_len = source.len();
        let padding = offset.min(source_len);

        let mut items = Vec::with_capacity(source_len + 2 * padding);
        items.extend(source[source_len - padding..].iter().map(&mut clone_slide));
        let head: Vec<T> = source[..padding].iter().map(&mut clone_slide).collect();
        items.extend(source);
        items.extend(head);

        Self {
            items,
            source_len,
            padding,
            requested: offset,
        }
    }

    /// Total slide count, clones included
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no slides at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of genuine slides
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Clones applied on each end
    #[inline]
    pub fn padding(&self) -> usize {
        self.padding
    }

    /// Clones that were requested but could not be made, per side
    #[inline]
    pub fn shortfall(&self) -> usize {
        self.requested - self.padding
    }

    /// Slide at a padded index
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// True when a slide exists at the padded index
    #[inline]
    pub fn has_slot(&self, index: usize) -> bool {
        index < self.items.len()
    }

    /// Iterate slides in track order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// True when the padded index holds a clone
    pub fn is_clone(&self, index: usize) -> bool {
        index < self.padding || (index >= self.padding + self.source_len && index < self.len())
    }

    /// Map a padded index to the source slide it shows
    pub fn source_index(&self, index: usize) -> Option<usize> {
        if index >= self.len() || self.source_len == 0 {
            return None;
        }
        let shifted = index as isize - self.padding as isize;
        Some(shifted.rem_euclid(self.source_len as isize) as usize)
    }
}

impl<'a, T> IntoIterator for &'a SlideCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clone_marked(s: &String) -> String {
        format!("{}'", s)
    }

    fn source(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("s{}", i)).collect()
    }

    #[test]
    fn test_plain_collection() {
        let slides = SlideCollection::plain(source(3));
        assert_eq!(slides.len(), 3);
        assert_eq!(slides.padding(), 0);
        assert_eq!(slides.shortfall(), 0);
        assert!(!slides.is_clone(0));
        assert_eq!(slides.source_index(2), Some(2));
    }

    #[test]
    fn test_padded_order() {
        let slides = SlideCollection::padded(source(5), 2, clone_marked);
        let order: Vec<&str> = slides.iter().map(String::as_str).collect();
        assert_eq!(
            order,
            vec!["s3'", "s4'", "s0", "s1", "s2", "s3", "s4", "s0'", "s1'"]
        );
        assert_eq!(slides.len(), 9);
        assert_eq!(slides.source_len(), 5);
    }

    #[test]
    fn test_source_index_wraps_through_clones() {
        let slides = SlideCollection::padded(source(5), 2, clone_marked);
        assert_eq!(slides.source_index(0), Some(3));
        assert_eq!(slides.source_index(1), Some(4));
        assert_eq!(slides.source_index(2), Some(0));
        assert_eq!(slides.source_index(7), Some(0));
        assert_eq!(slides.source_index(8), Some(1));
        assert_eq!(slides.source_index(9), None);
    }

    #[test]
    fn test_is_clone() {
        let slides = SlideCollection::padded(source(4), 3, clone_marked);
        let clones: Vec<bool> = (0..slides.len()).map(|i| slides.is_clone(i)).collect();
        assert_eq!(
            clones,
            vec![true, true, true, false, false, false, false, true, true, true]
        );
    }

    #[test]
    fn test_shortfall_uses_available_items() {
        let slides = SlideCollection::padded(source(2), 4, clone_marked);
        assert_eq!(slides.padding(), 2);
        assert_eq!(slides.shortfall(), 2);
        assert_eq!(slides.len(), 6);
        assert_eq!(slides.get(0).map(String::as_str), Some("s0'"));
        assert_eq!(slides.get(5).map(String::as_str), Some("s1'"));
    }
}
