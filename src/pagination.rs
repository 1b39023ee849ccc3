//! Page arithmetic for article listings.
//!
//! Pages are 1-based. A listing with no items has zero pages; callers that
//! need a displayable page number clamp with [`clamp_page`].

use serde::Serialize;

/// Number of pages needed to show `len` items, `page_size` at a time.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Items on `page`, i.e. `items[(page-1)*page_size .. page*page_size]`
/// clamped to the bounds of `items`. Out-of-range pages yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end.max(start)]
}

/// Page after `page`, or `page` itself when already on the last one.
pub fn next_page(page: usize, total_pages: usize) -> usize {
    if page < total_pages { page + 1 } else { page }
}

/// Page before `page`, or `page` itself when already on the first one.
pub fn previous_page(page: usize) -> usize {
    if page > 1 { page - 1 } else { page }
}

/// Moves `page` into `1..=max(total_pages, 1)`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One rendered page of a listing together with its navigation state.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page links to render; `None` marks a gap.
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub previous: usize,
    pub next: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            previous: previous_page(current_page),
            next: next_page(current_page, total_pages),
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}

impl<T: Clone> Paginated<T> {
    /// Slices `page` out of the complete, already filtered `items`.
    pub fn from_items(items: &[T], page: usize, page_size: usize) -> Self {
        let total = total_pages(items.len(), page_size);
        let visible = paginate(items, page, page_size).to_vec();
        Self::new(visible, page, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 9), 0);
        assert_eq!(total_pages(1, 9), 1);
        assert_eq!(total_pages(9, 9), 1);
        assert_eq!(total_pages(10, 9), 2);
        assert_eq!(total_pages(12, 9), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn twelve_items_split_nine_and_three() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, 1, 9), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(paginate(&items, 2, 9), &[10, 11, 12]);
        assert!(paginate(&items, 3, 9).is_empty());
    }

    #[test]
    fn pages_concatenate_back_to_the_input() {
        for len in 0..40 {
            let items: Vec<usize> = (0..len).collect();
            let total = total_pages(len, 9);
            let mut rebuilt = Vec::new();
            for page in 1..=total {
                let chunk = paginate(&items, page, 9);
                assert!(!chunk.is_empty() && chunk.len() <= 9);
                rebuilt.extend_from_slice(chunk);
            }
            assert_eq!(rebuilt, items);
        }
    }

    #[test]
    fn degenerate_pages_are_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 0, 9).len() <= 3);
        assert!(paginate(&items, usize::MAX, 9).is_empty());
        assert!(paginate::<u8>(&[], 1, 9).is_empty());
    }

    #[test]
    fn navigation_stops_at_the_edges() {
        assert_eq!(next_page(1, 2), 2);
        assert_eq!(next_page(2, 2), 2);
        assert_eq!(next_page(next_page(2, 2), 2), 2);
        assert_eq!(next_page(1, 0), 1);
        assert_eq!(previous_page(2), 1);
        assert_eq!(previous_page(1), 1);
        assert_eq!(previous_page(previous_page(1)), 1);
    }

    #[test]
    fn clamp_keeps_page_displayable() {
        assert_eq!(clamp_page(5, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(3, 0), 1);
        assert_eq!(clamp_page(2, 4), 2);
    }

    #[test]
    fn page_window_marks_gaps() {
        assert_eq!(get_pages(0, 1, 2, 2, 4, 2), vec![]);
        assert_eq!(get_pages(2, 1, 2, 2, 4, 2), vec![Some(1), Some(2)]);
        assert_eq!(
            get_pages(20, 10, 2, 2, 4, 2),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20)
            ]
        );
    }

    #[test]
    fn paginated_exposes_control_state() {
        let items: Vec<u32> = (1..=12).collect();

        let first = Paginated::from_items(&items, 1, 9);
        assert_eq!(first.items.len(), 9);
        assert_eq!(first.total_pages, 2);
        assert!(!first.has_previous);
        assert!(first.has_next);
        assert_eq!(first.next, 2);
        assert_eq!(first.previous, 1);

        let last = Paginated::from_items(&items, 2, 9);
        assert_eq!(last.items, vec![10, 11, 12]);
        assert!(last.has_previous);
        assert!(!last.has_next);
        assert_eq!(last.next, 2);

        let empty = Paginated::from_items(&Vec::<u32>::new(), 1, 9);
        assert!(empty.items.is_empty());
        assert_eq!(empty.total_pages, 0);
        assert!(!empty.has_next && !empty.has_previous);
    }
}
