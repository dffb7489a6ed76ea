/// A renderable unit of the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageToken {
    /// A clickable page number.
    Number(u32),
    /// Gap marker, never clickable.
    Ellipsis,
}

/// Up to this many pages every number is shown.
const SHOW_ALL_THRESHOLD: u32 = 7;
/// Page numbers shown in the start and end windows.
const WINDOW: u32 = 5;

/// Maps the current position to the page tokens of a compact pagination bar.
///
/// Short ranges list every page. Longer ranges always keep the first and last
/// page and show a window around the current page:
///
/// - near the start: `1 2 3 4 5 … N`
/// - near the end: `1 … N-4 N-3 N-2 N-1 N`
/// - otherwise: `1 … c-1 c c+1 … N`
pub fn sequence(current_page: u32, total_pages: u32) -> Vec<PageToken> {
    if total_pages <= SHOW_ALL_THRESHOLD {
        return (1..=total_pages).map(PageToken::Number).collect();
    }

    let half = WINDOW / 2;
    let mut tokens = Vec::with_capacity(WINDOW as usize + 2);
    tokens.push(PageToken::Number(1));

    if current_page <= half + 1 {
        tokens.extend((2..=WINDOW).map(PageToken::Number));
        tokens.push(PageToken::Ellipsis);
    } else if current_page >= total_pages - half {
        tokens.push(PageToken::Ellipsis);
        tokens.extend((total_pages - WINDOW + 1..total_pages).map(PageToken::Number));
    } else {
        tokens.push(PageToken::Ellipsis);
        tokens.extend((current_page - 1..=current_page + 1).map(PageToken::Number));
        tokens.push(PageToken::Ellipsis);
    }

    tokens.push(PageToken::Number(total_pages));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Number};

    #[test]
    fn test_short_ranges_list_every_page() {
        for total in 0..=7 {
            for current in 1..=total.max(1) {
                let tokens = sequence(current, total);
                assert_eq!(tokens.len(), total as usize);
                assert!(!tokens.contains(&Ellipsis));
            }
        }
    }

    #[test]
    fn test_long_ranges_keep_first_and_last() {
        for total in 8..=40 {
            for current in 1..=total {
                let tokens = sequence(current, total);
                assert_eq!(tokens.first(), Some(&Number(1)));
                assert_eq!(tokens.last(), Some(&Number(total)));
                assert!(tokens.len() <= 7);
            }
        }
    }

    #[test]
    fn test_near_start() {
        assert_eq!(
            sequence(1, 10),
            vec![Number(1), Number(2), Number(3), Number(4), Number(5), Ellipsis, Number(10)]
        );
        assert_eq!(sequence(3, 10), sequence(1, 10));
    }

    #[test]
    fn test_middle() {
        assert_eq!(
            sequence(5, 10),
            vec![Number(1), Ellipsis, Number(4), Number(5), Number(6), Ellipsis, Number(10)]
        );
    }

    #[test]
    fn test_near_end() {
        assert_eq!(
            sequence(10, 10),
            vec![Number(1), Ellipsis, Number(6), Number(7), Number(8), Number(9), Number(10)]
        );
        assert_eq!(sequence(8, 10), sequence(10, 10));
    }

    #[test]
    fn test_current_page_is_always_listed() {
        for total in 8..=30 {
            for current in 1..=total {
                assert!(sequence(current, total).contains(&Number(current)));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let first = sequence(6, 20);
        let _ = sequence(19, 20);
        assert_eq!(sequence(6, 20), first);
    }
}
