//! Integer spans
//!
//! A right-open interval that knows its direction: `span(0, 3)` yields
//! 0, 1, 2 and `span(6, 3)` yields 6, 5, 4. Iteration comes from the
//! standard `Iterator` trait, so `map`, `any`, `find`, and `enumerate`
//! need no bespoke methods.

/// Right-open interval from `start` toward `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: i64,
    end: i64,
}

/// Shorthand constructor. `span(-4, 2)` counts up, `span(4, 2)` counts down.
pub fn span(start: i64, end: i64) -> Span {
    Span { start, end }
}

impl Span {
    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of values the span yields.
    pub fn len(&self) -> usize {
        self.start.abs_diff(self.end) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn iter(&self) -> SpanIter {
        SpanIter {
            next: self.start,
            end: self.end,
            descending: self.end < self.start,
        }
    }

    /// Uniform pick from the closed interval between the endpoints, so a
    /// single-point span yields its point. `generator` supplies values in
    /// `[0, 1)`.
    pub fn random_with(&self, mut generator: impl FnMut() -> f64) -> i64 {
        let lo = self.start.min(self.end);
        let hi = self.start.max(self.end);
        let width = lo.abs_diff(hi) + 1;
        let offset = (generator() * width as f64) as u64;
        lo + offset.min(width - 1) as i64
    }
}

impl IntoIterator for Span {
    type Item = i64;
    type IntoIter = SpanIter;

    fn into_iter(self) -> SpanIter {
        self.iter()
    }
}

impl IntoIterator for &Span {
    type Item = i64;
    type IntoIter = SpanIter;

    fn into_iter(self) -> SpanIter {
        self.iter()
    }
}

/// Iterator stepping a span toward its end.
#[derive(Debug, Clone)]
pub struct SpanIter {
    next: i64,
    end: i64,
    descending: bool,
}

impl Iterator for SpanIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.next == self.end {
            return None;
        }

        let value = self.next;
        self.next += if self.descending { -1 } else { 1 };
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.next.abs_diff(self.end) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for SpanIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_and_reverse() {
        assert_eq!(
            span(-4, 2).iter().collect::<Vec<_>>(),
            vec![-4, -3, -2, -1, 0, 1]
        );
        assert_eq!(span(6, 3).iter().collect::<Vec<_>>(), vec![6, 5, 4]);
        assert_eq!(span(-3, -5).iter().collect::<Vec<_>>(), vec![-3, -4]);
        assert_eq!(span(0, 0).iter().count(), 0);
    }

    #[test]
    fn test_for_loop() {
        let mut seen = Vec::new();
        for value in span(0, 3) {
            seen.push(value);
        }
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_any_and_find() {
        assert!(span(-4, -2).iter().any(|i| i < 0));
        assert!(!span(-4, -2).iter().any(|i| i >= -2));
        assert!(span(-5, 10).iter().any(|i| i == 0));
        assert!(span(9, -9).iter().any(|i| i < 10 && i > -9));

        // Right-open: the end itself is never yielded
        assert!(!span(1, -2).iter().any(|i| i == -2));
        assert!(!span(6, 6).iter().any(|_| true));

        assert_eq!(span(0, 5).iter().find(|i| i % 2 == 1), Some(1));
        assert_eq!(span(0, 5).iter().find(|i| *i > 10), None);
    }

    #[test]
    fn test_enumerate_indices() {
        let seen: Vec<_> = span(0, 5).iter().enumerate().collect();
        assert_eq!(seen, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);

        let seen: Vec<_> = span(3, 0).iter().enumerate().collect();
        assert_eq!(seen, vec![(0, 3), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_len_and_endpoints() {
        assert_eq!(span(0, 5).len(), 5);
        assert_eq!(span(5, 0).len(), 5);
        assert_eq!(span(5, 0).iter().len(), 5);
        assert!(span(2, 2).is_empty());

        // Endpoints are kept as given, whichever direction the span runs
        let down = span(5, -1);
        assert_eq!(down.start(), 5);
        assert_eq!(down.end(), -1);
        assert_eq!(down.len(), 6);
    }

    #[test]
    fn test_random_with() {
        assert_eq!(span(1, 1).random_with(|| 0.99), 1);
        assert_eq!(span(0, 3).random_with(|| 0.0), 0);

        // Closed at the high end, unlike iteration
        assert_eq!(span(0, 3).random_with(|| 0.999), 3);

        // Direction does not matter for picking
        assert_eq!(span(3, 0).random_with(|| 0.0), 0);

        let picked = span(-2, 2).random_with(|| 0.5);
        assert!((-2..=2).contains(&picked));
    }
}
