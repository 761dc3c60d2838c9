//! Slice helpers
//!
//! Predicate-driven splitting and replacement that return fresh vectors and
//! leave the input alone. Replacement helpers hand back an unchanged copy
//! when nothing matches.

/// Partition a slice in one pass. Elements satisfying the predicate land in
/// the first vector, the rest in the second; the predicate also sees the
/// element's index.
pub fn split<T: Clone>(
    items: &[T],
    mut predicate: impl FnMut(&T, usize) -> bool,
) -> (Vec<T>, Vec<T>) {
    let mut matched = Vec::new();
    let mut rest = Vec::new();

    for (index, item) in items.iter().enumerate() {
        if predicate(item, index) {
            matched.push(item.clone());
        } else {
            rest.push(item.clone());
        }
    }

    (matched, rest)
}

/// Copy of `items` with the element at `index` replaced. Out-of-range
/// indices return the input unchanged.
pub fn replace_item_at<T: Clone>(items: &[T], index: usize, item: T) -> Vec<T> {
    let mut next = items.to_vec();
    if index < next.len() {
        next[index] = item;
    }
    next
}

/// Copy of `items` with the first element satisfying `predicate` replaced.
pub fn replace_first<T: Clone>(items: &[T], predicate: impl FnMut(&T) -> bool, item: T) -> Vec<T> {
    match items.iter().position(predicate) {
        Some(index) => replace_item_at(items, index, item),
        None => items.to_vec(),
    }
}

/// Copy of `items` with every element satisfying `predicate` replaced. The
/// predicate also sees the element's index.
pub fn replace_all<T: Clone>(
    items: &[T],
    mut predicate: impl FnMut(&T, usize) -> bool,
    replacement: T,
) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if predicate(item, index) {
                replacement.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Copy of `items` with the first element equal to `target` replaced.
pub fn replace_item<T: Clone + PartialEq>(items: &[T], target: &T, replacement: T) -> Vec<T> {
    replace_first(items, |item| item == target, replacement)
}

/// `replace_item` with a caller-supplied equality.
pub fn replace_item_by<T: Clone>(
    items: &[T],
    target: &T,
    replacement: T,
    mut eq: impl FnMut(&T, &T) -> bool,
) -> Vec<T> {
    replace_first(items, |item| eq(item, target), replacement)
}

/// Element-wise equality of two slices.
pub fn array_equals<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    array_equals_by(a, b, |x, y| x == y)
}

/// `array_equals` with a caller-supplied equality.
pub fn array_equals_by<T>(a: &[T], b: &[T], mut eq: impl FnMut(&T, &T) -> bool) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| eq(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_empty() {
        let (matched, rest) = split(&[] as &[i32], |_, _| true);
        assert!(matched.is_empty());
        assert!(rest.is_empty());
    }

    #[test]
    fn test_split_all_one_side() {
        let (matched, rest) = split(&[1, 2, 3], |item, _| *item < 5);
        assert_eq!(matched, vec![1, 2, 3]);
        assert!(rest.is_empty());

        let (matched, rest) = split(&[1, 2, 3], |item, _| *item > 3);
        assert!(matched.is_empty());
        assert_eq!(rest, vec![1, 2, 3]);
    }

    #[test]
    fn test_split_mixed() {
        let items = [7, 1, 2, 3, 4, 5, 6, 3, 9, 6];
        let (even, odd) = split(&items, |item, _| item % 2 == 0);
        assert_eq!(even, vec![2, 4, 6, 6]);
        assert_eq!(odd, vec![7, 1, 3, 5, 3, 9]);
    }

    #[test]
    fn test_split_strings_by_length() {
        let items = ["apple".to_string(), "fig".to_string(), "lemon".to_string()];
        let (five, other) = split(&items, |item, _| item.len() == 5);
        assert_eq!(five, vec!["apple".to_string(), "lemon".to_string()]);
        assert_eq!(other, vec!["fig".to_string()]);
    }

    #[test]
    fn test_split_by_index() {
        let (even_index, odd_index) = split(&[10, 20, 30], |_, index| index % 2 == 0);
        assert_eq!(even_index, vec![10, 30]);
        assert_eq!(odd_index, vec![20]);
    }

    #[test]
    fn test_replace_item_at() {
        assert_eq!(replace_item_at(&[1, 2, 3], 1, 9), vec![1, 9, 3]);
        assert_eq!(replace_item_at(&[1, 2, 3], 0, 9), vec![9, 2, 3]);

        // Out of range leaves the contents alone
        assert_eq!(replace_item_at(&[1, 2, 3], 3, 9), vec![1, 2, 3]);
        assert_eq!(replace_item_at(&[] as &[i32], 0, 9), Vec::<i32>::new());
    }

    #[test]
    fn test_replace_first() {
        assert_eq!(replace_first(&[1, 2, 3], |item| *item > 1, 9), vec![1, 9, 3]);
        assert_eq!(replace_first(&[1, 2, 3], |item| *item > 7, 9), vec![1, 2, 3]);

        let words = ["foo".to_string(), "fig".to_string(), "bar".to_string()];
        assert_eq!(
            replace_first(&words, |item| item.starts_with('f'), "new".to_string()),
            vec!["new".to_string(), "fig".to_string(), "bar".to_string()]
        );
    }

    #[test]
    fn test_replace_all() {
        assert_eq!(
            replace_all(&[1, 2, 3], |item, _| *item < 3, -1),
            vec![-1, -1, 3]
        );
        assert_eq!(
            replace_all(&[1, 2, 3], |_, _| true, -1),
            vec![-1, -1, -1]
        );
        assert_eq!(replace_all(&[1, 2, 3], |_, _| false, -1), vec![1, 2, 3]);

        // Index-aware predicate
        assert_eq!(
            replace_all(&[1, 2, 3], |item, index| *item < 3 && index > 0, -1),
            vec![1, -1, 3]
        );
    }

    #[test]
    fn test_replace_item() {
        assert_eq!(replace_item(&[1, 2, 3], &2, 6), vec![1, 6, 3]);
        assert_eq!(replace_item(&[1, 2, 3], &8, 6), vec![1, 2, 3]);

        // Only the first match is replaced
        assert_eq!(
            replace_item(&[true, true, true], &true, false),
            vec![false, true, true]
        );
    }

    #[test]
    fn test_replace_item_by() {
        let words = ["Apple".to_string(), "Fig".to_string()];
        let replaced = replace_item_by(&words, &"fig".to_string(), "Pear".to_string(), |a, b| {
            a.eq_ignore_ascii_case(b)
        });
        assert_eq!(replaced, vec!["Apple".to_string(), "Pear".to_string()]);
    }

    #[test]
    fn test_array_equals() {
        assert!(array_equals(&[1, 2, 3], &[1, 2, 3]));
        assert!(!array_equals(&[1, 2, 3], &[1, 2]));
        assert!(!array_equals(&[1, 2, 3], &[1, 2, 4]));
        assert!(array_equals(&[] as &[i32], &[]));
    }

    #[test]
    fn test_array_equals_by() {
        let a = ["Foo".to_string(), "BAR".to_string()];
        let b = ["foo".to_string(), "bar".to_string()];
        assert!(array_equals_by(&a, &b, |x, y| x.eq_ignore_ascii_case(y)));
        assert!(!array_equals(&a, &b));
    }
}
