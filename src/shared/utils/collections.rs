use crate::domain::traits::DuplicateOf;

/// Pairwise duplicate scan over a collection.
///
/// O(n²), which is fine here: the collections this runs over are the
/// canteens of one school and the dishes of one menu. Every duplicate check
/// in the crate goes through this function so the definition of "duplicate"
/// stays with the entity's [`DuplicateOf`] impl.
pub fn has_duplicates<T: DuplicateOf>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .any(|(i, a)| items.iter().skip(i + 1).any(|b| a.duplicate_of(b)))
}
