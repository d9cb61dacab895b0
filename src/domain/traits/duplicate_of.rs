/// Identity-based duplicate detection inside an owning collection.
///
/// Entities define which of their fields act as identity signals. This is
/// deliberately looser than structural equality and is not required to be
/// transitive (a canteen collides on name *or* location), which is why it is
/// a separate trait rather than `PartialEq`.
pub trait DuplicateOf {
    fn duplicate_of(&self, other: &Self) -> bool;
}
