//! Value-semantics operators for [`ForwardList`].
//!
//! Equality checks lengths before elements. Ordering is lexicographic and
//! stops at the end of the shorter list, so a strict prefix sorts first.

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use super::list::ForwardList;

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self {
            item.hash(state);
        }
    }
}

/// Exchanges the contents of `a` and `b` in O(1). Same as [`ForwardList::swap`].
pub fn swap<T>(a: &mut ForwardList<T>, b: &mut ForwardList<T>) {
    a.swap(b);
}
