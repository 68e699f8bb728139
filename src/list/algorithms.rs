use crate::list::{List, Node};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ptr::NonNull;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend(other.iter().cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for value in self {
            value.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let list = List::from_iter([0, 1, 2]);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sort the list in ascending order by the element type's `<` relation.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*²) time and *O*(1) memory.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm compares and swaps values over every position
    /// pair, selection-sort fashion, walking the node chain directly. The
    /// final order among equal elements is whatever the pairwise swapping
    /// produces: this sort is **not** stable.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        selection_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// The comparator must define a total ordering over the elements;
    /// otherwise the resulting order is unspecified. For example, while
    /// [`f64`] doesn't implement [`Ord`] because `NaN != NaN`, `partial_cmp`
    /// works as a sort function for slices known to be NaN-free:
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut floats = List::from([5f64, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(Vec::from_iter(floats), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*²) time and *O*(1) memory,
    /// like [`List::sort`], and is equally unstable.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut v = List::from([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(Vec::from_iter(&v), vec![&1, &2, &3, &4, &5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(v), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        selection_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sort the list with a key extraction function.
    ///
    /// The key function is re-evaluated on every comparison, so keep it
    /// cheap.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*m* \* *n*²) time and *O*(1)
    /// memory, where the key function is *O*(*m*). It is equally unstable
    /// as [`List::sort`].
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut v = List::from([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(Vec::from_iter(v), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        selection_sort(self, |a, b| f(a).lt(&f(b)));
    }

    /// Reverse the order of the elements in place.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Current Implementation
    ///
    /// Two node pointers walk inward from both ends, swapping values at
    /// mirrored positions, until they meet or cross. The nodes themselves
    /// stay where they are, so cursors and iterators see the same node
    /// identities in the new order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([1, 2, 3, 4, 5]);
    ///
    /// list.reverse();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if self.len() < 2 {
            return;
        }
        let mut front = self.front_node();
        let mut back = self.back_node();
        // SAFETY: the list has at least two elements, so `front` and `back`
        // are distinct real nodes, and the walk keeps both inside the
        // element range.
        unsafe {
            while front != back {
                swap_values(front, back);
                let next = front.as_ref().next;
                if next == back {
                    break;
                }
                front = next;
                back = back.as_ref().prev;
            }
        }
    }
}

/// Compare-and-swap values over every position pair `(i, j)` with `i < j`,
/// so that after the pass over `i` the smallest remaining value sits at `i`.
fn selection_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.len() < 2 {
        return;
    }
    let end = list.sentinel_node();
    // SAFETY: `front_node()..end` walks real nodes only, and `i != j` holds
    // throughout, so the value swaps never alias.
    unsafe {
        let mut i = list.front_node();
        while i != end {
            let mut j = i.as_ref().next;
            while j != end {
                if less(&j.as_ref().value, &i.as_ref().value) {
                    swap_values(i, j);
                }
                j = j.as_ref().next;
            }
            i = i.as_ref().next;
        }
    }
}

/// Swap the values of two distinct nodes, leaving the linkage untouched.
///
/// # Safety
///
/// `a` and `b` must be distinct real nodes.
unsafe fn swap_values<T>(a: NonNull<Node<T>>, b: NonNull<Node<T>>) {
    debug_assert_ne!(a, b);
    std::ptr::swap(&mut (*a.as_ptr()).value, &mut (*b.as_ptr()).value);
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    #[test]
    fn sort_orders_ascending() {
        let mut list = List::from_iter([5, 2, 8, 1, 9, 3, 7, 4, 6, 0]);
        list.sort();
        assert_eq!(list, List::from_iter(0..10));

        // Duplicates are kept, in some order.
        let mut list = List::from_iter([3, 1, 3, 2, 1]);
        list.sort();
        assert_eq!(Vec::from_iter(list), vec![1, 1, 2, 3, 3]);
    }

    #[test]
    fn sort_degenerate_inputs_are_noops() {
        let mut empty = List::<i32>::new();
        empty.sort();
        assert!(empty.is_empty());

        let mut single = List::from_iter([7]);
        single.sort();
        assert_eq!(Vec::from_iter(single), vec![7]);

        let mut sorted = List::from_iter(0..5);
        sorted.sort();
        assert_eq!(sorted, List::from_iter(0..5));
    }

    #[test]
    fn sort_by_and_by_key() {
        let mut list = List::from_iter([1, 4, 2, 3]);
        list.sort_by(|a, b| b.cmp(a));
        assert_eq!(Vec::from_iter(&list), vec![&4, &3, &2, &1]);

        let mut list = List::from_iter(["ccc", "a", "bb"]);
        list.sort_by_key(|s| s.len());
        assert_eq!(Vec::from_iter(list), vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn reverse_mirrors_the_sequence() {
        let mut list = List::from_iter([1, 2, 3, 4, 5]);
        list.reverse();
        assert_eq!(Vec::from_iter(&list), vec![&5, &4, &3, &2, &1]);
        assert_eq!(list.len(), 5);

        let mut even = List::from_iter([1, 2, 3, 4]);
        even.reverse();
        assert_eq!(Vec::from_iter(even), vec![4, 3, 2, 1]);
    }

    #[test]
    fn reverse_twice_restores_any_list() {
        for n in 0..7 {
            let original = List::from_iter(0..n);
            let mut list = original.clone();
            list.reverse();
            list.reverse();
            assert_eq!(list, original);
        }
    }

    #[test]
    fn reverse_then_sort_round_trip() {
        let mut list = List::from_iter([1, 2, 3, 4, 5]);

        list.reverse();
        assert_eq!(Vec::from_iter(&list), vec![&5, &4, &3, &2, &1]);
        assert_eq!(list.len(), 5);

        list.sort();
        assert_eq!(Vec::from_iter(&list), vec![&1, &2, &3, &4, &5]);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn clone_is_independent_storage() {
        let original = List::from_iter([1, 2, 3]);
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.push_front(0);
        *copy.back_mut().unwrap() = 9;
        assert_eq!(Vec::from_iter(&original), vec![&1, &2, &3]);

        let mut target = List::from_iter(0..100);
        target.clone_from(&original);
        assert_eq!(target, original);
    }

    #[test]
    fn comparisons_and_hash_follow_the_sequence() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 4]);
        assert!(a < b);
        assert_ne!(a, b);
        assert!(a.contains(&2));
        assert!(!a.contains(&4));

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }
        assert_eq!(hash_of(&a), hash_of(&a.clone()));
        assert_ne!(hash_of(&a), hash_of(&b));
    }
}
