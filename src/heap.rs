//! Binary min-heap with externally stored scores.
//!
//! [`PriorityQueue`] orders small `Copy` handles (node indices in practice) by a score it does not
//! own. Every operation that compares elements takes a scoring closure, so the scores can live in
//! a separate table that the caller updates between calls. After lowering the score of a queued
//! element the caller has to notify the queue through [`PriorityQueue::rescored`].

/// Binary min-heap over handles scored by a caller-supplied function.
///
/// Elements are identified by handle equality: two equal handles are the same entry. Ties between
/// equal scores are broken arbitrarily.
#[derive(Clone, Debug, Default)]
pub struct PriorityQueue<T> {
    /// Heap-ordered handles.
    ///
    /// This field stores the queued handles in the usual implicit binary tree layout: the minimum
    /// is at index 0 and the children of `n` are at `2n + 1` and `2n + 2`. No element scores lower
    /// than its parent.
    items: Vec<T>,
}

impl<T: Copy + PartialEq> PriorityQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the element is currently queued.
    ///
    /// This method scans the backing array, so it runs in linear time.
    #[must_use]
    pub fn contains(&self, item: T) -> bool {
        self.items.contains(&item)
    }

    /// Inserts an element.
    ///
    /// This method appends the element as the last leaf and moves it towards the root while it
    /// scores strictly lower than its parent. The element must not already be queued; pushing a
    /// handle twice leaves two entries that [`remove`](PriorityQueue::remove) and
    /// [`rescored`](PriorityQueue::rescored) cannot tell apart.
    pub fn push<S, F>(&mut self, item: T, score: F)
    where
        S: PartialOrd,
        F: Fn(T) -> S,
    {
        self.items.push(item);
        self.sift_up(self.items.len() - 1, &score);
    }

    /// Removes and returns the element with the lowest score.
    ///
    /// The last element takes the place of the root and sinks towards whichever child scores lower
    /// for as long as that child scores lower than it.
    pub fn pop_min<S, F>(&mut self, score: F) -> Option<T>
    where
        S: PartialOrd,
        F: Fn(T) -> S,
    {
        if self.items.is_empty() {
            return None;
        }

        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0, &score);
        }

        Some(min)
    }

    /// Removes an arbitrary element, returning whether it was queued.
    ///
    /// The last element fills the hole. It then rises if it scores lower than the removed element
    /// did and sinks otherwise.
    pub fn remove<S, F>(&mut self, item: T, score: F) -> bool
    where
        S: PartialOrd,
        F: Fn(T) -> S,
    {
        let Some(index) = self.position(item) else {
            return false;
        };

        let removed = self.items.swap_remove(index);
        if let Some(&replacement) = self.items.get(index) {
            if score(replacement) < score(removed) {
                self.sift_up(index, &score);
            } else {
                self.sift_down(index, &score);
            }
        }

        true
    }

    /// Restores heap order after the score of a queued element went down.
    ///
    /// This method locates the element with a linear scan and moves it towards the root while it
    /// scores strictly lower than its parent. A score increase is not repaired, so callers must
    /// only ever lower scores between calls.
    ///
    /// Returns `true` if the element was queued and `false` otherwise, in which case the queue is
    /// left untouched.
    pub fn rescored<S, F>(&mut self, item: T, score: F) -> bool
    where
        S: PartialOrd,
        F: Fn(T) -> S,
    {
        match self.position(item) {
            Some(index) => {
                self.sift_up(index, &score);
                true
            }
            None => false,
        }
    }

    /// Index of the element in the backing array.
    fn position(&self, item: T) -> Option<usize> {
        self.items.iter().position(|&queued| queued == item)
    }

    /// Moves the element at `index` towards the root while it scores strictly lower than its
    /// parent.
    #[expect(
        clippy::indexing_slicing,
        reason = "Both indices are below the length of the heap by construction."
    )]
    fn sift_up<S, F>(&mut self, mut index: usize, score: &F)
    where
        S: PartialOrd,
        F: Fn(T) -> S,
    {
        while index > 0 {
            let parent = (index - 1) / 2;
            if score(self.items[index]) < score(self.items[parent]) {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `index` towards the leaves, always swapping with the lower scoring
    /// child, while that child scores strictly lower than the element.
    #[expect(
        clippy::indexing_slicing,
        reason = "Every index is checked against the length of the heap before use."
    )]
    fn sift_down<S, F>(&mut self, mut index: usize, score: &F)
    where
        S: PartialOrd,
        F: Fn(T) -> S,
    {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut lowest = index;

            if left < len && score(self.items[left]) < score(self.items[lowest]) {
                lowest = left;
            }
            if right < len && score(self.items[right]) < score(self.items[lowest]) {
                lowest = right;
            }
            if lowest == index {
                break;
            }

            self.items.swap(index, lowest);
            index = lowest;
        }
    }
}
