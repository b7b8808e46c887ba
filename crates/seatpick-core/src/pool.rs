//! Shuffle-and-draw sampling without replacement.

use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::{Error, Result};

/// A pool of items drawn one at a time with no repeats within a pass.
///
/// The pool holds a random permutation and a cursor. Drawing returns the item
/// at the cursor and advances it; when the cursor reaches the end, the next
/// draw reshuffles the same full set in place and starts a fresh pass. This
/// pays the shuffle cost only at exhaustion, so draws are O(1) amortized
/// while each pass covers the whole set exactly once.
#[derive(Debug, Clone)]
pub struct DrawPool<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Default for DrawPool<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: 0,
        }
    }
}

impl<T: Clone> DrawPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the working set with a fresh random permutation of `items`
    /// and reset the cursor. Must be called whenever the source collection
    /// changes (seat enabled-set, or the name list).
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items = items.into_iter().collect();
        self.items.shuffle(&mut thread_rng());
        self.index = 0;
    }

    /// Draw the next item, reshuffling in place first if the current pass is
    /// exhausted. Fails only when the pool holds nothing at all.
    pub fn draw(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyPool);
        }
        if self.index >= self.items.len() {
            self.items.shuffle(&mut thread_rng());
            self.index = 0;
        }
        let item = self.items[self.index].clone();
        self.index += 1;
        Ok(item)
    }

    /// Items left in the current pass. Resets to the full count right after
    /// a reshuffle; never negative.
    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
