//! Doubling dynamic array.

use crate::error::CollectionError;

/// A growable array backed by a doubling boxed slice.
///
/// Appends are amortized O(1); positional insert and removal are O(n)
/// because subsequent elements are shifted. Capacity never shrinks.
#[derive(Debug)]
pub struct DynArray<T> {
    items: Box<[Option<T>]>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array with capacity for one element.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an empty array with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: make_slots(capacity.max(1)),
            len: 0,
        }
    }

    /// Number of elements stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity of the backing store.
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Get the element at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.items[index].as_ref()
        } else {
            None
        }
    }

    /// Get a mutable reference to the element at `index`, if in range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            self.items[index].as_mut()
        } else {
            None
        }
    }

    /// Append a value to the end of the array.
    pub fn push(&mut self, value: T) {
        if self.len == self.items.len() {
            self.resize(self.items.len() * 2);
        }
        self.items[self.len] = Some(value);
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting subsequent values rightward.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), CollectionError> {
        if index > self.len {
            return Err(CollectionError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if self.len == self.items.len() {
            self.resize(self.items.len() * 2);
        }
        for j in (index..self.len).rev() {
            self.items[j + 1] = self.items[j].take();
        }
        self.items[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting subsequent
    /// values leftward.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        if index >= self.len {
            return Err(CollectionError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let removed = self.items[index].take();
        for j in index..self.len - 1 {
            self.items[j] = self.items[j + 1].take();
        }
        self.len -= 1;
        // take() guarantees every slot below len is occupied
        Ok(removed.unwrap())
    }

    /// Iterate over the stored elements in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items[..self.len].iter().filter_map(Option::as_ref)
    }

    /// Grow the backing store to `capacity`, moving elements over.
    fn resize(&mut self, capacity: usize) {
        let mut grown = make_slots(capacity);
        for (slot, item) in grown.iter_mut().zip(self.items.iter_mut()) {
            *slot = item.take();
        }
        self.items = grown;
    }
}

impl<T: PartialEq> DynArray<T> {
    /// Remove the first occurrence of `value`, shifting subsequent
    /// values leftward.
    pub fn remove_value(&mut self, value: &T) -> Result<(), CollectionError> {
        for k in 0..self.len {
            if self.items[k].as_ref() == Some(value) {
                self.remove_at(k)?;
                return Ok(());
            }
        }
        Err(CollectionError::NotFound)
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Box<dyn Iterator<Item = &'a T> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

fn make_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut arr = DynArray::new();
        assert!(arr.is_empty());

        arr.push(10);
        arr.push(20);
        arr.push(30);

        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get(0), Some(&10));
        assert_eq!(arr.get(2), Some(&30));
        assert_eq!(arr.get(3), None);
    }

    #[test]
    fn test_doubling_growth() {
        let mut arr = DynArray::with_capacity(1);
        for i in 0..100 {
            arr.push(i);
        }
        assert_eq!(arr.len(), 100);
        assert_eq!(arr.capacity(), 128);
        assert_eq!(arr.get(99), Some(&99));
    }

    #[test]
    fn test_insert_shifts_rightward() {
        let mut arr = DynArray::new();
        arr.push('a');
        arr.push('c');
        arr.insert(1, 'b').unwrap();

        let collected: Vec<_> = arr.iter().copied().collect();
        assert_eq!(collected, vec!['a', 'b', 'c']);

        assert_eq!(
            arr.insert(7, 'x'),
            Err(CollectionError::IndexOutOfBounds { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_remove_value() {
        let mut arr = DynArray::new();
        arr.push(1);
        arr.push(2);
        arr.push(2);
        arr.push(3);

        arr.remove_value(&2).unwrap();
        let collected: Vec<_> = arr.iter().copied().collect();
        assert_eq!(collected, vec![1, 2, 3]);

        assert_eq!(arr.remove_value(&9), Err(CollectionError::NotFound));
    }

    #[test]
    fn test_remove_at() {
        let mut arr = DynArray::new();
        arr.push("x");
        arr.push("y");
        arr.push("z");

        assert_eq!(arr.remove_at(1), Ok("y"));
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.get(1), Some(&"z"));
        assert_eq!(
            arr.remove_at(2),
            Err(CollectionError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }
}
