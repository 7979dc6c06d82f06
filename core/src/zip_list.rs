//! Non-empty lists with a focused element.

use crate::mappable::{Mappable, Transform};

/// A shift of the focused element by some number of positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftOperation {
    Left(usize),
    Right(usize),
}

/// An ordered, non-empty sequence with one focused element: `left ++ [center] ++ right`.
///
/// Used by segmented controls and carousels to represent the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipList<T> {
    left: Vec<T>,
    center: T,
    right: Vec<T>,
}

impl<T> ZipList<T> {
    pub fn new(left: Vec<T>, center: T, right: Vec<T>) -> ZipList<T> {
        ZipList {
            left,
            center,
            right,
        }
    }

    /// A list with a single, focused element.
    pub fn singleton(element: T) -> ZipList<T> {
        ZipList::new(Vec::new(), element, Vec::new())
    }

    /// Focuses the element at `focus`; returns None if the index is out of bounds.
    pub fn from_vec(mut items: Vec<T>, focus: usize) -> Option<ZipList<T>> {
        if focus >= items.len() {
            return None;
        }
        let right = items.split_off(focus + 1);
        let center = items.pop()?;
        Some(ZipList::new(items, center, right))
    }

    pub fn len(&self) -> usize {
        self.left.len() + 1 + self.right.len()
    }

    /// Index of the focused element.
    pub fn center_index(&self) -> usize {
        self.left.len()
    }

    pub fn center(&self) -> &T {
        &self.center
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.left
            .iter()
            .chain(Some(&self.center))
            .chain(self.right.iter())
    }

    pub fn into_vec(self) -> Vec<T> {
        let mut items = self.left;
        items.push(self.center);
        items.extend(self.right);
        items
    }

    /// Applies `f` to every element, keeping the focus.
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> ZipList<U> {
        let left = self.left.into_iter().map(&mut f).collect();
        let center = f(self.center);
        let right = self.right.into_iter().map(&mut f).collect();
        ZipList::new(left, center, right)
    }

    /// Moves the focus `count` positions towards the start.
    ///
    /// Returns None if that would move the focus out of the list.
    pub fn shift_left(self, count: usize) -> Option<ZipList<T>> {
        if count > self.left.len() {
            return None;
        }
        let focus = self.center_index() - count;
        ZipList::from_vec(self.into_vec(), focus)
    }

    /// Moves the focus `count` positions towards the end.
    ///
    /// Returns None if that would move the focus out of the list.
    pub fn shift_right(self, count: usize) -> Option<ZipList<T>> {
        if count > self.right.len() {
            return None;
        }
        let focus = self.center_index() + count;
        ZipList::from_vec(self.into_vec(), focus)
    }

    pub fn execute(self, operation: ShiftOperation) -> Option<ZipList<T>> {
        match operation {
            ShiftOperation::Left(count) => self.shift_left(count),
            ShiftOperation::Right(count) => self.shift_right(count),
        }
    }
}

impl<M: 'static, T: Mappable<M>> Mappable<M> for ZipList<T> {
    type Mapped<N: 'static> = ZipList<T::Mapped<N>>;

    fn map_with<N: 'static>(self, transform: &Transform<M, N>) -> ZipList<T::Mapped<N>> {
        ZipList::map(self, |element| element.map_with(transform))
    }
}

#[test]
fn test_zip_list_from_vec() {
    let list = ZipList::from_vec(vec!['a', 'b', 'c', 'd'], 2).unwrap();
    assert_eq!(list.center(), &'c');
    assert_eq!(list.center_index(), 2);
    assert_eq!(list.len(), 4);
    assert_eq!(list.iter().collect::<String>(), "abcd");
    assert!(ZipList::from_vec(vec!['a'], 1).is_none());
    assert!(ZipList::<char>::from_vec(Vec::new(), 0).is_none(), "lists are never empty");
}

#[test]
fn test_zip_list_shift() {
    let list = ZipList::from_vec(vec![1, 2, 3, 4, 5], 2).unwrap();

    let left = list.clone().shift_left(2).expect("can shift to the first element");
    assert_eq!(left.center(), &1);
    assert_eq!(left.clone().into_vec(), vec![1, 2, 3, 4, 5], "shifting keeps the order");

    let right = list.clone().shift_right(1).unwrap();
    assert_eq!(right.center(), &4);

    assert_eq!(list.clone().shift_left(3), None, "shifting past the start is a no-op");
    assert_eq!(list.clone().shift_right(3), None, "shifting past the end is a no-op");
    assert_eq!(list.clone().shift_left(0).as_ref(), Some(&list));
    assert_eq!(
        list.clone().execute(ShiftOperation::Right(2)).map(|l| *l.center()),
        Some(5)
    );
}
