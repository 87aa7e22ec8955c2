use std::iter::FusedIterator;

use super::Weight;

/// Nonzero entries of one row, as `(col, value)`, ascending by col.
#[derive(Debug, Clone)]
pub struct RowEntries<'a, N> {
    inds: &'a [usize],
    vals: &'a [N],
    pos: usize,
}

impl<'a, N> RowEntries<'a, N>
where
    N: Weight,
{
    #[inline]
    pub(crate) fn new(inds: &'a [usize], vals: &'a [N]) -> Self {
        debug_assert_eq!(inds.len(), vals.len());
        Self { inds, vals, pos: 0 }
    }

    /// Column indices not yet yielded
    #[inline]
    pub fn indices(&self) -> &'a [usize] {
        &self.inds[self.pos..]
    }

    /// Values not yet yielded
    #[inline]
    pub fn values(&self) -> &'a [N] {
        &self.vals[self.pos..]
    }
}

impl<'a, N> Iterator for RowEntries<'a, N>
where
    N: Weight,
{
    type Item = (usize, N);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < self.inds.len() {
            let item = (self.inds[self.pos], self.vals[self.pos]);
            self.pos += 1;
            Some(item)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.inds.len() - self.pos;
        (rest, Some(rest))
    }
}

impl<'a, N: Weight> ExactSizeIterator for RowEntries<'a, N> {}
impl<'a, N: Weight> FusedIterator for RowEntries<'a, N> {}

/// Nonzero entries of one column, as `(row, value)`, ascending by row.
/// Values are read through their position in the row-major value array.
#[derive(Debug, Clone)]
pub struct ColumnEntries<'a, N> {
    rows: &'a [usize],
    val_pos: &'a [usize],
    values: &'a [N],
    pos: usize,
}

impl<'a, N> ColumnEntries<'a, N>
where
    N: Weight,
{
    #[inline]
    pub(crate) fn new(rows: &'a [usize], val_pos: &'a [usize], values: &'a [N]) -> Self {
        debug_assert_eq!(rows.len(), val_pos.len());
        Self { rows, val_pos, values, pos: 0 }
    }
}

impl<'a, N> Iterator for ColumnEntries<'a, N>
where
    N: Weight,
{
    type Item = (usize, N);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < self.rows.len() {
            let item = (self.rows[self.pos], self.values[self.val_pos[self.pos]]);
            self.pos += 1;
            Some(item)
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.rows.len() - self.pos;
        (rest, Some(rest))
    }
}

impl<'a, N: Weight> ExactSizeIterator for ColumnEntries<'a, N> {}
impl<'a, N: Weight> FusedIterator for ColumnEntries<'a, N> {}
