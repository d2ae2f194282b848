//! Splits an already ranked result slice into fixed-size pages.

use std::num::NonZeroUsize;
use std::slice::Chunks;

/// Contiguous pages over a borrowed slice. Every page holds `page_size`
/// items except possibly the last one. Iterating does not consume it.
#[derive(Debug, Clone, Copy)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    page_size: NonZeroUsize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], page_size: NonZeroUsize) -> Self {
        Self { items, page_size }
    }

    pub fn pages(&self) -> Chunks<'a, T> {
        self.items.chunks(self.page_size.get())
    }

    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size.get())
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }
}

impl<'a, 'p, T> IntoIterator for &'p Paginator<'a, T> {
    type Item = &'a [T];
    type IntoIter = Chunks<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

pub fn paginate<T>(items: &[T], page_size: NonZeroUsize) -> Paginator<'_, T> {
    Paginator::new(items, page_size)
}
