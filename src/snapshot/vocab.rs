use indexmap::{IndexMap, IndexSet};

use crate::error::{RecommendError, Result};

/// Term vocabulary
/// Bijective term <-> column index, column = insertion position.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

impl Vocabulary {
    /// Build from terms in column order
    ///
    /// # Errors
    /// * `DuplicateTerm` - the same term appears twice
    pub fn new<I, T>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Box<str>>,
    {
        let mut set = IndexSet::new();
        for term in terms {
            let term: Box<str> = term.into();
            if set.contains(&term) {
                return Err(RecommendError::DuplicateTerm(term.into_string()));
            }
            set.insert(term);
        }
        Ok(Self { terms: set })
    }

    /// Column index of `term`
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term at column `index`
    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|t| t.as_ref())
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in column order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_ref())
    }
}

/// Document titles in row order plus a title -> row lookup.
///
/// Titles may repeat. Lookup resolves to the first row carrying the title;
/// later rows with the same title stay reachable by index only.
#[derive(Debug, Clone, Default)]
pub struct TitleList {
    titles: Vec<Box<str>>,
    first_row: IndexMap<Box<str>, usize>,
}

impl TitleList {
    pub fn new<I, T>(titles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Box<str>>,
    {
        let titles: Vec<Box<str>> = titles.into_iter().map(Into::into).collect();
        let mut first_row = IndexMap::with_capacity(titles.len());
        for (row, title) in titles.iter().enumerate() {
            // 先勝ち
            first_row.entry(title.clone()).or_insert(row);
        }
        Self { titles, first_row }
    }

    /// First row whose title equals `title`
    #[inline]
    pub fn row_of(&self, title: &str) -> Option<usize> {
        self.first_row.get(title).copied()
    }

    /// Title of row `row`
    #[inline]
    pub fn title(&self, row: usize) -> Option<&str> {
        self.titles.get(row).map(|t| t.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Number of titles that occur more than once
    pub fn duplicate_count(&self) -> usize {
        self.titles.len() - self.first_row.len()
    }

    /// Titles in row order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.titles.iter().map(|t| t.as_ref())
    }
}
