//! Which unit kinds may serve which emergency categories.
//!
//! The table is asymmetric on purpose: a fire unit covering medical calls
//! says nothing about a medical unit covering fires.  Whatever the
//! configuration says is used verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Category, UnitKind};

// ── CategorySet ───────────────────────────────────────────────────────────────

/// A small set of [`Category`] values packed into one byte.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategorySet(u8);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    pub fn of(categories: &[Category]) -> Self {
        categories.iter().copied().collect()
    }

    #[inline]
    pub fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    #[inline]
    pub fn insert(&mut self, category: Category) {
        self.0 |= category.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = CategorySet::EMPTY;
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl From<Vec<Category>> for CategorySet {
    fn from(v: Vec<Category>) -> Self {
        v.into_iter().collect()
    }
}

impl From<CategorySet> for Vec<Category> {
    fn from(set: CategorySet) -> Self {
        set.iter().collect()
    }
}

// ── CapabilityTable ───────────────────────────────────────────────────────────

/// Lookup table `UnitKind → CategorySet`.
///
/// A kind missing from the table serves nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityTable {
    entries: BTreeMap<UnitKind, CategorySet>,
}

impl CapabilityTable {
    /// A table in which no kind serves anything.
    pub fn empty() -> Self {
        Self { entries: BTreeMap::new() }
    }

    /// Builder-style insert; replaces any previous entry for `kind`.
    pub fn with(mut self, kind: UnitKind, serves: &[Category]) -> Self {
        self.set(kind, CategorySet::of(serves));
        self
    }

    pub fn set(&mut self, kind: UnitKind, serves: CategorySet) {
        self.entries.insert(kind, serves);
    }

    /// Categories a unit of `kind` may respond to.
    #[inline]
    pub fn serves(&self, kind: UnitKind) -> CategorySet {
        self.entries.get(&kind).copied().unwrap_or(CategorySet::EMPTY)
    }

    /// The capability predicate.
    #[inline]
    pub fn can_serve(&self, kind: UnitKind, category: Category) -> bool {
        self.serves(kind).contains(category)
    }
}

impl Default for CapabilityTable {
    /// Fire units cover fire and medical, police cover police, and medical
    /// units cover medical and police.
    fn default() -> Self {
        CapabilityTable::empty()
            .with(UnitKind::Fire,    &[Category::Fire, Category::Medical])
            .with(UnitKind::Police,  &[Category::Police])
            .with(UnitKind::Medical, &[Category::Medical, Category::Police])
    }
}
