//! Cell snapshot storage
//!
//! Cells are keyed by their address text exactly as the grid names them ("A1", "B12").
//! Only occupied cells are stored.

use ahash::AHashMap;
use std::collections::hash_map::Entry;

use super::{Cell, CellAddress, CellRange, CellRangeIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Address-keyed map of the cells a formula is evaluated against
///
/// Map iteration order is unspecified; use [`CellSnapshot::cells_in`] or
/// [`CellSnapshot::iter_sorted`] when order matters.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CellSnapshot {
    cells: AHashMap<String, Cell>,
}

impl CellSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell by its address text
    pub fn get(&self, address: &str) -> Option<&Cell> {
        self.cells.get(address)
    }

    /// Get a cell by coordinates
    pub fn get_at(&self, address: CellAddress) -> Option<&Cell> {
        self.cells.get(&address.to_a1_string())
    }

    /// Get a mutable cell by its address text
    pub fn get_mut(&mut self, address: &str) -> Option<&mut Cell> {
        self.cells.get_mut(address)
    }

    /// Insert or overwrite a cell, returning the previous one
    pub fn insert<S: Into<String>>(&mut self, address: S, cell: Cell) -> Option<Cell> {
        self.cells.insert(address.into(), cell)
    }

    /// Insert or overwrite a cell, returning the stored cell
    pub fn set<S: Into<String>>(&mut self, address: S, cell: Cell) -> &mut Cell {
        match self.cells.entry(address.into()) {
            Entry::Occupied(mut entry) => {
                entry.insert(cell);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(cell),
        }
    }

    /// Get a cell, inserting the result of `default` when the address is empty
    pub fn get_or_insert_with<S, F>(&mut self, address: S, default: F) -> &mut Cell
    where
        S: Into<String>,
        F: FnOnce() -> Cell,
    {
        self.cells.entry(address.into()).or_insert_with(default)
    }

    /// Remove a cell
    pub fn remove(&mut self, address: &str) -> Option<Cell> {
        self.cells.remove(address)
    }

    /// Check if an address is occupied
    pub fn contains(&self, address: &str) -> bool {
        self.cells.contains_key(address)
    }

    /// Get the number of stored cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the snapshot holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all cells in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over cells with a valid address, rows outer and columns inner
    ///
    /// Keys that do not parse as an address are skipped.
    pub fn iter_sorted(&self) -> impl Iterator<Item = (CellAddress, &Cell)> {
        let mut entries: Vec<_> = self
            .cells
            .iter()
            .filter_map(|(k, v)| CellAddress::parse(k).ok().map(|addr| (addr, v)))
            .collect();
        entries.sort_by_key(|(addr, _)| (addr.row, addr.col));
        entries.into_iter()
    }

    /// Enumerate the existing cells inside a range in row-major order
    ///
    /// Absent cells are skipped. A range with reversed bounds yields nothing. Ranges larger
    /// than the snapshot are answered from the stored cells instead of walking every
    /// coordinate, so the cost is bounded by the number of occupied cells.
    pub fn cells_in(&self, range: &CellRange) -> CellsInRange<'_> {
        if range.area() <= self.len() as u64 {
            return CellsInRange {
                walk: Walk::Grid {
                    snapshot: self,
                    addresses: range.cells(),
                },
            };
        }

        let mut matched: Vec<_> = self
            .cells
            .iter()
            .filter_map(|(key, cell)| {
                let addr = CellAddress::parse(key).ok()?;
                // Only keys a coordinate lookup would find
                (range.contains(&addr) && addr.to_a1_string() == *key).then_some((addr, cell))
            })
            .collect();
        matched.sort_by_key(|(addr, _)| (addr.row, addr.col));

        CellsInRange {
            walk: Walk::Matched(matched.into_iter()),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Cell)> for CellSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, Cell)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Iterator over the occupied cells of a range
pub struct CellsInRange<'a> {
    walk: Walk<'a>,
}

enum Walk<'a> {
    /// Look up every coordinate of the range
    Grid {
        snapshot: &'a CellSnapshot,
        addresses: CellRangeIterator,
    },
    /// Cells already picked from the snapshot, sorted row-major
    Matched(std::vec::IntoIter<(CellAddress, &'a Cell)>),
}

impl<'a> Iterator for CellsInRange<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.walk {
            Walk::Grid {
                snapshot,
                addresses,
            } => {
                let snapshot = *snapshot;
                addresses.find_map(|addr| snapshot.get_at(addr))
            }
            Walk::Matched(cells) => cells.next().map(|(_, cell)| cell),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.walk {
            Walk::Grid { addresses, .. } => (0, addresses.size_hint().1),
            Walk::Matched(cells) => cells.size_hint(),
        }
    }
}
