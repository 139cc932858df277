//! Bunch-Crossing Indexed Collections
//!
//! ## Overview
//!
//! The trigger reads out a window of bunch crossings around the triggered one,
//! typically `[-2, 2]`. Every object collection is therefore grouped by
//! crossing, and every consumer needs to know the declared window even when
//! some crossings hold nothing.
//!
//! [`BxCollection`] keeps one ordered list per crossing:
//!
//! ```text
//! BxCollection<T>, range [-1, 1]
//! ┌──────┬──────────────────┐
//! │ bx-1 │                  │  ← empty crossing still part of the range
//! │ bx 0 │ t0  t1  t2       │
//! │ bx+1 │ t3               │
//! └──────┴──────────────────┘
//! ```
//!
//! ## Invariants
//!
//! - `first_bx <= last_bx`
//! - items pushed to the same crossing keep their push order
//! - iteration visits crossings in increasing order
//! - a push outside the declared range is an error, never a silent resize

use alloc::vec::Vec;

use crate::errors::{ConversionError, ConversionResult};

/// Ordered per-crossing storage with a declared `[first, last]` window
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBxCollection<T>"))]
pub struct BxCollection<T> {
    first_bx: i32,
    last_bx: i32,
    crossings: Vec<Vec<T>>,
}

// Decoded form, checked before it becomes a collection
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBxCollection<T> {
    first_bx: i32,
    last_bx: i32,
    crossings: Vec<Vec<T>>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawBxCollection<T>> for BxCollection<T> {
    type Error = ConversionError;

    fn try_from(raw: RawBxCollection<T>) -> ConversionResult<Self> {
        let width = raw.last_bx as i64 - raw.first_bx as i64 + 1;
        if width < 1 || raw.crossings.len() as i64 != width {
            return Err(ConversionError::InvalidBxRange {
                first: raw.first_bx,
                last: raw.last_bx,
            });
        }
        Ok(Self {
            first_bx: raw.first_bx,
            last_bx: raw.last_bx,
            crossings: raw.crossings,
        })
    }
}

impl<T> Default for BxCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BxCollection<T> {
    /// Empty collection covering the single crossing 0
    pub fn new() -> Self {
        let mut crossings = Vec::with_capacity(1);
        crossings.push(Vec::new());
        Self {
            first_bx: 0,
            last_bx: 0,
            crossings,
        }
    }

    /// Empty collection covering `[first_bx, last_bx]`
    pub fn with_range(first_bx: i32, last_bx: i32) -> ConversionResult<Self> {
        let mut collection = Self::new();
        collection.set_bx_range(first_bx, last_bx)?;
        Ok(collection)
    }

    /// Redeclare the crossing window.
    ///
    /// Contents of crossings that stay inside the new window are kept; the
    /// rest are dropped.
    pub fn set_bx_range(&mut self, first_bx: i32, last_bx: i32) -> ConversionResult<()> {
        if first_bx > last_bx {
            return Err(ConversionError::InvalidBxRange {
                first: first_bx,
                last: last_bx,
            });
        }

        let width = (last_bx as i64 - first_bx as i64 + 1) as usize;
        let mut crossings: Vec<Vec<T>> = Vec::with_capacity(width);
        crossings.resize_with(width, Vec::new);

        let old_first = self.first_bx;
        for (offset, items) in core::mem::take(&mut self.crossings).into_iter().enumerate() {
            let bx = old_first as i64 + offset as i64;
            if bx >= first_bx as i64 && bx <= last_bx as i64 {
                crossings[(bx - first_bx as i64) as usize] = items;
            }
        }

        self.first_bx = first_bx;
        self.last_bx = last_bx;
        self.crossings = crossings;
        Ok(())
    }

    /// First crossing of the window
    pub const fn first_bx(&self) -> i32 {
        self.first_bx
    }

    /// Last crossing of the window
    pub const fn last_bx(&self) -> i32 {
        self.last_bx
    }

    /// Declared window as `(first, last)`
    pub const fn bx_range(&self) -> (i32, i32) {
        (self.first_bx, self.last_bx)
    }

    /// Whether `bx` lies inside the declared window
    pub const fn contains_bx(&self, bx: i32) -> bool {
        bx >= self.first_bx && bx <= self.last_bx
    }

    /// Append an item to crossing `bx`
    pub fn push(&mut self, bx: i32, item: T) -> ConversionResult<()> {
        let slot = self.slot(bx).ok_or(ConversionError::InvalidBxRange {
            first: bx,
            last: bx,
        })?;
        self.crossings[slot].push(item);
        Ok(())
    }

    /// Items of crossing `bx`, empty outside the window
    pub fn get(&self, bx: i32) -> &[T] {
        match self.slot(bx) {
            Some(slot) => &self.crossings[slot],
            None => &[],
        }
    }

    /// Number of items in crossing `bx`
    pub fn size(&self, bx: i32) -> usize {
        self.get(bx).len()
    }

    /// Total number of items over all crossings
    pub fn len(&self) -> usize {
        self.crossings.iter().map(Vec::len).sum()
    }

    /// Whether no crossing holds an item
    pub fn is_empty(&self) -> bool {
        self.crossings.iter().all(Vec::is_empty)
    }

    /// Crossing indices of the window, in increasing order
    pub fn crossings(&self) -> impl Iterator<Item = i32> {
        self.first_bx..=self.last_bx
    }

    /// All items tagged with their crossing, crossings in increasing order
    pub fn iter(&self) -> impl Iterator<Item = (i32, &T)> + '_ {
        self.crossings
            .iter()
            .zip(self.first_bx..=self.last_bx)
            .flat_map(|(items, bx)| items.iter().map(move |item| (bx, item)))
    }

    fn slot(&self, bx: i32) -> Option<usize> {
        if self.contains_bx(bx) {
            Some((bx as i64 - self.first_bx as i64) as usize)
        } else {
            None
        }
    }
}
