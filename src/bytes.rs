//! Byte-range views that can be bound like any other parameter.
//!
//! Neither view interprets its contents. [`ConstByteArrayParameter`] either
//! borrows caller-owned memory or keeps its own copy when the caller cannot
//! guarantee the buffer outlives the call. [`ByteArrayParameter`] points into
//! caller-owned mutable storage; copies of the view share that storage, which
//! is what lets a receiver write output through a catalog.

use std::borrow::Cow;
use std::cell::Cell;
use std::ops::Range;

/// Read-only view over bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstByteArrayParameter<'a> {
    data: Cow<'a, [u8]>,
}

impl<'a> ConstByteArrayParameter<'a> {
    /// Views `data`, or copies it when `deep_copy` is set.
    pub fn new(data: &'a [u8], deep_copy: bool) -> Self {
        let data = if deep_copy {
            Cow::Owned(data.to_vec())
        } else {
            Cow::Borrowed(data)
        };
        Self { data }
    }

    /// Views the UTF-8 bytes of `text`.
    pub fn from_text(text: &'a str, deep_copy: bool) -> Self {
        Self::new(text.as_bytes(), deep_copy)
    }

    /// Takes ownership of `data`.
    pub fn owned(data: Vec<u8>) -> Self {
        Self {
            data: Cow::Owned(data),
        }
    }

    /// Detaches the view from the caller's buffer, copying it if needed.
    pub fn into_owned(self) -> ConstByteArrayParameter<'static> {
        ConstByteArrayParameter {
            data: Cow::Owned(self.data.into_owned()),
        }
    }

    /// Returns `true` if the view holds its own copy.
    pub fn is_deep_copy(&self) -> bool {
        matches!(self.data, Cow::Owned(_))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Begin/end pointers of the viewed range.
    pub fn as_ptr_range(&self) -> Range<*const u8> {
        self.data.as_ptr_range()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for ConstByteArrayParameter<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<'a> From<&'a [u8]> for ConstByteArrayParameter<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data, false)
    }
}

impl From<Vec<u8>> for ConstByteArrayParameter<'_> {
    fn from(data: Vec<u8>) -> Self {
        Self::owned(data)
    }
}

/// Mutable view into caller-owned bytes.
///
/// The view is `Copy`; every copy writes into the same buffer. The buffer
/// stays mutably borrowed for `'a`, so the caller regains direct access once
/// every copy of the view is gone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteArrayParameter<'a> {
    data: &'a [Cell<u8>],
}

impl<'a> ByteArrayParameter<'a> {
    /// Views `data` for writing.
    pub fn new(data: &'a mut [u8]) -> Self {
        Self {
            data: Cell::from_mut(data).as_slice_of_cells(),
        }
    }

    /// Views the full contents of `block`.
    pub fn from_vec(block: &'a mut Vec<u8>) -> Self {
        Self::new(block.as_mut_slice())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads the byte at `index`.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.data.get(index).map(Cell::get)
    }

    /// Writes `byte` at `index`. Returns `false` if `index` is out of range.
    pub fn set(&self, index: usize, byte: u8) -> bool {
        match self.data.get(index) {
            Some(cell) => {
                cell.set(byte);
                true
            }
            None => false,
        }
    }

    /// Copies `src` into the front of the viewed range and returns the
    /// number of bytes written.
    pub fn copy_from_slice(&self, src: &[u8]) -> usize {
        let written = src.len().min(self.data.len());
        for (cell, byte) in self.data.iter().zip(&src[..written]) {
            cell.set(*byte);
        }
        written
    }

    /// Begin/end pointers of the viewed range.
    pub fn as_ptr_range(&self) -> Range<*const Cell<u8>> {
        self.data.as_ptr_range()
    }

    /// Returns an owned snapshot of the viewed bytes.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.iter().map(Cell::get).collect()
    }
}

impl PartialEq for ByteArrayParameter<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.data, other.data)
    }
}

impl Eq for ByteArrayParameter<'_> {}
