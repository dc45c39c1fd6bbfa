use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Fixed-length byte payload.
///
/// The length is set at construction and never changes; the bytes
/// themselves are freely mutable. Indexing with `[]` panics out of range like
/// any slice, while [`Blob::get`] and [`Blob::set`] report
/// [`StoreError::IndexOutOfRange`] instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Blob {
    data: Box<[u8]>,
}

impl Blob {
    /// Create a zero-filled blob of exactly `size` bytes.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0u8; size].into_boxed_slice(),
        }
    }

    /// Create a blob holding the given bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            data: bytes.into().into_boxed_slice(),
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the blob holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the payload. The slice cannot grow or shrink.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data.into_vec()
    }

    /// Read the byte at `index`.
    pub fn get(&self, index: usize) -> StoreResult<u8> {
        self.data
            .get(index)
            .copied()
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }

    /// Overwrite the byte at `index`.
    pub fn set(&mut self, index: usize, byte: u8) -> StoreResult<()> {
        let len = self.data.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        *slot = byte;
        Ok(())
    }
}

impl Index<usize> for Blob {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.data[index]
    }
}

impl IndexMut<usize> for Blob {
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.data[index]
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for Blob {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for Blob {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zero_filled() {
        let blob = Blob::new(4);
        assert_eq!(blob.len(), 4);
        assert_eq!(blob.as_bytes(), &[0, 0, 0, 0]);
    }

    #[test]
    fn zero_length_blob() {
        let blob = Blob::new(0);
        assert!(blob.is_empty());
        assert!(matches!(
            blob.get(0),
            Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn index_read_write() {
        let mut blob = Blob::new(2);
        blob[0] = 1;
        blob[1] = 0xfe;
        assert_eq!(blob[0], 1);
        assert_eq!(blob[1], 0xfe);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let blob = Blob::new(1);
        let _ = blob[1];
    }

    #[test]
    fn checked_access() {
        let mut blob = Blob::new(3);
        blob.set(2, 9).unwrap();
        assert_eq!(blob.get(2).unwrap(), 9);

        let err = blob.set(3, 1).unwrap_err();
        assert_eq!(err, StoreError::IndexOutOfRange { index: 3, len: 3 });
        assert_eq!(blob.as_bytes(), &[0, 0, 9]);
    }

    #[test]
    fn mutable_view_keeps_length() {
        let mut blob = Blob::new(3);
        blob.as_bytes_mut().copy_from_slice(b"abc");
        assert_eq!(blob.len(), 3);
        assert_eq!(blob.into_bytes(), b"abc".to_vec());
    }

    #[test]
    fn clone_is_independent() {
        let mut original = Blob::from_bytes(vec![1, 2]);
        let copy = original.clone();
        original[0] = 7;
        assert_eq!(copy.as_bytes(), &[1, 2]);
    }

    #[test]
    fn conversions() {
        let a: Blob = vec![1u8, 2, 3].into();
        let b: Blob = (&[1u8, 2, 3][..]).into();
        assert_eq!(a, b);
        assert_eq!(a.as_ref(), &[1, 2, 3]);
    }
}
