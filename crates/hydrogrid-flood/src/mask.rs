//! Flood masks and their 1-bit packed wire representation.

use crate::{FloodError, Result};

/// A 2-D boolean field where `true` marks a flooded pixel.
///
/// Same dimensions as the elevation window it was computed against.
/// Immutable once propagation finishes; setting a pixel is idempotent and
/// pixels never transition back to unflooded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloodMask {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl FloodMask {
    /// An all-dry mask of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether a pixel is flooded. Out-of-bounds pixels read as dry.
    pub fn get(&self, col: i64, row: i64) -> bool {
        if col < 0 || row < 0 || col as usize >= self.width || row as usize >= self.height {
            return false;
        }
        self.cells[row as usize * self.width + col as usize]
    }

    /// Mark a pixel flooded. Must be in bounds.
    pub(crate) fn set(&mut self, col: i64, row: i64) {
        debug_assert!(col >= 0 && row >= 0);
        self.cells[row as usize * self.width + col as usize] = true;
    }

    /// Number of flooded pixels.
    pub fn flooded_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Pack into the 1-bit wire representation: MSB-first within each byte,
    /// each row padded to a whole byte.
    pub fn to_packed(&self) -> PackedMask {
        let stride = self.width.div_ceil(8);
        let mut bytes = vec![0u8; stride * self.height];
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[row * self.width + col] {
                    bytes[row * stride + col / 8] |= 0x80 >> (col % 8);
                }
            }
        }
        PackedMask {
            width: self.width,
            height: self.height,
            bytes,
        }
    }
}

/// Bit-packed raster form of a [`FloodMask`].
///
/// One bit per pixel, most-significant bit first within each byte, rows
/// padded to whole bytes. Bit-exact reproducible from the same mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedMask {
    width: usize,
    height: usize,
    bytes: Vec<u8>,
}

impl PackedMask {
    /// Reassemble a packed mask from its raw parts.
    pub fn from_bytes(width: usize, height: usize, bytes: Vec<u8>) -> Result<Self> {
        let expected = width.div_ceil(8) * height;
        if bytes.len() != expected {
            return Err(FloodError::PackedSizeMismatch {
                width,
                height,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bytes,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row, including padding.
    pub fn row_stride(&self) -> usize {
        self.width.div_ceil(8)
    }

    /// The packed bytes, row-major.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Expand back into a boolean mask.
    pub fn unpack(&self) -> FloodMask {
        let stride = self.row_stride();
        let mut mask = FloodMask::new(self.width, self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                let byte = self.bytes[row * stride + col / 8];
                if byte & (0x80 >> (col % 8)) != 0 {
                    mask.set(col as i64, row as i64);
                }
            }
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: usize, height: usize) -> FloodMask {
        let mut mask = FloodMask::new(width, height);
        for row in 0..height {
            for col in 0..width {
                if (row + col) % 2 == 0 {
                    mask.set(col as i64, row as i64);
                }
            }
        }
        mask
    }

    #[test]
    fn test_msb_first_layout() {
        let mut mask = FloodMask::new(10, 1);
        mask.set(0, 0);
        mask.set(9, 0);
        let packed = mask.to_packed();
        // Pixel 0 is the MSB of byte 0; pixel 9 is bit 6 of byte 1.
        assert_eq!(packed.bytes(), &[0b1000_0000, 0b0100_0000]);
    }

    #[test]
    fn test_rows_padded_to_whole_bytes() {
        let mask = FloodMask::new(10, 3);
        let packed = mask.to_packed();
        assert_eq!(packed.row_stride(), 2);
        assert_eq!(packed.bytes().len(), 6);
    }

    #[test]
    fn test_round_trip_width_divisible_by_8() {
        let mask = checkerboard(16, 4);
        assert_eq!(mask.to_packed().unpack(), mask);
    }

    #[test]
    fn test_round_trip_width_not_divisible_by_8() {
        let mask = checkerboard(13, 5);
        assert_eq!(mask.to_packed().unpack(), mask);
    }

    #[test]
    fn test_from_bytes_validates_length() {
        assert!(PackedMask::from_bytes(10, 2, vec![0; 4]).is_ok());
        assert!(matches!(
            PackedMask::from_bytes(10, 2, vec![0; 3]),
            Err(FloodError::PackedSizeMismatch { .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_reads_dry() {
        let mask = FloodMask::new(2, 2);
        assert!(!mask.get(-1, 0));
        assert!(!mask.get(0, 2));
    }
}
