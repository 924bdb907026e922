//! Append-only record of step directions.

/// One bit per step: `true` = moved vertically (`Top`), `false` = moved
/// horizontally (`Right`).
///
/// Bits are packed eight to a byte, least-significant bit first, and the
/// buffer grows on demand, so there is no step ceiling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveHistory {
    bits: Vec<u8>,
    len:  usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for `steps` entries.
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            bits: Vec::with_capacity(steps.div_ceil(8)),
            len:  0,
        }
    }

    /// Append one step.
    pub fn push(&mut self, vertical: bool) {
        let byte = self.len / 8;
        if byte == self.bits.len() {
            self.bits.push(0);
        }
        if vertical {
            self.bits[byte] |= 1 << (self.len % 8);
        }
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The entry for step `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bits[index / 8] & (1 << (index % 8)) != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bits[i / 8] & (1 << (i % 8)) != 0)
    }

    /// Number of vertical (`Top`) steps recorded.
    pub fn vertical_count(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    pub fn as_bools(&self) -> Vec<bool> {
        self.iter().collect()
    }
}
