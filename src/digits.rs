//!
//! # Decimal digit buffer
//!
//! An arbitrary precision, non-negative decimal number, stored one decimal digit per byte.
//!
//! There are two buffers of equal capacity. `committed` holds the current value, and `scratch` is
//! where a new value is built up (e.g. the result of a multiplication) before being committed.
//! Both store the least significant digit at index 0.

use std::fmt;

use hexdec_par_ser::decimal::{parse_decimal_numeral, to_decimal_string};

use crate::error::Result;

/// Selects one of the two buffers in a `DigitBuffer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    /// The current value
    Committed,
    /// The staging area for a multiply step
    Scratch,
}

/// A growable decimal number with a staging buffer
#[derive(Debug, Clone)]
pub struct DigitBuffer {
    /// The current value, least significant digit first
    committed: Vec<u8>,
    /// Same capacity as `committed`. Only meaningful during a multiply step
    scratch: Vec<u8>,
    /// The number of significant digits
    len: usize,
}

impl DigitBuffer {
    /// Create a zero-valued buffer with room for `capacity` digits
    ///
    /// The capacity is only an estimate, the buffer grows as needed. A capacity of 0 is bumped
    /// to 1.
    pub fn new(capacity: usize) -> DigitBuffer {
        let capacity = capacity.max(1);
        DigitBuffer {
            committed: vec![0; capacity],
            scratch: vec![0; capacity],
            len: 0,
        }
    }

    /// Create a buffer holding the value of a decimal numeral, e.g. `b"999"`
    pub fn from_decimal(numeral: &[u8]) -> Result<DigitBuffer> {
        let digits = parse_decimal_numeral(numeral)?;
        let mut buffer = DigitBuffer::new(digits.len());
        buffer.committed[..digits.len()].copy_from_slice(&digits);
        buffer.len = digits.len();
        Ok(buffer)
    }

    /// The number of significant digits
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no digits have been written yet (the value is zero)
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of digit slots in each buffer
    pub fn capacity(&self) -> usize {
        self.committed.len()
    }

    /// The significant digits of the current value, least significant first
    pub fn digits(&self) -> &[u8] {
        &self.committed[..self.len]
    }

    fn buffer_mut(&mut self, target: Buffer) -> &mut [u8] {
        match target {
            Buffer::Committed => &mut self.committed,
            Buffer::Scratch => &mut self.scratch,
        }
    }

    /// Add `amount` to the digit at `offset` in `target`, carrying into more significant digits
    ///
    /// `amount` may be any value, not just a single digit. Writing past the last significant digit
    /// extends the number, growing both buffers if they are full.
    ///
    /// Both buffers share one length, so a write to `Scratch` that extends the number must be
    /// followed by `commit_scratch` before the value is read. Until then the extra digits show up
    /// in `committed` as zeros (which `finalize` does not print).
    pub fn increase_digit(&mut self, offset: usize, amount: u32, target: Buffer) {
        trace!("offset: {} | increase: {} | {:?}", offset, amount, target);
        let mut offset = offset;
        let mut carry = amount;
        loop {
            if offset >= self.len {
                self.len = offset + 1;
                if self.len > self.capacity() {
                    self.grow();
                }
            }

            // only the low decimal digit of the carry lands here, so the sum is at most 18
            let buffer = self.buffer_mut(target);
            let sum = buffer[offset] + (carry % 10) as u8;
            trace!("digit: {} | old: {} | new: {}", offset, buffer[offset], sum);
            buffer[offset] = sum % 10;
            carry = carry / 10 + u32::from(sum / 10);
            if carry == 0 {
                break;
            }
            offset += 1;
        }
    }

    /// Double the capacity of both buffers (more if needed to fit all significant digits)
    ///
    /// Existing digits in both buffers are kept, new slots are zero.
    pub fn grow(&mut self) {
        let mut capacity = self.capacity() * 2;
        while capacity < self.len {
            capacity *= 2;
        }
        debug!("growing digit buffer from {} to {} digits", self.capacity(), capacity);
        self.committed.resize(capacity, 0);
        self.scratch.resize(capacity, 0);
    }

    /// Clear `scratch`, ready to build a new value in it
    pub fn begin_multiply_by_16(&mut self) {
        for digit in self.scratch.iter_mut() {
            *digit = 0;
        }
    }

    /// Build 16 times the current value in `scratch`
    ///
    /// Each digit `d` at position `i` contributes `16 * d * 10^i`, which is exactly what adding
    /// `16 * d` at offset `i` does. Carries past the current length only ever land on zeros in
    /// `committed`, so reading it while writing `scratch` is safe.
    pub fn multiply_by_16_into_scratch(&mut self) {
        self.begin_multiply_by_16();
        let len = self.len;
        for i in 0..len {
            let digit = u32::from(self.committed[i]);
            self.increase_digit(i, digit * 16, Buffer::Scratch);
        }
    }

    /// Make the value in `scratch` the current value
    pub fn commit_scratch(&mut self) {
        self.committed.copy_from_slice(&self.scratch);
    }

    /// Multiply the current value by 16
    pub fn multiply_by_16(&mut self) {
        self.multiply_by_16_into_scratch();
        self.commit_scratch();
    }

    /// The decimal numeral for the current value, most significant digit first
    pub fn finalize(self) -> String {
        to_decimal_string(self.digits())
    }
}

impl fmt::Display for DigitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&to_decimal_string(self.digits()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        let buffer = DigitBuffer::new(3);
        assert_eq!(buffer.capacity(), 3);
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.to_string(), "0");

        // a zero estimate still leaves room for a digit
        assert_eq!(DigitBuffer::new(0).capacity(), 1);
    }

    #[test]
    fn increase_digit_extends() {
        let mut buffer = DigitBuffer::new(4);
        buffer.increase_digit(0, 7, Buffer::Committed);
        assert_eq!(buffer.digits(), &[7]);
        buffer.increase_digit(0, 5, Buffer::Committed);
        assert_eq!(buffer.digits(), &[2, 1]);
        assert_eq!(buffer.to_string(), "12");
    }

    #[test]
    fn increase_digit_large_amount() {
        let mut buffer = DigitBuffer::new(1);
        // 144 is the largest amount a multiply step adds in one go
        buffer.increase_digit(0, 144, Buffer::Committed);
        assert_eq!(buffer.to_string(), "144");
        assert_eq!(buffer.len(), 3);
        assert!(buffer.capacity() >= 3);
    }

    #[test]
    fn increase_digit_max_amount() {
        let mut buffer = DigitBuffer::new(1);
        buffer.increase_digit(0, 5, Buffer::Committed);
        buffer.increase_digit(0, u32::MAX, Buffer::Committed);
        assert_eq!(buffer.to_string(), "4294967300");
        assert_eq!(buffer.len(), 10);

        let mut buffer = DigitBuffer::from_decimal(b"99999999999").unwrap();
        buffer.increase_digit(0, u32::MAX, Buffer::Committed);
        assert_eq!(buffer.finalize(), "104294967294");
    }

    #[test]
    fn uncommitted_scratch_write() {
        let mut buffer = DigitBuffer::new(1);
        buffer.increase_digit(3, 1, Buffer::Scratch);
        assert_eq!(buffer.len(), 4);
        assert_eq!(buffer.to_string(), "0");
        buffer.commit_scratch();
        assert_eq!(buffer.finalize(), "1000");
    }

    #[test]
    fn increase_digit_carry_chain() {
        let mut buffer = DigitBuffer::from_decimal(b"99999").unwrap();
        assert_eq!(buffer.capacity(), 5);
        buffer.increase_digit(0, 1, Buffer::Committed);
        assert_eq!(buffer.to_string(), "100000");
        assert_eq!(buffer.capacity(), 10);
    }

    #[test]
    fn increase_digit_scratch_leaves_committed() {
        let mut buffer = DigitBuffer::from_decimal(b"42").unwrap();
        buffer.begin_multiply_by_16();
        buffer.increase_digit(1, 3, Buffer::Scratch);
        assert_eq!(buffer.to_string(), "42");
        buffer.commit_scratch();
        assert_eq!(buffer.to_string(), "30");
    }

    #[test]
    fn grow_keeps_digits() {
        let mut buffer = DigitBuffer::from_decimal(b"3314").unwrap();
        buffer.begin_multiply_by_16();
        buffer.increase_digit(0, 8, Buffer::Scratch);
        buffer.grow();
        assert_eq!(buffer.capacity(), 8);
        assert_eq!(buffer.to_string(), "3314");
        assert_eq!(buffer.scratch[..5], [8, 0, 0, 0, 0]);
        assert!(buffer.committed[4..].iter().all(|&d| d == 0));
    }

    #[test]
    fn multiply_by_16() {
        let mut buffer = DigitBuffer::from_decimal(b"207").unwrap();
        buffer.multiply_by_16();
        assert_eq!(buffer.to_string(), "3312");
    }

    #[test]
    fn multiply_all_nines() {
        let mut buffer = DigitBuffer::from_decimal(b"999").unwrap();
        buffer.multiply_by_16();
        assert_eq!(buffer.to_string(), "15984");
        assert_eq!(buffer.len(), 5);

        let mut buffer = DigitBuffer::from_decimal(b"99999999999999999999").unwrap();
        buffer.multiply_by_16();
        assert_eq!(buffer.to_string(), "1599999999999999999984");
    }

    #[test]
    fn multiply_zero() {
        let mut buffer = DigitBuffer::new(1);
        buffer.increase_digit(0, 0, Buffer::Committed);
        buffer.multiply_by_16();
        assert_eq!(buffer.digits(), &[0]);
        assert_eq!(buffer.finalize(), "0");
    }

    #[test]
    fn finalize() {
        let mut buffer = DigitBuffer::new(2);
        buffer.increase_digit(0, 15, Buffer::Committed);
        buffer.multiply_by_16();
        buffer.increase_digit(0, 15, Buffer::Committed);
        assert_eq!(buffer.finalize(), "255");
    }
}
