//! # Hexadecimal to decimal conversion
//!
//! Converts hexadecimal numerals of any length to decimal, without going through a fixed width
//! integer. The work is done on a buffer of decimal digits that supports exactly two operations,
//! "multiply by 16" and "add a digit", which is all Horner's method needs.
//!
//! ```
//! assert_eq!(hexdec::hex_to_decimal("10000000000000000").unwrap(), "18446744073709551616");
//! ```

#[macro_use] extern crate error_chain;
#[macro_use] extern crate log;
extern crate hexdec_par_ser;
extern crate memmap;

mod error;
pub mod digits;
pub mod convert;
pub mod file;

pub use error::*;
pub use digits::{Buffer, DigitBuffer};
pub use convert::{Converter, hex_to_decimal, hex_bytes_to_decimal};
