//! Parsers and serializers for the numerals `hexdec` works with
//!
//! Hexadecimal numerals come in as bytes, decimal numerals go out as strings. Nothing in here does
//! arithmetic; see the `hexdec` crate for that.
#[macro_use] extern crate error_chain;
#[macro_use] extern crate log;
extern crate nom;

#[macro_use] pub mod util;
pub mod numeral;
pub mod decimal;

pub use nom::IResult;

error_chain! {
    errors {
        // low-level parsing (lexing)
        ParserError(msg: String) {
            description("there was an error while parsing")
            display("there was an error while parsing: {}", msg)
        }

        // Specific errors
        InvalidDigit(ch: u8, position: usize) {
            description("a character is not a hexadecimal digit")
            display(r#""{}" at position {} is not a hexadecimal digit"#,
                    util::encode_non_ascii(&[*ch]), position)
        }
        InvalidDecimalDigit(ch: u8, position: usize) {
            description("a character is not a decimal digit")
            display(r#""{}" at position {} is not a decimal digit"#,
                    util::encode_non_ascii(&[*ch]), position)
        }
    }
}
