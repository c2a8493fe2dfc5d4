//! Emits C source declarations of constant byte arrays.
//!
//! Given a stream of bytes and an array name, produces:
//!
//! ```text
//! const unsigned char <name>[] = {
//! 0x00, 0x01, ...
//! };
//! const unsigned int <name>_len = <count>;
//! ```
//!
//! The array name is used verbatim. Names that are not valid C identifiers produce output that
//! will not compile.

pub mod emitter;
pub mod token;

pub use emitter::{BYTES_PER_LINE, Declaration, Emitter, WrapStyle, emit, encode};
pub use token::{HexToken, TokenError, array_body, decode_tokens};
