//! Tool for emitting the bytes of a file, typically a bitmap font, as a C constant array
//! declaration suitable for redirecting into a header.

pub mod cli;
pub mod convert;
