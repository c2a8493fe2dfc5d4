//! Tool for emitting the bytes of a file as a C constant array declaration.

use std::io::{self, BufWriter};

use anyhow::Result;
use bin_to_array::{cli, convert::convert};

fn main() -> Result<()> {
    let config = cli::get_config();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(config.log_level)
        .with_target(false)
        .init();

    let stdout = BufWriter::new(io::stdout().lock());
    convert(&config, stdout)?;

    Ok(())
}
