//! Conversion run: load every file, merge, print.

use crate::cli::Cli;
use crate::error::{ConvertError, Result};
use crate::source::load_files;
use std::io::{BufWriter, Write};
use tracing::debug;

/// Convert the files named on the command line and print the result.
///
/// Nothing is written unless every file loads successfully.
pub fn run(cli: &Cli) -> Result<()> {
    let env = load_files(cli.files.as_slice())?;
    if env.is_empty() {
        debug!(files = cli.files.len(), "no configuration entries found");
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    env.write_dotenv(cli.order(), &mut out)
        .and_then(|()| out.flush())
        .map_err(|source| ConvertError::Write { source })
}
