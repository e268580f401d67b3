//! Log output setup shared by the binary.

use std::{fs::File, io, path::Path, sync::Arc};

use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

/// Writer teeing stdout to `path`, recreated on every start.
///
/// If the file cannot be created, logs go to stdout alone and the error is
/// handed back so it can be logged once the subscriber is up.
pub fn log_writer(path: &Path) -> (BoxMakeWriter, Option<io::Error>) {
    match File::create(path) {
        Ok(file) => (BoxMakeWriter::new(io::stdout.and(Arc::new(file))), None),
        Err(e) => (BoxMakeWriter::new(io::stdout), Some(e)),
    }
}

// Tests.
