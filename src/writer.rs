use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create (or truncate) `path` and write `count` samples to it, one per line.
///
/// Nothing is sampled when `count` is not positive; the file is still created.
pub fn write_samples<T: Display>(
    path: &Path,
    count: i32,
    mut sampler: impl FnMut() -> T,
) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    for _ in 0..count {
        writeln!(out, "{}", sampler())?;
    }

    out.flush()
}
