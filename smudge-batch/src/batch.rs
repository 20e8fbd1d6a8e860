use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Iterator over `(input, output)` path pairs for one batch run.
///
/// Enumerates the files directly under the input directory and pairs each
/// with the path obtained by re-rooting its file name under the output
/// directory. Subdirectories and other non-file entries are skipped.
pub struct MirroredDir {
    inner: walkdir::IntoIter,
    output_root: PathBuf,
}

impl MirroredDir {
    /// Create an iterator over the files of `input_root`.
    pub fn new(input_root: impl AsRef<Path>, output_root: impl AsRef<Path>) -> Self {
        Self {
            inner: WalkDir::new(input_root)
                .min_depth(1)
                .max_depth(1)
                .into_iter(),
            output_root: output_root.as_ref().to_path_buf(),
        }
    }
}

impl Iterator for MirroredDir {
    type Item = Result<(PathBuf, PathBuf), walkdir::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err)),
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let output_path = self.output_root.join(entry.file_name());
            return Some(Ok((entry.into_path(), output_path)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MirroredDir;
    use std::collections::BTreeSet;

    #[test]
    fn mirrors_file_names() -> Result<(), Box<dyn std::error::Error>> {
        let input_dir = tempfile::tempdir()?;
        let output_dir = tempfile::tempdir()?;

        std::fs::write(input_dir.path().join("a.png"), b"a")?;
        std::fs::write(input_dir.path().join("b.jpg"), b"b")?;
        std::fs::create_dir(input_dir.path().join("nested"))?;
        std::fs::write(input_dir.path().join("nested").join("c.png"), b"c")?;

        let pairs = MirroredDir::new(input_dir.path(), output_dir.path())
            .collect::<Result<Vec<_>, _>>()?;

        // only the files directly under the input root, subdirectories skipped
        assert_eq!(pairs.len(), 2);

        let names: BTreeSet<_> = pairs
            .iter()
            .map(|(input, _)| input.file_name().unwrap().to_owned())
            .collect();
        assert!(names.contains(std::ffi::OsStr::new("a.png")));
        assert!(names.contains(std::ffi::OsStr::new("b.jpg")));

        for (input, output) in &pairs {
            assert_eq!(output.parent(), Some(output_dir.path()));
            assert_eq!(output.file_name(), input.file_name());
        }

        Ok(())
    }

    #[test]
    fn missing_input_dir_yields_error() {
        let output_dir = tempfile::tempdir().unwrap();
        let mut iter = MirroredDir::new("does/not/exist", output_dir.path());
        assert!(matches!(iter.next(), Some(Err(_))));
    }
}
