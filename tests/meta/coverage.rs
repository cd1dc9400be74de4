//! Keeps `tests/unit` in step with `src`: one test file per source file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Files that only wire modules together or start the binary
    fn is_wiring(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn rust_files(dir: &Path, base: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, base, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(io::Error::other)?
                    .to_string_lossy()
                    .replace('\\', "/");
                if !is_wiring(&relative) {
                    found.insert(relative);
                }
            }
        }
        Ok(())
    }

    fn source_and_test_files() -> (BTreeSet<String>, BTreeSet<String>) {
        let mut sources = BTreeSet::new();
        let mut tests = BTreeSet::new();
        rust_files(Path::new("src"), Path::new("src"), &mut sources).unwrap();
        rust_files(Path::new("tests/unit"), Path::new("tests/unit"), &mut tests).unwrap();
        (sources, tests)
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let (sources, tests) = source_and_test_files();
        let missing: Vec<&String> = sources.difference(&tests).collect();

        assert!(
            missing.is_empty(),
            "Source files without a unit test counterpart:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let (sources, tests) = source_and_test_files();
        let orphaned: Vec<&String> = tests.difference(&sources).collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source counterpart:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let mut files = BTreeSet::new();
        rust_files(Path::new("tests"), Path::new("tests"), &mut files).unwrap();

        let empty: Vec<String> = files
            .into_iter()
            .filter(|relative| {
                let content = fs::read_to_string(Path::new("tests").join(relative)).unwrap();
                !content.contains("#[test]")
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }
}
