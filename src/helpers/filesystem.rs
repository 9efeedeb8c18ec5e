use super::*;

/// Where config and entity type files come from. Tests use an in-memory version.
pub trait FileSource {
    /// Contents of the file, or None if nothing exists at the path
    fn read_if_present(&self, path: &str) -> std::io::Result<Option<String>>;

    /// Contents of a file that has to exist
    fn read(&self, path: &str) -> Result<String, Box<dyn Error>> {
        match self.read_if_present(path) {
            Ok(Some(contents)) => Ok(contents),
            Ok(None) => Err(format!("{} does not exist", path).into()),
            Err(e) => Err(format!("can not read {}: {}", path, e).into()),
        }
    }
}

pub type Filesystem = Box<dyn FileSource>;

pub fn real_filesystem() -> Filesystem {
    Box::new(DiskFiles)
}

struct DiskFiles;

impl FileSource for DiskFiles {
    fn read_if_present(&self, path: &str) -> std::io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_path(name: &str) -> String {
        format!("{}/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    #[test]
    fn reads_manifest() {
        let contents = real_filesystem()
            .read_if_present(&manifest_path("Cargo.toml"))
            .unwrap()
            .unwrap();
        assert!(contents.contains("name = \"flotilla-server\""));
    }

    #[test]
    fn missing_file_is_not_present() {
        let fs = real_filesystem();
        assert!(fs
            .read_if_present(&manifest_path("flotilla-missing.toml"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn directory_can_not_be_read() {
        let fs = real_filesystem();
        assert!(fs.read_if_present(&manifest_path("src")).is_err());
        assert!(fs.read(&manifest_path("src")).is_err());
    }

    #[test]
    fn required_missing_file_names_path() {
        let err = real_filesystem()
            .read(&manifest_path("flotilla-missing.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("flotilla-missing.toml"));
    }
}
