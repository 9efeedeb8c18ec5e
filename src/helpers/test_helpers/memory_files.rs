use super::*;

/// Files that only exist in memory, keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemoryFiles {
    files: HashMap<String, String>,
}

impl MemoryFiles {
    pub fn with(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(path.to_string(), contents.to_string());
        self
    }

    pub fn boxed(&self) -> Filesystem {
        Box::new(self.clone())
    }
}

impl FileSource for MemoryFiles {
    fn read_if_present(&self, path: &str) -> std::io::Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_added_files_exist() {
        let fs = MemoryFiles::default().with("flotilla.toml", "bot_count = 1");
        assert_eq!(fs.read("flotilla.toml").unwrap(), "bot_count = 1");
        assert_eq!(fs.read_if_present("entity_types.toml").unwrap(), None);
    }
}
