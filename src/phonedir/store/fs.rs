use super::directory_store::DirectoryStore;
use super::fs_backend::FsBackend;
use std::path::PathBuf;

pub type FileStore = DirectoryStore<FsBackend>;

impl FileStore {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        DirectoryStore::with_backend(FsBackend::new(data_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DataStore, LoadPolicy};
    use crate::test_utils::{sample_records, RecordingLog};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_parent_directories_on_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("contacts.json");
        let store = FileStore::new(&path);

        store.save(&sample_records()).unwrap();

        assert!(path.exists());
        assert_eq!(store.load(&RecordingLog::default()).unwrap(), sample_records());
    }

    #[test]
    fn leaves_no_tmp_files_behind() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("contacts.json"));

        store.save(&sample_records()).unwrap();
        store.save(&sample_records()[..3]).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().into_string().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn corrupt_file_is_not_rewritten_by_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        fs::write(&path, "not json at all").unwrap();

        let log = RecordingLog::default();
        let store = FileStore::new(&path).with_policy(LoadPolicy::AllOrNothing);

        assert!(store.load(&log).unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all");
        assert!(log.contains("Error decoding JSON"));
    }
}
