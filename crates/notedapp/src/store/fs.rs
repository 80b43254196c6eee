use super::fs_backend::FsBackend;
use super::note_store::NoteStore;
use std::path::PathBuf;

pub type FileStore = NoteStore<FsBackend>;

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        NoteStore::with_backend(FsBackend::new(data_dir))
    }
}
