//! # Core Store Framework
//!
//! This module defines the generic building blocks for file-backed resources.
//!
//! ## Key Types
//!
//! - [`StoreEntity`]: The trait that all stored resource types must implement.
//! - [`JsonFileStore`]: The generic store that persists entities to one JSON document.
//! - [`Document`]: The in-memory form of that document.
//! - [`StoreError`]: Common errors (e.g., Read, DuplicateKey, NotFound).

use std::fmt::{Debug, Display};
use std::fs;
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;
use tracing::{debug, error, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource entity must implement to be persisted by [`JsonFileStore`].
///
/// # Architecture Note
/// The store never looks inside an entity. It only needs two things: the key the
/// entity is filed under, and the serializable record written for it. Everything
/// else (validation, display rules, variants) stays with the entity.
///
/// The record is a separate associated type because what lands on disk is a plain
/// mapping. It is read back as-is and is never re-validated by the store.
pub trait StoreEntity: Clone + Debug {
    /// The unique identifier. Its `Display` form is the key in the document.
    type Id: Copy + Display + Debug;

    /// The serialized form of the entity as stored in the document.
    type Record: Serialize + DeserializeOwned + Clone + Debug + PartialEq;

    /// The identifier this entity is filed under.
    fn id(&self) -> Self::Id;

    /// Builds the record written to the document.
    fn to_record(&self) -> Self::Record;
}

/// The whole persisted collection: stringified id to record, in insertion order.
pub type Document<R> = IndexMap<String, R>;

// =============================================================================
// 2. THE ERRORS
// =============================================================================

/// Errors that can occur within the store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Error reading data from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed data in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Item already exists: {0}")]
    DuplicateKey(String),
    #[error("Item not found: {0}")]
    NotFound(String),
}

/// Renders a value as JSON with 4-space indentation, the layout of the data file.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

/// The generic store that manages a collection of entities in one JSON file.
///
/// # Architecture Note
/// There is no cache. Every operation re-reads the whole file, and every mutation
/// rewrites it entirely (load, mutate, save). The file is opened and closed inside
/// each call and never held between calls.
///
/// **Concurrency Model**:
/// None. Two overlapping read-modify-write cycles (in one process or across
/// processes) can lose updates. There is no locking.
///
/// **Save failures**:
/// [`save`](Self::save) logs a failed write and swallows it. A mutation whose save
/// failed still reports success; only the log (or a later read) shows otherwise.
pub struct JsonFileStore<T: StoreEntity> {
    path: PathBuf,
    _entity: PhantomData<fn() -> T>,
}

impl<T: StoreEntity> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full document.
    ///
    /// A missing file is an empty document. Any other read failure, or content
    /// that is not a valid document, is an error.
    pub fn load(&self) -> Result<Document<T::Record>, StoreError> {
        let entity_type = entity_type::<T>();
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(entity_type, path = %self.path.display(), "No data file, starting empty");
                return Ok(Document::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let document: Document<T::Record> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        debug!(entity_type, size = document.len(), "Loaded");
        Ok(document)
    }

    /// Overwrites the file with the full document.
    ///
    /// Errors are logged and swallowed, never returned.
    pub fn save(&self, document: &Document<T::Record>) {
        let entity_type = entity_type::<T>();
        match self.write_document(document) {
            Ok(()) => debug!(entity_type, size = document.len(), "Saved"),
            Err(e) => {
                error!(entity_type, path = %self.path.display(), error = %e, "Failed to save data")
            }
        }
    }

    /// Writes to a temporary sibling file, then renames it over the target.
    ///
    /// An existing target is resolved through symlinks first and its permissions
    /// are carried over, so the rename replaces the same file with the same mode.
    fn write_document(&self, document: &Document<T::Record>) -> anyhow::Result<()> {
        let contents = to_pretty_json(document)?;
        let existing = match fs::metadata(&self.path) {
            Ok(metadata) => Some(metadata.permissions()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };
        let target = match existing {
            Some(_) => fs::canonicalize(&self.path)?,
            None => self.path.clone(),
        };
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(dir)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.flush()?;
        if let Some(permissions) = existing {
            temp_file.as_file().set_permissions(permissions)?;
        }
        temp_file.persist(&target)?;
        Ok(())
    }

    /// Inserts the entity's record unless its key is already present.
    pub fn create(&self, entity: &T) -> Result<T::Id, StoreError> {
        let entity_type = entity_type::<T>();
        let id = entity.id();
        debug!(entity_type, ?entity, "Create");

        let mut document = self.load()?;
        let key = id.to_string();
        if document.contains_key(&key) {
            warn!(entity_type, %id, "Already exists");
            return Err(StoreError::DuplicateKey(key));
        }

        document.insert(key, entity.to_record());
        self.save(&document);
        info!(entity_type, %id, size = document.len(), "Created");
        Ok(id)
    }

    /// Returns the record filed under `id`, if any.
    pub fn read(&self, id: T::Id) -> Result<Option<T::Record>, StoreError> {
        let entity_type = entity_type::<T>();
        let mut document = self.load()?;
        let record = document.swap_remove(&id.to_string());
        debug!(entity_type, %id, found = record.is_some(), "Get");
        Ok(record)
    }

    /// Applies `update` to the stored record and saves the document.
    ///
    /// The record is edited in place; nothing is re-validated.
    pub fn update<F>(&self, id: T::Id, update: F) -> Result<T::Record, StoreError>
    where
        F: FnOnce(&mut T::Record),
    {
        let entity_type = entity_type::<T>();
        let mut document = self.load()?;
        let key = id.to_string();

        let Some(record) = document.get_mut(&key) else {
            warn!(entity_type, %id, "Not found");
            return Err(StoreError::NotFound(key));
        };
        update(record);
        let updated = record.clone();

        self.save(&document);
        info!(entity_type, %id, "Updated");
        Ok(updated)
    }

    /// Removes the record filed under `id` and saves the document.
    pub fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        let entity_type = entity_type::<T>();
        let mut document = self.load()?;
        let key = id.to_string();

        if document.shift_remove(&key).is_none() {
            warn!(entity_type, %id, "Not found");
            return Err(StoreError::NotFound(key));
        }

        self.save(&document);
        info!(entity_type, %id, size = document.len(), "Deleted");
        Ok(())
    }
}

/// Short type name used as a log field (e.g. "Product").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct NoteRecord {
        id: u32,
        text: String,
    }

    impl StoreEntity for Note {
        type Id = u32;
        type Record = NoteRecord;

        fn id(&self) -> u32 {
            self.id
        }

        fn to_record(&self) -> NoteRecord {
            NoteRecord {
                id: self.id,
                text: self.text.clone(),
            }
        }
    }

    fn note(id: u32, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    // --- Tests ---

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Note>::new(dir.path().join("notes.json"));

        assert!(store.load().unwrap().is_empty());
        assert!(!store.path().exists(), "load must not create the file");
    }

    #[test]
    fn test_crud_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Note>::new(dir.path().join("notes.json"));

        // 1. Create
        assert_eq!(store.create(&note(1, "first")).unwrap(), 1);
        store.create(&note(2, "second")).unwrap();

        // 2. Read
        let record = store.read(1).unwrap().unwrap();
        assert_eq!(record.text, "first");
        assert!(store.read(3).unwrap().is_none());

        // 3. Update
        let updated = store.update(2, |r| r.text = "changed".into()).unwrap();
        assert_eq!(updated.text, "changed");
        assert_eq!(store.read(2).unwrap().unwrap().text, "changed");

        // 4. Delete
        store.delete(1).unwrap();
        assert!(store.read(1).unwrap().is_none());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_and_missing_keys_leave_document_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Note>::new(dir.path().join("notes.json"));
        store.create(&note(1, "original")).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        assert!(matches!(
            store.create(&note(1, "impostor")),
            Err(StoreError::DuplicateKey(key)) if key == "1"
        ));
        assert!(matches!(
            store.update(9, |r| r.text.clear()),
            Err(StoreError::NotFound(key)) if key == "9"
        ));
        assert!(matches!(store.delete(9), Err(StoreError::NotFound(_))));

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_document_keeps_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Note>::new(dir.path().join("notes.json"));
        for id in [10, 2, 7] {
            store.create(&note(id, "x")).unwrap();
        }
        store.delete(2).unwrap();

        let keys: Vec<String> = store.load().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["10", "7"]);
    }

    #[test]
    fn test_file_uses_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::<Note>::new(dir.path().join("notes.json"));
        store.create(&note(1, "a")).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "{\n    \"1\": {\n        \"id\": 1,\n        \"text\": \"a\"\n    }\n}"
        );
    }

    #[test]
    fn test_unreadable_path_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the data file
        let store = JsonFileStore::<Note>::new(dir.path());

        assert!(matches!(store.load(), Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let store = JsonFileStore::<Note>::new(path);

        assert!(matches!(store.load(), Err(StoreError::Malformed { .. })));
    }

    #[test]
    fn test_failed_save_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("notes.json");
        let store = JsonFileStore::<Note>::new(&path);

        // The save cannot succeed, but create still reports success
        assert_eq!(store.create(&note(1, "lost")).unwrap(), 1);
        assert!(!path.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        let store = JsonFileStore::<Note>::new(&path);

        store.create(&note(1, "kept")).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
        assert_eq!(store.read(1).unwrap().unwrap().text, "kept");
    }

    #[cfg(unix)]
    #[test]
    fn test_save_through_symlink_updates_link_target() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.json");
        let link = dir.path().join("notes.json");
        fs::write(&real, "{}").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();
        let store = JsonFileStore::<Note>::new(&link);

        store.create(&note(1, "linked")).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        let on_disk = fs::read_to_string(&real).unwrap();
        assert!(on_disk.contains("\"linked\""), "got: {on_disk}");
        assert_eq!(store.read(1).unwrap().unwrap().text, "linked");
    }
}
