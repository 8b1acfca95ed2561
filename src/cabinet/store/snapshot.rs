//! Snapshot persistence: whole-store load and save.
//!
//! One file per domain, holding back-to-back fixed-width record images with
//! no header, no length prefix, no checksum and no version tag. The record
//! count is implicit in file size divided by record width, capped at the
//! store's capacity. A missing or unreadable file is the normal first-run
//! condition and yields an empty store.

use super::{Record, Store};
use crate::codec::{FieldReader, FieldWriter};
use crate::error::Result;
use std::fs;
use std::path::Path;

/// Load a store from `path`. Decodes records until end-of-file or
/// `capacity`, whichever comes first; a trailing partial record and any
/// records beyond capacity are silently ignored.
pub fn load<R: Record>(path: &Path, capacity: usize) -> Result<Store<R>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => return Ok(Store::with_capacity(capacity)),
    };

    let mut store = Store::with_capacity(capacity);
    for image in bytes.chunks_exact(R::ENCODED_LEN).take(capacity) {
        let record = R::decode(&mut FieldReader::new(image))?;
        store.create(record)?;
    }
    Ok(store)
}

/// Overwrite `path` with exactly the store's live records. Always a full
/// rewrite; previous content is truncated. Creates the parent directory on
/// first save.
pub fn save<R: Record>(path: &Path, store: &Store<R>) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    let mut bytes = Vec::with_capacity(store.count() * R::ENCODED_LEN);
    for record in store.records() {
        record.encode(&mut FieldWriter::new(&mut bytes));
    }
    fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{FieldReader, FieldWriter};

    #[derive(Debug, Clone, PartialEq)]
    struct Widget {
        id: i32,
        name: String,
    }

    impl Record for Widget {
        const ENCODED_LEN: usize = 4 + 8;
        const SNAPSHOT_FILE: &'static str = "widgets.dat";

        fn encode(&self, w: &mut FieldWriter<'_>) {
            w.put_i32(self.id);
            w.put_text(&self.name, 8);
        }

        fn decode(r: &mut FieldReader<'_>) -> Result<Self> {
            Ok(Self {
                id: r.take_i32()?,
                name: r.take_text(8)?,
            })
        }
    }

    fn widget(id: i32, name: &str) -> Widget {
        Widget {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn missing_file_loads_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store: Store<Widget> = load(&dir.path().join("nope.dat"), 10).unwrap();
        assert_eq!(store.count(), 0);
        assert_eq!(store.capacity(), 10);
    }

    #[test]
    fn round_trip_preserves_records_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widgets.dat");

        let mut store = Store::with_capacity(10);
        for (id, name) in [(3, "c"), (1, "a"), (2, "b")] {
            store.create(widget(id, name)).unwrap();
        }
        save(&path, &store).unwrap();

        let loaded: Store<Widget> = load(&path, 10).unwrap();
        assert_eq!(loaded.records(), store.records());
    }

    #[test]
    fn save_is_idempotent_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widgets.dat");

        let mut store = Store::with_capacity(10);
        store.create(widget(1, "a")).unwrap();
        save(&path, &store).unwrap();
        let first = fs::read(&path).unwrap();
        save(&path, &store).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn save_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widgets.dat");

        let mut store = Store::with_capacity(10);
        store.create(widget(1, "a")).unwrap();
        store.create(widget(2, "b")).unwrap();
        save(&path, &store).unwrap();

        store.delete_at(0).unwrap();
        save(&path, &store).unwrap();

        let loaded: Store<Widget> = load(&path, 10).unwrap();
        assert_eq!(loaded.count(), 1);
        assert_eq!(loaded.get(0).unwrap().id, 2);
    }

    #[test]
    fn trailing_partial_record_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widgets.dat");

        let mut store = Store::with_capacity(10);
        store.create(widget(1, "a")).unwrap();
        save(&path, &store).unwrap();

        // Append garbage shorter than one record.
        let mut bytes = fs::read(&path).unwrap();
        bytes.extend_from_slice(&[0xAB; 5]);
        fs::write(&path, bytes).unwrap();

        let loaded: Store<Widget> = load(&path, 10).unwrap();
        assert_eq!(loaded.count(), 1);
    }

    #[test]
    fn load_caps_at_capacity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("widgets.dat");

        let mut store = Store::with_capacity(10);
        for i in 0..5 {
            store.create(widget(i, "w")).unwrap();
        }
        save(&path, &store).unwrap();

        // A smaller configured capacity reads only the leading records.
        let loaded: Store<Widget> = load(&path, 3).unwrap();
        assert_eq!(loaded.count(), 3);
        assert_eq!(loaded.get(2).unwrap().id, 2);
    }
}
