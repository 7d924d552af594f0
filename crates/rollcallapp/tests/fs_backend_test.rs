use rollcallapp::model::CheckInEntry;
use rollcallapp::store::fs_backend::FsBackend;
use rollcallapp::store::{LedgerStore, Slot, StorageBackend};
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("ledger"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_slot_io() {
    let (_dir, backend) = setup();

    // 1. Absent
    assert_eq!(backend.load(Slot::CheckedIn).unwrap(), None);

    // 2. Write creates the directory
    backend.save(Slot::CheckedIn, "[]").unwrap();
    assert!(backend.root().exists());
    assert_eq!(backend.load(Slot::CheckedIn).unwrap().as_deref(), Some("[]"));

    // 3. Remove
    backend.remove(Slot::CheckedIn).unwrap();
    assert_eq!(backend.load(Slot::CheckedIn).unwrap(), None);
    backend.remove(Slot::CheckedIn).unwrap();
}

#[test]
fn test_fs_backend_file_names_match_slot_keys() {
    let (_dir, backend) = setup();
    backend.save(Slot::CheckedIn, "[]").unwrap();
    backend.save(Slot::CompletedSessions, "[]").unwrap();

    assert!(backend.root().join("registeredMembers.json").exists());
    assert!(backend.root().join("storedRegistrations.json").exists());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.save(Slot::CompletedSessions, "[1]").unwrap();
    backend.save(Slot::CompletedSessions, "[2]").unwrap();

    let on_disk = fs::read_to_string(backend.slot_path(Slot::CompletedSessions)).unwrap();
    assert_eq!(on_disk, "[2]");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap().to_string();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_ledger_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("ledger");

    {
        let store = LedgerStore::with_backend(FsBackend::new(root.clone()));
        store
            .replace_checked_in(&[CheckInEntry::new("alice", 10)])
            .unwrap();
        store
            .append_completed_session(CheckInEntry::new("bob", 1).complete(2))
            .unwrap();
    }

    let store = LedgerStore::with_backend(FsBackend::new(root));
    assert_eq!(
        store.checked_in().unwrap(),
        vec![CheckInEntry::new("alice", 10)]
    );
    assert_eq!(store.completed_sessions().unwrap().len(), 1);
}

#[test]
fn test_ledger_reads_hand_edited_file_best_effort() {
    let (_dir, backend) = setup();
    fs::create_dir_all(backend.root()).unwrap();
    fs::write(
        backend.slot_path(Slot::CheckedIn),
        r#"[{"userId":"alice","timestamp":1},{"timestamp":2},{"userId":"carol","timestamp":3}]"#,
    )
    .unwrap();

    let store = LedgerStore::with_backend(backend);
    let names: Vec<String> = store
        .checked_in()
        .unwrap()
        .into_iter()
        .map(|e| e.user_id)
        .collect();
    assert_eq!(names, vec!["alice", "carol"]);
}
