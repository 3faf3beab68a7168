use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::{Error, Result};

/// Largest store a restore will read into memory.
pub const MAX_RESTORE_BYTES: u64 = 1 << 30;

#[derive(Debug, Clone, Serialize)]
pub struct BackupInfo {
    pub archive: PathBuf,
    pub entry: String,
    pub bytes: u64,
}

/// `backup_crewbook_<YYYYmmdd_HHMMSS>.zip`, local time.
pub fn default_backup_name() -> String {
    format!("backup_crewbook_{}.zip", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Compress the store file into a single deflated entry named `entry`.
pub fn create_backup(store_path: &Path, entry: &str, archive: &Path) -> Result<BackupInfo> {
    if !store_path.is_file() {
        return Err(Error::Backup(format!(
            "store file {} does not exist",
            store_path.display()
        )));
    }
    let data = std::fs::read(store_path)?;

    if let Some(parent) = archive.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut zip = ZipWriter::new(File::create(archive)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file(entry, options)?;
    zip.write_all(&data)?;
    zip.finish()?;

    info!(archive = %archive.display(), entry, bytes = data.len(), "backup created");
    Ok(BackupInfo {
        archive: archive.to_path_buf(),
        entry: entry.to_string(),
        bytes: data.len() as u64,
    })
}

/// Replace the store file with the `entry` member of `archive`.
///
/// The archive is opened and the entry read completely before the store
/// file is touched. The new bytes go to a sibling temp file that is then
/// renamed over the store, so any failure leaves the live store as it was.
pub fn restore_backup(archive: &Path, entry: &str, store_path: &Path) -> Result<BackupInfo> {
    let file = File::open(archive).map_err(|err| {
        Error::Backup(format!("cannot open {}: {}", archive.display(), err))
    })?;
    let mut zip = ZipArchive::new(file)?;

    let data = {
        let mut member = match zip.by_name(entry) {
            Ok(member) => member,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(Error::Backup(format!(
                    "archive does not contain {}",
                    entry
                )));
            }
            Err(err) => return Err(err.into()),
        };
        if member.size() > MAX_RESTORE_BYTES {
            return Err(Error::Backup(format!(
                "{} declares {} bytes, more than the {} byte limit",
                entry,
                member.size(),
                MAX_RESTORE_BYTES
            )));
        }
        let mut data = Vec::new();
        member
            .by_ref()
            .take(MAX_RESTORE_BYTES + 1)
            .read_to_end(&mut data)
            .map_err(|err| Error::Backup(format!("cannot read {}: {}", entry, err)))?;
        if data.len() as u64 > MAX_RESTORE_BYTES {
            return Err(Error::Backup(format!(
                "{} is larger than the {} byte limit",
                entry, MAX_RESTORE_BYTES
            )));
        }
        data
    };

    let dir = match store_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(&data)?;
    staged.as_file().sync_all()?;
    staged.persist(store_path).map_err(|err| err.error)?;

    info!(
        archive = %archive.display(),
        store = %store_path.display(),
        bytes = data.len(),
        "store restored"
    );
    Ok(BackupInfo {
        archive: archive.to_path_buf(),
        entry: entry.to_string(),
        bytes: data.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_then_restore_replaces_store() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("crewbook.db");
        let archive = dir.path().join("out").join("backup.zip");
        std::fs::write(&store, b"original bytes").unwrap();

        let info = create_backup(&store, "crewbook.db", &archive).unwrap();
        assert_eq!(info.bytes, 14);
        assert!(archive.exists());

        std::fs::write(&store, b"changed").unwrap();
        restore_backup(&archive, "crewbook.db", &store).unwrap();
        assert_eq!(std::fs::read(&store).unwrap(), b"original bytes");
    }

    #[test]
    fn test_missing_store_cannot_be_backed_up() {
        let dir = TempDir::new().unwrap();
        let err = create_backup(
            &dir.path().join("absent.db"),
            "absent.db",
            &dir.path().join("backup.zip"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Backup(_)));
    }

    #[test]
    fn test_restore_requires_named_entry() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("crewbook.db");
        let archive = dir.path().join("backup.zip");
        std::fs::write(&store, b"live").unwrap();
        create_backup(&store, "other.db", &archive).unwrap();

        let err = restore_backup(&archive, "crewbook.db", &store).unwrap_err();
        assert!(matches!(err, Error::Backup(_)));
        assert_eq!(std::fs::read(&store).unwrap(), b"live");
    }

    #[test]
    fn test_restore_rejects_non_archive() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("crewbook.db");
        let bogus = dir.path().join("notes.zip");
        std::fs::write(&store, b"live").unwrap();
        std::fs::write(&bogus, b"this is not a zip file").unwrap();

        let err = restore_backup(&bogus, "crewbook.db", &store).unwrap_err();
        assert!(matches!(err, Error::Backup(_)));
        assert_eq!(std::fs::read(&store).unwrap(), b"live");
    }

    /// Patch the uncompressed size of the first central directory record.
    fn forge_declared_size(archive: &Path, size: u32) {
        let mut bytes = std::fs::read(archive).unwrap();
        let header = bytes
            .windows(4)
            .position(|w| w == [0x50, 0x4b, 0x01, 0x02])
            .unwrap();
        bytes[header + 24..header + 28].copy_from_slice(&size.to_le_bytes());
        std::fs::write(archive, bytes).unwrap();
    }

    #[test]
    fn test_restore_rejects_oversized_entry() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("crewbook.db");
        let archive = dir.path().join("backup.zip");
        std::fs::write(&store, b"live").unwrap();
        create_backup(&store, "crewbook.db", &archive).unwrap();
        forge_declared_size(&archive, 0xFFFF_FFF0);

        let err = restore_backup(&archive, "crewbook.db", &store).unwrap_err();
        assert!(matches!(err, Error::Backup(_)));
        assert_eq!(std::fs::read(&store).unwrap(), b"live");
    }

    #[test]
    fn test_restore_leaves_no_staging_files() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("crewbook.db");
        let archive = dir.path().join("backup.zip");
        std::fs::write(&store, b"snapshot").unwrap();
        create_backup(&store, "crewbook.db", &archive).unwrap();
        std::fs::write(&store, b"newer").unwrap();

        let info = restore_backup(&archive, "crewbook.db", &store).unwrap();
        assert_eq!(info.bytes, 8);
        assert_eq!(std::fs::read(&store).unwrap(), b"snapshot");

        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["backup.zip", "crewbook.db"]);
    }

    #[test]
    fn test_default_name_shape() {
        let name = default_backup_name();
        assert!(name.starts_with("backup_crewbook_"));
        assert!(name.ends_with(".zip"));
        assert_eq!(name.len(), "backup_crewbook_20250101_120000.zip".len());
    }
}
