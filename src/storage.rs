use crate::errors::AppError;
use crate::models::Subject;
use crate::store::AttendanceStore;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, info};

pub const STORAGE_KEY: &str = "subjectAttendance";

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("ATTENDANCE_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from(format!("data/{STORAGE_KEY}.json")))
}

/// Loads the persisted snapshot.
///
/// Missing data starts empty. Data that cannot be read or parsed is moved aside
/// to a free `<path>.corrupt[.N]` name and the store starts empty; if it cannot
/// be moved aside, loading fails so the next save cannot replace it.
pub async fn load_data(path: &Path) -> Result<AttendanceStore, std::io::Error> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Vec<Subject>>(&bytes) {
            Ok(subjects) => {
                info!("loaded {} subject(s) from {}", subjects.len(), path.display());
                Ok(AttendanceStore::from_subjects(subjects))
            }
            Err(err) => {
                error!("failed to parse data file: {err}");
                quarantine(path).await?;
                Ok(AttendanceStore::default())
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(AttendanceStore::default()),
        Err(err) => {
            error!("failed to read data file: {err}");
            quarantine(path).await?;
            Ok(AttendanceStore::default())
        }
    }
}

/// Overwrites the blob with the full subject list.
pub async fn persist_data(path: &Path, subjects: &[Subject]) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(subjects)?;
    let tmp = sibling(path, "tmp");
    fs::write(&tmp, payload).await.map_err(|err| {
        error!("failed to write {}: {err}", tmp.display());
        AppError::internal(err)
    })?;
    fs::rename(&tmp, path).await.map_err(|err| {
        error!("failed to replace {}: {err}", path.display());
        AppError::internal(err)
    })?;
    Ok(())
}

async fn quarantine(path: &Path) -> Result<PathBuf, std::io::Error> {
    let target = free_corrupt_name(path).await?;
    fs::rename(path, &target).await.map_err(|err| {
        error!("failed to move unreadable data aside: {err}");
        err
    })?;
    info!("moved unreadable data to {}", target.display());
    Ok(target)
}

// Earlier quarantined copies are never replaced.
async fn free_corrupt_name(path: &Path) -> Result<PathBuf, std::io::Error> {
    let mut candidate = sibling(path, "corrupt");
    let mut n = 1u32;
    while fs::try_exists(&candidate).await? {
        candidate = sibling(path, &format!("corrupt.{n}"));
        n += 1;
    }
    Ok(candidate)
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;
    use chrono::NaiveDate;

    fn unique_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("attendance_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let store = load_data(&unique_path("missing")).await.unwrap();
        assert!(store.subjects().is_empty());
        assert_eq!(store.selected(), None);
    }

    #[tokio::test]
    async fn persisted_snapshot_reloads_equal() {
        let path = unique_path("roundtrip");
        let mut store = AttendanceStore::default();
        store.add_subject("Math").unwrap();
        store.add_subject("Art").unwrap();
        store.select_subject("Math").unwrap();
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        store.mark_attendance(day, Status::Present);
        store.mark_attendance(day.succ_opt().unwrap(), Status::Absent);

        persist_data(&path, store.subjects()).await.unwrap();
        let reloaded = load_data(&path).await.unwrap();

        assert_eq!(reloaded.subjects(), store.subjects());
        assert_eq!(reloaded.selected(), Some("Math"));
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn blob_is_a_plain_array() {
        let path = unique_path("layout");
        let mut store = AttendanceStore::default();
        store.add_subject("Math").unwrap();
        store.mark_attendance(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), Status::Absent);
        persist_data(&path, store.subjects()).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!([
                { "name": "Math", "attendance": [{ "date": "2024-03-01", "status": "absent" }] }
            ])
        );
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn malformed_file_is_moved_aside() {
        let path = unique_path("corrupt");
        std::fs::write(&path, b"{not json").unwrap();

        let store = load_data(&path).await.unwrap();
        assert!(store.subjects().is_empty());
        assert!(!path.exists());
        let aside = sibling(&path, "corrupt");
        assert_eq!(std::fs::read(&aside).unwrap(), b"{not json");
        let _ = std::fs::remove_file(&aside);
    }

    #[tokio::test]
    async fn repeated_corruption_keeps_every_copy() {
        let path = unique_path("corrupt_twice");
        std::fs::write(&path, b"first").unwrap();
        load_data(&path).await.unwrap();
        std::fs::write(&path, b"second").unwrap();
        load_data(&path).await.unwrap();

        let first = sibling(&path, "corrupt");
        let second = sibling(&path, "corrupt.1");
        assert_eq!(std::fs::read(&first).unwrap(), b"first");
        assert_eq!(std::fs::read(&second).unwrap(), b"second");
        let _ = std::fs::remove_file(&first);
        let _ = std::fs::remove_file(&second);
    }

    #[tokio::test]
    async fn unreadable_data_is_moved_aside_before_any_save() {
        // A directory at the data path fails to read with something other than NotFound.
        let path = unique_path("unreadable");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), b"history").unwrap();

        let store = load_data(&path).await.unwrap();
        assert!(store.subjects().is_empty());
        let aside = sibling(&path, "corrupt");
        assert_eq!(std::fs::read(aside.join("keep")).unwrap(), b"history");

        persist_data(&path, store.subjects()).await.unwrap();
        assert_eq!(std::fs::read(aside.join("keep")).unwrap(), b"history");
        let _ = std::fs::remove_dir_all(&aside);
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn failed_save_reports_500_and_keeps_previous_blob() {
        let path = unique_path("failed_save");
        let mut store = AttendanceStore::default();
        store.add_subject("Math").unwrap();
        persist_data(&path, store.subjects()).await.unwrap();
        let before = std::fs::read(&path).unwrap();

        // Occupy the temp name with a directory so the write step fails.
        let tmp = sibling(&path, "tmp");
        std::fs::create_dir(&tmp).unwrap();
        store.add_subject("Art").unwrap();

        let err = persist_data(&path, store.subjects())
            .await
            .err()
            .expect("save should fail");
        assert_eq!(err.status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(std::fs::read(&path).unwrap(), before);

        let _ = std::fs::remove_dir(&tmp);
        let _ = std::fs::remove_file(&path);
    }
}
