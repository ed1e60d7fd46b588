use crate::errors::AppError;
use crate::store::AttendanceStore;
use crate::storage::persist_data;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub store: Arc<Mutex<AttendanceStore>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, store: AttendanceStore) -> Self {
        Self {
            data_path,
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Writes the full snapshot. Called after every mutation while the lock is held.
    pub async fn save(&self, store: &AttendanceStore) -> Result<(), AppError> {
        persist_data(&self.data_path, store.subjects()).await
    }
}
