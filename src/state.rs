use crate::session::Session;
use crate::storage::MemoryStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub session: Arc<Mutex<Session<MemoryStore>>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, session: Session<MemoryStore>) -> Self {
        Self {
            data_path,
            session: Arc::new(Mutex::new(session)),
        }
    }
}
