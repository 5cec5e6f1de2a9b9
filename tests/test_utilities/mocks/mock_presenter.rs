use artifact_scan::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that keeps everything it was asked to present
#[derive(Default, Clone)]
pub struct MockPresenter {
    pub presented: Arc<Mutex<Vec<String>>>,
}

impl MockPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_presented(&self) -> Vec<String> {
        self.presented.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.presented.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
