use pombump::prelude::*;

/// Mock ProgressReporter for testing that captures messages
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn message_count(&self) -> usize {
        self.messages.lock().unwrap().len()
    }

    fn push(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let msg = if let Some(m) = message {
            format!("Progress: {}/{} - {}", current, total, m)
        } else {
            format!("Progress: {}/{}", current, total)
        };
        self.push(msg);
    }

    fn report_warning(&self, message: &str) {
        self.push(format!("Warning: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("Completed: {}", message));
    }
}
