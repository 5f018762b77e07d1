use crate::domain::ports::LogSink;
use std::io::Write;
use std::sync::Mutex;

/// Writes transaction log lines to stderr, keeping stdout free for receipts.
///
/// Write errors are swallowed: the log destination must never fail or block
/// the payment result.
#[derive(Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, message: &str) {
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        let _ = writeln!(handle, "{}", message);
    }
}

/// Captures log lines in memory, in write order. Intended for tests.
#[derive(Default)]
pub struct MemorySink {
    messages: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl LogSink for MemorySink {
    fn write(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_memory_sink_preserves_order() {
        let sink = MemorySink::new();
        sink.write("first");
        sink.write("second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_memory_sink_is_shareable_across_tasks() {
        let sink = Arc::new(MemorySink::new());

        let mut handles = Vec::new();
        for i in 0..8 {
            let sink = sink.clone();
            handles.push(tokio::spawn(async move {
                sink.write(&format!("message {}", i));
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(sink.messages().len(), 8);
    }
}
