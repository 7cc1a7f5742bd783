//! Tracing-backed observer for content operations.

use catalog_core::ports::{ContentEvent, ContentObserver};

/// Emits one log line per content event.
///
/// Successes and incoming requests are logged at INFO, misses at WARN,
/// failed creations and store faults at ERROR.
pub struct TracingContentObserver;

impl ContentObserver for TracingContentObserver {
    fn observe(&self, event: &ContentEvent<'_>) {
        match *event {
            ContentEvent::Requested { operation, id } => tracing::info!(
                operation = operation.as_str(),
                content_id = id.map(display),
                "Content request received"
            ),
            ContentEvent::Succeeded {
                operation,
                id,
                count,
            } => tracing::info!(
                operation = operation.as_str(),
                content_id = id.map(display),
                content_count = count,
                "Content request completed"
            ),
            ContentEvent::NotFound { operation, id } => tracing::warn!(
                operation = operation.as_str(),
                content_id = id.map(display),
                "Content not found"
            ),
            ContentEvent::CreationFailed => {
                tracing::error!(operation = "create", "Failed to create new content")
            }
            ContentEvent::StoreFault {
                operation,
                id,
                error,
            } => tracing::error!(
                operation = operation.as_str(),
                content_id = id.map(display),
                error = %error,
                "Content store fault"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use catalog_core::RepoError;
    use catalog_core::ports::Operation;
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::{Layer, layer::Context, layer::SubscriberExt};
    use uuid::Uuid;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<(Level, String)>>>);

    struct FieldNames(Vec<String>);

    impl tracing::field::Visit for FieldNames {
        fn record_debug(&mut self, field: &tracing::field::Field, _value: &dyn std::fmt::Debug) {
            self.0.push(field.name().to_string());
        }
    }

    impl<S: Subscriber> Layer<S> for Recorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut names = FieldNames(Vec::new());
            event.record(&mut names);
            self.0
                .lock()
                .unwrap()
                .push((*event.metadata().level(), names.0.join(",")));
        }
    }

    fn record(events: &[ContentEvent<'_>]) -> Vec<(Level, String)> {
        let recorder = Recorder::default();
        let subscriber = tracing_subscriber::registry().with(recorder.clone());

        tracing::subscriber::with_default(subscriber, || {
            for event in events {
                TracingContentObserver.observe(event);
            }
        });

        let lines = recorder.0.lock().unwrap().clone();
        lines
    }

    #[test]
    fn test_event_levels() {
        let id = Some(Uuid::new_v4());
        let fault = RepoError::Connection("refused".to_string());

        let lines = record(&[
            ContentEvent::Requested {
                operation: Operation::Get,
                id,
            },
            ContentEvent::NotFound {
                operation: Operation::Get,
                id,
            },
            ContentEvent::CreationFailed,
            ContentEvent::StoreFault {
                operation: Operation::Delete,
                id,
                error: &fault,
            },
        ]);

        let levels: Vec<Level> = lines.iter().map(|(level, _)| *level).collect();
        assert_eq!(
            levels,
            vec![Level::INFO, Level::WARN, Level::ERROR, Level::ERROR]
        );
        assert!(lines[0].1.contains("content_id"));
        assert!(lines[3].1.ends_with("content_id,error"));
    }

    #[test]
    fn test_list_success_carries_count_without_id() {
        let lines = record(&[ContentEvent::Succeeded {
            operation: Operation::List,
            id: None,
            count: Some(2),
        }]);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::INFO);
        assert!(lines[0].1.contains("content_count"));
        assert!(!lines[0].1.contains("content_id"));
    }
}
