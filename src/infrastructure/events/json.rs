//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::BundleLoaded { artifacts } => {
                serde_json::json!({
                    "event": "bundle_loaded",
                    "command": "deploy",
                    "artifacts": artifacts,
                })
            }

            DeployEvent::Started {
                target_count,
                step_count,
                policy,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "target_count": target_count,
                    "step_count": step_count,
                    "policy": policy,
                })
            }

            DeployEvent::NoTargets => {
                serde_json::json!({
                    "event": "no_targets",
                    "command": "deploy",
                })
            }

            DeployEvent::HostStarted {
                index,
                target,
                step_count,
            } => {
                serde_json::json!({
                    "event": "host_start",
                    "command": "deploy",
                    "index": index,
                    "target": target,
                    "step_count": step_count,
                })
            }

            DeployEvent::StepStarted {
                target,
                index,
                step,
            } => {
                serde_json::json!({
                    "event": "step_start",
                    "command": "deploy",
                    "target": target,
                    "index": index,
                    "step": step,
                })
            }

            DeployEvent::StepSucceeded {
                target,
                index,
                step,
            } => {
                serde_json::json!({
                    "event": "step_ok",
                    "command": "deploy",
                    "target": target,
                    "index": index,
                    "step": step,
                })
            }

            DeployEvent::StepFailed {
                target,
                index,
                step,
                error,
            } => {
                serde_json::json!({
                    "event": "step_error",
                    "command": "deploy",
                    "target": target,
                    "index": index,
                    "step": step,
                    "kind": error.kind,
                    "error": error.message,
                })
            }

            DeployEvent::HostCompleted { index, outcome } => {
                let status = if outcome.is_success() {
                    "success"
                } else {
                    "failed"
                };
                serde_json::json!({
                    "event": "host_complete",
                    "command": "deploy",
                    "index": index,
                    "status": status,
                    "outcome": outcome,
                })
            }

            DeployEvent::HostsNotAttempted { targets } => {
                serde_json::json!({
                    "event": "not_attempted",
                    "command": "deploy",
                    "targets": targets,
                })
            }

            DeployEvent::Completed {
                succeeded,
                failed,
                not_attempted,
            } => {
                let status = if failed == 0 && not_attempted == 0 {
                    "success"
                } else if succeeded == 0 {
                    "failed"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": status,
                    "succeeded": succeeded,
                    "failed": failed,
                    "not_attempted": not_attempted,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DeploymentStep, StepRole};
    use crate::domain::policies::FailurePolicy;
    use crate::domain::ports::{ChannelError, ErrorKind};
    use crate::domain::value_objects::Target;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_outputs_start_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Started {
            target_count: 3,
            step_count: 5,
            policy: FailurePolicy::BestEffortContinue,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["target_count"], 3);
        assert_eq!(events[0]["policy"], "best-effort-continue");
    }

    #[test]
    fn json_sink_reports_step_error_kind() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::StepFailed {
            target: Target::new("10.0.0.2"),
            index: 2,
            step: DeploymentStep::CopyFile {
                role: StepRole::AppCrc,
                local: PathBuf::from("a.crc"),
                remote: "/opt/plc/Updates/a.crc".to_string(),
            },
            error: ChannelError::new(ErrorKind::TransferFailure, "No space left on device"),
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "step_error");
        assert_eq!(events[0]["target"], "10.0.0.2");
        assert_eq!(events[0]["kind"], "transfer_failure");
        assert_eq!(events[0]["step"]["action"], "copy_file");
    }

    #[test]
    fn json_sink_outputs_complete_event() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Completed {
            succeeded: 4,
            failed: 0,
            not_attempted: 0,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "complete");
        assert_eq!(events[0]["status"], "success");
        assert_eq!(events[0]["succeeded"], 4);
    }

    #[test]
    fn json_sink_outputs_partial_on_failures() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::Completed {
            succeeded: 1,
            failed: 1,
            not_attempted: 2,
        });

        assert_eq!(lines(&buffer)[0]["status"], "partial");
    }

    #[test]
    fn json_sink_outputs_no_targets() {
        let (writer, buffer) = TestWriter::new();
        let sink = JsonEventSink::with_writer(writer);

        sink.on_event(DeployEvent::NoTargets);

        assert_eq!(lines(&buffer)[0]["event"], "no_targets");
    }
}
