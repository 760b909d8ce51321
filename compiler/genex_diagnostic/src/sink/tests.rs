use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_captures_in_order() {
    let sink = BufferSink::new();
    sink.report_error("first");
    sink.report_error("second");
    assert_eq!(sink.messages(), vec!["first", "second"]);
    assert_eq!(sink.len(), 2);
}

#[test]
fn buffer_take_empties() {
    let sink = BufferSink::new();
    sink.report_error("only");
    assert_eq!(sink.take(), vec!["only"]);
    assert!(sink.is_empty());
}

#[test]
fn shared_sink_reports_through_trait_object() {
    let buffer = Arc::new(BufferSink::new());
    let shared: SharedSink = buffer.clone();
    shared.report_error("via arc");
    assert_eq!(buffer.messages(), vec!["via arc"]);
}

#[test]
fn silent_and_tracing_sinks_do_not_panic() {
    SilentSink.report_error("dropped");
    TracingSink.report_error("logged");
}
