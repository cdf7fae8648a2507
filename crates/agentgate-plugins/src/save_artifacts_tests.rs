use std::sync::Arc;

use tracing::Level;

use super::*;
use crate::test_support::{CapturedLogs, RecordingArtifactService};
use agentgate_protocols::Blob;
use agentgate_services::InMemoryArtifactService;

fn context(store: Option<Arc<dyn ArtifactService>>) -> InvocationContext {
    let ctx = InvocationContext::new("inv1", "movie_pitch_agent", "user-1", "session-1");
    match store {
        Some(store) => ctx.with_artifact_service(store),
        None => ctx,
    }
}

fn inline(data: &[u8], mime: Option<&str>, name: Option<&str>) -> Part {
    Part::inline_data(Blob {
        data: data.to_vec(),
        mime_type: mime.map(str::to_string),
        display_name: name.map(str::to_string),
    })
}

#[test]
fn test_generated_filename_format() {
    assert_eq!(generated_filename("inv1", 0), "artifact_inv1_0.txt");
    assert_eq!(generated_filename("abc-def", 12), "artifact_abc-def_12.txt");
}

#[test]
fn test_default_name() {
    assert_eq!(SaveArtifactsPlugin::new().name(), "save_artifacts_plugin");
    assert_eq!(SaveArtifactsPlugin::with_name("custom").name(), "custom");
}

#[tokio::test]
async fn test_generated_name_and_default_mime_scenario() {
    let (logs, _guard) = CapturedLogs::install();
    let store = Arc::new(RecordingArtifactService::new());
    let ctx = context(Some(store.clone()));
    let output = Content::model(vec![
        Part::text("hello"),
        inline(b"PNGDATA", Some(""), Some("")),
    ]);
    let before = output.clone();

    let signal = SaveArtifactsPlugin::new().on_agent_output(&ctx, &output).await;

    assert_eq!(signal, OutputSignal::Unmodified);
    assert_eq!(output, before);

    let calls = store.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].filename, "artifact_inv1_1.txt");
    assert_eq!(calls[0].app_name, "movie_pitch_agent");
    assert_eq!(calls[0].user_id, "user-1");
    assert_eq!(calls[0].session_id, "session-1");
    let stored = calls[0].artifact.as_inline_data().unwrap();
    assert_eq!(stored.mime_type.as_deref(), Some("text/plain"));
    assert_eq!(stored.data, b"PNGDATA");

    assert!(logs.contains(Level::INFO, "generated filename"));
    assert_eq!(logs.count(Level::WARN), 1);
    assert!(logs.contains(Level::WARN, "Empty MIME type"));
}

#[tokio::test]
async fn test_declared_name_and_mime_pass_through() {
    let store = Arc::new(RecordingArtifactService::new());
    let ctx = context(Some(store.clone()));
    let output = Content::new(vec![inline(b"\x89PNG", Some("image/png"), Some("poster.png"))]);

    let report = SaveArtifactsPlugin::new().capture(&ctx, &output).await;

    assert_eq!(
        report.outcomes(),
        &[PartOutcome::Saved {
            index: 0,
            filename: "poster.png".to_string(),
            mime_type: "image/png".to_string(),
            version: 0,
            name_generated: false,
            mime_defaulted: false,
        }]
    );
    let calls = store.calls();
    assert_eq!(calls[0].filename, "poster.png");
    assert_eq!(
        calls[0].artifact.as_inline_data().unwrap().mime_type.as_deref(),
        Some("image/png")
    );
}

#[tokio::test]
async fn test_whitespace_mime_and_missing_name_are_defaulted() {
    let store = Arc::new(RecordingArtifactService::new());
    let ctx = context(Some(store.clone()));
    let output = Content::new(vec![
        inline(b"a", None, None),
        inline(b"b", Some("  \t"), Some("   ")),
    ]);

    let report = SaveArtifactsPlugin::new().capture(&ctx, &output).await;

    let calls = store.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].filename, "artifact_inv1_0.txt");
    assert_eq!(calls[1].filename, "artifact_inv1_1.txt");
    for call in &calls {
        assert_eq!(
            call.artifact.as_inline_data().unwrap().mime_type.as_deref(),
            Some("text/plain")
        );
    }
    assert!(report.outcomes().iter().all(|o| matches!(
        o,
        PartOutcome::Saved {
            name_generated: true,
            mime_defaulted: true,
            ..
        }
    )));
}

#[tokio::test]
async fn test_text_only_output_makes_no_store_calls() {
    let store = Arc::new(RecordingArtifactService::new());
    let ctx = context(Some(store.clone()));
    let output = Content::new(vec![Part::text("one"), Part::text("two")]);

    let plugin = SaveArtifactsPlugin::new();
    let report = plugin.capture(&ctx, &output).await;
    let signal = plugin.on_agent_output(&ctx, &output).await;

    assert!(store.calls().is_empty());
    assert_eq!(
        report.outcomes(),
        &[
            PartOutcome::Skipped { index: 0 },
            PartOutcome::Skipped { index: 1 }
        ]
    );
    assert!(signal.is_unmodified());
}

#[tokio::test]
async fn test_empty_output_is_unmodified() {
    let store = Arc::new(RecordingArtifactService::new());
    let ctx = context(Some(store.clone()));

    let plugin = SaveArtifactsPlugin::new();
    let report = plugin.capture(&ctx, &Content::default()).await;
    let signal = plugin.on_agent_output(&ctx, &Content::default()).await;

    assert_eq!(report, CaptureReport::Processed(Vec::new()));
    assert_eq!(signal, OutputSignal::Unmodified);
    assert!(store.calls().is_empty());
}

#[tokio::test]
async fn test_missing_store_warns_once_and_skips() {
    let (logs, _guard) = CapturedLogs::install();
    let ctx = context(None);
    let output = Content::new(vec![
        inline(b"x", None, None),
        inline(b"y", Some("image/png"), Some("y.png")),
    ]);

    let plugin = SaveArtifactsPlugin::new();
    let signal = plugin.on_agent_output(&ctx, &output).await;

    assert_eq!(signal, OutputSignal::Unmodified);
    assert_eq!(logs.count(Level::WARN), 1);
    assert!(logs.contains(Level::WARN, "Artifact service is not set"));
    assert_eq!(logs.count(Level::INFO), 0);

    assert_eq!(plugin.capture(&ctx, &output).await, CaptureReport::Disabled);
}

#[tokio::test]
async fn test_failure_does_not_stop_later_parts() {
    let (logs, _guard) = CapturedLogs::install();
    let store = Arc::new(RecordingArtifactService::failing_on(&["b.bin"]));
    let ctx = context(Some(store.clone()));
    let output = Content::new(vec![
        inline(b"a", Some("application/octet-stream"), Some("a.bin")),
        inline(b"b", Some("application/octet-stream"), Some("b.bin")),
        Part::text("between"),
        inline(b"c", Some("application/octet-stream"), Some("c.bin")),
    ]);
    let before = output.clone();

    let plugin = SaveArtifactsPlugin::new();
    let report = plugin.capture(&ctx, &output).await;

    let filenames: Vec<String> = store.calls().into_iter().map(|c| c.filename).collect();
    assert_eq!(filenames, vec!["a.bin", "b.bin", "c.bin"]);
    assert_eq!(report.saved_count(), 2);
    assert_eq!(report.failed_count(), 1);
    assert!(matches!(
        &report.outcomes()[1],
        PartOutcome::Failed { index: 1, filename, error }
            if filename == "b.bin" && error.contains("store offline")
    ));
    assert_eq!(report.outcomes()[2], PartOutcome::Skipped { index: 2 });
    assert_eq!(logs.count(Level::ERROR), 1);

    let signal = plugin.on_agent_output(&ctx, &output).await;
    assert_eq!(signal, OutputSignal::Unmodified);
    assert_eq!(output, before);
}

#[tokio::test]
async fn test_output_message_is_not_mutated() {
    let store = Arc::new(RecordingArtifactService::new());
    let ctx = context(Some(store.clone()));
    let output = Content::model(vec![inline(b"raw", None, None)]);

    SaveArtifactsPlugin::new().on_agent_output(&ctx, &output).await;

    let blob = output.parts[0].as_inline_data().unwrap();
    assert!(blob.mime_type.is_none());
    assert!(blob.display_name.is_none());
    assert_eq!(
        store.calls()[0].artifact.as_inline_data().unwrap().mime_type.as_deref(),
        Some("text/plain")
    );
}

#[tokio::test]
async fn test_versions_accumulate_in_real_store() {
    let store = Arc::new(InMemoryArtifactService::new());
    let ctx = context(Some(store.clone()));
    let output = Content::new(vec![inline(b"draft", Some("text/markdown"), Some("pitch.md"))]);

    let plugin = SaveArtifactsPlugin::new();
    plugin.capture(&ctx, &output).await;
    let second = plugin.capture(&ctx, &output).await;

    assert!(matches!(
        second.outcomes()[0],
        PartOutcome::Saved { version: 1, .. }
    ));
    let loaded = store
        .load_artifact("movie_pitch_agent", "user-1", "session-1", "pitch.md", None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        loaded.as_inline_data().unwrap().mime_type.as_deref(),
        Some("text/markdown")
    );
}
