//! Report projection tests
//!
//! Builds PipelineRuns the way the API server returns them and checks the
//! rows the report derives from them.

use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use kubectl_tekton_imagebuild::{PipelineRun, RunRecord, RunStatus, project};
use serde_json::json;

const LABEL_KEY: &str = "imagebuild.ba.de/imagebuildschedule";

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn ts(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn pipeline_runs() -> Vec<PipelineRun> {
    serde_json::from_value(json!([
        {
            "apiVersion": "tekton.dev/v1",
            "kind": "PipelineRun",
            "metadata": {
                "name": "test-pr-1",
                "namespace": "default",
                "labels": { LABEL_KEY: "daily" },
                "creationTimestamp": ts(now() - Duration::hours(2))
            },
            "spec": { "pipelineRef": { "name": "test-pipeline" } },
            "status": {
                "conditions": [{ "type": "Succeeded", "status": "True" }],
                "startTime": ts(now() - Duration::hours(2)),
                "completionTime": ts(now() - Duration::hours(1))
            }
        },
        {
            "apiVersion": "tekton.dev/v1",
            "kind": "PipelineRun",
            "metadata": {
                "name": "test-pr-2",
                "namespace": "production",
                "labels": { LABEL_KEY: "weekly" },
                "creationTimestamp": ts(now() - Duration::hours(48))
            },
            "spec": { "pipelineSpec": { "tasks": [] } },
            "status": {
                "conditions": [{ "type": "Succeeded", "status": "Unknown", "reason": "Running" }]
            }
        }
    ]))
    .unwrap()
}

#[test]
fn test_extract_pipeline_run_info() {
    let records: Vec<RunRecord> = pipeline_runs().iter().map(RunRecord::from).collect();
    let rows = project(&records, LABEL_KEY, now());

    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].name, "test-pr-1");
    assert_eq!(rows[0].namespace, "default");
    assert_eq!(rows[0].schedule_value, "daily");
    assert_eq!(rows[0].status, RunStatus::Succeeded);
    assert_eq!(rows[0].pipeline.as_deref(), Some("test-pipeline"));
    assert_eq!(rows[0].age, "2h");
    assert_eq!(rows[0].start_time, Some(now() - Duration::hours(2)));
    assert_eq!(rows[0].completion_time, Some(now() - Duration::hours(1)));

    assert_eq!(rows[1].name, "test-pr-2");
    assert_eq!(rows[1].status, RunStatus::Running);
    assert_eq!(rows[1].schedule_value, "weekly");
    // 48h is strictly more than a day
    assert_eq!(rows[1].age, "2d");
    assert_eq!(rows[1].pipeline, None);
    assert_eq!(rows[1].completion_time, None);
}

#[test]
fn test_projection_preserves_order_and_count() {
    for count in [0usize, 1, 7, 50] {
        let records: Vec<RunRecord> = (0..count)
            .map(|i| RunRecord {
                name: format!("run-{:03}", count - i),
                namespace: "imagebuild".to_string(),
                created_at: Some(now() - Duration::minutes(i as i64 * 13)),
                ..Default::default()
            })
            .collect();

        let rows = project(&records, LABEL_KEY, now());
        assert_eq!(rows.len(), records.len());
        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(row.name, record.name);
        }
    }
}

#[test]
fn test_labels_copied_verbatim() {
    let records: Vec<RunRecord> = pipeline_runs().iter().map(RunRecord::from).collect();
    let rows = project(&records, "some.other/label", now());

    assert_eq!(rows[0].schedule_value, "");
    assert_eq!(rows[0].labels, records[0].labels);
    assert_eq!(rows[0].labels.get(LABEL_KEY).map(String::as_str), Some("daily"));
}
