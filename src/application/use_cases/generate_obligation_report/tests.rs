use super::*;
use crate::application::use_cases::test_support::{
    id, project, set, MockProgressReporter, MockProjectRepository,
};
use crate::obligation_report::domain::{ObligationStatus, ProjectNode};

// root ── a ── c
//      └─ b
fn tree_repository() -> MockProjectRepository {
    let c = ProjectNode::leaf(project("c", "Gamma", &[]));
    let a = ProjectNode::new(project("a", "Alpha", &["c"]), vec![c]);
    let b = ProjectNode::leaf(project("b", "Beta", &[]));

    MockProjectRepository::new()
        .with_project(project("root", "Root", &["a", "b"]))
        .with_linked("root", vec![a, b])
        .with_obligations(
            "root",
            set(&[
                ("Attribution", ObligationStatus::AcknowledgedOrFulfilled),
                ("Source Code", ObligationStatus::AcknowledgedOrFulfilled),
            ]),
        )
        .with_obligations(
            "a",
            set(&[
                ("Notice", ObligationStatus::AcknowledgedOrFulfilled),
                ("Open One", ObligationStatus::Open),
            ]),
        )
        .with_obligations(
            "b",
            set(&[("Patent", ObligationStatus::AcknowledgedOrFulfilled)]),
        )
        .with_obligations(
            "c",
            set(&[
                (
                    "Source Code",
                    ObligationStatus::FulfilledAndParentMustAlsoFulfill,
                ),
                ("Escrow", ObligationStatus::FulfilledAndParentMustAlsoFulfill),
            ]),
        )
}

fn use_case(
    repository: MockProjectRepository,
) -> GenerateObligationReportUseCase<MockProjectRepository, MockProgressReporter> {
    GenerateObligationReportUseCase::new(repository, MockProgressReporter::default())
}

#[tokio::test]
async fn test_execute_builds_rows_in_tree_order() {
    let use_case = use_case(tree_repository());
    let request = ReportRequest::new(id("root"));

    let report = use_case
        .execute(&request, &AccessToken::bearer("t"), &CancellationToken::new())
        .await
        .unwrap();

    let rows: Vec<(&str, &str, &str)> = report
        .rows
        .iter()
        .map(|r| {
            (
                r.project_id.as_str(),
                r.title(),
                r.project_path.as_str(),
            )
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            ("root", "Attribution", "Root"),
            ("root", "Source Code", "Root"),
            ("a", "Notice", "Root -> Alpha"),
            ("c", "Source Code", "Root -> Alpha -> Gamma"),
            ("b", "Patent", "Root -> Beta"),
        ]
    );
}

#[tokio::test]
async fn test_execute_metadata_and_summary() {
    let use_case = use_case(tree_repository());
    let request = ReportRequest::new(id("root"));

    let report = use_case
        .execute(&request, &AccessToken::bearer("t"), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(report.metadata.root_project_id(), "root");
    assert_eq!(report.metadata.root_project_name(), "Root");
    assert_eq!(report.metadata.tool_name(), "sw360-obligations");
    assert_eq!(report.summary.projects_total, 4);
    assert_eq!(report.summary.projects_fetched, 4);
    assert!(report.summary.failed_projects.is_empty());
}

#[tokio::test]
async fn test_execute_root_without_id_uses_requested_id() {
    let root = crate::obligation_report::domain::Project::new(
        None,
        "Root".to_string(),
        None,
        vec![],
    );
    let repository = MockProjectRepository::new()
        .with_project_as("root", root)
        .with_obligations(
            "root",
            set(&[("Attribution", ObligationStatus::AcknowledgedOrFulfilled)]),
        );

    let report = use_case(repository)
        .execute(
            &ReportRequest::new(id("root")),
            &AccessToken::bearer("t"),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].project_path, "Root");
}

#[tokio::test]
async fn test_execute_no_linked_projects_yields_root_rows_only() {
    let repository = MockProjectRepository::new()
        .with_project(project("root", "Root", &[]))
        .with_obligations(
            "root",
            set(&[
                ("Attribution", ObligationStatus::AcknowledgedOrFulfilled),
                ("Pending", ObligationStatus::Open),
            ]),
        );

    let report = use_case(repository)
        .execute(
            &ReportRequest::new(id("root")),
            &AccessToken::bearer("t"),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].title(), "Attribution");
}

#[tokio::test]
async fn test_execute_root_failure_is_fatal() {
    let repository = tree_repository();
    repository
        .fail_project
        .store(true, std::sync::atomic::Ordering::SeqCst);

    let err = use_case(repository.clone())
        .execute(
            &ReportRequest::new(id("root")),
            &AccessToken::bearer("t"),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ObligationError>(),
        Some(ObligationError::ProjectFetchError { .. })
    ));
    assert!(repository.obligation_calls().is_empty());
}

#[tokio::test]
async fn test_execute_tree_failure_is_fatal() {
    let repository = tree_repository();
    repository
        .fail_linked
        .store(true, std::sync::atomic::Ordering::SeqCst);

    let err = use_case(repository.clone())
        .execute(
            &ReportRequest::new(id("root")),
            &AccessToken::bearer("t"),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    match err.downcast_ref::<ObligationError>() {
        Some(ObligationError::LinkedProjectsFetchError { project_id, details }) => {
            assert_eq!(project_id, "root");
            assert!(details.contains("403"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(repository.obligation_calls().is_empty());
}

#[tokio::test]
async fn test_execute_child_failure_drops_only_that_project() {
    let repository = tree_repository().with_failing_obligations("a");
    let progress = MockProgressReporter::default();
    let use_case = GenerateObligationReportUseCase::new(repository, progress.clone());

    let report = use_case
        .execute(
            &ReportRequest::new(id("root")),
            &AccessToken::bearer("t"),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(report.rows.iter().all(|r| r.project_id.as_str() != "a"));
    // c still resolves its path through a
    assert!(report
        .rows
        .iter()
        .any(|r| r.project_id.as_str() == "c" && r.project_path == "Root -> Alpha -> Gamma"));
    assert_eq!(report.summary.failed_projects, vec![id("a")]);
    assert!(progress
        .messages()
        .iter()
        .any(|m| m.contains("Could not fetch obligations for project 'a'")));
}

#[tokio::test]
async fn test_execute_cycle_is_malformed_tree() {
    let inner_root = ProjectNode::leaf(project("root", "Root", &[]));
    let a = ProjectNode::new(project("a", "Alpha", &["root"]), vec![inner_root]);
    let repository = MockProjectRepository::new()
        .with_project(project("root", "Root", &["a"]))
        .with_linked("root", vec![a]);

    let err = use_case(repository)
        .execute(
            &ReportRequest::new(id("root")),
            &AccessToken::bearer("t"),
            &CancellationToken::new(),
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ObligationError>(),
        Some(ObligationError::MalformedTree { .. })
    ));
}

#[tokio::test]
async fn test_execute_cancelled_before_start() {
    let repository = tree_repository();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = use_case(repository.clone())
        .execute(&ReportRequest::new(id("root")), &AccessToken::bearer("t"), &cancel)
        .await
        .unwrap_err();

    assert!(ObligationError::is_cancellation(&err));
    assert!(repository.obligation_calls().is_empty());
}

#[tokio::test]
async fn test_execute_cancelled_mid_fetch() {
    let cancel = CancellationToken::new();
    let repository = tree_repository().cancelling_on_obligations("a", cancel.clone());

    let err = use_case(repository.clone())
        .execute(&ReportRequest::new(id("root")), &AccessToken::bearer("t"), &cancel)
        .await
        .unwrap_err();

    assert!(ObligationError::is_cancellation(&err));
    assert_eq!(repository.obligation_calls(), vec!["root", "a"]);
}

#[tokio::test]
async fn test_execute_concurrent_fetch_preserves_order() {
    let sequential = use_case(tree_repository())
        .execute(
            &ReportRequest::new(id("root")),
            &AccessToken::bearer("t"),
            &CancellationToken::new(),
        )
        .await
        .unwrap();
    let concurrent = use_case(tree_repository())
        .execute(
            &ReportRequest::new(id("root")).with_max_concurrent_fetches(4),
            &AccessToken::bearer("t"),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(sequential.rows, concurrent.rows);
}
