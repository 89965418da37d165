// tests/integration_tests/rename_tree_test.rs
use super::common::{fixed_now, setup_test_directory, sorted_file_names};
use anyhow::Result;
use datename::{FsRenamer, RenameOutcome, WalkSummary, format_outcome, rename_tree, transform};

#[test]
fn test_rename_tree_normalizes_every_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let now = fixed_now();

    let outcomes = rename_tree(
        temp_dir.path(),
        |name| transform(name, &now),
        &mut FsRenamer,
        |_| {},
    )?;

    let summary = WalkSummary::from_outcomes(&outcomes);
    assert_eq!(summary.renamed, 5);
    assert!(!summary.has_failures());

    assert_eq!(
        sorted_file_names(temp_dir.path())?,
        vec![
            "03052025_0907_.hidden",
            "03052025_0907_budget-fy-(final).xlsx",
            "03052025_0907_meeting-notes.md",
        ]
    );
    assert_eq!(
        sorted_file_names(&temp_dir.path().join("archive"))?,
        vec!["03052025_0907_old-report.txt"]
    );
    assert_eq!(
        sorted_file_names(&temp_dir.path().join("archive/2023"))?,
        vec!["03052025_0907_img_.png"]
    );
    Ok(())
}

#[test]
fn test_reported_lines_match_outcomes() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let now = fixed_now();
    let mut lines = Vec::new();

    rename_tree(
        temp_dir.path(),
        |name| transform(name, &now),
        &mut FsRenamer,
        |outcome| lines.extend(format_outcome(outcome)),
    )?;

    assert_eq!(lines.len(), 5);
    assert!(
        lines.contains(&String::from(
            "Renamed: Meeting Notes Jan 2024.md ➝ 03052025_0907_meeting-notes.md"
        )),
        "unexpected lines: {lines:?}"
    );
    Ok(())
}

#[test]
fn test_second_pass_is_only_a_restamp() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let now = fixed_now();

    rename_tree(
        temp_dir.path(),
        |name| transform(name, &now),
        &mut FsRenamer,
        |_| {},
    )?;
    let outcomes = rename_tree(
        temp_dir.path(),
        |name| transform(name, &now),
        &mut FsRenamer,
        |_| {},
    )?;

    // The old prefix loses its digits and leaves underscores behind.
    assert!(outcomes.contains(&RenameOutcome::Renamed {
        from: temp_dir.path().join("03052025_0907_meeting-notes.md"),
        to: temp_dir.path().join("03052025_0907___meeting-notes.md"),
    }));
    Ok(())
}
