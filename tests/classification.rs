// tests/classification.rs

mod common;

use common::text_file;
use filesift::{filter, FileMetadata, FilterConfig};
use std::collections::{BTreeSet, HashSet};

fn assert_partition(files: &[FileMetadata], included: &[String], excluded: &[String]) {
    let inc: HashSet<&String> = included.iter().collect();
    let exc: HashSet<&String> = excluded.iter().collect();
    assert!(inc.is_disjoint(&exc), "included and excluded overlap");
    let all: HashSet<&String> = inc.union(&exc).copied().collect();
    let input: HashSet<&String> = files.iter().map(|f| &f.path).collect();
    assert_eq!(all, input, "partition does not cover the input");
}

#[test]
fn test_node_modules_scenario() -> anyhow::Result<()> {
    let config = FilterConfig {
        include: Some(vec!["**/*.ts".into()]),
        exclude: Some(vec!["**/node_modules/**".into()]),
        ..Default::default()
    };
    let files = vec![text_file("src/a.ts", 10), text_file("node_modules/x/a.ts", 10)];

    let result = filter(&config, &files)?;

    assert_eq!(result.included, vec!["src/a.ts"]);
    assert_eq!(result.excluded, vec!["node_modules/x/a.ts"]);
    assert!(result.reasons["node_modules/x/a.ts"].contains("exclude pattern"));
    Ok(())
}

#[test]
fn test_max_size_scenario() -> anyhow::Result<()> {
    let config = FilterConfig {
        max_size: Some(1000),
        ..Default::default()
    };
    let files = vec![text_file("f.ts", 1000), text_file("g.ts", 1001)];

    let result = filter(&config, &files)?;

    assert_eq!(result.included, vec!["f.ts"]);
    assert_eq!(result.excluded, vec!["g.ts"]);
    assert!(result.reasons["g.ts"].contains("above maximum"));
    Ok(())
}

#[test]
fn test_min_size_boundary_is_inclusive() -> anyhow::Result<()> {
    let config = FilterConfig {
        min_size: Some(10),
        ..Default::default()
    };
    let files = vec![text_file("at.txt", 10), text_file("under.txt", 9)];

    let result = filter(&config, &files)?;

    assert_eq!(result.included, vec!["at.txt"]);
    assert!(result.reasons["under.txt"].contains("below minimum"));
    Ok(())
}

#[test]
fn test_empty_content_type_set_rejects_everything() -> anyhow::Result<()> {
    let config = FilterConfig {
        include: Some(vec!["**".into()]),
        max_size: Some(1_000_000),
        content_types: Some(BTreeSet::new()),
        ..Default::default()
    };
    let files = vec![
        text_file("a.txt", 1),
        FileMetadata::new("b.png", 1, "image/png"),
        FileMetadata::new("c", 1, ""),
    ];

    let result = filter(&config, &files)?;

    assert!(result.included.is_empty());
    assert_eq!(result.excluded.len(), 3);
    for path in &result.excluded {
        assert!(result.reasons[path].starts_with("content type not allowed"));
    }
    Ok(())
}

#[test]
fn test_content_type_allow_list() -> anyhow::Result<()> {
    let config = FilterConfig {
        content_types: Some(["text/plain".to_string()].into_iter().collect()),
        ..Default::default()
    };
    let files = vec![
        text_file("a.txt", 1),
        FileMetadata::new("b.txt", 1, "text/plain; charset=utf-8"),
        FileMetadata::new("c.png", 1, "image/png"),
    ];

    let result = filter(&config, &files)?;

    assert_eq!(result.included, vec!["a.txt", "b.txt"]);
    assert_eq!(result.reasons["c.png"], "content type not allowed: image/png");
    Ok(())
}

#[test]
fn test_no_include_patterns_means_no_restriction() -> anyhow::Result<()> {
    let config = FilterConfig {
        exclude: Some(vec!["*.log".into()]),
        ..Default::default()
    };
    let files = vec![text_file("a.rs", 1), text_file("deep/b.md", 1), text_file("c.log", 1)];

    let result = filter(&config, &files)?;

    assert_eq!(result.included, vec!["a.rs", "deep/b.md"]);
    assert_eq!(result.excluded, vec!["c.log"]);
    Ok(())
}

#[test]
fn test_first_rejecting_filter_supplies_the_reason() -> anyhow::Result<()> {
    let config = FilterConfig {
        include: Some(vec!["src/**".into()]),
        exclude: Some(vec!["**/*.bak".into()]),
        max_size: Some(10),
        ..Default::default()
    };
    // Fails all three filters; the include group comes first in the pipeline.
    let files = vec![text_file("lib/old.bak", 500), text_file("src/old.bak", 500)];

    let result = filter(&config, &files)?;

    assert_eq!(result.reasons["lib/old.bak"], "does not match any include pattern");
    assert_eq!(result.reasons["src/old.bak"], "exclude pattern: **/*.bak");
    Ok(())
}

#[test]
fn test_malformed_file_is_isolated() -> anyhow::Result<()> {
    let config = FilterConfig {
        include: Some(vec!["**/*.ts".into()]),
        ..Default::default()
    };
    let files = vec![
        text_file("a.ts", 1),
        text_file("broken.ts", -4),
        text_file("", 3),
        text_file("b.ts", 2),
    ];

    let result = filter(&config, &files)?;

    assert_eq!(result.included, vec!["a.ts", "b.ts"]);
    assert_eq!(result.reasons["broken.ts"], "invalid metadata: negative size -4");
    assert_eq!(result.reasons[""], "invalid metadata: empty path");
    assert_partition(&files, &result.included, &result.excluded);
    Ok(())
}

#[test]
fn test_every_file_classified_once_and_explained() -> anyhow::Result<()> {
    let config = FilterConfig {
        include: Some(vec!["**/*.ts".into(), "!**/*.test.ts".into()]),
        exclude: Some(vec!["**/node_modules/**".into()]),
        max_size: Some(10_000),
        content_types: Some(["text/plain".to_string()].into_iter().collect()),
        ..Default::default()
    };
    let files = common::synthetic_files(600);

    let result = filter(&config, &files)?;

    assert_partition(&files, &result.included, &result.excluded);
    assert_eq!(result.reasons.len(), result.excluded.len());
    for path in &result.excluded {
        assert!(!result.reasons[path].is_empty());
    }
    Ok(())
}

#[test]
fn test_repeated_paths_keep_first_classification() -> anyhow::Result<()> {
    let config = FilterConfig {
        max_size: Some(100),
        ..Default::default()
    };
    let files = vec![text_file("a", 1), text_file("a", 1000), text_file("b", 1)];

    let result = filter(&config, &files)?;

    assert_eq!(result.included, vec!["a", "b"]);
    assert!(result.excluded.is_empty());
    Ok(())
}

#[test]
fn test_inverted_size_range_excludes_everything() -> anyhow::Result<()> {
    let config = FilterConfig {
        min_size: Some(1_000),
        max_size: Some(100),
        ..Default::default()
    };
    let files = vec![text_file("tiny", 10), text_file("mid", 500), text_file("huge", 5_000)];

    let result = filter(&config, &files)?;

    assert!(result.included.is_empty());
    assert_eq!(result.reasons["tiny"], "below minimum: 10 < 1000 bytes");
    assert_eq!(result.reasons["mid"], "below minimum: 500 < 1000 bytes");
    assert_eq!(result.reasons["huge"], "above maximum: 5000 > 100 bytes");
    Ok(())
}

#[test]
fn test_unbalanced_brace_fails_the_call() {
    let config = FilterConfig {
        include: Some(vec!["src/{a,b".into()]),
        ..Default::default()
    };
    let err = filter(&config, &[text_file("src/a", 1)]).unwrap_err();
    assert!(err.to_string().contains("src/{a,b"));
}
