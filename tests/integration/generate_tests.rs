//! Integration tests for the generation pipeline
//!
//! These tests run the generator against the layout fixtures and check the
//! files it writes.

use layoutbind::config::Config;
use layoutbind::generate::Generator;
use layoutbind::render::OutputSyntax;
use std::path::{Path, PathBuf};

/// Get the path to the layout fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/layouts")
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

#[test]
fn test_generate_kotlin_from_fixtures() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temp.path().join("out");

    let config = Config::default();
    let summary = Generator::new(&config).run(&fixtures_path(), &output).unwrap();

    // README.txt is not a layout, land/ is not scanned without --recursive
    assert_eq!(summary.generated.len(), 2);
    assert!(!summary.has_failures());
    assert_eq!(summary.syntax, OutputSyntax::Kotlin);

    let main = read(&output.join("activity_main.xml.kt"));
    assert_eq!(
        main,
        "private lateinit var title: TextView\n\
         private lateinit var submit: Button\n\
         \n\
         fun bindView(view: View) {\n\
         \x20   title = view.findViewById(R.id.title)\n\
         \x20   submit = view.findViewById(R.id.submit)\n\
         }\n"
    );

    let profile = read(&output.join("item_profile.xml.kt"));
    assert!(profile.contains("private lateinit var badge: com.example.widget.BadgeView"));
    assert!(!output.join("land").exists());
}

#[test]
fn test_generate_java_recursive() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temp.path().join("out");

    let config = Config {
        syntax: OutputSyntax::Java,
        recursive: true,
        ..Config::default()
    };
    let summary = Generator::new(&config).run(&fixtures_path(), &output).unwrap();

    assert_eq!(summary.generated.len(), 3);

    let land = read(&output.join("land").join("activity_main.xml.java"));
    assert_eq!(
        land,
        "private TextView title;\n\
         \n\
         public void bindView(View view) {\n\
         \x20   title = view.findViewById(R.id.title);\n\
         }\n"
    );
}

#[test]
fn test_generate_is_repeatable() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temp.path().join("out");
    let config = Config::default();

    Generator::new(&config).run(&fixtures_path(), &output).unwrap();
    let first = read(&output.join("item_profile.xml.kt"));

    Generator::new(&config).run(&fixtures_path(), &output).unwrap();
    let second = read(&output.join("item_profile.xml.kt"));

    assert_eq!(first, second);
}

#[test]
fn test_generate_with_exclude() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let output = temp.path().join("out");

    let config = Config {
        exclude: vec!["item_*".to_string()],
        ..Config::default()
    };
    let summary = Generator::new(&config).run(&fixtures_path(), &output).unwrap();

    assert_eq!(summary.generated.len(), 1);
    assert!(output.join("activity_main.xml.kt").exists());
    assert!(!output.join("item_profile.xml.kt").exists());
}

#[test]
fn test_generate_reports_view_counts() {
    let temp = tempfile::tempdir().expect("Failed to create temp dir");
    let config = Config::default();

    let summary = Generator::new(&config)
        .with_dry_run(true)
        .run(&fixtures_path(), &temp.path().join("out"))
        .unwrap();

    let counts: Vec<_> = summary
        .generated
        .iter()
        .map(|f| (f.source.file_name().unwrap().to_string_lossy().to_string(), f.views.len()))
        .collect();

    assert_eq!(
        counts,
        vec![("activity_main.xml".to_string(), 2), ("item_profile.xml".to_string(), 5)]
    );
    assert_eq!(summary.total_views(), 7);
}
