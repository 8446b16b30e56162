//! Integration tests for parsing and view-info extraction
//!
//! These tests run real layout XML through the parser and extractor.

use layoutbind::extract::{extract_view_info, ViewInfo};
use layoutbind::parser::{AttributeValue, Element, LayoutParser};
use std::path::{Path, PathBuf};

/// Get the path to the layout fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/layouts")
}

fn extract(layout: &str) -> Vec<ViewInfo> {
    let root = LayoutParser::new()
        .parse(Path::new("layout.xml"), layout)
        .expect("Failed to parse layout");
    extract_view_info(&root)
}

fn pairs(infos: &[ViewInfo]) -> Vec<(&str, &str)> {
    infos
        .iter()
        .map(|v| (v.class_name.as_str(), v.id.as_str()))
        .collect()
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[test]
fn test_linear_layout_with_two_views() {
    let infos = extract(
        r#"<LinearLayout>
               <TextView android:id="@+id/title"/>
               <Button android:id="@+id/submit"/>
           </LinearLayout>"#,
    );

    // The root has no identifier and contributes nothing
    assert_eq!(
        infos,
        vec![ViewInfo::new("TextView", "title"), ViewInfo::new("Button", "submit")]
    );
}

#[test]
fn test_profile_fixture() {
    let fixture = fixtures_path().join("item_profile.xml");
    let contents = std::fs::read_to_string(&fixture).expect("Failed to read fixture");

    let root = LayoutParser::new().parse(&fixture, &contents).unwrap();
    let infos = extract_view_info(&root);

    assert_eq!(
        pairs(&infos),
        vec![
            ("androidx.constraintlayout.widget.ConstraintLayout", "profile_root"),
            ("ImageView", "avatar"),
            ("TextView", "name"),
            ("TextView", "email"),
            ("com.example.widget.BadgeView", "badge"),
        ]
    );
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_preorder_with_interleaved_depths() {
    let infos = extract(
        r#"<FrameLayout android:id="@+id/outer">
               <LinearLayout android:id="@+id/column">
                   <TextView android:id="@+id/first"/>
                   <LinearLayout>
                       <TextView android:id="@+id/second"/>
                   </LinearLayout>
               </LinearLayout>
               <TextView android:id="@+id/third"/>
           </FrameLayout>"#,
    );

    let ids: Vec<_> = infos.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["outer", "column", "first", "second", "third"]);
}

#[test]
fn test_id_reference_attributes_are_not_identifiers() {
    // Only android:id names a view; @id/ references elsewhere are ignored
    let infos = extract(
        r#"<RelativeLayout>
               <TextView android:layout_below="@id/header" />
               <TextView android:id="@+id/header" />
           </RelativeLayout>"#,
    );

    assert_eq!(pairs(&infos), vec![("TextView", "header")]);
}

// ============================================================================
// Filtering and prefix handling
// ============================================================================

#[test]
fn test_views_without_id_still_visited() {
    let infos = extract(
        r#"<ScrollView>
               <LinearLayout>
                   <CheckBox android:id="@+id/agree"/>
               </LinearLayout>
           </ScrollView>"#,
    );

    assert_eq!(pairs(&infos), vec![("CheckBox", "agree")]);
}

#[test]
fn test_id_without_prefix_kept_as_is() {
    let infos = extract(r#"<Switch android:id="toggle"/>"#);
    assert_eq!(pairs(&infos), vec![("Switch", "toggle")]);
}

#[test]
fn test_undecodable_id_skips_only_that_view() {
    let infos = extract(
        r#"<LinearLayout>
               <TextView android:id="@+id/&nope;">
                   <Button android:id="@+id/inner"/>
               </TextView>
           </LinearLayout>"#,
    );

    assert_eq!(pairs(&infos), vec![("Button", "inner")]);
}

#[test]
fn test_duplicate_ids_are_not_deduplicated() {
    let infos = extract(
        r#"<LinearLayout>
               <TextView android:id="@+id/label"/>
               <EditText android:id="@+id/label"/>
           </LinearLayout>"#,
    );

    assert_eq!(pairs(&infos), vec![("TextView", "label"), ("EditText", "label")]);
}

// ============================================================================
// Totality on hand-built trees
// ============================================================================

#[test]
fn test_single_node_without_attributes() {
    assert!(extract_view_info(&Element::new("View")).is_empty());
}

#[test]
fn test_raw_id_on_hand_built_tree() {
    let tree = Element::new("LinearLayout")
        .with_child(Element::new("TextView").with_attribute("android:id", AttributeValue::Raw(vec![0xff])))
        .with_child(Element::new("Button").with_attribute("android:id", "@+id/ok"));

    assert_eq!(extract_view_info(&tree), vec![ViewInfo::new("Button", "ok")]);
}

#[test]
fn test_wide_tree() {
    let mut tree = Element::new("LinearLayout");
    for i in 0..500 {
        tree = tree.with_child(Element::new("TextView").with_attribute("android:id", format!("@+id/row{i}")));
    }

    let infos = extract_view_info(&tree);

    assert_eq!(infos.len(), 500);
    assert_eq!(infos[0].id, "row0");
    assert_eq!(infos[499].id, "row499");
}

#[test]
fn test_deeply_nested_layout_from_xml() {
    let depth = 50_000;
    let layout = format!(
        "{}<TextView android:id=\"@+id/leaf\"/>{}",
        "<FrameLayout>".repeat(depth),
        "</FrameLayout>".repeat(depth)
    );

    assert_eq!(pairs(&extract(&layout)), vec![("TextView", "leaf")]);
}
