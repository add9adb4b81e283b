//! End-to-end tests for `lilc unparse`.

use std::path::Path;
use std::process::{Command, Output};

const TREE: &str = r#"{
    "decls": [
        { "Struct": { "name": "Point", "members": [
            { "Var": { "ty": "Int", "name": "x" } },
            { "Var": { "ty": "Int", "name": "y" } }
        ] } },
        { "Fn": {
            "ret": "Void",
            "name": "main",
            "formals": [],
            "body": {
                "decls": [ { "Var": { "ty": "Int", "name": "count" } } ],
                "stmts": [ { "Write": { "Id": "count" } } ]
            }
        } }
    ]
}"#;

const SOURCE: &str = "struct Point {\n    int x;\n    int y;\n};\n\nvoid main() {\n    int count;\n    cout << count;\n}\n";

fn lilc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lilc"))
        .args(args)
        .output()
        .expect("failed to run lilc")
}

fn write_tree(dir: &Path, json: &str) -> String {
    let path = dir.join("tree.json");
    std::fs::write(&path, json).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn unparse_prints_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write_tree(dir.path(), TREE);

    let output = lilc(&["unparse", &tree]);

    assert!(
        output.status.success(),
        "lilc unparse failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), SOURCE);
}

#[test]
fn unparse_writes_output_file_with_indent_size() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write_tree(dir.path(), TREE);
    let out = dir.path().join("main.lil");

    let output = lilc(&[
        "unparse",
        &tree,
        "--indent-size",
        "1",
        "-o",
        out.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let contents = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        contents,
        "struct Point {\n int x;\n int y;\n};\n\nvoid main() {\n int count;\n cout << count;\n}\n"
    );
}

#[test]
fn check_passes_when_file_matches() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write_tree(dir.path(), TREE);
    let out = dir.path().join("main.lil");
    std::fs::write(&out, SOURCE).unwrap();

    let output = lilc(&["unparse", &tree, "--check", "-o", out.to_str().unwrap()]);

    assert!(
        output.status.success(),
        "check failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn check_exits_1_on_mismatch_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write_tree(dir.path(), TREE);
    let out = dir.path().join("main.lil");
    let stale = "void main() {\n}\n";
    std::fs::write(&out, stale).unwrap();

    let output = lilc(&["unparse", &tree, "--check", "-o", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not match"), "stderr: {stderr}");
    assert_eq!(std::fs::read_to_string(&out).unwrap(), stale);
}

#[test]
fn check_requires_output() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write_tree(dir.path(), TREE);

    let output = lilc(&["unparse", &tree, "--check"]);

    assert!(!output.status.success());
}

#[test]
fn invalid_tree_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write_tree(dir.path(), r#"{ "decls": [ { "Loop": {} } ] }"#);

    let output = lilc(&["unparse", &tree]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(stderr.contains("is not a valid syntax tree"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_tree_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let output = lilc(&["unparse", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to read"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write_tree(dir.path(), TREE);

    let output = lilc(&["--verbose", "unparse", &tree]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), SOURCE);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("decoded tree"), "stderr: {stderr}");
    assert!(stderr.contains("finished unparsing program"), "stderr: {stderr}");
}

#[test]
fn invalid_tree_leaves_existing_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write_tree(dir.path(), r#"{ "decls": [ { "Var": { "ty": "Int", "name": "x" } }, 7 ] }"#);
    let out = dir.path().join("main.lil");
    std::fs::write(&out, SOURCE).unwrap();

    let output = lilc(&["unparse", &tree, "-o", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), SOURCE);
}

#[test]
fn unwritable_output_reports_error_and_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write_tree(dir.path(), TREE);
    let out = dir.path().join("missing").join("main.lil");

    let output = lilc(&["unparse", &tree, "-o", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to write"), "stderr: {stderr}");
    assert!(!out.exists());
    assert!(output.stdout.is_empty());
}

#[test]
fn negative_int_literal_is_not_a_valid_tree() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write_tree(
        dir.path(),
        r#"{ "decls": [ { "Fn": { "ret": "Void", "name": "main", "formals": [],
            "body": { "decls": [], "stmts": [ { "Write": { "IntLit": -7 } } ] } } } ] }"#,
    );

    let output = lilc(&["unparse", &tree]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("is not a valid syntax tree"));
    assert!(output.stdout.is_empty());
}
