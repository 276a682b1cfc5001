use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use semroute_core::IndexSummary;
use semroute_index::{Indexer, load_meta, search_skills, skill_doc_path};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "src/render/renderer.cpp", "void Renderer::draw() {}\n");
    write(dir.path(), "src/render/renderer.h", "class Renderer { void draw(); };\n");
    write(dir.path(), "src/net/socket.cpp", "int open_socket() { return 0; }\n");
    write(dir.path(), "docs/notes.txt", "not indexed\n");
    dir
}

#[tokio::test]
async fn build_then_update_is_unchanged() {
    let dir = project();
    let out = dir.path().join(".semroute/index");
    let indexer = Indexer::new(dir.path(), &out);

    let built = indexer.build().await.unwrap();
    assert_eq!(
        built,
        IndexSummary {
            scanned: 3,
            written: 3,
            unchanged: 0,
            removed: 0,
        }
    );
    assert!(skill_doc_path(&out, "src/net/socket.cpp").is_file());

    let updated = indexer.update().await.unwrap();
    assert_eq!(
        updated,
        IndexSummary {
            scanned: 3,
            written: 0,
            unchanged: 3,
            removed: 0,
        }
    );
}

#[tokio::test]
async fn update_rewrites_changed_and_drops_deleted() {
    let dir = project();
    let out = dir.path().join(".semroute/index");
    let indexer = Indexer::new(dir.path(), &out);
    indexer.build().await.unwrap();

    write(
        dir.path(),
        "src/render/renderer.cpp",
        "void Renderer::draw() {\n  clear();\n}\n",
    );
    fs::remove_file(dir.path().join("src/net/socket.cpp")).unwrap();

    let updated = indexer.update().await.unwrap();
    assert_eq!(
        updated,
        IndexSummary {
            scanned: 2,
            written: 1,
            unchanged: 1,
            removed: 1,
        }
    );

    let meta = load_meta(&out).await.unwrap();
    let keys: Vec<&str> = meta.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["src/render/renderer.cpp", "src/render/renderer.h"]);
    assert!(meta["src/render/renderer.cpp"].skill_doc.contains("Lines: 3"));
    assert!(!skill_doc_path(&out, "src/net/socket.cpp").exists());
}

#[tokio::test]
async fn non_utf8_source_is_reindexed_not_removed() {
    let dir = project();
    let out = dir.path().join(".semroute/index");
    let indexer = Indexer::new(dir.path(), &out);
    indexer.build().await.unwrap();

    // Latin-1 `é` in a comment.
    fs::write(
        dir.path().join("src/net/socket.cpp"),
        b"// caf\xe9\nint open_socket() { return 0; }\n",
    )
    .unwrap();

    let updated = indexer.update().await.unwrap();
    assert_eq!(
        updated,
        IndexSummary {
            scanned: 3,
            written: 1,
            unchanged: 2,
            removed: 0,
        }
    );
    assert!(skill_doc_path(&out, "src/net/socket.cpp").is_file());
    let meta = load_meta(&out).await.unwrap();
    assert!(meta["src/net/socket.cpp"].skill_doc.contains("Lines: 2"));
}

#[tokio::test]
async fn update_without_meta_writes_everything() {
    let dir = project();
    let out = dir.path().join("index");

    let summary = Indexer::new(dir.path(), &out).update().await.unwrap();
    assert_eq!(summary.written, 3);
    assert_eq!(summary.unchanged, 0);
}

#[tokio::test]
async fn custom_extensions_limit_the_scan() {
    let dir = project();
    let out = dir.path().join("index");

    let summary = Indexer::new(dir.path(), &out)
        .with_extensions(vec!["h".to_string()])
        .build()
        .await
        .unwrap();
    assert_eq!(summary.scanned, 1);
    assert!(skill_doc_path(&out, "src/render/renderer.h").is_file());
}

#[tokio::test]
async fn built_index_is_searchable() {
    let dir = project();
    let out = dir.path().join(".semroute/index");
    Indexer::new(dir.path(), &out).build().await.unwrap();

    let results = search_skills(&out, "socket").await.unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].path, "domains/src/net/socket_api.md");
    assert_eq!(results[0].title, "Skill Block");
    assert!(results[0].score > 0);
    assert!(results[1..].iter().all(|r| r.score == 0));
}
