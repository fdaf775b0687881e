use std::io::Write;
use std::sync::Arc;

use serde_json::json;
use shelfstats::application::StatsService;
use shelfstats::domain::books::stubs::BookStub;
use shelfstats::domain::stats::StatsSummary;
use shelfstats::infrastructure::reading_list_file::load_read_books;
use wiremock::ResponseTemplate;

use crate::helpers::{
    TestCatalog, empty_response, mock_title, spawn_catalog, volume_item, volumes_response,
};

fn service(catalog: &TestCatalog) -> StatsService {
    StatsService::new(Arc::new(catalog.client.clone()))
}

#[tokio::test]
async fn stats_for_matched_and_unmatched_books() {
    let catalog = spawn_catalog().await;
    mock_title(
        &catalog.server,
        "A",
        volumes_response(vec![volume_item("a", "A", "Fantasy", 300)]),
        1,
    )
    .await;
    mock_title(&catalog.server, "B", empty_response(), 1).await;

    let summary = service(&catalog)
        .compute_stats(vec![BookStub::new("A"), BookStub::new("B")])
        .await;

    assert_eq!(
        summary,
        StatsSummary {
            total_books_read: 2,
            total_pages_read: 300,
            average_book_length: 150,
            top_genres: vec!["Fantasy".to_string(), "Unknown".to_string()],
        }
    );
}

#[tokio::test]
async fn failed_lookups_do_not_abort_stats() {
    let catalog = spawn_catalog().await;
    mock_title(
        &catalog.server,
        "Dune",
        volumes_response(vec![volume_item("dune", "Dune", "Science Fiction", 412)]),
        1,
    )
    .await;
    mock_title(&catalog.server, "Broken", ResponseTemplate::new(500), 1).await;

    let summary = service(&catalog)
        .compute_stats(vec![BookStub::new("Broken"), BookStub::new("Dune")])
        .await;

    assert_eq!(summary.total_books_read, 2);
    assert_eq!(summary.total_pages_read, 412);
    assert_eq!(summary.average_book_length, 206);
    assert_eq!(summary.top_genres, vec!["Unknown", "Science Fiction"]);
}

#[tokio::test]
async fn duplicate_titles_query_catalog_each_time() {
    let catalog = spawn_catalog().await;
    mock_title(
        &catalog.server,
        "Emma",
        volumes_response(vec![volume_item("emma", "Emma", "Romance", 474)]),
        2,
    )
    .await;

    let summary = service(&catalog)
        .compute_stats(vec![BookStub::new("Emma"), BookStub::new("Emma")])
        .await;

    assert_eq!(summary.total_books_read, 2);
    assert_eq!(summary.total_pages_read, 948);
}

#[tokio::test]
async fn enriched_books_keep_stub_fields() {
    let catalog = spawn_catalog().await;
    mock_title(
        &catalog.server,
        "dune",
        volumes_response(vec![volume_item("dune", "Dune", "Science Fiction", 412)]),
        1,
    )
    .await;

    let report = service(&catalog)
        .compute_report(
            vec![BookStub::new("dune").with_field("id", "list-entry-7")],
            true,
        )
        .await;

    let books = report.books.expect("books requested");
    let value = serde_json::to_value(&books[0]).expect("serializable");
    assert_eq!(value["id"], "list-entry-7");
    assert_eq!(value["title"], "Dune");
    assert_eq!(value["pages"], 412);
    assert_eq!(value["genre"], "Science Fiction");
}

#[tokio::test]
async fn stats_from_user_document_file() {
    let catalog = spawn_catalog().await;
    mock_title(
        &catalog.server,
        "Dune",
        volumes_response(vec![volume_item("dune", "Dune", "Science Fiction", 412)]),
        1,
    )
    .await;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let document = json!({
        "username": "reader",
        "readingLists": {
            "read": [{ "title": "Dune", "id": "x1" }],
            "want": [{ "title": "Emma" }]
        }
    });
    file.write_all(document.to_string().as_bytes())
        .expect("write document");

    let read_books = load_read_books(file.path()).expect("load read list");
    let summary = service(&catalog).compute_stats(read_books).await;

    assert_eq!(summary.total_books_read, 1);
    assert_eq!(summary.average_book_length, 412);
    assert_eq!(summary.top_genres, vec!["Science Fiction"]);
}

#[tokio::test]
async fn item_without_volume_info_keeps_stub_title() {
    let catalog = spawn_catalog().await;
    mock_title(
        &catalog.server,
        "Obscure Zine",
        ResponseTemplate::new(200).set_body_json(json!({ "items": [{ "id": "bare" }] })),
        1,
    )
    .await;

    let report = service(&catalog)
        .compute_report(vec![BookStub::new("Obscure Zine")], true)
        .await;

    let books = report.books.expect("books requested");
    assert_eq!(books[0].title(), "Obscure Zine");
    assert_eq!(books[0].genre(), "Unknown");
    assert_eq!(report.stats.total_books_read, 1);
}
