use tempfile::tempdir;

use helpers::clitests;

mod helpers;

#[tokio::test]
async fn cli_check() {
    let dir = tempdir().unwrap();

    let server = helpers::mockserver::create().await;
    let base_uri = server.uri();

    clitests::init_cli_test(dir.path(), &base_uri, "check").run();

    server.reset().await;
}

#[tokio::test]
async fn cli_check_json() {
    let dir = tempdir().unwrap();

    let server = helpers::mockserver::create().await;
    let base_uri = server.uri();

    clitests::init_cli_test(dir.path(), &base_uri, "check-json").run();

    server.reset().await;
}

#[tokio::test]
async fn cli_check_empty_file() {
    let dir = tempdir().unwrap();

    let server = helpers::mockserver::create().await;
    let base_uri = server.uri();

    clitests::init_cli_test(dir.path(), &base_uri, "check-empty").run();

    server.reset().await;
}

#[tokio::test]
async fn cli_check_missing_file() {
    let dir = tempdir().unwrap();

    let server = helpers::mockserver::create().await;
    let base_uri = server.uri();

    clitests::init_cli_test(dir.path(), &base_uri, "check-missing-file").run();

    server.reset().await;
}
