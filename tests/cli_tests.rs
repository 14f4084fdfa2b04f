mod common;

use common::{UNREACHABLE_API, VALID_TOKEN, rv, setup_storage};
use predicates::str::contains;
use rvendas::db::pool::DbPool;
use rvendas::session::{SessionStore, SqliteSessionStore};

fn seed_token(storage: &str) {
    let pool = DbPool::open(storage).expect("open storage");
    SqliteSessionStore::new(&pool)
        .set_token(VALID_TOKEN)
        .expect("store token");
}

#[test]
fn test_init_in_test_mode() {
    let storage = setup_storage("cli_init");

    rv().args(["--storage", &storage, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&storage).exists());
}

#[test]
fn test_status_without_session() {
    let storage = setup_storage("cli_status_none");

    rv().args(["--storage", &storage, "status"])
        .assert()
        .success()
        .stdout(contains("Nenhuma sessão ativa"));
}

#[test]
fn test_logout_always_succeeds_and_is_logged() {
    let storage = setup_storage("cli_logout");

    rv().args(["--storage", &storage, "logout"])
        .assert()
        .success()
        .stdout(contains("Sessão encerrada."));

    rv().args(["--storage", &storage, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("logout"));
}

#[test]
fn test_logout_clears_seeded_session() {
    let storage = setup_storage("cli_logout_seeded");
    seed_token(&storage);

    rv().args(["--storage", &storage, "status"])
        .assert()
        .success()
        .stdout(contains("Sessão ativa"));

    rv().args(["--storage", &storage, "logout"]).assert().success();

    rv().args(["--storage", &storage, "status"])
        .assert()
        .success()
        .stdout(contains("Nenhuma sessão ativa"));
}

#[test]
fn test_find_blank_id_is_rejected() {
    let storage = setup_storage("cli_find_blank");

    rv().args(["--storage", &storage, "--api-url", UNREACHABLE_API, "find", "  "])
        .assert()
        .failure()
        .stderr(contains("Por favor, insira um ID de venda."));
}

#[test]
fn test_add_without_product_is_rejected() {
    let storage = setup_storage("cli_add_missing");

    rv().args([
        "--storage",
        &storage,
        "--api-url",
        UNREACHABLE_API,
        "add",
        "--quantity",
        "2",
        "--date",
        "2024-02-01",
        "--value",
        "10",
    ])
    .assert()
    .failure()
    .stderr(contains("O nome do produto é obrigatório."));
}

#[test]
fn test_list_with_invalid_date() {
    let storage = setup_storage("cli_list_bad_date");
    seed_token(&storage);

    rv().args([
        "--storage",
        &storage,
        "--api-url",
        UNREACHABLE_API,
        "list",
        "--from",
        "2024-13-01",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format"));
}

#[test]
fn test_list_requires_session() {
    let storage = setup_storage("cli_list_no_session");

    rv().args(["--storage", &storage, "--api-url", UNREACHABLE_API, "list"])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_list_network_failure_keeps_session() {
    let storage = setup_storage("cli_list_unreachable");
    seed_token(&storage);

    rv().args(["--storage", &storage, "--api-url", UNREACHABLE_API, "list"])
        .assert()
        .failure()
        .stderr(contains("Error:"));

    rv().args(["--storage", &storage, "status"])
        .assert()
        .success()
        .stdout(contains("Sessão ativa"));
}

#[test]
fn test_login_against_unreachable_api_fails() {
    let storage = setup_storage("cli_login_unreachable");

    rv().args([
        "--storage",
        &storage,
        "--api-url",
        UNREACHABLE_API,
        "login",
        "-u",
        "admin",
        "-p",
        "secret",
    ])
    .assert()
    .failure()
    .stderr(contains("Error:"));

    rv().args(["--storage", &storage, "status"])
        .assert()
        .success()
        .stdout(contains("Nenhuma sessão ativa"));
}

#[test]
fn test_config_print_shows_overrides() {
    let storage = setup_storage("cli_config_print");

    rv().args([
        "--storage",
        &storage,
        "--api-url",
        "http://vendas.test:9090",
        "config",
        "--print",
    ])
    .assert()
    .success()
    .stdout(contains("api_base_url: http://vendas.test:9090"));
}
