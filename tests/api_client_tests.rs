use rvendas::api::{ApiClient, ApiError, ApiResponse, Method};
use rvendas::models::{Credentials, FilterCriteria, NewSale};
use rvendas::session::{MemorySessionStore, SessionStore};
use rust_decimal::Decimal;

mod common;
use common::{FakeApi, VALID_PASSWORD, VALID_TOKEN, VALID_USER, date, error_body};

#[test]
fn test_list_without_filters_sends_no_date_params() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    let sales = client
        .list_sales(&FilterCriteria::default())
        .expect("list succeeds");

    assert_eq!(sales.len(), 4);
    let req = api.last_request();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/vendas");
    assert!(req.query.is_empty());
}

#[test]
fn test_list_with_only_start_date_sends_only_data_inicio() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    let filters = FilterCriteria::from_inputs(Some("2024-01-01"), None).expect("valid filters");
    client.list_sales(&filters).expect("list succeeds");

    assert_eq!(
        api.last_request().query,
        vec![("dataInicio".to_string(), "2024-01-01".to_string())]
    );
}

#[test]
fn test_list_with_only_end_date_sends_only_data_fim() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    let filters = FilterCriteria::from_inputs(Some("   "), Some("2024-01-31")).expect("valid filters");
    let sales = client.list_sales(&filters).expect("list succeeds");

    assert_eq!(sales.len(), 2);
    assert_eq!(
        api.last_request().query,
        vec![("dataFim".to_string(), "2024-01-31".to_string())]
    );
}

#[test]
fn test_blank_filter_inputs_are_treated_as_absent() {
    let filters = FilterCriteria::from_inputs(Some(""), Some("")).expect("blank is valid");
    assert!(filters.is_empty());
    assert!(filters.query_params().is_empty());
}

#[test]
fn test_invalid_filter_date_is_rejected() {
    assert!(FilterCriteria::from_inputs(Some("01/02/2024"), None).is_err());
}

#[test]
fn test_list_no_content_yields_empty_collection() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    let filters = FilterCriteria::new(Some(date("2030-01-01")), None);
    let sales = client.list_sales(&filters).expect("204 is success");
    assert!(sales.is_empty());
}

#[test]
fn test_bearer_header_is_read_fresh_on_every_call() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::new();
    let client = ApiClient::new(&api, &store);

    let _ = client.list_sales(&FilterCriteria::default());
    assert_eq!(api.last_request().bearer, None);

    store.set_token(VALID_TOKEN).unwrap();
    client.list_sales(&FilterCriteria::default()).expect("authorized");
    assert_eq!(api.last_request().bearer.as_deref(), Some(VALID_TOKEN));

    client.logout().unwrap();
    let err = client.list_sales(&FilterCriteria::default()).unwrap_err();
    assert_eq!(api.last_request().bearer, None);
    assert!(err.is_auth_rejection());
}

#[test]
fn test_get_sale_by_id_not_found_is_absent() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    let found = client.get_sale_by_id(999).expect("404 is not an error");
    assert!(found.is_none());
    assert_eq!(api.last_request().path, "/vendas/999");

    let found = client.get_sale_by_id(2).expect("found");
    assert_eq!(found.map(|s| s.product_name), Some("Mouse".to_string()));
}

#[test]
fn test_get_sale_by_id_other_status_propagates() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    api.push_reply(Ok(error_body(500, "Erro Interno do Servidor", "Ocorreu um erro inesperado.")));
    let err = client.get_sale_by_id(1).unwrap_err();

    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "Ocorreu um erro inesperado.");
}

#[test]
fn test_error_body_with_message_field_is_normalized() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    api.push_status(400, r#"{"message":"Campo inválido"}"#);
    let err = client.list_sales(&FilterCriteria::default()).unwrap_err();
    assert_eq!(err, ApiError::new("Campo inválido", Some(400)));
}

#[test]
fn test_empty_error_body_uses_operation_fallback() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    api.push_status(502, "");
    let err = client.delete_sale(1).unwrap_err();
    assert_eq!(err.message, "Falha ao deletar a venda.");
    assert_eq!(err.status, Some(502));

    api.push_status(500, "<html>oops</html>");
    let err = client
        .create_sale(&NewSale {
            product_name: "Widget".into(),
            quantity_sold: 1,
            sale_date: date("2024-02-01"),
            total_value: Decimal::new(100, 2),
        })
        .unwrap_err();
    assert_eq!(err.message, "Falha ao criar nova venda.");
}

#[test]
fn test_transport_failure_has_no_status() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    api.push_reply(Err(ApiError::transport("connection refused")));
    let err = client.list_sales(&FilterCriteria::default()).unwrap_err();

    assert_eq!(err.status, None);
    assert_eq!(err.message, "connection refused");
    assert!(!err.is_auth_rejection());
}

#[test]
fn test_create_sale_returns_server_assigned_id() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    let created = client
        .create_sale(&NewSale {
            product_name: "Widget".into(),
            quantity_sold: 3,
            sale_date: date("2024-02-01"),
            total_value: Decimal::new(5990, 2),
        })
        .expect("created");

    assert_eq!(created.id, 6);
    assert_eq!(created.total_value, Decimal::new(5990, 2));

    let body = api.last_request().body.expect("json body");
    assert_eq!(body["nomeProduto"], "Widget");
    assert_eq!(body["quantidadeVendida"], 3);
    assert_eq!(body["dataVenda"], "2024-02-01");
    assert!(body.get("id").is_none());
}

#[test]
fn test_delete_sale_confirms_with_id() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    let confirmation = client.delete_sale(5).expect("deleted");
    assert_eq!(confirmation.id, 5);
    assert_eq!(confirmation.payload, None);
    assert_eq!(api.count(Method::Delete, "/vendas/5"), 1);
}

#[test]
fn test_login_stores_token_and_sends_no_bearer() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token("stale");
    let client = ApiClient::new(&api, &store);

    client
        .login(&Credentials::new(VALID_USER, VALID_PASSWORD))
        .expect("login ok");

    let req = api.last_request();
    assert_eq!(req.path, "/auth/login");
    assert_eq!(req.bearer, None);
    assert_eq!(req.body.expect("body")["usuario"], VALID_USER);
    assert_eq!(store.get_token().unwrap().as_deref(), Some(VALID_TOKEN));
}

#[test]
fn test_login_failure_clears_previous_token() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token("previous");
    let client = ApiClient::new(&api, &store);

    let err = client
        .login(&Credentials::new(VALID_USER, "wrong"))
        .unwrap_err();

    assert_eq!(err.status, Some(401));
    assert_eq!(
        err.message,
        "Usuário ou senha inválidos. Por favor, tente novamente."
    );
    assert_eq!(store.get_token().unwrap(), None);
}

#[test]
fn test_login_without_token_in_body_is_a_failure() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::new();
    let client = ApiClient::new(&api, &store);

    api.push_reply(Ok(ApiResponse::new(200, r#"{"tipo":"Bearer"}"#)));
    let err = client
        .login(&Credentials::new(VALID_USER, VALID_PASSWORD))
        .unwrap_err();

    assert_eq!(err.message, "Resposta de login sem token.");
    assert!(!store.is_authenticated().unwrap());
}

#[test]
fn test_logout_does_not_call_the_server() {
    let api = FakeApi::seeded();
    let store = MemorySessionStore::with_token(VALID_TOKEN);
    let client = ApiClient::new(&api, &store);

    client.logout().unwrap();

    assert!(api.requests().is_empty());
    assert_eq!(store.get_token().unwrap(), None);
}
