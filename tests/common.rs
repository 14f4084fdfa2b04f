#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rvendas::api::{ApiError, ApiRequest, ApiResponse, Method, Transport};
use rvendas::models::{NewSale, SaleRecord};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Nothing listens here; every request fails at the transport level.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

pub const VALID_USER: &str = "admin";
pub const VALID_PASSWORD: &str = "secret";
pub const VALID_TOKEN: &str = "token-abc";

pub fn rv() -> Command {
    cargo_bin_cmd!("rvendas")
}

/// Create a unique storage path inside the system temp dir and remove any existing file
pub fn setup_storage(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rvendas.sqlite", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn sale(id: u64, name: &str, qty: u32, day: &str, cents: i64) -> SaleRecord {
    SaleRecord {
        id,
        product_name: name.to_string(),
        quantity_sold: qty,
        sale_date: date(day),
        total_value: Decimal::new(cents, 2),
    }
}

/// In-memory stand-in for the sales API, speaking the same HTTP contract.
///
/// Queued replies (see [`FakeApi::push_reply`]) take precedence over the
/// simulated routes, one per request.
pub struct FakeApi {
    pub sales: RefCell<Vec<SaleRecord>>,
    pub requests: RefCell<Vec<ApiRequest>>,
    replies: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    next_id: Cell<u64>,
}

impl FakeApi {
    pub fn new(sales: Vec<SaleRecord>) -> Self {
        let next = sales.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        Self {
            sales: RefCell::new(sales),
            requests: RefCell::new(Vec::new()),
            replies: RefCell::new(VecDeque::new()),
            next_id: Cell::new(next),
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            sale(1, "Teclado", 2, "2024-01-10", 30000),
            sale(2, "Mouse", 5, "2024-01-15", 12500),
            sale(3, "Teclado", 1, "2024-02-03", 15000),
            sale(5, "Monitor", 1, "2024-03-01", 99990),
        ])
    }

    pub fn push_reply(&self, reply: Result<ApiResponse, ApiError>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn push_status(&self, status: u16, body: &str) {
        self.push_reply(Ok(ApiResponse::new(status, body)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("at least one request")
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn list_fetches(&self) -> Vec<ApiRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == Method::Get && r.path == "/vendas")
            .cloned()
            .collect()
    }

    fn route(&self, req: &ApiRequest) -> ApiResponse {
        if req.method == Method::Post && req.path == "/auth/login" {
            let body = req.body.clone().unwrap_or_default();
            if body["usuario"] == VALID_USER && body["senha"] == VALID_PASSWORD {
                return json(200, &serde_json::json!({ "token": VALID_TOKEN, "tipo": "Bearer" }));
            }
            return error_body(401, "Não Autorizado", "Usuário ou senha inválidos.");
        }

        if req.bearer.as_deref() != Some(VALID_TOKEN) {
            return ApiResponse::new(403, "");
        }

        let id = req
            .path
            .strip_prefix("/vendas/")
            .and_then(|s| s.parse::<u64>().ok());

        match (req.method, id) {
            (Method::Get, None) => {
                let param = |k: &str| {
                    req.query
                        .iter()
                        .find(|(key, _)| key == k)
                        .map(|(_, v)| date(v))
                };
                let (start, end) = (param("dataInicio"), param("dataFim"));
                let found: Vec<SaleRecord> = self
                    .sales
                    .borrow()
                    .iter()
                    .filter(|s| start.is_none_or(|d| s.sale_date >= d))
                    .filter(|s| end.is_none_or(|d| s.sale_date <= d))
                    .cloned()
                    .collect();
                if found.is_empty() {
                    ApiResponse::new(204, "")
                } else {
                    json(200, &found)
                }
            }
            (Method::Get, Some(id)) => match self.sales.borrow().iter().find(|s| s.id == id) {
                Some(s) => json(200, s),
                None => error_body(404, "Recurso Não Encontrado", "Venda não encontrada"),
            },
            (Method::Post, None) => {
                let new: NewSale =
                    serde_json::from_value(req.body.clone().unwrap_or_default()).expect("sale body");
                let id = self.next_id.get();
                self.next_id.set(id + 1);
                let created = SaleRecord {
                    id,
                    product_name: new.product_name,
                    quantity_sold: new.quantity_sold,
                    sale_date: new.sale_date,
                    total_value: new.total_value,
                };
                self.sales.borrow_mut().push(created.clone());
                json(201, &created)
            }
            (Method::Delete, Some(id)) => {
                let mut sales = self.sales.borrow_mut();
                let before = sales.len();
                sales.retain(|s| s.id != id);
                if sales.len() < before {
                    ApiResponse::new(204, "")
                } else {
                    error_body(404, "Recurso Não Encontrado", "Venda não encontrada")
                }
            }
            _ => error_body(500, "Erro Interno do Servidor", "Rota inesperada"),
        }
    }
}

impl Transport for FakeApi {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(reply) = self.replies.borrow_mut().pop_front() {
            return reply;
        }
        Ok(self.route(request))
    }
}

pub fn json<T: serde::Serialize>(status: u16, body: &T) -> ApiResponse {
    ApiResponse::new(status, serde_json::to_string(body).expect("serializable"))
}

pub fn error_body(status: u16, titulo: &str, detalhe: &str) -> ApiResponse {
    json(
        status,
        &serde_json::json!({
            "titulo": titulo,
            "status": status,
            "detalhe": detalhe,
            "timestamp": "2024-01-01T10:00:00",
            "mensagemDesenvolvedor": "test"
        }),
    )
}
