use crate::api::error::{ApiError, STATUS_NOT_FOUND};
use crate::api::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::models::{
    Credentials, DeleteConfirmation, FilterCriteria, LoginResponse, NewSale, SaleRecord,
};
use crate::session::SessionStore;
use serde::de::DeserializeOwned;

pub const MSG_LIST_FAILED: &str = "Falha ao carregar os dados das vendas.";
pub const MSG_LOOKUP_FAILED: &str = "Erro desconhecido ao buscar venda.";
pub const MSG_CREATE_FAILED: &str = "Falha ao criar nova venda.";
pub const MSG_DELETE_FAILED: &str = "Falha ao deletar a venda.";
pub const MSG_LOGIN_FAILED: &str = "Usuário ou senha inválidos. Por favor, tente novamente.";
pub const MSG_LOGIN_NO_TOKEN: &str = "Resposta de login sem token.";

const PATH_LOGIN: &str = "/auth/login";
const PATH_SALES: &str = "/vendas";

/// Client for the sales API.
///
/// The bearer token is read from the session store on every call, so a
/// logout takes effect on the very next request.
pub struct ApiClient<'a> {
    transport: &'a dyn Transport,
    session: &'a dyn SessionStore,
}

impl<'a> ApiClient<'a> {
    pub fn new(transport: &'a dyn Transport, session: &'a dyn SessionStore) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session
    }

    /// `GET /vendas`, with only the filter bounds that are present.
    pub fn list_sales(&self, filters: &FilterCriteria) -> Result<Vec<SaleRecord>, ApiError> {
        let request =
            self.authorized(ApiRequest::new(Method::Get, PATH_SALES).with_query(filters.query_params()))?;
        let response = self.execute(&request, MSG_LIST_FAILED)?;

        // 204 No Content is how the server says "nothing matched".
        if response.body.trim().is_empty() {
            return Ok(Vec::new());
        }
        decode(&response)
    }

    /// `GET /vendas/{id}`. A 404 is an absent record, not an error.
    pub fn get_sale_by_id(&self, id: u64) -> Result<Option<SaleRecord>, ApiError> {
        let request = self.authorized(ApiRequest::new(Method::Get, sale_path(id)))?;
        let response = self.send(&request)?;

        if response.status == STATUS_NOT_FOUND {
            tracing::debug!(id, "sale not found");
            return Ok(None);
        }
        let response = check(response, MSG_LOOKUP_FAILED)?;
        decode(&response).map(Some)
    }

    /// `POST /vendas`. The server assigns the id.
    pub fn create_sale(&self, sale: &NewSale) -> Result<SaleRecord, ApiError> {
        let body = serde_json::to_value(sale).map_err(|e| ApiError::transport(e.to_string()))?;
        let request =
            self.authorized(ApiRequest::new(Method::Post, PATH_SALES).with_body(body))?;
        let response = self.execute(&request, MSG_CREATE_FAILED)?;
        decode(&response)
    }

    /// `DELETE /vendas/{id}`.
    pub fn delete_sale(&self, id: u64) -> Result<DeleteConfirmation, ApiError> {
        let request = self.authorized(ApiRequest::new(Method::Delete, sale_path(id)))?;
        let response = self.execute(&request, MSG_DELETE_FAILED)?;

        let payload = if response.body.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&response.body).ok()
        };
        Ok(DeleteConfirmation { id, payload })
    }

    /// `POST /auth/login`. Stores the returned token; any failure clears
    /// whatever token was stored before.
    pub fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        match self.try_login(credentials) {
            Ok(resp) => Ok(resp),
            Err(e) => {
                self.session.clear_token().map_err(storage_error)?;
                Err(e)
            }
        }
    }

    fn try_login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let body =
            serde_json::to_value(credentials).map_err(|e| ApiError::transport(e.to_string()))?;
        let request = ApiRequest::new(Method::Post, PATH_LOGIN).with_body(body);
        let response = self.send(&request)?;

        if !response.is_success() {
            // The server's own wording for bad credentials is not shown.
            return Err(ApiError::new(MSG_LOGIN_FAILED, Some(response.status)));
        }

        let login: LoginResponse = decode(&response)?;
        match login.token.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(token) => {
                self.session.set_token(token).map_err(storage_error)?;
                Ok(login)
            }
            None => Err(ApiError::new(MSG_LOGIN_NO_TOKEN, Some(response.status))),
        }
    }

    /// Forget the stored token. The server is not contacted.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.session.clear_token().map_err(storage_error)
    }

    fn authorized(&self, request: ApiRequest) -> Result<ApiRequest, ApiError> {
        let token = self.session.get_token().map_err(storage_error)?;
        Ok(request.with_bearer(token))
    }

    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        self.transport.send(request).inspect_err(|e| {
            tracing::debug!(
                method = request.method.as_str(),
                path = %request.path,
                error = %e,
                "transport failure"
            );
        })
    }

    fn execute(&self, request: &ApiRequest, fallback: &str) -> Result<ApiResponse, ApiError> {
        let response = self.send(request)?;
        check(response, fallback).inspect_err(|e| {
            tracing::debug!(
                method = request.method.as_str(),
                path = %request.path,
                status = ?e.status,
                error = %e,
                "request failed"
            );
        })
    }
}

fn sale_path(id: u64) -> String {
    format!("{}/{}", PATH_SALES, id)
}

fn check(response: ApiResponse, fallback: &str) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_response(response.status, &response.body, fallback))
    }
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        ApiError::new(
            format!("Resposta inválida do servidor: {}", e),
            Some(response.status),
        )
    })
}

fn storage_error(e: crate::errors::AppError) -> ApiError {
    ApiError::transport(format!("Falha no armazenamento local da sessão: {}", e))
}
