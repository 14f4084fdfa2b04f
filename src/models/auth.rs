use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub usuario: String,
    pub senha: String,
}

impl Credentials {
    pub fn new(usuario: impl Into<String>, senha: impl Into<String>) -> Self {
        Self {
            usuario: usuario.into(),
            senha: senha.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
