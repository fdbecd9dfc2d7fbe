//! Authentication types for the `/auth` endpoint.
//!
//! Field names follow the API's Portuguese wire format and are already
//! snake_case on the wire, so no renaming is needed.

use serde::{Deserialize, Serialize};

/// Login credentials sent to `POST /auth`.
#[derive(Serialize, Debug, Clone)]
pub struct Credentials {
    /// CPF, digits only.
    pub cpf: String,
    /// Password.
    pub senha: String,
}

/// Authenticated user profile embedded in the login payload.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub email: String,
    pub nome_completo: String,
    pub cpf: String,
    pub id: Option<String>,
    pub fone: String,
    pub matricula: String,
    pub nome_guerra: String,
    pub posto_graduacao: String,
    pub perfil: String,
    pub aceitou_termos: Option<bool>,
}

/// Payload returned by a successful login.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthPayload {
    pub msg: Option<String>,
    /// Bearer token for subsequent requests.
    pub token: String,
    pub user: User,
}
