use std::fmt;

use serde::{Deserialize, Serialize};

/// Rol del usuario dentro de su tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Vendor,
    Employee,
}

impl Role {
    /// Valor tal como lo espera el backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Vendor => "vendor",
            Role::Employee => "employee",
        }
    }

    /// Roles que se pueden elegir en el formulario de registro
    pub fn signup_choices() -> [Role; 2] {
        [Role::Employee, Role::Vendor]
    }

    /// Parsear desde el valor de un <select>
    pub fn from_form_value(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "vendor" => Some(Role::Vendor),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Vendor => "Vendor",
            Role::Employee => "Employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identidad del usuario autenticado (snapshot de `GET /me` o `GET /users`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
    pub tenant_id: i64,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Texto de rol mostrado en la cabecera del workspace
    pub fn role_caption(&self) -> String {
        if self.is_admin {
            "Admin (full visibility)".to_string()
        } else {
            self.role.to_string()
        }
    }
}
