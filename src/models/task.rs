use serde::{Deserialize, Serialize};

/// Viaje / registro facturable devuelto por `GET /tasks`. Solo lectura.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub tenant_id: i64,
    pub vendor_id: i64,
    pub employee_id: i64,
    pub distance_km: f64,
    pub duration_minutes: i64,
    /// Fecha ISO-8601 tal como la serializa el backend (con o sin zona)
    pub date: String,
    #[serde(default)]
    pub extra_km: f64,
    #[serde(default)]
    pub extra_hours: f64,
    #[serde(default = "empty_payload")]
    pub payload: serde_json::Value,
}

fn empty_payload() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
