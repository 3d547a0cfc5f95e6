use serde::{Deserialize, Serialize};

/// Tarifas editadas en el formulario de configuración de facturación
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BillingConfig {
    pub per_km: f64,
    pub per_hour: f64,
    pub extra_km_rate: f64,
}
