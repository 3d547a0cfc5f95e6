use serde::{Deserialize, Serialize};

/// Respuesta de `GET /reports/vendor/{id}/monthly`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorReport {
    pub csv: String,
}

/// Triple vendor/año/mes ya validado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    pub vendor_id: i64,
    pub year: i32,
    pub month: u32,
}

impl ReportRequest {
    /// Nombre del archivo descargado
    pub fn filename(&self) -> String {
        format!("vendor_{}_{}_{}.csv", self.vendor_id, self.year, self.month)
    }
}
