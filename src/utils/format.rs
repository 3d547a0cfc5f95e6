// ============================================================================
// FORMAT - Formateo de valores para las vistas (sin DOM, testeable)
// ============================================================================

use chrono::{DateTime, NaiveDateTime};

/// "12.3 km"
pub fn format_distance_km(distance_km: f64) -> String {
    format!("{:.1} km", distance_km)
}

/// Monto facturado en rupias con dos decimales
pub fn format_rupees(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Fecha de un task para mostrar en la lista.
/// Acepta RFC 3339 o fecha naive (el backend no siempre envía zona).
/// Si no se puede parsear se devuelve el texto original.
pub fn format_task_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    raw.to_string()
}

/// Coerción estilo `<input type="number">`: vacío o inválido → 0
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}
