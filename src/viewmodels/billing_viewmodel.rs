// ============================================================================
// BILLING VIEWMODEL - Formulario local de tarifas (sin red)
// ============================================================================

use crate::models::BillingConfig;
use crate::state::BillingFormState;
use crate::utils::format::coerce_number;

pub struct BillingViewModel {
    form: BillingFormState,
}

impl BillingViewModel {
    pub fn new(form: BillingFormState) -> Self {
        Self { form }
    }

    /// Payload con los tres campos coercionados a número
    pub fn build_payload(&self) -> BillingConfig {
        BillingConfig {
            per_km: coerce_number(&self.form.per_km.borrow()),
            per_hour: coerce_number(&self.form.per_hour.borrow()),
            extra_km_rate: coerce_number(&self.form.extra_km_rate.borrow()),
        }
    }

    /// Entregar el payload al callback del llamador
    pub fn submit<F>(&self, on_submit: F)
    where
        F: FnOnce(BillingConfig),
    {
        let payload = self.build_payload();
        log::info!("🧾 [BILLING] Submit: {:?}", payload);
        on_submit(payload);
    }

    /// Callback por defecto del cockpit: recordar el último payload guardado
    pub fn record_saved(&self, config: BillingConfig) {
        *self.form.last_saved.borrow_mut() = Some(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_default_payload_has_exactly_three_numeric_fields() {
        let vm = BillingViewModel::new(BillingFormState::new());
        let captured = RefCell::new(None);
        vm.submit(|config| *captured.borrow_mut() = Some(config));

        let config = captured.into_inner().unwrap();
        assert_eq!(config, BillingConfig { per_km: 1.5, per_hour: 10.0, extra_km_rate: 2.5 });

        let json = serde_json::to_value(config).unwrap();
        let object = json.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(keys, vec!["extra_km_rate", "per_hour", "per_km"]);
        assert!(object.values().all(|v| v.is_number()));
    }

    #[test]
    fn test_blank_and_invalid_inputs_coerce_to_zero() {
        let form = BillingFormState::new();
        *form.per_km.borrow_mut() = String::new();
        *form.per_hour.borrow_mut() = "12.75".to_string();
        *form.extra_km_rate.borrow_mut() = "abc".to_string();
        let vm = BillingViewModel::new(form);

        assert_eq!(
            vm.build_payload(),
            BillingConfig { per_km: 0.0, per_hour: 12.75, extra_km_rate: 0.0 }
        );
    }

    #[test]
    fn test_record_saved() {
        let form = BillingFormState::new();
        let vm = BillingViewModel::new(form.clone());
        vm.submit(|config| vm.record_saved(config));
        assert_eq!(form.get_last_saved().map(|c| c.per_hour), Some(10.0));
    }
}
