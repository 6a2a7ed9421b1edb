use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::dates::add_months;
use crate::shared::decimal::{deserialize_decimal, round2};
use crate::shared::proxy::{resources, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MAX_CUOTAS: u32 = 360;

/// Financing plan offered by an empresa for property sales
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPago {
    pub id: EntityId,
    pub empresa_id: EntityId,
    pub nombre: String,
    pub numero_cuotas: u32,
    /// Annual percentage; 0 = interest-free
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub tasa_interes_anual: f64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub cuota_inicial_porcentaje: f64,
    #[serde(default = "default_true")]
    pub activo: bool,
}

fn default_true() -> bool {
    true
}

/// One row of the payment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cuota {
    pub numero: u32,
    pub fecha_vencimiento: NaiveDate,
    pub capital: f64,
    pub interes: f64,
    pub monto: f64,
    /// Outstanding principal after this payment
    pub saldo: f64,
}

impl PlanPago {
    pub fn cuota_inicial(&self, precio: f64) -> f64 {
        round2(precio * self.cuota_inicial_porcentaje / 100.0)
    }

    pub fn monto_financiado(&self, precio: f64) -> f64 {
        round2(precio - self.cuota_inicial(precio))
    }

    /// French amortisation of the financed part of `precio`: constant
    /// installment, interest on the outstanding balance, due monthly from
    /// `fecha_inicio`. The last installment absorbs rounding so the capital
    /// column adds up to the financed amount.
    pub fn generar_cronograma(&self, precio: f64, fecha_inicio: NaiveDate) -> Result<Vec<Cuota>, String> {
        if !precio.is_finite() || precio <= 0.0 {
            return Err("El monto debe ser mayor a cero".into());
        }
        if self.numero_cuotas == 0 || self.numero_cuotas > MAX_CUOTAS {
            return Err(format!("El número de cuotas debe estar entre 1 y {}", MAX_CUOTAS));
        }

        let financiado = self.monto_financiado(precio);
        let n = self.numero_cuotas;
        let i = self.tasa_interes_anual / 100.0 / 12.0;
        let cuota_fija = if i > 0.0 {
            round2(financiado * i / (1.0 - (1.0 + i).powi(-(n as i32))))
        } else {
            round2(financiado / f64::from(n))
        };

        let mut saldo = financiado;
        let mut cronograma = Vec::with_capacity(n as usize);
        for numero in 1..=n {
            let interes = round2(saldo * i);
            let capital = if numero == n {
                saldo
            } else {
                round2(cuota_fija - interes).min(saldo)
            };
            saldo = round2(saldo - capital);
            cronograma.push(Cuota {
                numero,
                fecha_vencimiento: add_months(fecha_inicio, numero),
                capital,
                interes,
                monto: round2(capital + interes),
                saldo,
            });
        }
        Ok(cronograma)
    }
}

impl AggregateRoot for PlanPago {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn resource() -> Resource {
        resources::PLANES_PAGO
    }

    fn element_name() -> &'static str {
        "Plan de pago"
    }

    fn list_name() -> &'static str {
        "Planes de pago"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPagoDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub empresa_id: Option<EntityId>,
    pub nombre: String,
    pub numero_cuotas: u32,
    pub tasa_interes_anual: f64,
    pub cuota_inicial_porcentaje: f64,
    pub activo: bool,
}

impl Default for PlanPagoDto {
    fn default() -> Self {
        Self {
            id: None,
            empresa_id: None,
            nombre: String::new(),
            numero_cuotas: 12,
            tasa_interes_anual: 0.0,
            cuota_inicial_porcentaje: 0.0,
            activo: true,
        }
    }
}

impl From<&PlanPago> for PlanPagoDto {
    fn from(p: &PlanPago) -> Self {
        Self {
            id: Some(p.id),
            empresa_id: Some(p.empresa_id),
            nombre: p.nombre.clone(),
            numero_cuotas: p.numero_cuotas,
            tasa_interes_anual: p.tasa_interes_anual,
            cuota_inicial_porcentaje: p.cuota_inicial_porcentaje,
            activo: p.activo,
        }
    }
}

impl PlanPagoDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.empresa_id.is_none() {
            return Err("Seleccione una empresa".into());
        }
        if self.nombre.trim().is_empty() {
            return Err("El nombre del plan es obligatorio".into());
        }
        self.validate_condiciones()
    }

    /// Numeric terms only; enough to preview a schedule
    pub fn validate_condiciones(&self) -> Result<(), String> {
        if self.numero_cuotas == 0 || self.numero_cuotas > MAX_CUOTAS {
            return Err(format!("El número de cuotas debe estar entre 1 y {}", MAX_CUOTAS));
        }
        if !(0.0..=100.0).contains(&self.tasa_interes_anual) {
            return Err("La tasa de interés anual debe estar entre 0 y 100".into());
        }
        if !(0.0..=100.0).contains(&self.cuota_inicial_porcentaje) {
            return Err("La cuota inicial debe estar entre 0% y 100%".into());
        }
        Ok(())
    }

    /// Plan as it would be saved, used for the schedule preview in the form
    pub fn to_plan(&self) -> PlanPago {
        PlanPago {
            id: self.id.unwrap_or_default(),
            empresa_id: self.empresa_id.unwrap_or_default(),
            nombre: self.nombre.clone(),
            numero_cuotas: self.numero_cuotas,
            tasa_interes_anual: self.tasa_interes_anual,
            cuota_inicial_porcentaje: self.cuota_inicial_porcentaje,
            activo: self.activo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(cuotas: u32, tasa: f64, inicial: f64) -> PlanPago {
        PlanPago {
            id: 1,
            empresa_id: 1,
            nombre: "Plan".into(),
            numero_cuotas: cuotas,
            tasa_interes_anual: tasa,
            cuota_inicial_porcentaje: inicial,
            activo: true,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn capital_adds_up_to_financed_amount() {
        let p = plan(24, 12.0, 20.0);
        let cronograma = p.generar_cronograma(150_000.0, d(2024, 1, 15)).unwrap();
        assert_eq!(cronograma.len(), 24);

        let total_capital: f64 = cronograma.iter().map(|c| c.capital).sum();
        assert_eq!(round2(total_capital), 120_000.0);
        assert_eq!(cronograma.last().unwrap().saldo, 0.0);

        // Constant installment except the last one, which absorbs rounding
        let primera = cronograma[0].monto;
        assert!(cronograma[..23].iter().all(|c| (c.monto - primera).abs() < 0.011));
        assert!((cronograma[23].monto - primera).abs() < 1.0);
        // Interest decreases as the balance goes down
        assert!(cronograma[0].interes > cronograma[23].interes);
        assert_eq!(cronograma[0].interes, 1200.0);
    }

    #[test]
    fn zero_rate_gives_equal_installments() {
        let p = plan(3, 0.0, 0.0);
        let cronograma = p.generar_cronograma(1000.0, d(2024, 1, 31)).unwrap();
        let montos: Vec<f64> = cronograma.iter().map(|c| c.monto).collect();
        assert_eq!(montos, vec![333.33, 333.33, 333.34]);
        assert!(cronograma.iter().all(|c| c.interes == 0.0));
    }

    #[test]
    fn due_dates_clamp_to_month_end() {
        let p = plan(3, 0.0, 0.0);
        let fechas: Vec<NaiveDate> = p
            .generar_cronograma(300.0, d(2024, 1, 31))
            .unwrap()
            .into_iter()
            .map(|c| c.fecha_vencimiento)
            .collect();
        assert_eq!(fechas, vec![d(2024, 2, 29), d(2024, 3, 31), d(2024, 4, 30)]);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(plan(12, 10.0, 0.0).generar_cronograma(0.0, d(2024, 1, 1)).is_err());
        assert!(plan(0, 10.0, 0.0).generar_cronograma(100.0, d(2024, 1, 1)).is_err());
    }

    #[test]
    fn dto_rules() {
        let mut dto = PlanPagoDto {
            empresa_id: Some(1),
            nombre: "Contado 12".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        dto.numero_cuotas = 361;
        assert!(dto.validate().is_err());
        dto.numero_cuotas = 360;
        dto.tasa_interes_anual = 120.0;
        assert!(dto.validate().is_err());
        dto.tasa_interes_anual = 9.5;
        dto.cuota_inicial_porcentaje = -1.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn terms_can_be_checked_without_name() {
        let dto = PlanPagoDto::default();
        assert!(dto.validate().is_err());
        assert!(dto.validate_condiciones().is_ok());
    }
}
