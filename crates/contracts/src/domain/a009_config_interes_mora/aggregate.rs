use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::dates::ranges_overlap;
use crate::shared::decimal::{deserialize_decimal, round2};
use crate::shared::proxy::{resources, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days in the commercial month used to turn the monthly rate into a daily one
pub const DIAS_MES_COMERCIAL: f64 = 30.0;

/// Late-payment interest configuration of an empresa for a validity range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigInteresMora {
    pub id: EntityId,
    pub empresa_id: EntityId,
    /// Monthly percentage, e.g. `2.5` = 2.5 %
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub tasa_mensual: f64,
    #[serde(default)]
    pub dias_gracia: u32,
    pub fecha_inicio: NaiveDate,
    #[serde(default)]
    pub fecha_fin: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

fn default_true() -> bool {
    true
}

impl ConfigInteresMora {
    pub fn vigente_en(&self, fecha: NaiveDate) -> bool {
        self.activo && self.fecha_inicio <= fecha && self.fecha_fin.map_or(true, |fin| fecha <= fin)
    }

    pub fn calcular_mora(&self, monto: f64, dias_atraso: u32) -> f64 {
        mora(self.tasa_mensual, self.dias_gracia, monto, dias_atraso)
    }
}

/// Late interest on `monto` after `dias_atraso` days; grace days are free.
pub fn mora(tasa_mensual: f64, dias_gracia: u32, monto: f64, dias_atraso: u32) -> f64 {
    let dias = dias_atraso.saturating_sub(dias_gracia);
    if dias == 0 || monto <= 0.0 {
        return 0.0;
    }
    round2(monto * tasa_mensual / 100.0 / DIAS_MES_COMERCIAL * f64::from(dias))
}

/// Active configuration of an empresa on a given date
pub fn config_vigente(
    configs: &[ConfigInteresMora],
    empresa_id: EntityId,
    fecha: NaiveDate,
) -> Option<&ConfigInteresMora> {
    configs
        .iter()
        .filter(|c| c.empresa_id == empresa_id && c.vigente_en(fecha))
        .max_by_key(|c| c.fecha_inicio)
}

impl AggregateRoot for ConfigInteresMora {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{:.2}% mensual", self.tasa_mensual)
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn resource() -> Resource {
        resources::CONFIG_INTERES_MORA
    }

    fn element_name() -> &'static str {
        "Configuración de interés moratorio"
    }

    fn list_name() -> &'static str {
        "Interés moratorio"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigInteresMoraDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub empresa_id: Option<EntityId>,
    pub tasa_mensual: f64,
    pub dias_gracia: u32,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub activo: bool,
}

impl Default for ConfigInteresMoraDto {
    fn default() -> Self {
        Self {
            id: None,
            empresa_id: None,
            tasa_mensual: 0.0,
            dias_gracia: 0,
            fecha_inicio: None,
            fecha_fin: None,
            activo: true,
        }
    }
}

impl From<&ConfigInteresMora> for ConfigInteresMoraDto {
    fn from(c: &ConfigInteresMora) -> Self {
        Self {
            id: Some(c.id),
            empresa_id: Some(c.empresa_id),
            tasa_mensual: c.tasa_mensual,
            dias_gracia: c.dias_gracia,
            fecha_inicio: Some(c.fecha_inicio),
            fecha_fin: c.fecha_fin,
            activo: c.activo,
        }
    }
}

impl ConfigInteresMoraDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Preview of the interest the form values would charge
    pub fn simular_mora(&self, monto: f64, dias_atraso: u32) -> f64 {
        mora(self.tasa_mensual, self.dias_gracia, monto, dias_atraso)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.empresa_id.is_none() {
            return Err("Seleccione una empresa".into());
        }
        if !self.tasa_mensual.is_finite() || self.tasa_mensual <= 0.0 || self.tasa_mensual > 100.0
        {
            return Err("La tasa mensual debe ser mayor a 0 y como máximo 100".into());
        }
        let Some(inicio) = self.fecha_inicio else {
            return Err("La fecha de inicio es obligatoria".into());
        };
        if let Some(fin) = self.fecha_fin {
            if fin < inicio {
                return Err("La fecha de fin no puede ser anterior a la fecha de inicio".into());
            }
        }
        Ok(())
    }

    /// Active configurations of the same empresa must not overlap in time.
    pub fn validate_sin_solapamiento(&self, existentes: &[ConfigInteresMora]) -> Result<(), String> {
        let (Some(empresa_id), Some(inicio)) = (self.empresa_id, self.fecha_inicio) else {
            return Ok(());
        };
        if !self.activo {
            return Ok(());
        }
        let solapa = existentes.iter().any(|c| {
            Some(c.id) != self.id
                && c.activo
                && c.empresa_id == empresa_id
                && ranges_overlap(inicio, self.fecha_fin, c.fecha_inicio, c.fecha_fin)
        });
        if solapa {
            return Err(
                "Ya existe una configuración de interés moratorio vigente en ese periodo".into(),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn config(id: i64, inicio: NaiveDate, fin: Option<NaiveDate>) -> ConfigInteresMora {
        ConfigInteresMora {
            id,
            empresa_id: 1,
            tasa_mensual: 3.0,
            dias_gracia: 5,
            fecha_inicio: inicio,
            fecha_fin: fin,
            activo: true,
        }
    }

    #[test]
    fn rate_bounds() {
        let mut dto = ConfigInteresMoraDto {
            empresa_id: Some(1),
            fecha_inicio: Some(d(2024, 1, 1)),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
        dto.tasa_mensual = 100.0;
        assert!(dto.validate().is_ok());
        dto.tasa_mensual = 100.5;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn overlapping_ranges_of_same_empresa_rejected() {
        let existentes = vec![config(1, d(2024, 1, 1), Some(d(2024, 6, 30)))];
        let mut dto = ConfigInteresMoraDto {
            empresa_id: Some(1),
            tasa_mensual: 2.0,
            fecha_inicio: Some(d(2024, 6, 30)),
            ..Default::default()
        };
        assert!(dto.validate_sin_solapamiento(&existentes).is_err());
        dto.fecha_inicio = Some(d(2024, 7, 1));
        assert!(dto.validate_sin_solapamiento(&existentes).is_ok());
        dto.fecha_inicio = Some(d(2024, 3, 1));
        dto.empresa_id = Some(2);
        assert!(dto.validate_sin_solapamiento(&existentes).is_ok());
    }

    #[test]
    fn mora_respects_grace_days() {
        let c = config(1, d(2024, 1, 1), None);
        assert_eq!(c.calcular_mora(1000.0, 5), 0.0);
        // 1000 * 3% / 30 * 10 days
        assert_eq!(c.calcular_mora(1000.0, 15), 10.0);
        assert_eq!(c.calcular_mora(0.0, 40), 0.0);

        let dto = ConfigInteresMoraDto::from(&c);
        assert_eq!(dto.simular_mora(1000.0, 15), 10.0);
    }

    #[test]
    fn picks_latest_active_config() {
        let configs = vec![
            config(1, d(2023, 1, 1), Some(d(2023, 12, 31))),
            config(2, d(2024, 1, 1), None),
        ];
        assert_eq!(config_vigente(&configs, 1, d(2024, 3, 1)).map(|c| c.id), Some(2));
        assert_eq!(config_vigente(&configs, 1, d(2023, 3, 1)).map(|c| c.id), Some(1));
        assert!(config_vigente(&configs, 9, d(2024, 3, 1)).is_none());
    }
}
