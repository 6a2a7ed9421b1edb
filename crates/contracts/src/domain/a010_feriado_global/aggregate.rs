use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::proxy::{resources, Resource};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Holiday that applies to every empresa. Recurring holidays repeat every
/// year on the same month and day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeriadoGlobal {
    pub id: EntityId,
    pub fecha: NaiveDate,
    pub descripcion: String,
    #[serde(default)]
    pub recurrente: bool,
}

impl FeriadoGlobal {
    pub fn coincide(&self, fecha: NaiveDate) -> bool {
        if self.recurrente {
            self.fecha.month() == fecha.month() && self.fecha.day() == fecha.day()
        } else {
            self.fecha == fecha
        }
    }
}

pub fn es_feriado(fecha: NaiveDate, feriados: &[FeriadoGlobal]) -> bool {
    feriados.iter().any(|f| f.coincide(fecha))
}

/// Next working day on or after `fecha`; weekends and holidays are skipped.
pub fn siguiente_dia_habil(fecha: NaiveDate, feriados: &[FeriadoGlobal]) -> NaiveDate {
    let mut dia = fecha;
    while dia.weekday().number_from_monday() > 5 || es_feriado(dia, feriados) {
        match dia.succ_opt() {
            Some(next) => dia = next,
            None => break,
        }
    }
    dia
}

impl AggregateRoot for FeriadoGlobal {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.descripcion.clone()
    }

    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn resource() -> Resource {
        resources::FERIADOS_GLOBALES
    }

    fn element_name() -> &'static str {
        "Feriado"
    }

    fn list_name() -> &'static str {
        "Feriados globales"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FeriadoGlobalDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub fecha: Option<NaiveDate>,
    pub descripcion: String,
    pub recurrente: bool,
}

impl From<&FeriadoGlobal> for FeriadoGlobalDto {
    fn from(f: &FeriadoGlobal) -> Self {
        Self {
            id: Some(f.id),
            fecha: Some(f.fecha),
            descripcion: f.descripcion.clone(),
            recurrente: f.recurrente,
        }
    }
}

impl FeriadoGlobalDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// `existentes` is the full holiday catalog (fetched in full, sliced client-side).
    pub fn validate(&self, existentes: &[FeriadoGlobal]) -> Result<(), String> {
        let Some(fecha) = self.fecha else {
            return Err("La fecha es obligatoria".into());
        };
        if self.descripcion.trim().is_empty() {
            return Err("La descripción es obligatoria".into());
        }
        let duplicado = existentes.iter().any(|f| {
            Some(f.id) != self.id
                && if self.recurrente || f.recurrente {
                    f.fecha.month() == fecha.month() && f.fecha.day() == fecha.day()
                } else {
                    f.fecha == fecha
                }
        });
        if duplicado {
            return Err("Ya existe un feriado registrado para esa fecha".into());
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

    fn feriados() -> Vec<FeriadoGlobal> {
        vec![
            FeriadoGlobal {
                id: 1,
                fecha: d(2020, 7, 28),
                descripcion: "Fiestas Patrias".into(),
                recurrente: true,
            },
            FeriadoGlobal {
                id: 2,
                fecha: d(2024, 3, 28),
                descripcion: "Jueves Santo".into(),
                recurrente: false,
            },
        ]
    }

    #[test]
    fn recurring_holidays_match_every_year() {
        let f = feriados();
        assert!(es_feriado(d(2025, 7, 28), &f));
        assert!(es_feriado(d(2024, 3, 28), &f));
        assert!(!es_feriado(d(2025, 3, 28), &f));
    }

    #[test]
    fn duplicate_dates_rejected() {
        let f = feriados();
        let mut dto = FeriadoGlobalDto {
            fecha: Some(d(2026, 7, 28)),
            descripcion: "Otra".into(),
            ..Default::default()
        };
        assert_eq!(
            dto.validate(&f).unwrap_err(),
            "Ya existe un feriado registrado para esa fecha"
        );
        dto.fecha = Some(d(2025, 3, 28));
        assert!(dto.validate(&f).is_ok());
        dto.recurrente = true;
        assert!(dto.validate(&f).is_err());

        let editing = FeriadoGlobalDto::from(&f[0]);
        assert!(editing.validate(&f).is_ok());
    }

    #[test]
    fn next_working_day_skips_weekend_and_holidays() {
        let f = feriados();
        // 2024-03-28 is a Thursday holiday, 29 is Friday
        assert_eq!(siguiente_dia_habil(d(2024, 3, 28), &f), d(2024, 3, 29));
        // Saturday -> Monday
        assert_eq!(siguiente_dia_habil(d(2024, 3, 30), &f), d(2024, 4, 1));
    }
}
