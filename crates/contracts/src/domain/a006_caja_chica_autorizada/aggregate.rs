use crate::domain::a004_caja::{Caja, TipoCaja};
use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::decimal::{deserialize_decimal, round2};
use crate::shared::proxy::{resources, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Authorization for a user to operate a petty-cash caja up to an amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CajaChicaAutorizada {
    pub id: EntityId,
    pub caja_id: EntityId,
    pub usuario_id: EntityId,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub monto_autorizado: f64,
    pub fecha_inicio: NaiveDate,
    #[serde(default)]
    pub fecha_fin: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

fn default_true() -> bool {
    true
}

impl CajaChicaAutorizada {
    pub fn vigente(&self, hoy: NaiveDate) -> bool {
        self.activo && self.fecha_inicio <= hoy && self.fecha_fin.map_or(true, |fin| hoy <= fin)
    }

    pub fn finalizar(&self, hoy: NaiveDate) -> Result<CajaChicaAutorizadaDto, String> {
        if !self.activo {
            return Err("La autorización ya fue finalizada".into());
        }
        let mut dto = CajaChicaAutorizadaDto::from(self);
        dto.fecha_fin = Some(hoy.max(self.fecha_inicio));
        dto.activo = false;
        Ok(dto)
    }
}

impl AggregateRoot for CajaChicaAutorizada {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("Autorización #{}", self.id)
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn resource() -> Resource {
        resources::CAJAS_CHICAS_AUTORIZADAS
    }

    fn element_name() -> &'static str {
        "Autorización de caja chica"
    }

    fn list_name() -> &'static str {
        "Cajas chicas autorizadas"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CajaChicaAutorizadaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub caja_id: Option<EntityId>,
    pub usuario_id: Option<EntityId>,
    pub monto_autorizado: f64,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub activo: bool,
}

impl Default for CajaChicaAutorizadaDto {
    fn default() -> Self {
        Self {
            id: None,
            caja_id: None,
            usuario_id: None,
            monto_autorizado: 0.0,
            fecha_inicio: None,
            fecha_fin: None,
            activo: true,
        }
    }
}

impl From<&CajaChicaAutorizada> for CajaChicaAutorizadaDto {
    fn from(a: &CajaChicaAutorizada) -> Self {
        Self {
            id: Some(a.id),
            caja_id: Some(a.caja_id),
            usuario_id: Some(a.usuario_id),
            monto_autorizado: a.monto_autorizado,
            fecha_inicio: Some(a.fecha_inicio),
            fecha_fin: a.fecha_fin,
            activo: a.activo,
        }
    }
}

impl CajaChicaAutorizadaDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// `cajas` is the loaded caja catalog; the selected caja must be a petty-cash one.
    pub fn validate(&self, cajas: &[Caja]) -> Result<(), String> {
        let Some(caja_id) = self.caja_id else {
            return Err("Seleccione una caja".into());
        };
        match cajas.iter().find(|c| c.id == caja_id) {
            Some(caja) if caja.tipo != TipoCaja::Chica => {
                return Err("Solo se pueden autorizar cajas de tipo chica".into());
            }
            None => return Err("La caja seleccionada no existe".into()),
            _ => {}
        }
        if self.usuario_id.is_none() {
            return Err("Seleccione un usuario".into());
        }
        if !self.monto_autorizado.is_finite() || self.monto_autorizado <= 0.0 {
            return Err("El monto autorizado debe ser mayor a cero".into());
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

    pub fn prepare_for_save(&mut self) {
        self.monto_autorizado = round2(self.monto_autorizado);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_caja::EstadoCaja;

    fn caja(id: i64, tipo: TipoCaja) -> Caja {
        Caja {
            id,
            nombre: format!("Caja {}", id),
            punto_venta_id: 1,
            tipo,
            estado: EstadoCaja::Abierta,
            saldo_inicial: 0.0,
            saldo_actual: 0.0,
            fecha_apertura: None,
            fecha_cierre: None,
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn dto(caja_id: i64) -> CajaChicaAutorizadaDto {
        CajaChicaAutorizadaDto {
            caja_id: Some(caja_id),
            usuario_id: Some(4),
            monto_autorizado: 300.0,
            fecha_inicio: Some(d(2024, 4, 1)),
            ..Default::default()
        }
    }

    #[test]
    fn only_chica_cajas_can_be_authorized() {
        let cajas = vec![caja(1, TipoCaja::Central), caja(2, TipoCaja::Chica)];
        assert_eq!(
            dto(1).validate(&cajas).unwrap_err(),
            "Solo se pueden autorizar cajas de tipo chica"
        );
        assert!(dto(2).validate(&cajas).is_ok());
        assert!(dto(9).validate(&cajas).is_err());
    }

    #[test]
    fn amount_must_be_positive() {
        let cajas = vec![caja(2, TipoCaja::Chica)];
        let mut d = dto(2);
        d.monto_autorizado = 0.0;
        assert_eq!(
            d.validate(&cajas).unwrap_err(),
            "El monto autorizado debe ser mayor a cero"
        );
    }

    #[test]
    fn vigencia_and_finalizar() {
        let a = CajaChicaAutorizada {
            id: 1,
            caja_id: 2,
            usuario_id: 4,
            monto_autorizado: 300.0,
            fecha_inicio: d(2024, 4, 1),
            fecha_fin: Some(d(2024, 4, 30)),
            activo: true,
        };
        assert!(a.vigente(d(2024, 4, 30)));
        assert!(!a.vigente(d(2024, 5, 1)));

        let dto = a.finalizar(d(2024, 4, 15)).unwrap();
        assert_eq!(dto.fecha_fin, Some(d(2024, 4, 15)));
        assert!(!dto.activo);
    }
}
