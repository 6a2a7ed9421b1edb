use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::dates::ranges_overlap;
use crate::shared::proxy::{resources, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Assignment of a user to a caja for a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CajaUsuario {
    pub id: EntityId,
    pub caja_id: EntityId,
    pub usuario_id: EntityId,
    pub fecha_inicio: NaiveDate,
    #[serde(default)]
    pub fecha_fin: Option<NaiveDate>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

fn default_true() -> bool {
    true
}

impl CajaUsuario {
    /// DTO for the "finalizar" row action: ends the assignment today
    pub fn finalizar(&self, hoy: NaiveDate) -> Result<CajaUsuarioDto, String> {
        if !self.activo {
            return Err("La asignación ya fue finalizada".into());
        }
        let mut dto = CajaUsuarioDto::from(self);
        dto.fecha_fin = Some(hoy.max(self.fecha_inicio));
        dto.activo = false;
        Ok(dto)
    }
}

impl AggregateRoot for CajaUsuario {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("Asignación #{}", self.id)
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn resource() -> Resource {
        resources::CAJA_USUARIOS
    }

    fn element_name() -> &'static str {
        "Asignación de caja"
    }

    fn list_name() -> &'static str {
        "Usuarios de caja"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CajaUsuarioDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub caja_id: Option<EntityId>,
    pub usuario_id: Option<EntityId>,
    pub fecha_inicio: Option<NaiveDate>,
    pub fecha_fin: Option<NaiveDate>,
    pub activo: bool,
}

impl Default for CajaUsuarioDto {
    fn default() -> Self {
        Self {
            id: None,
            caja_id: None,
            usuario_id: None,
            fecha_inicio: None,
            fecha_fin: None,
            activo: true,
        }
    }
}

impl From<&CajaUsuario> for CajaUsuarioDto {
    fn from(a: &CajaUsuario) -> Self {
        Self {
            id: Some(a.id),
            caja_id: Some(a.caja_id),
            usuario_id: Some(a.usuario_id),
            fecha_inicio: Some(a.fecha_inicio),
            fecha_fin: a.fecha_fin,
            activo: a.activo,
        }
    }
}

impl CajaUsuarioDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.caja_id.is_none() {
            return Err("Seleccione una caja".into());
        }
        if self.usuario_id.is_none() {
            return Err("Seleccione un usuario".into());
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

    /// The same user cannot hold two active assignments of the same caja with
    /// overlapping periods.
    pub fn validate_sin_solapamiento(&self, existentes: &[CajaUsuario]) -> Result<(), String> {
        let (Some(caja_id), Some(usuario_id), Some(inicio)) =
            (self.caja_id, self.usuario_id, self.fecha_inicio)
        else {
            return Ok(());
        };
        if !self.activo {
            return Ok(());
        }
        let solapa = existentes.iter().any(|a| {
            Some(a.id) != self.id
                && a.activo
                && a.caja_id == caja_id
                && a.usuario_id == usuario_id
                && ranges_overlap(inicio, self.fecha_fin, a.fecha_inicio, a.fecha_fin)
        });
        if solapa {
            return Err("El usuario ya tiene una asignación activa en esta caja para ese periodo".into());
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

    fn asignacion(id: i64, inicio: NaiveDate, fin: Option<NaiveDate>) -> CajaUsuario {
        CajaUsuario {
            id,
            caja_id: 1,
            usuario_id: 7,
            fecha_inicio: inicio,
            fecha_fin: fin,
            activo: true,
        }
    }

    fn dto(inicio: NaiveDate, fin: Option<NaiveDate>) -> CajaUsuarioDto {
        CajaUsuarioDto {
            caja_id: Some(1),
            usuario_id: Some(7),
            fecha_inicio: Some(inicio),
            fecha_fin: fin,
            ..Default::default()
        }
    }

    #[test]
    fn requires_caja_usuario_and_start() {
        let mut dto = CajaUsuarioDto::default();
        assert_eq!(dto.validate().unwrap_err(), "Seleccione una caja");
        dto.caja_id = Some(1);
        assert_eq!(dto.validate().unwrap_err(), "Seleccione un usuario");
        dto.usuario_id = Some(2);
        assert!(dto.validate().is_err());
        dto.fecha_inicio = Some(d(2024, 1, 10));
        dto.fecha_fin = Some(d(2024, 1, 9));
        assert!(dto.validate().is_err());
        dto.fecha_fin = Some(d(2024, 1, 10));
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn overlapping_active_assignment_is_rejected() {
        let existentes = vec![asignacion(1, d(2024, 1, 1), None)];
        assert!(dto(d(2024, 3, 1), None)
            .validate_sin_solapamiento(&existentes)
            .is_err());

        let cerradas = vec![asignacion(1, d(2024, 1, 1), Some(d(2024, 2, 29)))];
        assert!(dto(d(2024, 3, 1), None)
            .validate_sin_solapamiento(&cerradas)
            .is_ok());
    }

    #[test]
    fn editing_itself_is_not_an_overlap() {
        let existing = asignacion(1, d(2024, 1, 1), None);
        let dto = CajaUsuarioDto::from(&existing);
        assert!(dto.validate_sin_solapamiento(&[existing]).is_ok());
    }

    #[test]
    fn finalizar_closes_today_and_never_before_start() {
        let a = asignacion(3, d(2024, 5, 10), None);
        let dto = a.finalizar(d(2024, 6, 1)).unwrap();
        assert_eq!(dto.fecha_fin, Some(d(2024, 6, 1)));
        assert!(!dto.activo);

        let futura = asignacion(4, d(2024, 7, 1), None);
        assert_eq!(futura.finalizar(d(2024, 6, 1)).unwrap().fecha_fin, Some(d(2024, 7, 1)));

        let mut inactiva = asignacion(5, d(2024, 1, 1), None);
        inactiva.activo = false;
        assert!(inactiva.finalizar(d(2024, 6, 1)).is_err());
    }
}
