use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::decimal::{deserialize_decimal, round2};
use crate::shared::proxy::{resources, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TipoCaja {
    Central,
    #[default]
    Chica,
}

impl TipoCaja {
    pub const ALL: [TipoCaja; 2] = [TipoCaja::Central, TipoCaja::Chica];

    pub fn code(&self) -> &'static str {
        match self {
            TipoCaja::Central => "central",
            TipoCaja::Chica => "chica",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TipoCaja::Central => "Caja central",
            TipoCaja::Chica => "Caja chica",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EstadoCaja {
    #[default]
    Abierta,
    Cerrada,
}

impl EstadoCaja {
    pub const ALL: [EstadoCaja; 2] = [EstadoCaja::Abierta, EstadoCaja::Cerrada];

    pub fn code(&self) -> &'static str {
        match self {
            EstadoCaja::Abierta => "abierta",
            EstadoCaja::Cerrada => "cerrada",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EstadoCaja::Abierta => "Abierta",
            EstadoCaja::Cerrada => "Cerrada",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}

/// Caja registradora de un punto de venta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caja {
    pub id: EntityId,
    pub nombre: String,
    pub punto_venta_id: EntityId,
    #[serde(default)]
    pub tipo: TipoCaja,
    #[serde(default)]
    pub estado: EstadoCaja,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub saldo_inicial: f64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub saldo_actual: f64,
    #[serde(default)]
    pub fecha_apertura: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fecha_cierre: Option<DateTime<Utc>>,
}

impl Caja {
    pub fn is_open_central(&self) -> bool {
        self.tipo == TipoCaja::Central && self.estado == EstadoCaja::Abierta
    }

    /// Close DTO for the "finalizar" row action: state closed, closing time now,
    /// balances untouched.
    pub fn cerrar(&self, ahora: DateTime<Utc>) -> Result<CajaDto, String> {
        if self.estado == EstadoCaja::Cerrada {
            return Err("La caja ya se encuentra cerrada".into());
        }
        let mut dto = CajaDto::from(self);
        dto.estado = EstadoCaja::Cerrada;
        dto.fecha_cierre = Some(ahora);
        Ok(dto)
    }
}

impl AggregateRoot for Caja {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn resource() -> Resource {
        resources::CAJAS
    }

    fn element_name() -> &'static str {
        "Caja"
    }

    fn list_name() -> &'static str {
        "Cajas"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CajaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub nombre: String,
    pub punto_venta_id: Option<EntityId>,
    pub tipo: TipoCaja,
    pub estado: EstadoCaja,
    pub saldo_inicial: f64,
    pub saldo_actual: f64,
    pub fecha_apertura: Option<DateTime<Utc>>,
    pub fecha_cierre: Option<DateTime<Utc>>,
}

impl From<&Caja> for CajaDto {
    fn from(c: &Caja) -> Self {
        Self {
            id: Some(c.id),
            nombre: c.nombre.clone(),
            punto_venta_id: Some(c.punto_venta_id),
            tipo: c.tipo,
            estado: c.estado,
            saldo_inicial: c.saldo_inicial,
            saldo_actual: c.saldo_actual,
            fecha_apertura: c.fecha_apertura,
            fecha_cierre: c.fecha_cierre,
        }
    }
}

impl CajaDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Field-level rules of the form
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre de la caja es obligatorio".into());
        }
        if self.punto_venta_id.is_none() {
            return Err("Seleccione un punto de venta".into());
        }
        if !self.saldo_inicial.is_finite() || self.saldo_inicial < 0.0 {
            return Err("El saldo inicial no puede ser negativo".into());
        }
        if let (Some(apertura), Some(cierre)) = (self.fecha_apertura, self.fecha_cierre) {
            if cierre < apertura {
                return Err(
                    "La fecha de cierre no puede ser anterior a la fecha de apertura".into(),
                );
            }
        }
        if self.estado == EstadoCaja::Cerrada && self.fecha_cierre.is_none() {
            return Err("Una caja cerrada debe tener fecha de cierre".into());
        }
        Ok(())
    }

    /// Only one open central caja per punto de venta. `existentes` is the list
    /// already loaded in the screen; the caja being edited is skipped.
    pub fn validate_central_unica(&self, existentes: &[Caja]) -> Result<(), String> {
        if self.tipo != TipoCaja::Central || self.estado != EstadoCaja::Abierta {
            return Ok(());
        }
        let Some(punto_venta_id) = self.punto_venta_id else {
            return Ok(());
        };
        let conflict = existentes.iter().any(|c| {
            Some(c.id) != self.id && c.punto_venta_id == punto_venta_id && c.is_open_central()
        });
        if conflict {
            return Err("Ya existe una caja central abierta en este punto de venta".into());
        }
        Ok(())
    }

    /// New cajas start with the current balance equal to the opening balance
    pub fn prepare_for_save(&mut self, ahora: DateTime<Utc>) {
        self.nombre = self.nombre.trim().to_string();
        self.saldo_inicial = round2(self.saldo_inicial);
        if !self.is_edit() {
            self.saldo_actual = self.saldo_inicial;
            if self.estado == EstadoCaja::Abierta && self.fecha_apertura.is_none() {
                self.fecha_apertura = Some(ahora);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn caja(id: i64, punto: i64, tipo: TipoCaja, estado: EstadoCaja) -> Caja {
        Caja {
            id,
            nombre: format!("Caja {}", id),
            punto_venta_id: punto,
            tipo,
            estado,
            saldo_inicial: 0.0,
            saldo_actual: 0.0,
            fecha_apertura: None,
            fecha_cierre: None,
        }
    }

    fn nueva_central(punto: i64) -> CajaDto {
        CajaDto {
            nombre: "Central 2".into(),
            punto_venta_id: Some(punto),
            tipo: TipoCaja::Central,
            estado: EstadoCaja::Abierta,
            ..Default::default()
        }
    }

    #[test]
    fn rejects_second_open_central_in_same_punto_de_venta() {
        let existentes = vec![caja(1, 10, TipoCaja::Central, EstadoCaja::Abierta)];
        let err = nueva_central(10)
            .validate_central_unica(&existentes)
            .unwrap_err();
        assert_eq!(err, "Ya existe una caja central abierta en este punto de venta");
    }

    #[test]
    fn allows_central_when_other_is_closed_or_elsewhere() {
        let existentes = vec![
            caja(1, 10, TipoCaja::Central, EstadoCaja::Cerrada),
            caja(2, 11, TipoCaja::Central, EstadoCaja::Abierta),
            caja(3, 10, TipoCaja::Chica, EstadoCaja::Abierta),
        ];
        assert!(nueva_central(10).validate_central_unica(&existentes).is_ok());
    }

    #[test]
    fn editing_the_open_central_itself_is_allowed() {
        let existing = caja(1, 10, TipoCaja::Central, EstadoCaja::Abierta);
        let dto = CajaDto::from(&existing);
        assert!(dto.validate_central_unica(&[existing]).is_ok());
    }

    #[test]
    fn chica_or_closed_central_skip_the_check() {
        let existentes = vec![caja(1, 10, TipoCaja::Central, EstadoCaja::Abierta)];
        let mut dto = nueva_central(10);
        dto.tipo = TipoCaja::Chica;
        assert!(dto.validate_central_unica(&existentes).is_ok());
        dto.tipo = TipoCaja::Central;
        dto.estado = EstadoCaja::Cerrada;
        assert!(dto.validate_central_unica(&existentes).is_ok());
    }

    #[test]
    fn field_rules() {
        let mut dto = nueva_central(1);
        assert!(dto.validate().is_ok());
        dto.saldo_inicial = -5.0;
        assert!(dto.validate().is_err());
        dto.saldo_inicial = 100.0;
        dto.estado = EstadoCaja::Cerrada;
        assert_eq!(
            dto.validate().unwrap_err(),
            "Una caja cerrada debe tener fecha de cierre"
        );
        dto.fecha_apertura = Some(Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap());
        dto.fecha_cierre = Some(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
        assert!(dto.validate().is_err());
    }

    #[test]
    fn cerrar_sets_state_and_time() {
        let ahora = Utc.with_ymd_and_hms(2024, 5, 2, 18, 30, 0).unwrap();
        let abierta = caja(5, 1, TipoCaja::Chica, EstadoCaja::Abierta);
        let dto = abierta.cerrar(ahora).unwrap();
        assert_eq!(dto.estado, EstadoCaja::Cerrada);
        assert_eq!(dto.fecha_cierre, Some(ahora));
        assert_eq!(dto.id, Some(5));

        let cerrada = caja(6, 1, TipoCaja::Chica, EstadoCaja::Cerrada);
        assert!(cerrada.cerrar(ahora).is_err());
    }

    #[test]
    fn new_caja_copies_opening_balance() {
        let ahora = Utc.with_ymd_and_hms(2024, 5, 2, 8, 0, 0).unwrap();
        let mut dto = nueva_central(1);
        dto.saldo_inicial = 250.456;
        dto.prepare_for_save(ahora);
        assert_eq!(dto.saldo_inicial, 250.46);
        assert_eq!(dto.saldo_actual, 250.46);
        assert_eq!(dto.fecha_apertura, Some(ahora));
    }

    #[test]
    fn parses_decimal_strings() {
        let json = r#"{"id":1,"nombre":"Central","punto_venta_id":2,"tipo":"central",
            "estado":"abierta","saldo_inicial":"500.00","saldo_actual":"732.10",
            "fecha_apertura":"2024-05-02T08:00:00Z","fecha_cierre":null}"#;
        let caja: Caja = serde_json::from_str(json).unwrap();
        assert!(caja.is_open_central());
        assert_eq!(caja.saldo_actual, 732.10);
    }
}
