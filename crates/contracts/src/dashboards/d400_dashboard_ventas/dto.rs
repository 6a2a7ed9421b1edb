use crate::domain::common::EntityId;
use crate::shared::dates::format_date;
use crate::shared::decimal::{deserialize_decimal, round2};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter of the sales dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VentasDashboardRequest {
    pub empresa_id: Option<EntityId>,
    pub fecha_desde: Option<NaiveDate>,
    pub fecha_hasta: Option<NaiveDate>,
}

impl VentasDashboardRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let (Some(desde), Some(hasta)) = (self.fecha_desde, self.fecha_hasta) {
            if hasta < desde {
                return Err("La fecha hasta no puede ser anterior a la fecha desde".into());
            }
        }
        Ok(())
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.empresa_id {
            pairs.push(("empresa_id".to_string(), id.to_string()));
        }
        if let Some(desde) = self.fecha_desde {
            pairs.push(("fecha_desde".to_string(), format_date(desde)));
        }
        if let Some(hasta) = self.fecha_hasta {
            pairs.push(("fecha_hasta".to_string(), format_date(hasta)));
        }
        pairs
    }
}

/// Sales of one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VentaMensual {
    /// Period in format "YYYY-MM"
    pub mes: String,
    #[serde(default)]
    pub cantidad: u64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub monto: f64,
}

/// Sales of one punto de venta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VentaPorPunto {
    pub punto_venta_id: EntityId,
    #[serde(default)]
    pub punto_venta: String,
    #[serde(default)]
    pub cantidad: u64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub monto: f64,
}

/// Response of the sales dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VentasDashboard {
    #[serde(default)]
    pub total_ventas: u64,
    #[serde(default, deserialize_with = "deserialize_decimal")]
    pub monto_total: f64,
    #[serde(default)]
    pub ventas_por_mes: Vec<VentaMensual>,
    #[serde(default)]
    pub ventas_por_punto: Vec<VentaPorPunto>,
}

impl VentasDashboard {
    pub fn ticket_promedio(&self) -> f64 {
        if self.total_ventas == 0 {
            return 0.0;
        }
        round2(self.monto_total / self.total_ventas as f64)
    }

    /// Change of the last month against the previous one, in percent.
    /// `None` with fewer than two months or a zero previous month.
    pub fn variacion_mensual(&self) -> Option<f64> {
        let mut meses: Vec<&VentaMensual> = self.ventas_por_mes.iter().collect();
        meses.sort_by(|a, b| a.mes.cmp(&b.mes));
        let [.., anterior, ultimo] = meses.as_slice() else {
            return None;
        };
        if anterior.monto == 0.0 {
            return None;
        }
        Some(round2((ultimo.monto - anterior.monto) / anterior.monto * 100.0))
    }

    pub fn mejor_punto(&self) -> Option<&VentaPorPunto> {
        self.ventas_por_punto
            .iter()
            .max_by(|a, b| a.monto.total_cmp(&b.monto))
    }

    /// Share of a punto de venta in the total amount, in percent
    pub fn participacion(&self, punto: &VentaPorPunto) -> f64 {
        if self.monto_total <= 0.0 {
            return 0.0;
        }
        round2(punto.monto / self.monto_total * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> VentasDashboard {
        serde_json::from_str(
            r#"{
                "total_ventas": 8,
                "monto_total": "400000.00",
                "ventas_por_mes": [
                    {"mes": "2024-05", "cantidad": 5, "monto": 250000},
                    {"mes": "2024-04", "cantidad": 3, "monto": "200000.00"}
                ],
                "ventas_por_punto": [
                    {"punto_venta_id": 1, "punto_venta": "Miraflores", "cantidad": 2, "monto": 100000},
                    {"punto_venta_id": 2, "punto_venta": "San Isidro", "cantidad": 6, "monto": 300000}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn kpis() {
        let d = dashboard();
        assert_eq!(d.ticket_promedio(), 50000.0);
        assert_eq!(d.variacion_mensual(), Some(25.0));
        let mejor = d.mejor_punto().unwrap();
        assert_eq!(mejor.punto_venta, "San Isidro");
        assert_eq!(d.participacion(mejor), 75.0);
    }

    #[test]
    fn empty_dashboard_has_neutral_kpis() {
        let d = VentasDashboard::default();
        assert_eq!(d.ticket_promedio(), 0.0);
        assert_eq!(d.variacion_mensual(), None);
        assert!(d.mejor_punto().is_none());
    }

    #[test]
    fn request_query_and_range() {
        let req = VentasDashboardRequest {
            empresa_id: Some(3),
            fecha_desde: NaiveDate::from_ymd_opt(2024, 1, 1),
            fecha_hasta: NaiveDate::from_ymd_opt(2023, 12, 31),
        };
        assert!(req.validate().is_err());
        assert_eq!(req.to_query_pairs()[0], ("empresa_id".to_string(), "3".to_string()));
        assert_eq!(req.to_query_pairs().len(), 3);
    }
}
