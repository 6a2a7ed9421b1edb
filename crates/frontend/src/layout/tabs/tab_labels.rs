//! Tab titles. Entity tabs take the list name declared by the aggregate.

use contracts::domain::a001_empresa::Empresa;
use contracts::domain::a002_persona::Persona;
use contracts::domain::a003_punto_venta::PuntoVenta;
use contracts::domain::a004_caja::Caja;
use contracts::domain::a005_caja_usuario::CajaUsuario;
use contracts::domain::a006_caja_chica_autorizada::CajaChicaAutorizada;
use contracts::domain::a007_rol::Rol;
use contracts::domain::a008_permiso::Usuario;
use contracts::domain::a009_config_interes_mora::ConfigInteresMora;
use contracts::domain::a010_feriado_global::FeriadoGlobal;
use contracts::domain::a011_cliente_inmobiliario::ClienteInmobiliario;
use contracts::domain::a012_plan_pago::PlanPago;
use contracts::domain::common::AggregateRoot;

pub const D400_DASHBOARD_VENTAS: &str = "d400_dashboard_ventas";

/// Readable title for a tab key. Unknown keys fall back to the key itself.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        "a001_empresa" => Empresa::list_name(),
        "a002_persona" => Persona::list_name(),
        "a003_punto_venta" => PuntoVenta::list_name(),
        "a004_caja" => Caja::list_name(),
        "a005_caja_usuario" => CajaUsuario::list_name(),
        "a006_caja_chica_autorizada" => CajaChicaAutorizada::list_name(),
        "a007_rol" => Rol::list_name(),
        "a008_permiso" => Usuario::list_name(),
        "a009_config_interes_mora" => ConfigInteresMora::list_name(),
        "a010_feriado_global" => FeriadoGlobal::list_name(),
        "a011_cliente_inmobiliario" => ClienteInmobiliario::list_name(),
        "a012_plan_pago" => PlanPago::list_name(),
        D400_DASHBOARD_VENTAS => "Dashboard de ventas",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(tab_label_for_key("a004_caja"), "Cajas");
        assert_eq!(tab_label_for_key("a008_permiso"), "Permisos");
        assert_eq!(tab_label_for_key("zzz"), "zzz");
    }
}
