//! Maps a tab key to the page it renders.

use super::tab_labels::D400_DASHBOARD_VENTAS;
use crate::dashboards::d400_ventas::ui::VentasDashboardPage;
use crate::domain::a001_empresa::ui::list::EmpresaList;
use crate::domain::a002_persona::ui::list::PersonaList;
use crate::domain::a003_punto_venta::ui::list::PuntoVentaList;
use crate::domain::a004_caja::ui::list::CajaList;
use crate::domain::a005_caja_usuario::ui::list::CajaUsuarioList;
use crate::domain::a006_caja_chica_autorizada::ui::list::CajaChicaAutorizadaList;
use crate::domain::a007_rol::ui::list::RolList;
use crate::domain::a009_config_interes_mora::ui::list::ConfigInteresMoraList;
use crate::domain::a010_feriado_global::ui::list::FeriadoGlobalList;
use crate::domain::a011_cliente_inmobiliario::ui::list::ClienteInmobiliarioList;
use crate::domain::a012_plan_pago::ui::list::PlanPagoList;
use crate::system::permisos::ui::PermisosPage;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Administración
        "a001_empresa" => view! { <EmpresaList /> }.into_any(),
        "a002_persona" => view! { <PersonaList /> }.into_any(),
        "a007_rol" => view! { <RolList /> }.into_any(),
        "a008_permiso" => view! { <PermisosPage /> }.into_any(),

        // Caja
        "a003_punto_venta" => view! { <PuntoVentaList /> }.into_any(),
        "a004_caja" => view! { <CajaList /> }.into_any(),
        "a005_caja_usuario" => view! { <CajaUsuarioList /> }.into_any(),
        "a006_caja_chica_autorizada" => view! { <CajaChicaAutorizadaList /> }.into_any(),

        // Planes
        "a009_config_interes_mora" => view! { <ConfigInteresMoraList /> }.into_any(),
        "a010_feriado_global" => view! { <FeriadoGlobalList /> }.into_any(),
        "a012_plan_pago" => view! { <PlanPagoList /> }.into_any(),

        // Inmobiliaria
        "a011_cliente_inmobiliario" => view! { <ClienteInmobiliarioList /> }.into_any(),
        D400_DASHBOARD_VENTAS => view! { <VentasDashboardPage /> }.into_any(),

        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">"Página no disponible"</div> }.into_any()
        }
    }
}
