use crate::shared::components::row_actions::RowActions;
use crate::shared::components::status_badge::{activo_badge, StatusBadge};
use crate::shared::forms::or_dash;
use contracts::domain::a001_empresa::Empresa;
use leptos::prelude::*;
use thaw::*;

pub const COLUMNS: [&str; 6] = ["Razón social", "RUC", "Contacto", "Dirección", "Estado", ""];

/// Phone and email joined, whichever are present
pub fn contacto(e: &Empresa) -> String {
    let parts: Vec<&str> = [e.telefono.as_deref(), e.email.as_deref()]
        .into_iter()
        .flatten()
        .filter(|v| !v.trim().is_empty())
        .collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" / ")
    }
}

#[component]
pub fn EmpresaRow(
    item: Empresa,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let (estado, tone) = activo_badge(item.activo);
    let comercial = item
        .nombre_comercial
        .clone()
        .filter(|n| !n.trim().is_empty());
    let razon_social = item.razon_social.clone();
    let ruc = item.ruc.clone();
    let contacto = contacto(&item);
    let direccion = or_dash(&item.direccion);

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>
                    <a
                        href="#"
                        class="table__link"
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_edit.run(());
                        }
                    >
                        {razon_social}
                    </a>
                    {comercial.map(|c| view! { <div class="table__subtext">{c}</div> })}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <span style="font-family: monospace;">{ruc}</span>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{contacto}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{direccion}</TableCellLayout>
            </TableCell>
            <TableCell>
                <StatusBadge label=estado tone=tone />
            </TableCell>
            <TableCell>
                <RowActions on_edit=on_edit on_delete=on_delete disabled=busy />
            </TableCell>
        </TableRow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contacto_joins_present_values() {
        let mut e = Empresa {
            id: 1,
            razon_social: "Los Andes S.A.C.".into(),
            nombre_comercial: None,
            ruc: "20512345678".into(),
            direccion: None,
            telefono: None,
            email: None,
            logo_url: None,
            activo: true,
        };
        assert_eq!(contacto(&e), "-");
        e.telefono = Some("01 555 1234".into());
        e.email = Some("ventas@losandes.pe".into());
        assert_eq!(contacto(&e), "01 555 1234 / ventas@losandes.pe");
    }
}
