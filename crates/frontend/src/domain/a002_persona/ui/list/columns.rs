use crate::shared::components::row_actions::RowActions;
use crate::shared::date_utils::format_date;
use crate::shared::forms::or_dash;
use contracts::domain::a002_persona::Persona;
use leptos::prelude::*;
use thaw::*;

pub const COLUMNS: [&str; 6] = [
    "Nombre completo",
    "Documento",
    "Correo",
    "Teléfono",
    "Fecha de nacimiento",
    "",
];

#[component]
pub fn PersonaRow(
    item: Persona,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let nombre = item.nombre_completo();
    let documento = item.documento();
    let email = or_dash(&item.email);
    let telefono = or_dash(&item.telefono);
    let nacimiento = item.fecha_nacimiento.map(format_date).unwrap_or_else(|| "-".to_string());
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
                        {nombre}
                    </a>
                </TableCellLayout>
            </TableCell>
            <TableCell>{documento}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{email}</TableCellLayout>
            </TableCell>
            <TableCell>{telefono}</TableCell>
            <TableCell>{nacimiento}</TableCell>
            <TableCell>
                <RowActions on_edit=on_edit on_delete=on_delete disabled=busy />
            </TableCell>
        </TableRow>
    }
}
