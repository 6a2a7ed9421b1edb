use crate::shared::icons::icon;
use crate::shared::modal_stack::ModalStackService;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="confirm-dialog">
            <div class="details-header">
                <span class="confirm-dialog__icon">{icon("alert-triangle")}</span>
                <h3>{title}</h3>
            </div>
            <p class="confirm-dialog__message">{message}</p>
            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_confirm.run(())>
                    {confirm_label}
                </Button>
                <Button on_click=move |_| on_cancel.run(())>"Cancelar"</Button>
            </div>
        </div>
    }
}

/// Opens a confirmation on top of the modal stack. The dialog closes before
/// `on_confirm` runs, so a failing action never leaves it open.
pub fn confirm(
    modal_stack: ModalStackService,
    title: impl Into<String>,
    message: impl Into<String>,
    confirm_label: impl Into<String>,
    on_confirm: Callback<()>,
) {
    let title = title.into();
    let message = message.into();
    let confirm_label = confirm_label.into();
    modal_stack.push_with_frame(
        Some("max-width: 440px;".to_string()),
        Some("confirm-modal".to_string()),
        move |handle| {
            let confirm_handle = handle.clone();
            view! {
                <ConfirmDialog
                    title=title.clone()
                    message=message.clone()
                    confirm_label=confirm_label.clone()
                    on_confirm=Callback::new(move |_| {
                        confirm_handle.close();
                        on_confirm.run(());
                    })
                    on_cancel=Callback::new(move |_| handle.close())
                />
            }
            .into_any()
        },
    );
}

/// Standard delete confirmation
pub fn confirm_delete(
    modal_stack: ModalStackService,
    element: &str,
    name: &str,
    on_confirm: Callback<()>,
) {
    confirm(
        modal_stack,
        format!("Eliminar {}", element.to_lowercase()),
        delete_message(element, name),
        "Eliminar",
        on_confirm,
    );
}

pub fn delete_message(element: &str, name: &str) -> String {
    format!(
        "¿Está seguro de eliminar {} \"{}\"? Esta acción no se puede deshacer.",
        element.to_lowercase(),
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_message_names_the_record() {
        assert_eq!(
            delete_message("Caja", "Caja 01"),
            "¿Está seguro de eliminar caja \"Caja 01\"? Esta acción no se puede deshacer."
        );
    }
}
