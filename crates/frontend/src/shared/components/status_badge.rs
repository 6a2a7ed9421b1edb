use contracts::domain::a004_caja::EstadoCaja;
use contracts::domain::a011_cliente_inmobiliario::EstadoCliente;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
    Warning,
    Neutral,
}

impl Tone {
    fn color(&self) -> BadgeColor {
        match self {
            Tone::Success => BadgeColor::Success,
            Tone::Danger => BadgeColor::Danger,
            Tone::Warning => BadgeColor::Warning,
            Tone::Neutral => BadgeColor::Informative,
        }
    }
}

pub fn activo_badge(activo: bool) -> (&'static str, Tone) {
    if activo {
        ("Activo", Tone::Success)
    } else {
        ("Inactivo", Tone::Neutral)
    }
}

pub fn estado_caja_badge(estado: EstadoCaja) -> (&'static str, Tone) {
    match estado {
        EstadoCaja::Abierta => (estado.label(), Tone::Success),
        EstadoCaja::Cerrada => (estado.label(), Tone::Danger),
    }
}

pub fn estado_cliente_badge(estado: EstadoCliente) -> (&'static str, Tone) {
    match estado {
        EstadoCliente::Prospecto => (estado.label(), Tone::Warning),
        EstadoCliente::Activo => (estado.label(), Tone::Success),
        EstadoCliente::Inactivo => (estado.label(), Tone::Neutral),
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] label: String, tone: Tone) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=tone.color()>
            {label}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_tones() {
        assert_eq!(activo_badge(false), ("Inactivo", Tone::Neutral));
        assert_eq!(estado_caja_badge(EstadoCaja::Cerrada).1, Tone::Danger);
        assert_eq!(estado_cliente_badge(EstadoCliente::Prospecto), ("Prospecto", Tone::Warning));
    }
}
