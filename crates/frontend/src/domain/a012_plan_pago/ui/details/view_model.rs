use crate::domain::a010_feriado_global::api as feriados_api;
use crate::domain::a012_plan_pago::api;
use crate::shared::alerts::AlertService;
use crate::shared::number_format::parse_amount;
use chrono::NaiveDate;
use contracts::domain::a010_feriado_global::{siguiente_dia_habil, FeriadoGlobal};
use contracts::domain::a012_plan_pago::{Cuota, PlanPago, PlanPagoDto};
use contracts::domain::common::EntityId;
use contracts::shared::dates::today;
use contracts::shared::decimal::round2;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Schedule of `plan` for `precio`. With `feriados` every due date moves to
/// the next working day.
pub fn preview_schedule(
    plan: &PlanPago,
    precio: f64,
    fecha_inicio: NaiveDate,
    feriados: Option<&[FeriadoGlobal]>,
) -> Result<Vec<Cuota>, String> {
    let mut cuotas = plan.generar_cronograma(precio, fecha_inicio)?;
    if let Some(feriados) = feriados {
        for cuota in &mut cuotas {
            cuota.fecha_vencimiento = siguiente_dia_habil(cuota.fecha_vencimiento, feriados);
        }
    }
    Ok(cuotas)
}

/// (capital, interés, total) columns of a schedule
pub fn schedule_totals(cuotas: &[Cuota]) -> (f64, f64, f64) {
    let (capital, interes, monto) = cuotas.iter().fold((0.0, 0.0, 0.0), |acc, c| {
        (acc.0 + c.capital, acc.1 + c.interes, acc.2 + c.monto)
    });
    (round2(capital), round2(interes), round2(monto))
}

#[derive(Clone, Copy)]
pub struct PlanPagoDetailsViewModel {
    pub form: RwSignal<PlanPagoDto>,
    pub tasa_text: RwSignal<String>,
    pub inicial_text: RwSignal<String>,
    pub precio_text: RwSignal<String>,
    pub fecha_inicio: RwSignal<Option<NaiveDate>>,
    pub dias_habiles: RwSignal<bool>,
    pub feriados: RwSignal<Vec<FeriadoGlobal>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl PlanPagoDetailsViewModel {
    pub fn new(empresa_id: Option<EntityId>) -> Self {
        Self {
            form: RwSignal::new(PlanPagoDto {
                empresa_id,
                ..Default::default()
            }),
            tasa_text: RwSignal::new("0".to_string()),
            inicial_text: RwSignal::new("0".to_string()),
            precio_text: RwSignal::new("100000".to_string()),
            fecha_inicio: RwSignal::new(Some(today())),
            dias_habiles: RwSignal::new(false),
            feriados: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    pub fn load_if_needed(&self, id: Option<EntityId>) {
        let Some(id) = id else { return };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(plan) => {
                    vm.tasa_text.set(format!("{:.2}", plan.tasa_interes_anual));
                    vm.inicial_text.set(format!("{:.2}", plan.cuota_inicial_porcentaje));
                    vm.form.set(PlanPagoDto::from(&plan));
                }
                Err(e) => vm.error.set(Some(format!("Error al cargar: {}", e.user_message()))),
            }
            vm.loading.set(false);
        });
    }

    pub fn load_feriados(&self) {
        let vm = *self;
        spawn_local(async move {
            match feriados_api::fetch_all().await {
                Ok(items) => vm.feriados.set(items),
                Err(e) => log::warn!("feriados not loaded, due dates stay unadjusted: {}", e),
            }
        });
    }

    /// Form values with the numeric text inputs applied
    fn read_form(&self) -> Result<PlanPagoDto, String> {
        let mut dto = self.form.get();
        dto.tasa_interes_anual = parse_amount(&self.tasa_text.get())?;
        dto.cuota_inicial_porcentaje = parse_amount(&self.inicial_text.get())?;
        Ok(dto)
    }

    /// Reactive schedule preview for the price and start date in the form
    pub fn cronograma(&self) -> Result<Vec<Cuota>, String> {
        let dto = self.read_form()?;
        dto.validate_condiciones()?;
        let precio = parse_amount(&self.precio_text.get())?;
        let inicio = self
            .fecha_inicio
            .get()
            .ok_or_else(|| "Indique la fecha de inicio".to_string())?;
        self.feriados.with(|feriados| {
            let feriados = self.dias_habiles.get().then_some(feriados.as_slice());
            preview_schedule(&dto.to_plan(), precio, inicio, feriados)
        })
    }

    pub fn save_command(&self, alerts: AlertService, on_saved: Callback<()>) {
        let current = match untrack(|| self.read_form()) {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            match api::save(&current).await {
                Ok(saved) => {
                    log::info!("plan de pago {} saved", saved.id);
                    alerts.success("Plan de pago guardado correctamente");
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(e.user_message())),
            }
            vm.saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn plan(cuotas: u32, tasa: f64) -> PlanPago {
        PlanPago {
            id: 1,
            empresa_id: 1,
            nombre: "Plan".into(),
            numero_cuotas: cuotas,
            tasa_interes_anual: tasa,
            cuota_inicial_porcentaje: 0.0,
            activo: true,
        }
    }

    #[test]
    fn due_dates_move_to_working_days() {
        // 2024-06-01 + 1 month = 2024-07-01 (Monday); 2 months = 2024-08-01 (Thursday)
        let feriados = vec![FeriadoGlobal {
            id: 1,
            fecha: d(2024, 8, 1),
            descripcion: "Feriado".into(),
            recurrente: false,
        }];
        let cuotas = preview_schedule(&plan(2, 0.0), 1000.0, d(2024, 6, 1), Some(&feriados)).unwrap();
        assert_eq!(cuotas[0].fecha_vencimiento, d(2024, 7, 1));
        assert_eq!(cuotas[1].fecha_vencimiento, d(2024, 8, 2));

        let plain = preview_schedule(&plan(2, 0.0), 1000.0, d(2024, 6, 1), None).unwrap();
        assert_eq!(plain[1].fecha_vencimiento, d(2024, 8, 1));
    }

    #[test]
    fn totals_match_financed_amount() {
        let cuotas = preview_schedule(&plan(12, 18.0), 10_000.0, d(2024, 1, 15), None).unwrap();
        let (capital, interes, monto) = schedule_totals(&cuotas);
        assert_eq!(capital, 10_000.0);
        assert!(interes > 0.0);
        assert_eq!(monto, round2(capital + interes));
    }
}
