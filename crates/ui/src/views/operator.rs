use checklist_core::model::OperatorInfo;
use checklist_core::validation::FieldRules;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::page::{FORM_INCOMPLETE_MESSAGE, FormValidator, Revalidate, Severity};
use tracing::info;

use crate::context::{AppContext, OperatorSession};
use crate::routes::Route;
use crate::scheduler::TaskScheduler;
use crate::utils::AppUtils;

struct FieldSpec {
    name: &'static str,
    label: &'static str,
    rules: FieldRules,
}

fn operator_fields() -> [FieldSpec; 5] {
    [
        FieldSpec {
            name: "activo_fijo",
            label: "Activo fijo",
            rules: FieldRules::text().required(),
        },
        FieldSpec {
            name: "propietario",
            label: "Propietario",
            rules: FieldRules::text().required(),
        },
        FieldSpec {
            name: "cargo",
            label: "Cargo",
            rules: FieldRules::text().required(),
        },
        FieldSpec {
            name: "tecnico",
            label: "Técnico",
            rules: FieldRules::text().required().min_length(3),
        },
        FieldSpec {
            name: "email",
            label: "Correo de contacto",
            rules: FieldRules::email(),
        },
    ]
}

#[derive(Clone, Debug, PartialEq)]
struct FieldRow {
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    required: bool,
    min_length: Option<String>,
    value: String,
    class: String,
    error: Option<String>,
}

fn operator_info(form: &FormValidator) -> OperatorInfo {
    OperatorInfo {
        asset_tag: form.value("activo_fijo").to_string(),
        owner: form.value("propietario").to_string(),
        position: form.value("cargo").to_string(),
        technician: form.value("tecnico").to_string(),
        email: Some(form.value("email").to_string()),
    }
    .normalized()
}

/// Start page: captures the operator data the checklist is filed under.
#[component]
pub fn OperatorFormView() -> Element {
    let ctx = use_context::<AppContext>();
    let utils = use_context::<AppUtils>();
    let session = use_context::<OperatorSession>();
    let navigator = use_navigator();
    let debounce = ctx.page_config().validation_debounce;

    let mut form = use_signal(|| {
        operator_fields()
            .into_iter()
            .fold(FormValidator::new(debounce), |form, spec| {
                form.field(spec.name, spec.rules)
            })
    });
    let timers = use_hook(TaskScheduler::<Revalidate>::new);
    let on_revalidate = use_callback(move |event: Revalidate| {
        form.write().handle(event);
    });
    timers.bind(on_revalidate);

    let on_submit = {
        let utils = utils.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if !form.write().submit() {
                utils.show_notification(FORM_INCOMPLETE_MESSAGE, Severity::Warning);
                return;
            }
            let info = operator_info(&form.read());
            info!(asset = %info.asset_tag, technician = %info.technician, "operator data captured");
            session.start(info);
            let _ = navigator.push(Route::Checklist {});
        }
    };

    let rows: Vec<FieldRow> = {
        let form = form.read();
        operator_fields()
            .into_iter()
            .map(|spec| {
                let status = form.status(spec.name);
                FieldRow {
                    name: spec.name,
                    label: spec.label,
                    input_type: spec.rules.kind.input_type(),
                    required: spec.rules.required,
                    min_length: spec.rules.min_length.map(|min| min.to_string()),
                    value: form.value(spec.name).to_string(),
                    class: format!("form-input {}", status.class()).trim_end().to_string(),
                    error: status.error().map(ToString::to_string),
                }
            })
            .collect()
    };
    let today = utils.format_date(ctx.clock().today());
    let title = ctx.page().title.clone();

    rsx! {
        div { class: "page page--operator",
            h2 { "{title}" }
            p { class: "form-date", "Fecha: {today}" }
            form { class: "operator-form", "data-validate": "true", novalidate: true, onsubmit: on_submit,
                for row in rows {
                    div { key: "{row.name}", class: "form-field",
                        label { r#for: "{row.name}",
                            "{row.label}"
                            if row.required {
                                span { class: "required", " *" }
                            }
                        }
                        input {
                            id: "{row.name}",
                            name: "{row.name}",
                            r#type: row.input_type,
                            class: "{row.class}",
                            value: "{row.value}",
                            required: row.required,
                            minlength: row.min_length,
                            oninput: {
                                let timers = timers.clone();
                                let name = row.name;
                                move |evt: FormEvent| {
                                    let mut timers = timers.clone();
                                    form.write().on_input(name, evt.value(), &mut timers);
                                }
                            },
                            onblur: {
                                let name = row.name;
                                move |_| {
                                    form.write().on_blur(name);
                                }
                            },
                        }
                        if let Some(error) = &row.error {
                            p { class: "field-error text-red-500 text-sm", "{error}" }
                        }
                    }
                }
                button { r#type: "submit", class: "btn-primary", "Iniciar checklist" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use services::TimerQueue;

    use super::*;

    fn filled_form() -> FormValidator {
        let mut queue = TimerQueue::new();
        let mut form = operator_fields()
            .into_iter()
            .fold(FormValidator::new(Duration::from_millis(300)), |form, spec| {
                form.field(spec.name, spec.rules)
            });
        for (name, value) in [
            ("activo_fijo", " AF-1020 "),
            ("propietario", "Ana Pérez"),
            ("cargo", "Contadora"),
            ("tecnico", "Luis"),
            ("email", ""),
        ] {
            form.on_input(name, value, &mut queue);
        }
        form
    }

    #[test]
    fn filled_form_passes_and_maps_to_operator() {
        let mut form = filled_form();
        assert!(form.submit());
        let info = operator_info(&form);
        assert_eq!(info.asset_tag, "AF-1020");
        assert_eq!(info.email, None);
        assert!(info.is_complete());
    }

    #[test]
    fn short_technician_name_blocks_submission() {
        let mut queue = TimerQueue::new();
        let mut form = filled_form();
        form.on_input("tecnico", "Al", &mut queue);
        assert!(!form.submit());
        assert_eq!(
            form.status("tecnico").error().map(ToString::to_string),
            Some("Mínimo 3 caracteres".to_string())
        );
    }
}
