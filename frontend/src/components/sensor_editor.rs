use std::rc::Rc;

use sensor_common::{
    editor::{DELETED_NOTICE, UPDATED_NOTICE},
    state::LoadGuard,
    DeleteOutcome, Field, SensorEditor, SensorForm, SensorId, SensorKind,
    ValidationErrors,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{request, utils, Route};

pub enum FormAction {
    Replace(SensorForm),
    Text(Field, String),
    Status(bool),
}

#[derive(Default, PartialEq)]
pub struct FormState(SensorForm);

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Replace(loaded) => form = loaded,
            FormAction::Text(field, value) => form.set_text(field, value),
            FormAction::Status(active) => form.set_status(active),
        }
        Rc::new(FormState(form))
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: SensorId,
}

fn on_text(form: &UseReducerHandle<FormState>, field: Field) -> Callback<InputEvent> {
    let dispatcher = form.dispatcher();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        dispatcher.dispatch(FormAction::Text(field, input.value()));
    })
}

fn field_error(errors: &ValidationErrors, field: Field) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="mensagem">{message}</p> },
        None => html! {},
    }
}

#[function_component(SensorEditorForm)]
pub fn sensor_editor(props: &Props) -> Html {
    let form = use_reducer(FormState::default);
    let errors = use_state(ValidationErrors::default);
    // save and delete are disabled while one of them is in flight
    let busy = use_state(|| false);
    let navigator = use_navigator();

    // load
    {
        let dispatcher = form.dispatcher();
        let errors = errors.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            dispatcher.dispatch(FormAction::Replace(SensorForm::default()));
            errors.set(ValidationErrors::default());
            let guard = LoadGuard::new();
            let load_guard = guard.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let editor = SensorEditor::new(request::sensor_service(), id);
                // a failed load is logged by the editor, the form stays empty
                if let Ok(loaded) = editor.load().await {
                    if load_guard.is_current() {
                        dispatcher.dispatch(FormAction::Replace(loaded));
                    }
                }
            });
            // a later id (or unmount) must not receive this record
            move || guard.expire()
        });
    }

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let navigator = navigator.clone();
        let id = props.id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            busy.set(true);

            let snapshot = form.0.clone();
            let errors = errors.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let editor = SensorEditor::new(request::sensor_service(), id);
                match editor.submit(&snapshot).await {
                    Ok(_) => {
                        errors.set(ValidationErrors::default());
                        utils::alert(UPDATED_NOTICE);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Sensors);
                        }
                    }
                    Err(e) => errors.set(e.field_errors()),
                }
                busy.set(false);
            });
        })
    };

    let ondelete = {
        let busy = busy.clone();
        let navigator = navigator.clone();
        let id = props.id.clone();
        Callback::from(move |_: MouseEvent| {
            if *busy {
                return;
            }
            busy.set(true);

            let busy = busy.clone();
            let navigator = navigator.clone();
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let editor = SensorEditor::new(request::sensor_service(), id);
                match editor.delete(utils::confirm).await {
                    Ok(DeleteOutcome::Deleted) => {
                        utils::alert(DELETED_NOTICE);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Sensors);
                        }
                    }
                    Ok(DeleteOutcome::Declined) => {}
                    Err(e) => utils::alert(&format!("Erro ao excluir o sensor: {e}")),
                }
                busy.set(false);
            });
        })
    };

    let on_tipo = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Text(Field::Tipo, select.value()));
        })
    };

    let on_status = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Status(input.checked()));
        })
    };

    let on_observacao = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Text(Field::Observacao, area.value()));
        })
    };

    let current = &form.0;
    let kind_options: Html = SensorKind::ALL
        .iter()
        .map(|kind| {
            html! {
                <option value={kind.label()} selected={current.tipo == kind.label()}>{kind.label()}</option>
            }
        })
        .collect();

    let text_fields: Html = [
        Field::MacAddress,
        Field::Latitude,
        Field::Longitude,
        Field::Localizacao,
        Field::Responsavel,
        Field::UnidadeMedida,
    ]
    .into_iter()
    .map(|field| {
        html! {
            <>
                <label for={field.name()}>{field.label()}</label>
                <input id={field.name()} class="campo"
                    value={current.text(field).unwrap_or_default().to_owned()}
                    oninput={on_text(&form, field)}
                />
                {field_error(&errors, field)}
            </>
        }
    })
    .collect();

    html! {
        <div class="conteiner">
            <form class="formulario" {onsubmit}>
                <label for="tipo">{Field::Tipo.label()}</label>
                <select id="tipo" class="campo" onchange={on_tipo}>
                    <option value="" selected={current.tipo.is_empty()}>{"Selecione o tipo de sensor"}</option>
                    {kind_options}
                </select>
                {field_error(&errors, Field::Tipo)}

                {text_fields}

                <label for="status_operacional">{Field::StatusOperacional.label()}</label>
                <input id="status_operacional" type="checkbox" checked={current.status()} onchange={on_status}/>
                {field_error(&errors, Field::StatusOperacional)}

                <label for="observacao">{Field::Observacao.label()}</label>
                <textarea id="observacao" class="campo"
                    value={current.observacao.clone().unwrap_or_default()}
                    oninput={on_observacao}
                />
                {field_error(&errors, Field::Observacao)}

                <button type="submit" class="botao" disabled={*busy}>{"Salvar Alterações"}</button>
                // not a submit button: deleting never goes through validation
                <button type="button" class="botaoExcluir" onclick={ondelete} disabled={*busy}>{"Excluir Sensor"}</button>
            </form>
        </div>
    }
}
