use log::error;
use sensor_common::{LoadState, SensorRecord, SensorService};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{request, Route};

#[function_component(SensorList)]
pub fn sensor_list() -> Html {
    let sensors = use_state(LoadState::<Vec<SensorRecord>>::default);

    // requests
    {
        let sensors = sensors.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = request::sensor_service().list().await;
                if let Err(e) = &result {
                    error!("Erro ao listar os sensores: {e}");
                }
                sensors.set(LoadState::settle(result));
            });
            || ()
        });
    }

    match &*sensors {
        LoadState::Loading => html! { <div>{"Carregando..."}</div> },
        LoadState::Failed(e) => html! { <div>{format!("Erro ao carregar os dados: {e}")}</div> },
        LoadState::Ready(records) => {
            let rows: Html = records
                .iter()
                .map(|sensor| {
                    let tipo = sensor.tipo.map_or("-", |k| k.label());
                    let status = if sensor.status_operacional { "🟢" } else { "🔴" };
                    html! {
                        <tr>
                            <td>{sensor.localizacao.clone()}</td>
                            <td>{tipo}</td>
                            <td>{sensor.responsavel.clone()}</td>
                            <td>{sensor.unidade_medida.clone()}</td>
                            <td>{status}</td>
                            <td>
                                if let Some(id) = sensor.id.as_ref() {
                                    <Link<Route> to={Route::EditSensor { id: id.to_string() }}>{"Alterar"}</Link<Route>>
                                }
                            </td>
                        </tr>
                    }
                })
                .collect();

            html! {
                <table class="table table-hover">
                    <thead>
                        <tr>
                            <th>{"Localização"}</th>
                            <th>{"Tipo"}</th>
                            <th>{"Responsável"}</th>
                            <th>{"Unidade"}</th>
                            <th>{"Status"}</th>
                            <th/>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            }
        }
    }
}
