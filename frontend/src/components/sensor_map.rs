use sensor_common::{LoadState, SensorMapViewer, SensorPoint};
use yew::prelude::*;

use crate::{components::map_plot::MapPlot, request};

#[function_component(SensorMap)]
pub fn sensor_map() -> Html {
    let points = use_state(LoadState::<Vec<SensorPoint>>::default);

    // one request per visit
    {
        let points = points.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let viewer = SensorMapViewer::new(request::sensor_service());
                points.set(viewer.load().await);
            });
            || ()
        });
    }

    match &*points {
        LoadState::Loading => html! { <div>{"Carregando..."}</div> },
        LoadState::Failed(e) => html! { <div>{format!("Erro ao carregar os dados: {e}")}</div> },
        LoadState::Ready(points) => html! {
            <div>
                <p class="logo">{"Escola e faculdade Senai \"Roberto Mange\""}</p>
                <MapPlot id="sensor-map" points={points.clone()} />
            </div>
        },
    }
}
