mod components;
mod config;
mod request;
mod storage;
mod utils;

use sensor_common::SensorId;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sensores")]
    Sensors,
    #[at("/sensores/:id")]
    EditSensor { id: String },
    #[at("/localizacao")]
    Map,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub current_route: Route,
}

struct Model {}

impl Component for Model {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        }
    }
}

#[function_component(PageHome)]
pub fn page_home() -> Html {
    html! {
        <div class="container-fluid">
            <div class="row">
                <Sidebar current_route={Route::Home}/>
                <div class="col-sm-9 col-sm-offset-3 col-md-10 col-md-offset-2 main">
                    <h1 class="page-header">{"Sensores"}</h1>
                </div>
            </div>
        </div>
    }
}

#[function_component(PageSensors)]
pub fn page_sensors() -> Html {
    html! {
        <div class="container-fluid">
            <div class="row">
                <Sidebar current_route={Route::Sensors}/>
                <div class="col-sm-9 col-sm-offset-3 col-md-10 col-md-offset-2 main">
                    <h1 class="page-header">{"Sensores"}</h1>
                    <components::sensor_list::SensorList />
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EditProps {
    pub id: SensorId,
}

#[function_component(PageEditSensor)]
pub fn page_edit_sensor(props: &EditProps) -> Html {
    html! {
        <div class="container-fluid">
            <div class="row">
                <Sidebar current_route={Route::EditSensor { id: props.id.to_string() }}/>
                <div class="col-sm-9 col-sm-offset-3 col-md-10 col-md-offset-2 main">
                    <h1 class="page-header">{"Alterar Sensor"}</h1>
                    <components::sensor_editor::SensorEditorForm id={props.id.clone()} />
                </div>
            </div>
        </div>
    }
}

#[function_component(PageMap)]
pub fn page_map() -> Html {
    html! {
        <div class="container-fluid">
            <div class="row">
                <Sidebar current_route={Route::Map}/>
                <div class="col-sm-9 col-sm-offset-3 col-md-10 col-md-offset-2 main">
                    <h1 class="page-header">{"Localização"}</h1>
                    <components::sensor_map::SensorMap />
                </div>
            </div>
        </div>
    }
}

#[function_component(Sidebar)]
pub fn sidebar(props: &Props) -> Html {
    let cr = &props.current_route;
    let class_active = move |r: Route| {
        let active = match (cr, &r) {
            // the editor lives under the sensor list
            (Route::EditSensor { .. }, Route::Sensors) => true,
            (current, r) => current == r,
        };
        if active {
            "active"
        } else {
            ""
        }
    };

    html! {
        <div class="col-sm-3 col-md-2 sidebar">
            <ul class="nav nav-sidebar">
                <li class={class_active(Route::Home)}>
                    <Link<Route> to={Route::Home}>{"⌂ Início"}</Link<Route>>
                </li>
                <li class={class_active(Route::Sensors)}>
                    <Link<Route> to={Route::Sensors}>{"🖴 Sensores"}</Link<Route>>
                </li>
                <li class={class_active(Route::Map)}>
                    <Link<Route> to={Route::Map}>{"⌖ Localização"}</Link<Route>>
                </li>
            </ul>

            <ul class="nav nav-sidebar fix-bottom">
            {format!("v{}", env!("CARGO_PKG_VERSION"))}
            </ul>
        </div>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <PageHome/> },
        Route::Sensors => html! { <PageSensors/> },
        Route::EditSensor { id } => html! { <PageEditSensor id={SensorId::new(id)}/> },
        Route::Map => html! { <PageMap/> },
        Route::NotFound => html! { <h1>{ "404" }</h1> },
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<Model>::new().render();
}
