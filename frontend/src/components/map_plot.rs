use plotly::{
    common::{Marker, Mode, Title},
    layout::{Axis, HoverMode, Margin},
    Configuration, Layout, Plot, Scatter,
};
use sensor_common::SensorPoint;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: AttrValue,
    pub points: Vec<SensorPoint>,
}

fn marker_label(point: &SensorPoint) -> String {
    match point.tipo {
        Some(kind) => format!("{} ({kind})", point.localizacao),
        None => point.localizacao.clone(),
    }
}

/// One marker per sensor, longitude on x and latitude on y.
#[function_component(MapPlot)]
pub fn map_plot(props: &Props) -> Html {
    let id = props.id.to_string();
    let p = yew_hooks::use_async::<_, _, ()>({
        let mut plot = Plot::new();
        let trace = Scatter::new(
            props.points.iter().map(|p| p.longitude).collect(),
            props.points.iter().map(|p| p.latitude).collect(),
        )
        .mode(Mode::Markers)
        .name("Sensores")
        .marker(Marker::new().size(12))
        .text_array(props.points.iter().map(marker_label).collect());
        plot.add_trace(trace);
        plot.set_configuration(
            Configuration::default()
                .display_logo(false)
                .editable(false)
                .display_mode_bar(plotly::configuration::DisplayModeBar::Hover),
        );
        plot.set_layout(
            Layout::default()
                .hover_mode(HoverMode::Closest)
                .auto_size(true)
                .margin(Margin::default().top(20).bottom(40).left(60).right(20))
                .x_axis(Axis::new().title(Title::new("Longitude")))
                .y_axis(Axis::new().title(Title::new("Latitude"))),
        );

        async move {
            plotly::bindings::new_plot(&id, &plot).await;
            Ok(())
        }
    });

    use_effect_with(props.points.clone(), move |_| {
        p.run();
        || ()
    });

    html! {
        <div class="map" id={props.id.clone()}></div>
    }
}
