use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::api_client::plot::{fetch_plot, PlotData};
use crate::common::fetch_hook::use_fetch_once;
use crate::common::loading::PlotPlaceholder;
use crate::common::toast::ToastKind;
use crate::hooks::FetchState;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct PlotProps {
    /// Endpoint the plot payload is fetched from
    pub url: AttrValue,
    /// Notification capability, injected by the shell
    pub on_report: Callback<(String, ToastKind)>,
}

/// Fetches the plot payload once on mount and renders it with Plotly.
///
/// Until the fetch succeeds the fixed waiting placeholder is shown; a
/// failed payload keeps the placeholder up and routes its message through
/// `on_report`. No retry.
#[function_component(Plot)]
pub fn plot(props: &PlotProps) -> Html {
    let fetch_state = {
        let url = props.url.clone();
        use_fetch_once(
            move || {
                let url = url.clone();
                async move { fetch_plot(&url).await }
            },
            props.on_report.clone(),
        )
    };

    match &*fetch_state {
        FetchState::Success(plot_data) => html! {
            <PlotCanvas plot_data={plot_data.clone()} />
        },
        _ => html! { <PlotPlaceholder /> },
    }
}

#[derive(Properties, PartialEq)]
struct PlotCanvasProps {
    plot_data: PlotData,
}

#[function_component(PlotCanvas)]
fn plot_canvas(props: &PlotCanvasProps) -> Html {
    let container_ref = use_node_ref();
    let plot_data = props.plot_data.clone();

    use_effect_with(
        (container_ref.clone(), plot_data),
        move |(container_ref, plot_data)| {
            if let Some(element) = container_ref.cast::<Element>() {
                element.set_id("plotview-chart");
                draw(&element.id(), plot_data);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} class="chart-container" style="width:100%; height:400px;"></div>
    }
}

/// Hand the stored series and layout to Plotly.
fn draw(div_id: &str, plot_data: &PlotData) {
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    let data_js = serde_wasm_bindgen::to_value(&plot_data.data).unwrap_throw();
    let layout_js = serde_wasm_bindgen::to_value(&plot_data.layout).unwrap_throw();
    let config_js = serde_wasm_bindgen::to_value(&config).unwrap_throw();

    log::trace!("Drawing plot into #{}", div_id);
    newPlot(div_id, data_js, layout_js, config_js);
}
