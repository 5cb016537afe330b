use yew::prelude::*;

/// Message shown until plot data arrives (and indefinitely if it never does)
pub const WAITING_MESSAGE: &str = "Please wait while we load your plotting data...";

/// Placeholder rendered while the plot payload is outstanding
#[function_component(PlotPlaceholder)]
pub fn plot_placeholder() -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4">
            <span class="loading loading-spinner loading-lg"></span>
            <p class="text-sm text-gray-500"><b>{WAITING_MESSAGE}</b></p>
        </div>
    }
}
