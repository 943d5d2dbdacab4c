use crate::components::chart_renderer::ChartRenderer;
use crate::components::key_value::KeyValue;
use crate::components::phase_badge::PhaseBadge;
use crate::favorites::FavoritesContext;
use crate::services::use_contest_lookup;
use crate::Route;
use log::warn;
use shared::{BarChart, Contest, ContestLookup};
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

/// Start time in the browser's locale, "TBD" when unscheduled
fn format_start_time(contest: &Contest) -> String {
    match contest.start_time() {
        Some(start) => {
            let date = js_sys::Date::new(&JsValue::from_f64(start.timestamp_millis() as f64));
            date.to_locale_string("default", &JsValue::UNDEFINED).into()
        }
        None => "TBD".to_string(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ContestDetailsProps {
    pub contest_id: String,
}

#[function_component(ContestDetails)]
pub fn contest_details(props: &ContestDetailsProps) -> Html {
    let favorites = use_context::<FavoritesContext>().expect("Favorites context not found");
    let lookup = use_contest_lookup(props.contest_id.clone());

    let contest = match lookup {
        None => return html! { <DetailsSkeleton /> },
        Some(ContestLookup::Found(contest)) => contest,
        Some(ContestLookup::NotFound) => return html! { <ContestNotFound /> },
        Some(ContestLookup::Unavailable(e)) => {
            warn!("Contest {} unavailable: {}", props.contest_id, e);
            return html! { <ContestNotFound /> };
        }
    };

    let contest_id = contest.key();
    let is_favorite = favorites.is_favorite(&contest_id);
    let on_toggle = favorites.toggle.reform(move |_: MouseEvent| contest_id.clone());
    let chart = BarChart::contest_durations(std::slice::from_ref(&contest));

    html! {
        <div class="min-h-screen bg-gray-50">
            <main class="max-w-4xl mx-auto py-6 sm:px-6 lg:px-8 space-y-6">
                <Link<Route> to={Route::Dashboard} classes={classes!("text-sm", "text-blue-600", "hover:underline")}>
                    {"← Back to contests"}
                </Link<Route>>
                <div class="flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-gray-900">{format!("Contest: {}", contest.name)}</h1>
                    <button
                        onclick={on_toggle}
                        class={classes!(
                            "px-3", "py-1", "rounded-md", "text-sm", "border",
                            if is_favorite { classes!("bg-yellow-100", "border-yellow-400", "text-yellow-800") }
                            else { classes!("bg-white", "border-gray-300", "text-gray-700") }
                        )}
                    >
                        {if is_favorite { "★ Favorite" } else { "☆ Add to favorites" }}
                    </button>
                </div>
                <div class="bg-white shadow rounded-lg p-6">
                    <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Contest Information"}</h2>
                    <KeyValue label="ID">{contest.id}</KeyValue>
                    <KeyValue label="Name">{contest.name.clone()}</KeyValue>
                    <KeyValue label="Type">{contest.contest_type.clone()}</KeyValue>
                    <KeyValue label="Phase"><PhaseBadge phase={contest.phase.clone()} /></KeyValue>
                    <KeyValue label="Start Time">{format_start_time(&contest)}</KeyValue>
                    <KeyValue label="Duration">{contest.duration_label()}</KeyValue>
                </div>
                <div class="bg-white shadow rounded-lg p-4">
                    <ChartRenderer chart={chart} width={400_u32} height={300_u32} />
                </div>
            </main>
        </div>
    }
}

#[function_component(ContestNotFound)]
fn contest_not_found() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <main class="max-w-4xl mx-auto py-6 sm:px-6 lg:px-8 space-y-4">
                <h1 class="text-2xl font-bold text-gray-900">{"Codeforces Contest Dashboard"}</h1>
                <p class="text-gray-700">{"Contest not found or an error occurred while fetching data."}</p>
                <Link<Route> to={Route::Dashboard} classes={classes!("text-sm", "text-blue-600", "hover:underline")}>
                    {"← Back to contests"}
                </Link<Route>>
            </main>
        </div>
    }
}

#[function_component(DetailsSkeleton)]
fn details_skeleton() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <main class="max-w-4xl mx-auto py-6 sm:px-6 lg:px-8 space-y-4 animate-pulse">
                <div class="h-8 w-96 bg-gray-200 rounded"></div>
                <div class="bg-white shadow rounded-lg p-6 space-y-3">
                    {for (0..6).map(|_| html! { <div class="h-4 bg-gray-200 rounded"></div> })}
                </div>
            </main>
        </div>
    }
}
