use crate::components::chart_renderer::ChartRenderer;
use crate::components::filter_dropdown::FilterDropdown;
use crate::components::pagination::PaginationControls;
use crate::components::phase_badge::PhaseBadge;
use crate::favorites::FavoritesContext;
use crate::services::{use_contest_list, ContestsContext};
use crate::Route;
use shared::{distinct_values, filter_contests, BarChart, FilterState};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {}

#[function_component(Dashboard)]
pub fn dashboard(_props: &DashboardProps) -> Html {
    let contests_ctx = use_context::<ContestsContext>().expect("Contests context not found");
    let favorites = use_context::<FavoritesContext>().expect("Favorites context not found");
    let navigator = use_navigator().unwrap();
    let config = contests_ctx.config.clone();

    let outcome = use_contest_list();
    let filter_state = {
        let page_size = config.default_page_size;
        use_state(move || FilterState::with_page_size(page_size))
    };

    // Input handlers; every filter setter sends the view back to page 1
    let on_search_input = {
        let filter_state = filter_state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut state = (*filter_state).clone();
            state.set_search(input.value());
            filter_state.set(state);
        })
    };

    let on_type_change = {
        let filter_state = filter_state.clone();
        Callback::from(move |value: Option<String>| {
            let mut state = (*filter_state).clone();
            state.set_type_filter(value);
            filter_state.set(state);
        })
    };

    let on_phase_change = {
        let filter_state = filter_state.clone();
        Callback::from(move |value: Option<String>| {
            let mut state = (*filter_state).clone();
            state.set_phase_filter(value);
            filter_state.set(state);
        })
    };

    let on_favorites_only_change = {
        let filter_state = filter_state.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut state = (*filter_state).clone();
            state.set_favorites_only(input.checked());
            filter_state.set(state);
        })
    };

    let on_page_size_change = {
        let filter_state = filter_state.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(page_size) = select.value().parse::<usize>() {
                let mut state = (*filter_state).clone();
                state.pagination.set_page_size(page_size);
                filter_state.set(state);
            }
        })
    };

    let clear_all = {
        let filter_state = filter_state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = (*filter_state).clone();
            state.clear();
            filter_state.set(state);
        })
    };

    let Some(outcome) = outcome else {
        return html! { <DashboardSkeleton /> };
    };

    let contests = outcome.into_contests();
    let filtered = filter_contests(&contests, &filter_state, favorites.state.ids());

    // The filtered list can shrink under the current page, e.g. when a
    // favorite is removed while showing favorites only.
    let mut pagination = filter_state.pagination;
    let total_pages = shared::total_pages(filtered.len(), pagination.page_size());
    pagination.clamp(total_pages);
    let page = pagination.apply(&filtered);

    let on_previous = {
        let filter_state = filter_state.clone();
        Callback::from(move |_: ()| {
            let mut state = (*filter_state).clone();
            state.pagination = pagination;
            state.pagination.previous();
            filter_state.set(state);
        })
    };

    let on_next = {
        let filter_state = filter_state.clone();
        Callback::from(move |_: ()| {
            let mut state = (*filter_state).clone();
            state.pagination = pagination;
            state.pagination.next(total_pages);
            filter_state.set(state);
        })
    };

    let type_options = distinct_values(&contests, |c| c.contest_type.as_str());
    let phase_options = distinct_values(&contests, |c| c.phase.as_str());
    let chart = BarChart::contest_durations(&page.items);

    // Precompute the applied-filter chips to keep the markup flat
    let chips_html = {
        let mut chips: Vec<Html> = Vec::new();
        if !filter_state.search.is_empty() {
            let fs = filter_state.clone();
            chips.push(filter_chip(
                format!("Search: {}", filter_state.search),
                Callback::from(move |_: MouseEvent| {
                    let mut s = (*fs).clone();
                    s.set_search(String::new());
                    fs.set(s);
                }),
            ));
        }
        if let Some(contest_type) = &filter_state.type_filter {
            let fs = filter_state.clone();
            chips.push(filter_chip(
                format!("Type: {}", contest_type),
                Callback::from(move |_: MouseEvent| {
                    let mut s = (*fs).clone();
                    s.set_type_filter(None);
                    fs.set(s);
                }),
            ));
        }
        if let Some(phase) = &filter_state.phase_filter {
            let fs = filter_state.clone();
            chips.push(filter_chip(
                format!("Phase: {}", phase),
                Callback::from(move |_: MouseEvent| {
                    let mut s = (*fs).clone();
                    s.set_phase_filter(None);
                    fs.set(s);
                }),
            ));
        }
        if filter_state.favorites_only {
            let fs = filter_state.clone();
            chips.push(filter_chip(
                "Favorites only".to_string(),
                Callback::from(move |_: MouseEvent| {
                    let mut s = (*fs).clone();
                    s.set_favorites_only(false);
                    fs.set(s);
                }),
            ));
        }
        html! { <>{ for chips }</> }
    };

    html! {
        <div class="min-h-screen bg-gray-50">
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8 space-y-6">
                <h1 class="text-2xl font-bold text-gray-900">{"Codeforces Contest Dashboard"}</h1>

                // Filters
                <div class="bg-white shadow rounded-lg p-4 space-y-4">
                    <div class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end">
                        <label class="flex flex-col text-sm font-medium text-gray-700 md:col-span-2">
                            {"Search by name"}
                            <input
                                type="text"
                                class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm"
                                placeholder="e.g. Div. 2"
                                value={filter_state.search.clone()}
                                oninput={on_search_input}
                            />
                        </label>
                        <FilterDropdown
                            label="Filter by Type"
                            options={type_options}
                            selected={filter_state.type_filter.clone()}
                            on_change={on_type_change}
                        />
                        <FilterDropdown
                            label="Filter by Phase"
                            options={phase_options}
                            selected={filter_state.phase_filter.clone()}
                            on_change={on_phase_change}
                        />
                    </div>
                    <div class="flex flex-wrap items-center gap-2">
                        <label class="inline-flex items-center gap-2 text-sm text-gray-700 mr-4">
                            <input
                                type="checkbox"
                                checked={filter_state.favorites_only}
                                onchange={on_favorites_only_change}
                            />
                            {"Favorites only"}
                        </label>
                        {chips_html}
                        if filter_state.active_filter_count() > 0 {
                            <button onclick={clear_all} class="text-sm text-blue-600 hover:underline">
                                {"Clear all"}
                            </button>
                        }
                    </div>
                </div>

                // Results
                <div class="bg-white shadow rounded-lg overflow-hidden">
                    <div class="px-4 py-3 flex items-center justify-between border-b border-gray-200">
                        <label class="text-sm text-gray-700">
                            {"Items per page "}
                            <select class="ml-2 rounded-md border border-gray-300 px-2 py-1 text-sm" onchange={on_page_size_change}>
                                {for config.page_size_options.iter().map(|size| html! {
                                    <option value={size.to_string()} selected={*size == pagination.page_size()}>
                                        {size.to_string()}
                                    </option>
                                })}
                            </select>
                        </label>
                    </div>
                    if page.items.is_empty() {
                        <div class="text-center py-12 text-gray-500">{"No contests found."}</div>
                    } else {
                        <div class="overflow-x-auto">
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        {for ["ID", "Name", "Type", "Phase", "Duration", "", "Action"].iter().map(|heading| html! {
                                            <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{*heading}</th>
                                        })}
                                    </tr>
                                </thead>
                                <tbody class="bg-white divide-y divide-gray-200">
                                    {for page.items.iter().map(|contest| {
                                        let contest_id = contest.key();
                                        let is_favorite = favorites.is_favorite(&contest_id);
                                        let on_toggle = favorites.toggle.reform({
                                            let contest_id = contest_id.clone();
                                            move |_: MouseEvent| contest_id.clone()
                                        });
                                        let on_view = {
                                            let navigator = navigator.clone();
                                            let contest_id = contest_id.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                navigator.push(&Route::ContestDetails { contest_id: contest_id.clone() });
                                            })
                                        };
                                        html! {
                                            <tr key={contest_id.clone()} class="hover:bg-gray-50">
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{contest.id}</td>
                                                <td class="px-6 py-4 text-sm font-medium text-gray-900">{&contest.name}</td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{&contest.contest_type}</td>
                                                <td class="px-6 py-4 whitespace-nowrap"><PhaseBadge phase={contest.phase.clone()} /></td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{contest.duration_label()}</td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <button
                                                        onclick={on_toggle}
                                                        title={if is_favorite { "Remove from favorites" } else { "Add to favorites" }}
                                                        class={classes!("text-xl", if is_favorite { "text-yellow-500" } else { "text-gray-300" })}
                                                    >
                                                        {if is_favorite { "★" } else { "☆" }}
                                                    </button>
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap">
                                                    <button
                                                        onclick={on_view}
                                                        class="px-3 py-1 bg-blue-600 text-white text-sm rounded-md hover:bg-blue-700"
                                                    >
                                                        {"View Details"}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })}
                                </tbody>
                            </table>
                        </div>
                    }
                    <div class="px-4 py-2 text-sm text-gray-600 border-t border-gray-200">
                        {format!("Showing {} of {} contests", page.items.len(), filtered.len())}
                    </div>
                    <PaginationControls
                        page={pagination.page()}
                        total_pages={page.total_pages}
                        on_previous={on_previous}
                        on_next={on_next}
                    />
                </div>

                // Duration chart of the contests on this page
                <div class="bg-white shadow rounded-lg p-4">
                    <ChartRenderer chart={chart} />
                </div>
            </main>
        </div>
    }
}

fn filter_chip(label: String, on_remove: Callback<MouseEvent>) -> Html {
    html! {
        <span class="inline-flex items-center gap-1 px-2 py-1 text-xs font-medium bg-blue-100 text-blue-800 rounded">
            {label}
            <button onclick={on_remove} class="text-blue-600 hover:text-blue-900">{"×"}</button>
        </span>
    }
}

#[function_component(DashboardSkeleton)]
fn dashboard_skeleton() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50">
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8 space-y-6 animate-pulse">
                <div class="h-8 w-80 bg-gray-200 rounded"></div>
                <div class="bg-white shadow rounded-lg p-4 space-y-3">
                    <div class="h-4 bg-gray-200 rounded"></div>
                    <div class="h-4 bg-gray-200 rounded w-5/6"></div>
                </div>
                <div class="bg-white shadow rounded-lg p-4 space-y-3">
                    {for (0..6).map(|_| html! { <div class="h-4 bg-gray-200 rounded"></div> })}
                </div>
            </main>
        </div>
    }
}
