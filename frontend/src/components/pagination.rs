use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub page: usize,
    pub total_pages: usize,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

/// Previous / next buttons, disabled at the respective boundary
#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationControlsProps) -> Html {
    let has_previous = props.page > 1;
    let has_next = props.page < props.total_pages;

    html! {
        <div class="bg-white px-4 py-3 flex items-center justify-between border-t border-gray-200 sm:px-6">
            <button
                onclick={props.on_previous.reform(|_| ())}
                disabled={!has_previous}
                class="relative inline-flex items-center px-4 py-2 border border-gray-300 text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50 disabled:opacity-50"
            >
                {"Previous"}
            </button>
            <p class="text-sm text-gray-700">
                {format!("Page {} of {}", props.page, props.total_pages.max(1))}
            </p>
            <button
                onclick={props.on_next.reform(|_| ())}
                disabled={!has_next}
                class="ml-3 relative inline-flex items-center px-4 py-2 border border-gray-300 text-sm font-medium rounded-md text-gray-700 bg-white hover:bg-gray-50 disabled:opacity-50"
            >
                {"Next"}
            </button>
        </div>
    }
}
