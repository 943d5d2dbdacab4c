use yew::prelude::*;

/// Option value standing for "no filter"
pub const ALL_OPTION: &str = "All";

#[derive(Properties, PartialEq)]
pub struct FilterDropdownProps {
    pub label: AttrValue,
    pub options: Vec<String>,
    /// `None` selects the "All" entry
    pub selected: Option<String>,
    pub on_change: Callback<Option<String>>,
}

#[function_component(FilterDropdown)]
pub fn filter_dropdown(props: &FilterDropdownProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            on_change.emit(if value == ALL_OPTION { None } else { Some(value) });
        })
    };
    let selected = props.selected.clone().unwrap_or_else(|| ALL_OPTION.to_string());

    html! {
        <label class="flex flex-col text-sm font-medium text-gray-700">
            {props.label.to_string()}
            <select
                class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 text-sm"
                onchange={on_change}
            >
                <option value={ALL_OPTION} selected={selected == ALL_OPTION}>{ALL_OPTION}</option>
                {for props.options.iter().map(|option| html! {
                    <option value={option.clone()} selected={*option == selected}>{option.clone()}</option>
                })}
            </select>
        </label>
    }
}
