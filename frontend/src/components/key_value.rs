use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct KeyValueProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// One "Label: value" row of a details card
#[function_component(KeyValue)]
pub fn key_value(props: &KeyValueProps) -> Html {
    html! {
        <p class="text-sm text-gray-700 py-1">
            <strong class="font-semibold text-gray-900">{format!("{}:", props.label)}</strong>
            {" "}
            {props.children.clone()}
        </p>
    }
}
