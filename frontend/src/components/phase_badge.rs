use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PhaseBadgeProps {
    pub phase: AttrValue,
}

/// Green badge for finished contests, amber for every other phase
#[function_component(PhaseBadge)]
pub fn phase_badge(props: &PhaseBadgeProps) -> Html {
    let tone = if props.phase.as_str() == shared::models::contest::PHASE_FINISHED {
        classes!("bg-green-100", "text-green-800")
    } else {
        classes!("bg-yellow-100", "text-yellow-800")
    };

    html! {
        <span class={classes!("inline-flex", "px-2", "py-1", "text-xs", "font-medium", "rounded", tone)}>
            {props.phase.to_string()}
        </span>
    }
}
