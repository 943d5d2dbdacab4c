use crate::api::HttpContestSource;
use log::debug;
use shared::{ContestLookup, ContestService, DashboardConfig, FetchOutcome, ResponseCache};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub type DashboardService = ContestService<HttpContestSource>;

/// Session-wide services: the cached contest service and the configuration
#[derive(Clone)]
pub struct ContestsContext {
    pub service: Rc<DashboardService>,
    pub config: Rc<DashboardConfig>,
}

impl PartialEq for ContestsContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.service, &other.service) && Rc::ptr_eq(&self.config, &other.config)
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ContestsProviderProps {
    pub config: Rc<DashboardConfig>,
    #[prop_or_default]
    pub children: Children,
}

/// Builds the contest service and its cache once per app session.
#[function_component(ContestsProvider)]
pub fn contests_provider(props: &ContestsProviderProps) -> Html {
    let config = props.config.clone();
    let context = use_state(move || {
        let source = HttpContestSource::from_config(&config);
        ContestsContext {
            service: Rc::new(ContestService::new(source, Rc::new(ResponseCache::new()))),
            config,
        }
    });

    html! {
        <ContextProvider<ContestsContext> context={(*context).clone()}>
            {props.children.clone()}
        </ContextProvider<ContestsContext>>
    }
}

/// Loads the contest list on mount. `None` while the request is in flight.
///
/// A result arriving after the component unmounted is dropped.
#[hook]
pub fn use_contest_list() -> Option<FetchOutcome> {
    let context = use_context::<ContestsContext>().expect("Contests context not found");
    let outcome = use_state(|| None::<FetchOutcome>);

    {
        let outcome = outcome.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));
            {
                let alive = alive.clone();
                spawn_local(async move {
                    let result = context.service.load().await;
                    if alive.get() {
                        outcome.set(Some(result));
                    } else {
                        debug!("View unmounted before contest list arrived, discarding");
                    }
                });
            }
            move || alive.set(false)
        });
    }

    (*outcome).clone()
}

/// Resolves one contest by route id. `None` while loading.
#[hook]
pub fn use_contest_lookup(contest_id: String) -> Option<ContestLookup> {
    let context = use_context::<ContestsContext>().expect("Contests context not found");
    let lookup = use_state(|| None::<ContestLookup>);

    {
        let lookup = lookup.clone();
        use_effect_with(contest_id, move |contest_id| {
            let alive = Rc::new(Cell::new(true));
            lookup.set(None);
            {
                let alive = alive.clone();
                let contest_id = contest_id.clone();
                spawn_local(async move {
                    let result = context.service.lookup(&contest_id).await;
                    if alive.get() {
                        lookup.set(Some(result));
                    } else {
                        debug!("View unmounted before contest {} resolved, discarding", contest_id);
                    }
                });
            }
            move || alive.set(false)
        });
    }

    (*lookup).clone()
}
