use crate::components::nav::Nav;
use crate::favorites::FavoritesProvider;
use crate::services::ContestsProvider;
use log::{debug, info};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod favorites;
pub mod services;
pub mod storage;
pub mod pages {
    pub mod contest_details;
    pub mod dashboard;
    pub mod not_found;
}

use pages::{contest_details::ContestDetails, dashboard::Dashboard, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/contest/:contest_id")]
    ContestDetails { contest_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    let config = use_state(|| Rc::new(config::Config::load()));
    let favorites_key = AttrValue::from(config.favorites_key.clone());

    html! {
        <ContestsProvider config={(*config).clone()}>
            <FavoritesProvider storage_key={favorites_key}>
                <BrowserRouter>
                    <div class="app-container">
                        <Nav />
                        <main class="flex-1">
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </BrowserRouter>
            </FavoritesProvider>
        </ContestsProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Dashboard => html! { <Dashboard /> },
        Route::ContestDetails { contest_id } => {
            debug!("Rendering Contest details component with contest_id: {}", contest_id);
            html! { <ContestDetails contest_id={contest_id} /> }
        }
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        }
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point called by Trunk
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
