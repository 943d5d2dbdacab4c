use gloo_utils::document;
use shared::DashboardConfig;
use wasm_bindgen::JsCast;
use web_sys::HtmlMetaElement;

/// Name of the `<meta>` tag that can point the dashboard at another API host
pub const API_URL_META: &str = "contest-api-url";

pub struct Config;

impl Config {
    /// Dashboard configuration for this page load.
    ///
    /// Defaults target the public Codeforces API. A host page can override the
    /// contest list endpoint, e.g. to go through a caching proxy, with
    /// `<meta name="contest-api-url" content="...">`.
    pub fn load() -> DashboardConfig {
        let config = DashboardConfig::default();
        match Self::meta_content(API_URL_META) {
            Some(url) => config.with_contest_list_url(url),
            None => config,
        }
    }

    fn meta_content(name: &str) -> Option<String> {
        document()
            .query_selector(&format!("meta[name=\"{}\"]", name))
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlMetaElement>().ok())
            .map(|meta| meta.content())
    }
}
