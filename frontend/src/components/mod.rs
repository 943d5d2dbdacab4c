pub mod chart_renderer;
pub mod filter_dropdown;
pub mod key_value;
pub mod nav;
pub mod pagination;
pub mod phase_badge;
