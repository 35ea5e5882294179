// プレイヤー選択用タグ入力ウィジェット
// Core state lives in `tag_selector`; the `web` feature binds it to the DOM.

pub mod api_types;
pub mod config;
pub mod errors;
pub mod form;
pub mod selection;
pub mod suggestions;
pub mod tag_selector;
pub mod view;
#[cfg(feature = "web")]
pub mod web;

pub use api_types::{Candidate, PlayerId, TagChip, WidgetBootstrap};
pub use config::SelectorConfig;
pub use errors::{AppError, AppResult};
pub use selection::Selection;
pub use tag_selector::TagSelector;
pub use view::{MemoryView, TagView};

/// Initializes logging for native hosts (`RUST_LOG` controls the level)
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::try_init();
}
