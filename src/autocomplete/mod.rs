pub mod autocomplete_render;
mod autocomplete_state;
mod debouncer;
mod matcher;
mod selection;

pub use autocomplete_state::{Autocomplete, ListStatus};
pub use debouncer::{DEFAULT_DELAY, Debouncer};
pub use matcher::{HighlightSpan, SuggestionMatcher};
pub use selection::{Direction, Selection};
