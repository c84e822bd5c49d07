//! Modal form for creating, editing and deleting a single event.

mod dismiss;
mod render;
mod state;
mod validation;
mod widgets;

pub use dismiss::{DismissPhase, DismissTransition};
pub use render::{render_event_dialog, EventDialogResult};
pub use state::EventDialogState;
pub use validation::{validate_time_range, validate_title, FormError, TimeField};
