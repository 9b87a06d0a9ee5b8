//! The explorer surface: upload control, mode picker, SVG scene and the
//! selected-posts list, all driven by [`ExplorerState`].

mod legend;
mod selection_list;
pub mod state;
mod view;

pub use legend::LegendView;
pub use selection_list::SelectionList;
pub use state::{Action, ExplorerState, Outcome, UploadTicket};
pub use view::{use_explorer_state_provider, ExplorerView};
