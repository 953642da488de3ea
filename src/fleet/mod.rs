// ABOUTME: Fleet selection and port resolution.
// ABOUTME: Maps operator fleet numbers onto the concrete (ip, port) targets they cover.

mod resolver;
mod selection;
mod target;

pub use resolver::{resolve, select_or_all};
pub use selection::{FleetSelection, InvalidSelection};
pub use target::Target;
