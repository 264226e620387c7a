//! Admin console
//!
//! Password-gated CRUD over the catalog, driven through the panel state
//! machine in [`atelier::admin`].

pub mod console;
pub mod errors;
pub mod forms;
pub mod gate;

pub use console::{AdminConsole, Listing};
pub use errors::AdminError;
pub use forms::RecordForm;
pub use gate::AdminGate;
