// Todo state, its controller and the clock it stamps records with.
pub mod clock;
pub mod controller;
pub mod error;
pub mod state;

pub mod logging;

pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::AppController;
pub use error::TodoError;
pub use state::{AppState, TodoId, TodoRecord};
