pub mod dashboard;
pub mod log;
pub mod lookup;
pub mod mutation;
pub mod refresh;
pub mod report;
pub mod request;

pub use dashboard::{Dashboard, View};
pub use lookup::LookupStatus;
pub use request::{RequestState, RequestTracker, Ticket};
