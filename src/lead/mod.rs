//! Contact form submissions: the form data, its rules, and the single request
//! that relays a lead to the email gateway.

pub mod flow;
pub mod gateway;
pub mod lifecycle;
pub mod model;

pub use flow::{LeadFlow, PendingSend, SubmitBlocked};
pub use gateway::{EmailGateway, EmailJsGateway, GatewayError};
#[cfg(test)]
pub use lifecycle::SubmissionLifecycle;
pub use model::{Field, ProjectType};
