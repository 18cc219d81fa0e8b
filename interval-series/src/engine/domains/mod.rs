//! The domain store: integer domains for every variable of a model, together with the event log
//! the propagation engine uses to find out which propagators to wake up.
mod domain_events;
mod domain_id;
mod domain_store;
mod integer_domain;

pub use domain_events::DomainEvent;
pub use domain_events::DomainEvents;
pub use domain_id::DomainId;
pub use domain_store::DomainSnapshot;
pub use domain_store::DomainStore;
pub use domain_store::EmptyDomain;
pub(crate) use integer_domain::IntegerDomain;
