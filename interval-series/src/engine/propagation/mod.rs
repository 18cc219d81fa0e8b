//! The propagation engine: a queue of dirty propagators which is run until no propagator can
//! narrow a domain any further.
mod propagation_context;
mod propagation_engine;
mod propagator_id;
mod propagator_queue;
mod watch_list;

pub(crate) use propagation_context::PropagationContextMut;
pub(crate) use propagation_engine::PropagationEngine;
pub use propagator_id::PropagatorId;
pub use propagator_queue::Priority;
pub(crate) use propagator_queue::PropagatorQueue;
pub(crate) use watch_list::WatchList;
