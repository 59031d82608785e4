mod compare;
mod evolution;
mod summary;

pub use compare::run_compare;
pub use evolution::run_evolution;
pub use summary::run_summary;
