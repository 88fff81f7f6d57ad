pub mod limit;
pub mod record;

pub use limit::Limit;
pub use record::Record;
