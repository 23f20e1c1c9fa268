pub mod forest_sink;
pub mod id_generator;

pub use forest_sink::IForestSink;
pub use id_generator::{IIdGenerator, SequentialIdGenerator, UuidIdGenerator};
