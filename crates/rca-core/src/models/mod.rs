pub mod cause;
pub mod node;
pub mod section_record;

pub use cause::ValidatedCause;
pub use node::{NodeKind, WhyNode};
pub use section_record::SectionRecord;
