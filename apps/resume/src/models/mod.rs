pub mod resume;

pub use resume::{Entry, ItemList, Resume, Section, SectionBody};
