pub mod documents;
mod in_memory;

pub use in_memory::InMemorySchoolRepository;
