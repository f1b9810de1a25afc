// Pipeline processing: planet cache lookup and film enrichment

pub mod cache;
pub mod enrich;
