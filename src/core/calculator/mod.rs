pub mod buckets;
pub mod clusters;
