pub mod cell;
pub mod config;
pub mod county;
pub mod demo;

pub use cell::{Burg, Cell};
pub use config::{CountySettings, DemoSettings, PartitionParams};
pub use county::{County, partition::partition_counties};
