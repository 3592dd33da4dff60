/*-------------------------------------------------------------------------------------------------
  Core Modules
-------------------------------------------------------------------------------------------------*/

pub mod address;
pub mod batch;
pub mod config;
pub mod csv;
pub mod errors;
pub mod interval;
pub mod interval_set;
pub mod rank;
