/*-------------------------------------------------------------------------------------------------
  Provider Feed Modules
-------------------------------------------------------------------------------------------------*/

// Parsers that turn a provider's published feed into a [Batch](crate::Batch). Retrieving the feed
// is left to the caller.

pub mod aws;
pub mod text;
