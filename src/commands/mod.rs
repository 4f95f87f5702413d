//! Command implementations - the view layer over the filter engine

pub mod list;
pub mod search;
pub mod show;
pub mod tags;
