//! Loading of the seed data the page browses.

pub mod catalogue_source;
