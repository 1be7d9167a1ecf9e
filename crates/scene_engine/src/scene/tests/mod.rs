//! Scene-level integration tests

mod hierarchy_properties;
