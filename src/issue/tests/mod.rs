//! Unit and service tests for the issue module.

mod draft_tests;
mod engagement_tests;
mod status_tests;
