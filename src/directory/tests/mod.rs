//! Unit and service tests for directory administration.

mod service_tests;
