//! Unit and service tests for work-order management.

mod service_tests;
