pub mod daily_tests;
pub mod support;
pub mod unit_tests;
