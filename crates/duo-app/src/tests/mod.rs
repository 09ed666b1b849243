mod fake_model;
mod ui_tests;
