mod chrome_tests;
mod display_manager_tests;
