mod location_tests;
mod utils;
