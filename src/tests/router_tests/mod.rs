mod catalog_tests;
mod shoe_tests;
