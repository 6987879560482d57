mod coords_tests;
mod persist_tests;
