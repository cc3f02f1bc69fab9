mod ladder_test;
mod run_test;
