mod lookup_tests;
mod overrides_tests;
