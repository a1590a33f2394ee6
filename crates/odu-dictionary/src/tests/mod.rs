mod chain_tests;
