mod pretty_tests;
