mod verification_session_tests;
