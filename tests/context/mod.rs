mod emission_tests;
mod service_tests;
mod session_tests;
