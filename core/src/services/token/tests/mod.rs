//! Unit tests for the token codec and issuer

mod codec_tests;
