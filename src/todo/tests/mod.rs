//! Unit tests for the to-do listing.
