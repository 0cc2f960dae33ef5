//! Mathematical utilities for the algorithm

/// Entropy and normalisation of weight distributions
pub mod probability;
