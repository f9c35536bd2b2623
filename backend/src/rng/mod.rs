//! Random number generation for Bernoulli trials
//!
//! Every draw made by a simulation goes through a [`RandomSource`].
//! [`RngManager`] is the default source: a seedable xorshift64* generator,
//! so that a run can be reproduced exactly from its seed.

mod source;
mod xorshift;

pub use source::RandomSource;
pub use xorshift::RngManager;
