//! Word buffers shared between the test driver and the transfer tests.

mod raw;

#[cfg(test)]
mod tests;

pub use raw::WordBuffer;
