/// Command implementations, one module per binary.
pub mod float_sum;
pub mod int_sum;
