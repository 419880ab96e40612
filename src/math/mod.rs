mod tril;

pub use tril::{TrilIndices, correlation_len, triangular, tril_indices};
