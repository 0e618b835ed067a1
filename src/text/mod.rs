mod assembler;
mod splitter;

pub use assembler::{SEGMENT_SEPARATOR, assemble};
pub use splitter::{Chunk, split_chunks};
