/*! Text transformers.

Pure, total transforms over documents and sentences:
- [Boundary] strips the header/footer framing of a long-form text,
- [Normalizer] cleans a single sentence candidate.

!*/

mod boundary;
mod normalizer;
mod transform;

pub use boundary::Boundary;
pub use normalizer::Normalizer;
pub use transform::Transform;
