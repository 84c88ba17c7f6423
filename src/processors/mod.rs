//! Image and tensor processing stages of the pipeline.
//!
//! Each submodule is one stage of the data flow:
//! resize → tensor encode → (engine) → score decode → top-k.

pub mod resize;
pub mod score_decode;
pub mod tensor_encode;
pub mod topk;

pub use resize::resize_to_fill;
pub use score_decode::decode_scores;
pub use tensor_encode::{INPUT_MEAN, INPUT_STD, to_tensor_bytes};
pub use topk::select_top_k;
