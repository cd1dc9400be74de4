/// Stitching rows into the output image
pub mod composition;
/// Row grouping and serpentine ordering
pub mod grouping;
/// End-to-end reconstruction
pub mod pipeline;
/// Prime-width rotation policy
pub mod rotation;
