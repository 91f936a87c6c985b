//! Upload pipeline: receive bytes, optionally transform, persist, produce a
//! public URL.

mod local;
mod pipeline;
mod remote;
mod transform;

pub use local::LocalDiskStorage;
pub use pipeline::{
    IncomingFile, MockUploadBackend, UploadBackend, UploadError, UploadPipeline, UploadedFile,
    MAX_FILES_PER_REQUEST, MAX_FILE_BYTES,
};
pub use remote::RemoteBlobStorage;
pub use transform::shrink_image;
