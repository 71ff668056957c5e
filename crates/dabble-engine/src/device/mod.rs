//! GPU device + surface management.
//!
//! - creates the wgpu Instance/Adapter/Device/Queue for the canvas window
//! - picks and configures the surface format and alpha mode
//! - acquires frames and maps surface errors to runtime actions

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
