#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("No window is attached to the glue")]
    NoWindow,

    #[error("Window refused to hand out its pixel buffer")]
    BufferLockFailed,
}
