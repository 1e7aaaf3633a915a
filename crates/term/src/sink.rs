//! Where rendered frames go.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// Receives finished frames. The game loop only talks to this trait.
pub trait FrameSink {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        (**self).present(fb)
    }
}

/// Records presented frames in memory. Useful headless and in tests.
///
/// Unbounded by default; [`FrameLog::keep_last`] retains only the newest
/// frames while still counting every one presented.
#[derive(Debug, Clone, Default)]
pub struct FrameLog {
    frames: Vec<FrameBuffer>,
    limit: Option<usize>,
    presented: usize,
}

impl FrameLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` frames (at least one).
    pub fn keep_last(limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    /// Retained frames, oldest first.
    pub fn frames(&self) -> &[FrameBuffer] {
        &self.frames
    }

    pub fn last(&self) -> Option<&FrameBuffer> {
        self.frames.last()
    }

    /// Frames presented so far, including dropped ones.
    pub fn len(&self) -> usize {
        self.presented
    }

    pub fn is_empty(&self) -> bool {
        self.presented == 0
    }
}

impl FrameSink for FrameLog {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.presented += 1;
        if let Some(limit) = self.limit {
            if self.frames.len() == limit {
                // Reuse the oldest buffer's allocation.
                let mut oldest = self.frames.remove(0);
                oldest.clone_from(fb);
                self.frames.push(oldest);
                return Ok(());
            }
        }
        self.frames.push(fb.clone());
        Ok(())
    }
}
