/// Where a scaled copy of the source lands on a square icon canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl IconLayout {
    /// Fits a `source_width` x `source_height` image inside a `size` x `size`
    /// canvas without distortion and centers it.
    pub fn fit(source_width: u32, source_height: u32, size: u32) -> Self {
        // Scale by min(size / w, size / h). The longer side becomes exactly `size`
        // and the shorter one is floored, done in integers to avoid float drift.
        let (w, h, s) = (source_width as u64, source_height as u64, size as u64);
        let (width, height) = if w >= h {
            (s, h * s / w)
        } else {
            (w * s / h, s)
        };

        // Never collapse an axis to zero, the resampler needs at least one pixel
        let width = (width as u32).clamp(1, size);
        let height = (height as u32).clamp(1, size);

        Self {
            size,
            width,
            height,
            x: (size - width) / 2,
            y: (size - height) / 2,
        }
    }

    pub fn is_padded(&self) -> bool {
        self.width != self.size || self.height != self.size
    }
}
