//! Owned grayscale framebuffer
//!
//! A `W` x `H` canvas of 8-bit grey levels. Commit latches a counter
//! instead of driving hardware, so tests can assert how often (and
//! whether) the panel was refreshed.

use grisaille_core::{GrayPanel, PanelError};

/// Grey level the canvas starts at (e-paper white)
pub const BLANK: u8 = 0xFF;

/// Bench ambient temperature in degrees Celsius
const BENCH_TEMPERATURE_C: i16 = 23;

/// In-memory grayscale panel
pub struct Framebuffer<const W: usize, const H: usize> {
    pixels: [[u8; W]; H],
    temperature: i16,
    commits: u32,
    fail_next_commit: bool,
}

impl<const W: usize, const H: usize> Default for Framebuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Framebuffer<W, H> {
    /// Create a blank (white) framebuffer
    pub fn new() -> Self {
        Self {
            pixels: [[BLANK; W]; H],
            temperature: BENCH_TEMPERATURE_C,
            commits: 0,
            fail_next_commit: false,
        }
    }

    /// Read back the pixel at (x, y); `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Number of commits performed since creation
    pub fn commit_count(&self) -> u32 {
        self.commits
    }

    /// Override the simulated ambient temperature
    pub fn set_temperature(&mut self, celsius: i16) {
        self.temperature = celsius;
    }

    /// Make the next commit fail with `PanelError::CommitFailed`
    pub fn fail_next_commit(&mut self) {
        self.fail_next_commit = true;
    }
}

impl<const W: usize, const H: usize> GrayPanel for Framebuffer<W, H> {
    fn width(&self) -> u32 {
        W as u32
    }

    fn height(&self) -> u32 {
        H as u32
    }

    fn set_pixel(&mut self, x: u32, y: u32, grey: u8) {
        if let Some(pixel) = self
            .pixels
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *pixel = grey;
        }
    }

    fn fill(&mut self, grey: u8) {
        for row in &mut self.pixels {
            row.fill(grey);
        }
    }

    fn ambient_temperature(&self) -> i16 {
        self.temperature
    }

    fn commit(&mut self, _temperature: i16) -> Result<(), PanelError> {
        if self.fail_next_commit {
            self.fail_next_commit = false;
            return Err(PanelError::CommitFailed);
        }
        self.commits += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_blank() {
        let fb = Framebuffer::<4, 4>::new();
        assert_eq!(fb.pixel(0, 0), Some(BLANK));
        assert_eq!(fb.pixel(3, 3), Some(BLANK));
        assert_eq!(fb.commit_count(), 0);
    }

    #[test]
    fn test_set_and_read_pixel() {
        let mut fb = Framebuffer::<4, 4>::new();
        fb.set_pixel(1, 2, 0x80);
        assert_eq!(fb.pixel(1, 2), Some(0x80));
        assert_eq!(fb.pixel(2, 1), Some(BLANK));
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut fb = Framebuffer::<4, 4>::new();
        fb.set_pixel(4, 0, 0x00);
        fb.set_pixel(0, 4, 0x00);
        assert_eq!(fb.pixel(4, 0), None);
        assert_eq!(fb.pixel(0, 4), None);
        // In-bounds content unaffected
        assert_eq!(fb.pixel(3, 0), Some(BLANK));
        assert_eq!(fb.pixel(0, 3), Some(BLANK));
    }

    #[test]
    fn test_fill() {
        let mut fb = Framebuffer::<4, 4>::new();
        fb.fill(0x10);
        assert_eq!(fb.pixel(0, 0), Some(0x10));
        assert_eq!(fb.pixel(3, 3), Some(0x10));
    }

    #[test]
    fn test_commit_counts_and_failure() {
        let mut fb = Framebuffer::<4, 4>::new();
        let temp = fb.ambient_temperature();

        assert_eq!(fb.commit(temp), Ok(()));
        assert_eq!(fb.commit_count(), 1);

        fb.fail_next_commit();
        assert_eq!(fb.commit(temp), Err(PanelError::CommitFailed));
        assert_eq!(fb.commit_count(), 1);

        // Failure is one-shot
        assert_eq!(fb.commit(temp), Ok(()));
        assert_eq!(fb.commit_count(), 2);
    }

    #[test]
    fn test_temperature_override() {
        let mut fb = Framebuffer::<4, 4>::new();
        fb.set_temperature(-5);
        assert_eq!(fb.ambient_temperature(), -5);
    }
}
