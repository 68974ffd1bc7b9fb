//! Candle Ceremony State
//!
//! Which candles are still lit, and the microphone blow detector.

/// Outcome of asking for the microphone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MicPermission {
    #[default]
    Unknown,
    Granted,
    Denied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candles {
    lit: Vec<bool>,
}

impl Candles {
    pub fn new(count: usize) -> Self {
        Self { lit: vec![true; count] }
    }

    pub fn is_lit(&self, index: usize) -> bool {
        self.lit.get(index).copied().unwrap_or(false)
    }

    pub fn any_lit(&self) -> bool {
        self.lit.iter().any(|&lit| lit)
    }

    /// Put out one candle. Returns true when this was the last one lit.
    pub fn snuff(&mut self, index: usize) -> bool {
        let was_burning = self.any_lit();
        if let Some(lit) = self.lit.get_mut(index) {
            *lit = false;
        }
        was_burning && !self.any_lit()
    }

    /// Put out every candle. Returns true if any was still lit.
    pub fn blow_out(&mut self) -> bool {
        let was_burning = self.any_lit();
        self.lit.iter_mut().for_each(|lit| *lit = false);
        was_burning
    }
}

/// The wish card shown once the candles are out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WishReveal {
    #[default]
    Hidden,
    Shown,
    /// Closed by the visitor; stays closed
    Dismissed,
}

impl WishReveal {
    pub fn show(&mut self) {
        if *self == WishReveal::Hidden {
            *self = WishReveal::Shown;
        }
    }

    pub fn dismiss(&mut self) {
        if *self == WishReveal::Shown {
            *self = WishReveal::Dismissed;
        }
    }

    pub fn is_visible(&self) -> bool {
        *self == WishReveal::Shown
    }
}

/// Mean of the analyser's frequency bins above `threshold` counts as a blow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlowDetector {
    pub threshold: f64,
}

impl BlowDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn is_blowing(&self, bins: &[u8]) -> bool {
        if bins.is_empty() {
            return false;
        }
        let sum: u32 = bins.iter().map(|&b| u32::from(b)).sum();
        f64::from(sum) / bins.len() as f64 > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snuff_one_by_one() {
        let mut candles = Candles::new(3);
        assert!(!candles.snuff(0));
        assert!(!candles.snuff(0));
        assert!(!candles.snuff(2));
        assert!(candles.snuff(1));
        assert!(!candles.any_lit());
        // Already out
        assert!(!candles.snuff(1));
    }

    #[test]
    fn test_snuff_out_of_range() {
        let mut candles = Candles::new(2);
        assert!(!candles.snuff(7));
        assert!(candles.is_lit(0) && candles.is_lit(1));
        assert!(!candles.is_lit(7));
    }

    #[test]
    fn test_blow_out() {
        let mut candles = Candles::new(3);
        candles.snuff(1);
        assert!(candles.blow_out());
        assert!((0..3).all(|i| !candles.is_lit(i)));
        assert!(!candles.blow_out());
    }

    #[test]
    fn test_wish_reveal_can_be_dismissed() {
        let mut wish = WishReveal::default();
        assert!(!wish.is_visible());
        wish.dismiss();
        assert_eq!(wish, WishReveal::Hidden);

        wish.show();
        assert!(wish.is_visible());
        wish.dismiss();
        assert!(!wish.is_visible());
        // A late timer must not bring it back
        wish.show();
        assert_eq!(wish, WishReveal::Dismissed);
    }

    #[test]
    fn test_blow_threshold_is_strict() {
        let detector = BlowDetector::new(50.0);
        assert!(!detector.is_blowing(&[50; 128]));
        assert!(detector.is_blowing(&[51; 128]));
        assert!(detector.is_blowing(&[0, 0, 255, 0]));
        assert!(!detector.is_blowing(&[]));
    }
}
