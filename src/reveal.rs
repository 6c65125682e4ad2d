/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport's bottom edge so reveals fire slightly early.
pub const REVEAL_MARGIN: &str = "0px 0px -50px 0px";
/// Animation class attached on the first intersection.
pub const REVEAL_CLASS: &str = "animate-fade-in";

/// One-shot reveal latch: once shown, a section stays shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    shown: bool,
}

impl Reveal {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Feed one intersection report. Returns true only on the first reveal.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.shown || !intersecting {
            return false;
        }
        self.shown = true;
        true
    }

    pub fn class(&self, base: &str) -> String {
        if self.shown {
            format!("{base} {REVEAL_CLASS}")
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_shot() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(false));
        assert!(!reveal.is_shown());

        assert!(reveal.observe(true));
        assert!(reveal.is_shown());

        // scrolling out and back in changes nothing
        assert!(!reveal.observe(false));
        assert!(!reveal.observe(true));
        assert!(reveal.is_shown());
    }

    #[test]
    fn test_class() {
        let mut reveal = Reveal::default();
        assert_eq!(reveal.class("py-20"), "py-20");
        reveal.observe(true);
        assert_eq!(reveal.class("py-20"), "py-20 animate-fade-in");
        reveal.observe(false);
        assert_eq!(reveal.class("py-20"), "py-20 animate-fade-in");
    }
}
