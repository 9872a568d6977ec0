pub const ROTATION_PERIOD_MS: u32 = 3_500;
pub const CROSS_FADE_MS: u32 = 600;
pub const PARALLAX_SCROLL_RANGE: f64 = 300.0;
pub const PARALLAX_MAX_OFFSET: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Greeting {
    pub text: &'static str,
    pub name: &'static str,
    pub language: &'static str,
}

pub const GREETINGS: [Greeting; 5] = [
    Greeting { text: "Hello, I am", name: "Vivek Patel", language: "English" },
    Greeting { text: "नमस्ते, मैं", name: "विवेक पटेल", language: "Hindi" },
    Greeting { text: "Bonjour, je suis", name: "Vivek Patel", language: "French" },
    Greeting { text: "Hola, soy", name: "Vivek Patel", language: "Spanish" },
    Greeting { text: "નમસ્તે, હું", name: "વિવેક પટેલ", language: "Gujarati" },
];

/// Cyclic position in the greeting list plus the one greeting still fading out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GreetingCycle {
    len: usize,
    current: usize,
    exiting: Option<usize>,
}

impl GreetingCycle {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            exiting: None,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn exiting(&self) -> Option<usize> {
        self.exiting
    }

    /// Advances by one. The outgoing index becomes the single exiting entry,
    /// replacing any previous one that had not settled yet. A cycle of zero or
    /// one greetings never moves, so nothing is ever exiting.
    pub fn tick(self) -> Self {
        if self.len <= 1 {
            return self;
        }

        Self {
            len: self.len,
            current: (self.current + 1) % self.len,
            exiting: Some(self.current),
        }
    }

    /// Ends the cross-fade for the outgoing greeting.
    pub fn settle(self) -> Self {
        Self {
            exiting: None,
            ..self
        }
    }
}

/// Maps scroll offset 0..=300 px onto a background shift of 0..=100 px, clamped.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    let progress = (scroll_y / PARALLAX_SCROLL_RANGE).clamp(0.0, 1.0);
    progress * PARALLAX_MAX_OFFSET
}
