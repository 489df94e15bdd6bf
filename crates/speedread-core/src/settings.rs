//! Reader configuration snapshot and its validation.
//!
//! The core only ever reads a [`ReaderConfig`]; clamping and rejection of
//! out-of-range values happen here, before a value reaches the engine.

use core::fmt;

use log::warn;

/// Lowest reading speed accepted anywhere in the engine.
pub const MIN_WPM: u32 = 10;

/// Where neighbouring items are drawn when context display is on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ContextLayout {
    #[default]
    Vertical,
    Horizontal,
}

/// Configurable pause categories.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PauseKind {
    /// `.`, `!`, `?`, `:` or `;` at the end of an item.
    Punctuation,
    /// `,` at the end of an item.
    Comma,
    /// A paragraph break item.
    Paragraph,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReaderConfig {
    pub wpm: u32,
    pub chunk_size: usize,
    /// Seconds.
    pub pause_punctuation: f64,
    /// Seconds.
    pub pause_comma: f64,
    /// Seconds.
    pub pause_paragraph: f64,
    pub enable_orp: bool,
    /// Relative fixation position, 0.0..=1.0.
    pub orp_position: f64,
    pub initial_delay_ms: u32,
    pub word_length_threshold: usize,
    pub extra_ms_per_char: u32,
    pub show_context: bool,
    pub context_layout: ContextLayout,
    pub show_continuous_context: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            chunk_size: 1,
            pause_punctuation: 0.5,
            pause_comma: 0.2,
            pause_paragraph: 0.8,
            enable_orp: true,
            orp_position: 0.3,
            initial_delay_ms: 500,
            word_length_threshold: 8,
            extra_ms_per_char: 10,
            show_context: false,
            context_layout: ContextLayout::Vertical,
            show_continuous_context: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    WpmTooLow,
    ChunkSizeZero,
    NegativePause(PauseKind),
    OrpPositionOutOfRange,
    WordLengthThresholdZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WpmTooLow => write!(f, "wpm must be at least {MIN_WPM}"),
            Self::ChunkSizeZero => f.write_str("chunk size must be at least 1"),
            Self::NegativePause(kind) => write!(f, "{kind:?} pause must not be negative"),
            Self::OrpPositionOutOfRange => f.write_str("orp position must be within 0.0..=1.0"),
            Self::WordLengthThresholdZero => {
                f.write_str("word length threshold must be at least 1")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

impl ReaderConfig {
    pub const fn pause_seconds(&self, kind: PauseKind) -> f64 {
        match kind {
            PauseKind::Punctuation => self.pause_punctuation,
            PauseKind::Comma => self.pause_comma,
            PauseKind::Paragraph => self.pause_paragraph,
        }
    }

    /// Fixation highlighting only applies to single-word items.
    pub const fn fixation_enabled(&self) -> bool {
        self.enable_orp && self.chunk_size == 1
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wpm < MIN_WPM {
            return Err(ConfigError::WpmTooLow);
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::ChunkSizeZero);
        }
        for kind in [PauseKind::Punctuation, PauseKind::Comma, PauseKind::Paragraph] {
            if !(self.pause_seconds(kind) >= 0.0) {
                return Err(ConfigError::NegativePause(kind));
            }
        }
        if !(0.0..=1.0).contains(&self.orp_position) {
            return Err(ConfigError::OrpPositionOutOfRange);
        }
        if self.word_length_threshold == 0 {
            return Err(ConfigError::WordLengthThresholdZero);
        }
        Ok(())
    }

    /// Clamp every field into its documented domain.
    pub fn sanitized(mut self) -> Self {
        if self.wpm < MIN_WPM {
            warn!("settings: wpm {} below minimum; using {}", self.wpm, MIN_WPM);
            self.wpm = MIN_WPM;
        }
        if self.chunk_size == 0 {
            warn!("settings: chunk_size must be >= 1; using 1");
            self.chunk_size = 1;
        }
        for pause in [
            &mut self.pause_punctuation,
            &mut self.pause_comma,
            &mut self.pause_paragraph,
        ] {
            if !(*pause >= 0.0) {
                warn!("settings: pause {} is negative; using 0", pause);
                *pause = 0.0;
            }
        }
        if !(0.0..=1.0).contains(&self.orp_position) {
            let clamped = if self.orp_position > 1.0 { 1.0 } else { 0.0 };
            warn!(
                "settings: orp_position {} out of range; using {}",
                self.orp_position, clamped
            );
            self.orp_position = clamped;
        }
        if self.word_length_threshold == 0 {
            warn!("settings: word_length_threshold must be >= 1; using 1");
            self.word_length_threshold = 1;
        }
        self
    }

    /// Apply a reading speed delta, flooring at [`MIN_WPM`]. Returns the new wpm.
    pub fn adjust_wpm(&mut self, delta: i32) -> u32 {
        let next = i64::from(self.wpm) + i64::from(delta);
        self.wpm = next.clamp(i64::from(MIN_WPM), i64::from(u32::MAX)) as u32;
        self.wpm
    }
}
