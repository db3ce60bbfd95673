/// Settings that control the behaviour of a [Lexer](crate::Lexer)
///
/// The settings can be changed at any time while lexing, see
/// [Lexer::settings_mut](crate::Lexer::settings_mut).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerSettings {
    /// Whether or not whitespace surrounding identifiers and consumed or skipped tokens should
    /// be discarded automatically
    ///
    /// Enabled by default.
    pub auto_eat_whitespace: bool,

    /// When enabled, the lexer emits `tracing` events describing each step of its capture
    /// operations
    ///
    /// The events are purely diagnostic and have no effect on lexing. Disabled by default.
    pub debug_logging: bool,
}

impl LexerSettings {
    /// Helper for conveniently disabling automatic whitespace removal
    pub fn without_auto_eat_whitespace(self) -> Self {
        Self {
            auto_eat_whitespace: false,
            ..self
        }
    }

    /// Helper for conveniently enabling debug logging
    pub fn with_debug_logging(self) -> Self {
        Self {
            debug_logging: true,
            ..self
        }
    }
}

impl Default for LexerSettings {
    fn default() -> Self {
        Self {
            auto_eat_whitespace: true,
            debug_logging: false,
        }
    }
}
